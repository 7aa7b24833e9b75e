//! Monadic reduction.

use crate::typeclass::{Foldable, Monad};

/// Folds `container` left to right where every step returns an effect `M`.
///
/// The accumulator of the underlying [`Foldable::reduce`] is the effect
/// itself: it starts as `M::pure(seed)` and each element chains the next step
/// onto it with [`Monad::flat_map`]. Steps therefore run in container order,
/// each one only after the previous effect produced a value. When an effect
/// short-circuits (`None`, `Err`) no further step is called; the remaining
/// elements are still walked but ignored.
///
/// # Stack safety
///
/// The fold is iterative and every [`Monad`] instance in this crate is strict,
/// so `flat_map` completes before the next element is visited. An effect type
/// whose `flat_map` instead records a deferred computation would nest one
/// level per element and can exhaust the stack on very large containers when
/// the result is finally run.
///
/// # Examples
///
/// ```rust
/// use lambars_foldable::fold::reduce_m;
/// use lambars_foldable::tree::Tree;
///
/// let tree = Tree::new(1, vec![Tree::leaf(2), Tree::leaf(3), Tree::leaf(4)]);
/// let result = reduce_m(tree, 0, |accumulator, element| {
///     if element > 2 { Some(accumulator + element) } else { Some(accumulator) }
/// });
/// assert_eq!(result, Some(7));
/// ```
///
/// Failures from a `Result` step propagate unchanged:
///
/// ```rust
/// use lambars_foldable::fold::reduce_m;
///
/// let parsed: Result<i32, String> = reduce_m(vec!["1", "x", "3"], 0, |accumulator, text| {
///     text.parse::<i32>()
///         .map(|number| accumulator + number)
///         .map_err(|_| format!("not a number: {text}"))
/// });
/// assert_eq!(parsed, Err("not a number: x".to_string()));
/// ```
pub fn reduce_m<C, M, B, S>(container: C, seed: B, mut step: S) -> M
where
    C: Foldable,
    M: Monad<Inner = B, WithType<B> = M>,
    S: FnMut(B, C::Inner) -> M,
{
    container.reduce(M::pure(seed), |effect, element| {
        effect.flat_map::<B, _>(|accumulator| step(accumulator, element))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "tree")]
    use crate::tree::Tree;
    use crate::typeclass::Identity;
    use rstest::rstest;

    #[cfg(feature = "tree")]
    #[rstest]
    fn tree_with_option_effect_adds_elements_above_two() {
        let tree = Tree::new(1, vec![Tree::leaf(2), Tree::leaf(3), Tree::leaf(4)]);
        let result = reduce_m(tree, 0, |accumulator, element| {
            if element > 2 {
                Some(accumulator + element)
            } else {
                Some(accumulator)
            }
        });
        assert_eq!(result, Some(7));
    }

    #[rstest]
    fn empty_container_lifts_seed() {
        let result: Option<i32> = reduce_m(Vec::<i32>::new(), 5, |_, _| None);
        assert_eq!(result, Some(5));
        let result: Result<&str, ()> = reduce_m(None::<u8>, "seed", |_, _| Err(()));
        assert_eq!(result, Ok("seed"));
    }

    #[rstest]
    fn steps_run_in_container_order() {
        let mut log = Vec::new();
        let result: Result<i32, String> = reduce_m(vec![1, 2, 3], 0, |accumulator, element| {
            log.push((accumulator, element));
            Ok(accumulator + element)
        });
        assert_eq!(result, Ok(6));
        assert_eq!(log, vec![(0, 1), (1, 2), (3, 3)]);
    }

    #[rstest]
    fn failure_stops_further_steps() {
        let mut calls = 0;
        let result: Result<i32, String> = reduce_m(vec![1, -2, 3, 4], 0, |accumulator, element| {
            calls += 1;
            if element < 0 {
                Err(format!("negative: {element}"))
            } else {
                Ok(accumulator + element)
            }
        });
        assert_eq!(result, Err("negative: -2".to_string()));
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn identity_effect_equals_plain_reduce() {
        let values = vec![3, 1, 4, 1, 5];
        let effectful = reduce_m(values.clone(), 0, |accumulator, element| {
            Identity::new(accumulator * 10 + element)
        });
        let plain = values.reduce(0, |accumulator, element| accumulator * 10 + element);
        assert_eq!(effectful, Identity::new(plain));
    }

    #[rstest]
    fn box_effect_threads_accumulator() {
        let result = reduce_m(Some("abc"), 1_usize, |accumulator, text: &str| {
            Box::new(accumulator + text.len())
        });
        assert_eq!(*result, 4);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_always_some_step_matches_reduce(values in prop::collection::vec(-1000i64..1000, 0..40)) {
            let effectful = reduce_m(values.clone(), 0_i64, |accumulator, element| Some(accumulator + element));
            let plain = values.reduce(0_i64, |accumulator, element| accumulator + element);
            prop_assert_eq!(effectful, Some(plain));
        }

        #[test]
        fn prop_checked_sum_is_none_only_on_overflow(values in prop::collection::vec(any::<u8>(), 0..8)) {
            let checked: Option<u8> = reduce_m(values.clone(), 0_u8, |accumulator, element| accumulator.checked_add(element));
            let wide: u32 = values.iter().map(|&element| u32::from(element)).sum();
            prop_assert_eq!(checked.is_some(), wide <= u32::from(u8::MAX));
        }
    }
}

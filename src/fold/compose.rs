//! Folds through two nested container layers.
//!
//! For a container `F<G<A>>` with `F: Foldable` and `G: Foldable`, these
//! functions fold every `A` as if the structure were one container, without
//! building a flattened copy. The outer fold's step runs the inner fold, so
//! each layer keeps its own traversal order.

use crate::typeclass::{Foldable, Monoid, TypeConstructor};

/// Element type of the inner containers of `C`.
type Innermost<C> = <<C as TypeConstructor>::Inner as TypeConstructor>::Inner;

/// Left fold over every innermost element: outer containers left to right,
/// and within each one its elements left to right.
///
/// The outer [`Foldable::reduce`] carries the accumulator; at each inner
/// container the inner `reduce` continues from it with the same `function`.
///
/// # Examples
///
/// ```rust
/// use lambars_foldable::fold::reduce_composed;
///
/// let nested = vec![Some("a"), None, Some("b")];
/// let joined = reduce_composed(nested, String::new(), |accumulator, element| accumulator + element);
/// assert_eq!(joined, "ab");
/// ```
pub fn reduce_composed<C, B, F>(container: C, init: B, mut function: F) -> B
where
    C: Foldable,
    C::Inner: Foldable,
    F: FnMut(B, Innermost<C>) -> B,
{
    container.reduce(init, |accumulator, inner| {
        inner.reduce(accumulator, &mut function)
    })
}

/// Maps every innermost element into a [`Monoid`] and combines the results.
///
/// Each inner container is summarised with its own `fold_map`; the outer
/// `fold_map` then combines those summaries. By associativity this equals
/// flattening first and folding once.
///
/// # Examples
///
/// ```rust
/// use lambars_foldable::fold::fold_map_composed;
/// use lambars_foldable::typeclass::Sum;
///
/// let nested = vec![vec![1, 2], vec![], vec![3, 4]];
/// assert_eq!(fold_map_composed(nested, Sum), Sum(10));
/// ```
pub fn fold_map_composed<C, M, F>(container: C, mut function: F) -> M
where
    C: Foldable,
    C::Inner: Foldable,
    M: Monoid,
    F: FnMut(Innermost<C>) -> M,
{
    container.fold_map(|inner: C::Inner| inner.fold_map(&mut function))
}

/// Right fold over every innermost element: outer containers right to left,
/// and within each one its elements right to left.
///
/// Built from the outer and inner `reduce_right`, not by reversing
/// [`reduce_composed`].
///
/// # Examples
///
/// ```rust
/// use lambars_foldable::fold::reduce_right_composed;
///
/// let nested = vec![vec![1, 2], vec![3]];
/// let visited = reduce_right_composed(nested, Vec::new(), |element, mut accumulator| {
///     accumulator.push(element);
///     accumulator
/// });
/// assert_eq!(visited, vec![3, 2, 1]);
/// ```
pub fn reduce_right_composed<C, B, F>(container: C, init: B, mut function: F) -> B
where
    C: Foldable,
    C::Inner: Foldable,
    F: FnMut(Innermost<C>, B) -> B,
{
    container.reduce_right(init, |inner, accumulator| {
        inner.reduce_right(accumulator, &mut function)
    })
}

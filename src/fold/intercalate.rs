//! Separator-interleaving fold.

use crate::typeclass::{Foldable, Monoid, Semigroup};

/// Fold state: the separator, and the value built so far once an element
/// has been seen.
struct Interleave<M> {
    separator: M,
    accumulated: Option<M>,
}

impl<M: Monoid + Clone> Interleave<M> {
    const fn start(separator: M) -> Self {
        Self {
            separator,
            accumulated: None,
        }
    }

    fn push(self, element: M) -> Self {
        let separated = self
            .accumulated
            .map(|previous| previous.combine(self.separator.clone()));
        Self {
            accumulated: separated.combine(Some(element)),
            separator: self.separator,
        }
    }

    fn finish(self) -> M {
        self.accumulated.unwrap_or_else(M::empty)
    }
}

/// Combines every element of `container` in order, placing `separator`
/// between each adjacent pair.
///
/// The separator never appears before the first or after the last element.
/// A single element is returned unchanged and an empty container yields
/// `M::empty()`.
///
/// # Examples
///
/// ```rust
/// use lambars_foldable::fold::intercalate;
/// use lambars_foldable::tree::Tree;
///
/// let tree = Tree::new(
///     "a".to_string(),
///     vec![Tree::leaf("b".to_string()), Tree::leaf("c".to_string()), Tree::leaf("d".to_string())],
/// );
/// assert_eq!(intercalate(tree, "|".to_string()), "a|b|c|d");
///
/// assert_eq!(intercalate(Vec::<String>::new(), "|".to_string()), "");
/// ```
pub fn intercalate<C, M>(container: C, separator: M) -> M
where
    C: Foldable<Inner = M>,
    M: Monoid + Clone,
{
    container
        .reduce(Interleave::start(separator), Interleave::push)
        .finish()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_matches_join(values in prop::collection::vec("[a-z]{0,4}", 0..12), separator in "[,;|]{1,2}") {
            let expected = values.join(separator.as_str());
            prop_assert_eq!(intercalate(values, separator), expected);
        }

        #[test]
        fn prop_separator_count(values in prop::collection::vec("[a-z]{1,3}", 1..12)) {
            let count = values.len();
            let joined = intercalate(values, "#".to_string());
            prop_assert_eq!(joined.matches('#').count(), count - 1);
        }
    }
}

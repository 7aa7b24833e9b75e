//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Fold combinators rely on associativity: [`Foldable::fold_map`] is free to
//! group the combinations of a nested structure per inner container (see
//! `fold_map_composed`), which only agrees with a flat left-to-right fold when
//! the law holds.
//!
//! [`Foldable::fold_map`]: super::Foldable::fold_map
//!
//! # Examples
//!
//! ```rust
//! use lambars_foldable::typeclass::Semigroup;
//!
//! assert_eq!(String::from("fold").combine(String::from("able")), "foldable");
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

use std::ops::{Add, Mul};

use super::Identity;
use super::wrappers::{Max, Min, Product, Sum};

/// A type with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Semigroup;
    ///
    /// let result = String::from("a|").combine(String::from("b"));
    /// assert_eq!(result, "a|b");
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines all values of a non-empty iterator, left to right.
    ///
    /// Returns `None` for an empty iterator; [`Monoid::combine_all`] returns
    /// the identity instead.
    ///
    /// [`Monoid::combine_all`]: super::Monoid::combine_all
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Semigroup;
    ///
    /// let parts = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(parts), Some(String::from("ab")));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is absorbed: `Some(a).combine(None) == Some(a)`.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", "")]
    #[case("a", "", "a")]
    #[case("", "b", "b")]
    #[case("a|", "b", "a|b")]
    fn string_combine_concatenates(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(left.to_string().combine(right.to_string()), expected);
    }

    #[rstest]
    fn vec_combine_appends_in_order() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case(Some(Sum(1)), Some(Sum(2)), Some(Sum(3)))]
    #[case(Some(Sum(1)), None, Some(Sum(1)))]
    #[case(None, Some(Sum(2)), Some(Sum(2)))]
    #[case(None, None, None)]
    fn option_combine_absorbs_none(
        #[case] left: Option<Sum<i32>>,
        #[case] right: Option<Sum<i32>>,
        #[case] expected: Option<Sum<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn numeric_wrappers_combine() {
        assert_eq!(Sum(2).combine(Sum(5)), Sum(7));
        assert_eq!(Product(2).combine(Product(5)), Product(10));
        assert_eq!(Max(2).combine(Max(5)), Max(5));
        assert_eq!(Min(2).combine(Min(5)), Min(2));
    }

    #[rstest]
    fn tuple_combines_componentwise() {
        let left = (Sum(1), String::from("a"), Max(3));
        let right = (Sum(2), String::from("b"), Max(1));
        assert_eq!(left.combine(right), (Sum(3), String::from("ab"), Max(3)));
    }

    #[rstest]
    fn identity_combine_delegates() {
        assert_eq!(
            Identity::new(String::from("x")).combine(Identity::new(String::from("y"))),
            Identity::new(String::from("xy"))
        );
    }

    #[rstest]
    fn reduce_all_on_empty_is_none() {
        assert_eq!(Sum::<i32>::reduce_all(Vec::new()), None);
        assert_eq!(Sum::reduce_all(vec![Sum(1), Sum(2)]), Some(Sum(3)));
    }
}

//! Monoid type class - semigroups with an identity element.
//!
//! The identity is what every fold over an empty container produces:
//! `Foldable::fold_map` and `intercalate` both start from [`Monoid::empty`].
//!
//! # Laws
//!
//! For all `a` (in addition to semigroup associativity):
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_foldable::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("x")), "x");
//! assert!(Vec::<i32>::empty().is_empty());
//! ```

use std::ops::Add;

use super::Identity;
use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A semigroup with a two-sided identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::<u32>::empty(), Sum::new(0));
    /// ```
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Monoid;
    ///
    /// let parts = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::combine_all(parts), "abc");
    /// assert_eq!(String::combine_all(Vec::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_identity {
    ($($carrier:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$carrier> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_identity!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identities_of_standard_types() {
        assert_eq!(String::empty(), "");
        assert_eq!(Vec::<u8>::empty(), Vec::<u8>::new());
        assert_eq!(Option::<String>::empty(), None);
        assert_eq!(Identity::<String>::empty(), Identity::new(String::new()));
    }

    #[rstest]
    fn identities_of_numeric_wrappers() {
        assert_eq!(Sum::<i32>::empty(), Sum(0));
        assert_eq!(Product::<u8>::empty(), Product(1));
        assert_eq!(Product::<f64>::empty(), Product(1.0));
        assert_eq!(Max::<i16>::empty(), Max(i16::MIN));
        assert_eq!(Min::<i16>::empty(), Min(i16::MAX));
    }

    #[rstest]
    fn tuple_identity_is_componentwise() {
        let empty: (Sum<i32>, String, Min<u8>) = Monoid::empty();
        assert_eq!(empty, (Sum(0), String::new(), Min(u8::MAX)));
    }

    #[rstest]
    fn combine_all_of_empty_is_identity() {
        assert_eq!(Product::<i32>::combine_all(Vec::new()), Product(1));
        assert_eq!(Max::combine_all(vec![Max(3), Max(9), Max(1)]), Max(9));
    }
}

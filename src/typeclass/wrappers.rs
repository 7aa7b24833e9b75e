//! Newtype wrappers that pick a monoid for a carrier type.
//!
//! A number has more than one lawful monoid, so [`Foldable::fold_map`] cannot
//! infer which one a caller means from `i32` alone. The wrapper chosen as the
//! mapping target selects it:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//! - [`Max`]: maximum, identity `A::MIN_VALUE`
//! - [`Min`]: minimum, identity `A::MAX_VALUE`
//!
//! `Max` and `Min` only form monoids for [`Bounded`] carriers.
//!
//! [`Foldable::fold_map`]: super::Foldable::fold_map
//!
//! # Examples
//!
//! ```rust
//! use lambars_foldable::typeclass::{Foldable, Max, Product, Sum};
//!
//! let values = vec![3, 1, 4];
//! assert_eq!(values.clone().fold_map(Sum::new).into_inner(), 8);
//! assert_eq!(values.clone().fold_map(Product::new).into_inner(), 12);
//! assert_eq!(values.fold_map(Max::new).into_inner(), 4);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! monoid_wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps a value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

monoid_wrapper! {
    /// The additive monoid: `Sum(a).combine(Sum(b)) == Sum(a + b)`, identity `Sum(0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::{Monoid, Semigroup, Sum};
    ///
    /// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
    /// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
    /// ```
    Sum
}

monoid_wrapper! {
    /// The multiplicative monoid: `Product(a).combine(Product(b)) == Product(a * b)`,
    /// identity `Product(1)`.
    ///
    /// No `Default` impl: `0` is not the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::{Monoid, Product, Semigroup};
    ///
    /// assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
    /// assert_eq!(Product::<i64>::empty(), Product::new(1));
    /// ```
    Product
}

monoid_wrapper! {
    /// Keeps the larger value. A monoid when `A: Bounded`, with identity
    /// `Max(A::MIN_VALUE)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::{Max, Monoid, Semigroup};
    ///
    /// assert_eq!(Max::new(3).combine(Max::new(5)), Max::new(5));
    /// assert_eq!(Max::<i32>::empty(), Max::new(i32::MIN));
    /// ```
    Max
}

monoid_wrapper! {
    /// Keeps the smaller value. A monoid when `A: Bounded`, with identity
    /// `Min(A::MAX_VALUE)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::{Min, Monoid, Semigroup};
    ///
    /// assert_eq!(Min::new(3).combine(Min::new(5)), Min::new(3));
    /// assert_eq!(Min::<u8>::empty(), Min::new(u8::MAX));
    /// ```
    Min
}

impl<A: Default> Default for Sum<A> {
    fn default() -> Self {
        Self(A::default())
    }
}

/// Types with a least and a greatest value.
///
/// Supplies the identity elements of [`Max`] and [`Min`].
///
/// # Examples
///
/// ```rust
/// use lambars_foldable::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert!(Score::MIN_VALUE < Score::MAX_VALUE);
/// ```
pub trait Bounded {
    /// The least value of the type.
    const MIN_VALUE: Self;
    /// The greatest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_by_consts {
    ($($carrier:ty),* $(,)?) => {
        $(
            impl Bounded for $carrier {
                const MIN_VALUE: Self = <$carrier>::MIN;
                const MAX_VALUE: Self = <$carrier>::MAX;
            }
        )*
    };
}

bounded_by_consts!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl Bounded for () {
    const MIN_VALUE: Self = ();
    const MAX_VALUE: Self = ();
}

//! Identity wrapper type.
//!
//! `Identity` holds exactly one value and adds no behaviour. It is both the
//! simplest [`Foldable`](super::Foldable) (one element) and the simplest
//! [`Monad`](super::Monad) (no effect), which makes `reduce_m` over it behave
//! exactly like a plain `reduce`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::TypeConstructor;

/// Wraps a value without adding any behaviour.
///
/// # Examples
///
/// ```rust
/// use lambars_foldable::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// assert_eq!(Identity(7).0, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
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

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

//! Foldable type class - summarising a container into a single value.
//!
//! A `Foldable` container offers three primitives:
//!
//! - [`Foldable::reduce`]: left fold in the container's natural order
//! - [`Foldable::fold_map`]: map every element into a [`Monoid`] and combine
//! - [`Foldable::reduce_right`]: right fold, visiting elements in reverse order
//!
//! Everything in [`crate::fold`] is written against these three methods only
//! and never inspects the container's representation.
//!
//! # Laws
//!
//! Each primitive visits every element exactly once, and the three agree
//! with each other for any monoid `M`:
//!
//! ```text
//! fa.reduce(M::empty(), |b, a| b.combine(a))
//!     == fa.fold_map(|a| a)
//!     == fa.reduce_right(M::empty(), |a, b| a.combine(b))
//! ```
//!
//! On an empty container, `reduce` and `reduce_right` return their seed and
//! `fold_map` returns `M::empty()`.
//!
//! The laws are not checked at runtime. An instance that breaks them makes
//! every derived combinator silently inconsistent.
//!
//! # Examples
//!
//! ```rust
//! use lambars_foldable::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! assert_eq!(numbers.reduce(0, |accumulator, element| accumulator + element), 15);
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.reduce(5, |accumulator, element| accumulator + element), 5);
//! ```

use std::collections::VecDeque;

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;

/// A container whose elements can be folded into a summary value.
///
/// # Required Methods
///
/// - `reduce`: left-to-right fold
/// - `reduce_right`: right-to-left fold
///
/// # Provided Methods
///
/// Built on `reduce`, overridable when a container knows better:
///
/// - `fold_map`: map each element to a `Monoid` and combine the results
/// - `length`, `is_empty`: element count queries
/// - `find`, `exists`, `for_all`: predicate queries
///
/// # Examples
///
/// ```rust
/// use lambars_foldable::typeclass::{Foldable, Sum};
///
/// let values = vec![1, 2, 3, 4, 5];
/// let total: Sum<i32> = values.fold_map(Sum);
/// assert_eq!(total.0, 15);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds from left to right, threading the accumulator through `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Foldable;
    ///
    /// let digits = vec![1, 2, 3].reduce(String::new(), |mut accumulator, element| {
    ///     accumulator.push_str(&element.to_string());
    ///     accumulator
    /// });
    /// assert_eq!(digits, "123");
    /// ```
    #[doc(alias = "fold_left")]
    fn reduce<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from right to left. `function` receives the element first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Foldable;
    ///
    /// // 1 - (2 - (3 - 0))
    /// let result = vec![1, 2, 3].reduce_right(0, |element, accumulator| element - accumulator);
    /// assert_eq!(result, 2);
    /// ```
    #[doc(alias = "fold_right")]
    fn reduce_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a `Monoid` and combines the results left to
    /// right, starting from `M::empty()`.
    ///
    /// The monoid is chosen by the result type; see [`Sum`](super::Sum) and
    /// friends for selecting between monoids on the same carrier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::{Foldable, Product};
    ///
    /// let product: Product<i32> = vec![1, 2, 3, 4].fold_map(Product);
    /// assert_eq!(product, Product(24));
    ///
    /// let words: String = vec!["fold", "able"].fold_map(String::from);
    /// assert_eq!(words, "foldable");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.reduce(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns the number of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Foldable;
    ///
    /// assert_eq!(Some(5).length(), 1);
    /// assert_eq!(vec![1, 2, 3].length(), 3);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().reduce(0, |count, _| count + 1)
    }

    /// Returns whether the container has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Foldable;
    ///
    /// assert!(Foldable::is_empty(&None::<i32>));
    /// assert!(!Foldable::is_empty(&Some(1)));
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().reduce(true, |_, _| false)
    }

    /// Returns the first element, in `reduce` order, satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Foldable;
    ///
    /// assert_eq!(vec![1, 2, 3, 4].find(|element| *element > 2), Some(3));
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.reduce(None, |found, element| match found {
            Some(_) => found,
            None if predicate(&element) => Some(element),
            None => None,
        })
    }

    /// Returns whether any element satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Foldable;
    ///
    /// assert!(vec![1, 5].exists(|element| *element > 3));
    /// assert!(!Vec::<i32>::new().exists(|_| true));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .reduce(false, |seen, element| seen || predicate(&element))
    }

    /// Returns whether every element satisfies `predicate`; `true` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Foldable;
    ///
    /// assert!(vec![2, 4].for_all(|element| element % 2 == 0));
    /// assert!(Vec::<i32>::new().for_all(|_| false));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn reduce<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn reduce_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

/// Folds the `Ok` value; an `Err` is an empty container.
impl<T, E> Foldable for Result<T, E> {
    fn reduce<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(element) => function(init, element),
            Err(_) => init,
        }
    }

    fn reduce_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(element) => function(element, init),
            Err(_) => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_ok())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_err()
    }
}

// =============================================================================
// Vec<T> and VecDeque<T> Implementations
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn reduce<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn reduce_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Foldable for VecDeque<T> {
    fn reduce<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn reduce_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

// =============================================================================
// Box<T> and Identity<A> Implementations
// =============================================================================

impl<T> Foldable for Box<T> {
    fn reduce<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        function(init, *self)
    }

    fn reduce_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        function(*self, init)
    }

    #[inline]
    fn length(&self) -> usize {
        1
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }
}

impl<A> Foldable for Identity<A> {
    fn reduce<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }

    fn reduce_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, init)
    }

    #[inline]
    fn length(&self) -> usize {
        1
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================

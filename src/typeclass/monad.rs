//! Monad type class - sequencing effectful steps.
//!
//! A `Monad` lifts a plain value into an effect (`pure`) and chains a step
//! that depends on the previous result (`flat_map`). `reduce_m` needs nothing
//! more than these two operations to thread a fold accumulator through an
//! effect.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! M::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(M::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! All instances in this module are strict: `flat_map` runs the step before
//! it returns, so chaining one step per element never builds a deferred
//! computation.
//!
//! # Examples
//!
//! ```rust
//! use lambars_foldable::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&number| number > 0)
//! }
//!
//! let doubled = Some("21").flat_map(parse_positive).flat_map(|number| Some(number * 2));
//! assert_eq!(doubled, Some(42));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for sequencing computations within an effect.
pub trait Monad: TypeConstructor {
    /// Lifts a plain value into the effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Monad;
    ///
    /// let lifted: Option<i32> = <Option<()>>::pure(5);
    /// assert_eq!(lifted, Some(5));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Runs `function` on the value inside the effect and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Monad;
    ///
    /// let checked: Result<i32, String> =
    ///     Ok(10).flat_map(|number| if number > 5 { Ok(number) } else { Err("small".to_string()) });
    /// assert_eq!(checked, Ok(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Maps the value inside the effect, expressed through `flat_map` and `pure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_foldable::typeclass::Monad;
    ///
    /// assert_eq!(Some(2).fmap(|number| number + 1), Some(3));
    /// ```
    #[inline]
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> B,
    {
        self.flat_map(|value| Self::pure(function(value)))
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

impl<T> Monad for Box<T> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> Box<B>,
    {
        function(*self)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

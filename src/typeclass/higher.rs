//! Higher-kinded type emulation through Generic Associated Types.
//!
//! A fold combinator needs to talk about "the container shape `F`" separately
//! from "the element type `A`". Rust cannot abstract over `Option<_>` or
//! `Vec<_>` directly, so each concrete container implements
//! [`TypeConstructor`] and exposes both halves as associated types.
//!
//! # Example
//!
//! ```rust
//! use lambars_foldable::typeclass::TypeConstructor;
//!
//! fn element_type_name<T: TypeConstructor>(_container: &T) -> &'static str
//! where
//!     T::Inner: 'static,
//! {
//!     std::any::type_name::<T::Inner>()
//! }
//!
//! assert_eq!(element_type_name(&vec![1_u8]), "u8");
//! ```

use std::collections::VecDeque;

/// A container shape applied to an element type.
///
/// # Associated Types
///
/// - `Inner`: The element type the shape is currently applied to.
/// - `WithType<B>`: The same shape applied to `B`. Shape parameters other
///   than the element (the error of a `Result`) are preserved.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The element type, e.g. `i32` for `Vec<i32>`.
    type Inner;

    /// The same shape holding `B`, e.g. `Vec<B>` for `Vec<i32>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for VecDeque<T> {
    type Inner = T;
    type WithType<B> = VecDeque<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}

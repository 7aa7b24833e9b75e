//! Type class traits the fold combinators are generic over.
//!
//! - [`Foldable`]: Summarising every element of a container into one value
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Monad`]: Sequencing effectful steps
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types, so a container shape cannot be a
//! type parameter on its own. [`TypeConstructor`] uses Generic Associated
//! Types to expose the element type (`Inner`) and the same shape applied to a
//! different element type (`WithType<B>`). Every trait in this module builds
//! on it, which gives one `Foldable` for every arity of container instead of
//! one interface per arity.
//!
//! ## Foundation Types
//!
//! - [`Identity`]: Identity wrapper type (one element, no effect)
//! - [`Sum`], [`Product`]: Numeric wrappers selecting additive or
//!   multiplicative monoids
//! - [`Max`], [`Min`]: Bounded numeric wrappers
//! - [`Bounded`]: Trait for types with minimum and maximum values
//!
//! # Examples
//!
//! ```rust
//! use lambars_foldable::typeclass::{Foldable, Monoid, Semigroup, Sum};
//!
//! let total: Sum<i32> = vec![1, 2, 3].fold_map(Sum::new);
//! assert_eq!(total, Sum::new(6));
//!
//! assert_eq!(String::empty().combine("fold".to_string()), "fold");
//! ```

mod foldable;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};

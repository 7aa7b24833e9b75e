//! # lambars-foldable
//!
//! The `Foldable` type class and a set of combinators derived purely from it.
//!
//! ## Overview
//!
//! A type is *foldable* when it can summarise every element it contains into a
//! single value. This crate defines that capability once, for any container
//! shape, and builds reusable algorithms on top of it:
//!
//! - **Type Classes**: `Foldable`, `Semigroup`, `Monoid`, `Monad`, with
//!   `TypeConstructor` emulating higher-kinded types through GATs
//! - **Fold Combinators**: `reduce_m`, `intercalate`, `to_vec` and the
//!   nested-structure folds `reduce_composed`, `fold_map_composed`,
//!   `reduce_right_composed`
//! - **Tree**: a rose tree container folded in pre-order
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and instances for standard containers
//! - `fold`: Derived fold combinators
//! - `tree`: The `Tree` rose tree container
//! - `serde`: `Serialize`/`Deserialize` for the crate's data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_foldable::prelude::*;
//!
//! let tree = Tree::new("a".to_string(), vec![
//!     Tree::leaf("b".to_string()),
//!     Tree::leaf("c".to_string()),
//! ]);
//! assert_eq!(intercalate(tree, "|".to_string()), "a|b|c");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and combinators.
///
/// # Usage
///
/// ```rust
/// use lambars_foldable::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "fold")]
    pub use crate::fold::*;

    #[cfg(feature = "tree")]
    pub use crate::tree::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "fold")]
pub mod fold;

#[cfg(feature = "tree")]
pub mod tree;

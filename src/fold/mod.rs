//! Combinators derived from [`Foldable`](crate::typeclass::Foldable).
//!
//! Every function here calls only `reduce`, `fold_map` and `reduce_right` on
//! the container it receives, so it works unchanged for any conforming
//! instance: `Vec`, `Option`, [`Tree`](crate::tree::Tree), or a caller's own
//! type.
//!
//! - [`reduce_m`]: left fold where each step runs inside a [`Monad`]
//! - [`intercalate`]: combine monoid elements with a separator between them
//! - [`to_vec`]: linearise a container in `reduce` order
//! - [`reduce_composed`], [`fold_map_composed`], [`reduce_right_composed`]:
//!   fold through a container of containers as if it were one container
//!
//! [`Monad`]: crate::typeclass::Monad
//!
//! # Examples
//!
//! ```rust
//! use lambars_foldable::fold::{intercalate, reduce_composed, reduce_m, to_vec};
//!
//! assert_eq!(to_vec(Some(3)), vec![3]);
//! assert_eq!(intercalate(vec!["a".to_string(), "b".to_string()], ", ".to_string()), "a, b");
//!
//! let nested = vec![vec![1, 2], vec![], vec![3]];
//! assert_eq!(reduce_composed(nested, 0, |accumulator, element| accumulator * 10 + element), 123);
//!
//! let checked: Option<u8> = reduce_m(vec![100_u8, 100, 100], 0_u8, |accumulator, element| {
//!     accumulator.checked_add(element)
//! });
//! assert_eq!(checked, None);
//! ```

mod compose;
mod intercalate;
mod reduce_m;
mod sequence;

pub use compose::{fold_map_composed, reduce_composed, reduce_right_composed};
pub use intercalate::intercalate;
pub use reduce_m::reduce_m;
pub use sequence::to_vec;

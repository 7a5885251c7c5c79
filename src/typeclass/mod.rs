//! Type classes shared by the sequence types of this crate.
//!
//! - [`Functor`]: mapping over the values of a structure
//! - [`Applicative`]: lifting values and combining independent structures
//! - [`Monad`]: sequencing dependent computations
//! - [`Foldable`]: reducing a structure to a summary value
//! - [`Traversable`]: mapping with an `Option` or `Result` effect
//! - [`Semigroup`] and [`Monoid`]: associative combination with an identity
//!
//! ## Higher-kinded types
//!
//! [`TypeConstructor`] emulates higher-kinded types with a generic associated
//! type, so `Option`, `Vec` and `StatelessIterator` share one `Functor` trait.
//!
//! ## Multi-shot functions
//!
//! Every mapping function is `Fn + 'static`. A lazy sequence keeps the
//! function around and calls it again each time a fork of the sequence
//! forces an element.
//!
//! # Examples
//!
//! ```rust
//! use fpseq::iterator::StatelessIterator;
//! use fpseq::typeclass::{Applicative, Foldable, Monad, Sum};
//!
//! let grid = StatelessIterator::from_array(vec![1, 2])
//!     .map2(StatelessIterator::from_array(vec![10, 20]), |row, column| row * column);
//! assert_eq!(grid.clone().to_array(), vec![10, 20, 20, 40]);
//! assert_eq!(grid.fold_map(Sum), Sum(90));
//!
//! let expanded = StatelessIterator::from_array(vec![1_usize, 2, 3])
//!     .flat_map(|value| StatelessIterator::repeat(value, value));
//! assert_eq!(expanded.to_array(), vec![1, 2, 2, 3, 3, 3]);
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{Bounded, Max, Min, Product, Sum};

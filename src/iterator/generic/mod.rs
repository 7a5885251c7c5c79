//! Iterator algorithms written once against the shape of a lazy sequence.
//!
//! A lazy sequence is anything that can be *unfolded*: asked for its next
//! step, it answers either `None` (exhausted) or a [`Pair`] of the remaining
//! sequence (head) and the current value (tail). [`Unfold`] captures that
//! shape, and every function in this module is written against it rather
//! than against a concrete type. `StatelessIterator` is one implementation;
//! a newtype around it, or any other type that can rebuild itself from a step
//! function, gets the whole algorithm set for free:
//!
//! ```rust
//! use fpseq::iterator::generic::{self, Step, Unfold};
//! use std::rc::Rc;
//!
//! #[derive(Clone)]
//! struct Countdown(Rc<dyn Fn() -> Step<Countdown, u32>>);
//!
//! impl Unfold for Countdown {
//!     type Item = u32;
//!
//!     fn unfold(&self) -> Step<Self, u32> {
//!         (self.0)()
//!     }
//!
//!     fn from_step<F>(step: F) -> Self
//!     where
//!         F: Fn() -> Step<Self, u32> + 'static,
//!     {
//!         Self(Rc::new(step))
//!     }
//! }
//!
//! let launch: Countdown = generic::from_array(vec![3, 2, 1]);
//! let doubled: Countdown = generic::monad_map(launch, |value| value * 2);
//! assert_eq!(generic::to_array(doubled), vec![6, 4, 2]);
//! ```
//!
//! # Laziness
//!
//! Building a sequence never forces it. Each function returns a new sequence
//! whose step function does the work when, and only when, it is unfolded.
//! The strict consumers (`reduce`, `to_array`, `last`, `fold`, `fold_map`)
//! walk the whole sequence and therefore only terminate on finite input.
//!
//! # Forking
//!
//! Unfolding takes `&self` and every step returns a fresh remainder, so any
//! intermediate sequence may be kept and unfolded again without disturbing
//! the others. Algorithms share their function arguments between steps
//! through `Rc`, never through interior mutability.

mod bind;
mod combinators;
mod primitives;

pub use self::bind::{ap_s, bind, bind_to, do_, let_, let_to};
pub use self::combinators::{
    chain_first, compress, cycle, drop_while, map_with_index, scan, strict_uniq, take, uniq,
    zip, zip_with,
};
pub use self::primitives::{
    any, concat, count, empty, filter, filter_map, find, first, flatten, fold, fold_map,
    from_array, from_io, from_lazy, last, make_by, map2, monad_ap, monad_chain, monad_map, of,
    reduce, repeat, replicate, to_array, unfold_concat,
};

use crate::pair::Pair;

/// One unfolding step: the remainder of the sequence and the current value,
/// or `None` once the sequence is exhausted.
pub type Step<GU, U> = Option<Pair<GU, U>>;

/// The shape shared by every lazy sequence in this module.
///
/// # Laws
///
/// `GU::from_step(move || gu.unfold())` must behave exactly like `gu`.
pub trait Unfold: Clone + Sized + 'static {
    /// The type of the produced values.
    type Item: Clone + 'static;

    /// Computes the next step.
    ///
    /// For pure sequences this is referentially transparent. A sequence
    /// built from an effect (`from_io`, `from_lazy`) re-runs the effect on
    /// every call.
    fn unfold(&self) -> Step<Self, Self::Item>;

    /// Builds a sequence from its step function.
    fn from_step<F>(step: F) -> Self
    where
        F: Fn() -> Step<Self, Self::Item> + 'static;

    /// Builds `first` followed by `second`.
    ///
    /// A carrier that overrides this together with
    /// [`Unfold::concat_parts`] lets [`unfold_concat`] walk nested
    /// concatenations in a loop instead of recursing into them.
    fn from_concat(first: Self, second: Self) -> Self {
        Self::from_step(move || unfold_concat(&first, &second))
    }

    /// The halves of a sequence built by [`Unfold::from_concat`], if the
    /// carrier keeps them.
    fn concat_parts(&self) -> Option<Pair<Self, Self>> {
        None
    }
}

//! A two-element product type.
//!
//! [`Pair`] is the unit of communication between the steps of a lazy
//! sequence: one unfolding step of a `StatelessIterator<U>` produces
//! `Option<Pair<StatelessIterator<U>, U>>`, where the head is the rest of the
//! sequence and the tail is the value just produced.
//!
//! Both components keep their static types, so taking a pair apart never
//! fails.
//!
//! # Examples
//!
//! ```rust
//! use fpseq::pair::{Pair, make_pair};
//!
//! let pair = make_pair("rest", 1);
//! assert_eq!(pair.head(), &"rest");
//! assert_eq!(pair.tail(), &1);
//!
//! let (head, tail) = pair.swap().into_parts();
//! assert_eq!((head, tail), (1, "rest"));
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable pair of a `head` and a `tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair<L, R> {
    head: L,
    tail: R,
}

/// Builds a [`Pair`] from its two components.
#[inline]
pub const fn make_pair<L, R>(head: L, tail: R) -> Pair<L, R> {
    Pair::new(head, tail)
}

impl<L, R> Pair<L, R> {
    /// Creates a pair.
    #[inline]
    pub const fn new(head: L, tail: R) -> Self {
        Self { head, tail }
    }

    /// Borrows the first component.
    #[inline]
    pub const fn head(&self) -> &L {
        &self.head
    }

    /// Borrows the second component.
    #[inline]
    pub const fn tail(&self) -> &R {
        &self.tail
    }

    /// Splits the pair into its components.
    #[inline]
    pub fn into_parts(self) -> (L, R) {
        (self.head, self.tail)
    }

    /// Exchanges head and tail.
    #[inline]
    #[must_use]
    pub fn swap(self) -> Pair<R, L> {
        Pair::new(self.tail, self.head)
    }

    /// Transforms the head, keeping the tail.
    #[inline]
    pub fn map_head<B, F>(self, function: F) -> Pair<B, R>
    where
        F: FnOnce(L) -> B,
    {
        Pair::new(function(self.head), self.tail)
    }

    /// Transforms the tail, keeping the head.
    ///
    /// ```rust
    /// use fpseq::pair::Pair;
    ///
    /// assert_eq!(Pair::new('k', 2).map_tail(|value| value * 10), Pair::new('k', 20));
    /// ```
    #[inline]
    pub fn map_tail<B, F>(self, function: F) -> Pair<L, B>
    where
        F: FnOnce(R) -> B,
    {
        Pair::new(self.head, function(self.tail))
    }

    /// Transforms both components at once.
    #[inline]
    pub fn bimap<A, B, F, G>(self, head_function: F, tail_function: G) -> Pair<A, B>
    where
        F: FnOnce(L) -> A,
        G: FnOnce(R) -> B,
    {
        Pair::new(head_function(self.head), tail_function(self.tail))
    }
}

impl<L, R> From<(L, R)> for Pair<L, R> {
    fn from((head, tail): (L, R)) -> Self {
        Self::new(head, tail)
    }
}

impl<L, R> From<Pair<L, R>> for (L, R) {
    fn from(pair: Pair<L, R>) -> Self {
        pair.into_parts()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Pair<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.head, self.tail)
    }
}

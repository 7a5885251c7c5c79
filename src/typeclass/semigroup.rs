//! Semigroup type class - an associative way to combine two values.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Concatenating two `StatelessIterator`s is a semigroup: the result yields
//! every element of the left sequence, then every element of the right one.
//!
//! ```rust
//! use fpseq::iterator::StatelessIterator;
//! use fpseq::typeclass::Semigroup;
//!
//! let joined = StatelessIterator::from_array(vec![1, 2])
//!     .combine(StatelessIterator::from_array(vec![3]));
//! assert_eq!(joined.to_array(), vec![1, 2, 3]);
//! ```

use std::ops::{Add, Mul};

use super::Identity;
use super::wrappers::{Max, Min, Product, Sum};

/// Types with an associative binary operation.
pub trait Semigroup {
    /// Combines `self` with `other`.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values, cloning both.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines `self` with itself `count` times in total.
    ///
    /// Returns `None` when `count` is zero, since a semigroup has no identity
    /// to fall back on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpseq::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), Some("ababab".to_string()));
    /// assert_eq!(String::from("ab").combine_n(0), None);
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Option<Self>
    where
        Self: Clone,
    {
        (count > 0).then(|| {
            (1..count).fold(self.clone(), |accumulator, _| {
                accumulator.combine(self.clone())
            })
        })
    }

    /// Combines every value of `values` from left to right.
    ///
    /// Returns `None` for an empty input.
    fn reduce_all<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        values.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is neutral; two `Some`s combine their payloads.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: PartialOrd> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

impl<A: PartialOrd> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

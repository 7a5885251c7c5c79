//! The identity functor.
//!
//! [`Identity`] adds no effect to the value it wraps. It is the smallest
//! lawful instance of every type class in this crate, so law tests use it as
//! the reference model when checking the instances of `StatelessIterator`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::TypeConstructor;

/// Wraps exactly one value without adding behaviour.
///
/// # Examples
///
/// ```rust
/// use fpseq::typeclass::{Functor, Identity};
///
/// let doubled = Identity::new(21).fmap(|value| value * 2);
/// assert_eq!(doubled.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

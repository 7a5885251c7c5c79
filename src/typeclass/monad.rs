//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! For the sequence instances (`Vec`, `StatelessIterator`) `flat_map` is the
//! list monad's bind: every value is expanded into a sub-sequence and the
//! sub-sequences are concatenated in order.
//!
//! ```rust
//! use fpseq::typeclass::Monad;
//!
//! let expanded = vec![1, 2, 3].flat_map(|value| vec![value; value]);
//! assert_eq!(expanded, vec![1, 2, 2, 3, 3, 3]);
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// An applicative whose next step may depend on the previous value.
pub trait Monad: Applicative {
    /// Feeds every value into `function` and flattens the results.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: Clone + 'static;

    /// Alias for [`Monad::flat_map`], named after `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: Clone + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the values of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpseq::typeclass::Monad;
    ///
    /// assert_eq!(Some(1).then(Some("next")), Some("next"));
    /// assert_eq!(None::<i32>.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
        Self::WithType<B>: Clone + 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> Option<B> + 'static,
        B: Clone + 'static,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> Result<B, E> + 'static,
        B: Clone + 'static,
    {
        self.and_then(function)
    }
}

impl<A: Clone> Monad for Vec<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: Fn(A) -> Vec<B> + 'static,
        B: Clone + 'static,
    {
        self.into_iter().flat_map(function).collect()
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> Identity<B> + 'static,
        B: Clone + 'static,
    {
        function(self.0)
    }
}

//! Foldable type class - reducing a structure to a summary value.
//!
//! Folding is an eager consumer: it walks the whole structure once, so the
//! step functions may be `FnMut`. On an infinite `StatelessIterator` every
//! fold except the short-circuiting ones (`find`, `exists`, `for_all`)
//! diverges.
//!
//! # Laws
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().into_iter().fold(init, f)
//! fa.fold_map(f)        == fa.fold_left(M::empty(), |acc, x| acc.combine(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpseq::typeclass::{Foldable, Sum};
//!
//! assert_eq!(vec![1, 2, 3].fold_left(0, |total, value| total + value), 6);
//! assert_eq!(Some(4).fold_map(Sum), Sum(4));
//! assert_eq!(None::<i32>.fold_map(Sum), Sum(0));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;

/// Structures whose values can be visited in order and accumulated.
pub trait Foldable: TypeConstructor {
    /// Folds from the first value to the last.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the last value to the first.
    ///
    /// ```rust
    /// use fpseq::typeclass::Foldable;
    ///
    /// let joined = vec![1, 2, 3].fold_right(String::new(), |value, tail| format!("{value}{tail}"));
    /// assert_eq!(joined, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every value into a monoid and combines the results left to right.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Whether the structure holds no values.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Number of values in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the values into a `Vec`, in order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut values, element| {
            values.push(element);
            values
        })
    }

    /// The first value matching `predicate`.
    fn find<P>(&self, mut predicate: P) -> Option<Self::Inner>
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.clone().fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Whether any value matches `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.find(|element| predicate(element)).is_some()
    }

    /// Whether every value matches `predicate`. Vacuously true when empty.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        !self.exists(|element| !predicate(element))
    }
}

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }
}

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(value) => function(init, value),
            Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(value) => function(value, init),
            Err(_) => init,
        }
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn length(&self) -> usize {
        self.len()
    }
}

impl<A> Foldable for Identity<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, init)
    }
}

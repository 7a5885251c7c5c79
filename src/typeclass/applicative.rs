//! Applicative type class - combining independent structures.
//!
//! `Applicative` adds two things to `Functor`: lifting a plain value with
//! [`Applicative::pure`], and combining several structures whose values do
//! not depend on each other with [`Applicative::map2`] and friends.
//!
//! # Laws
//!
//! ```text
//! Identity:     pure(id).apply(v)               == v
//! Homomorphism: pure(f).apply(pure(x))          == pure(f(x))
//! Interchange:  u.apply(pure(y))                == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Container semantics
//!
//! For `Vec` and `StatelessIterator` the instance is the *list* applicative:
//! `map2` visits every pair of values, left structure outer, right structure
//! inner. It is not a zip.
//!
//! ```rust
//! use fpseq::typeclass::Applicative;
//!
//! let sums = vec![1, 2].map2(vec![10, 20], |left, right| left + right);
//! assert_eq!(sums, vec![11, 21, 12, 22]);
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A functor that can lift values and combine independent computations.
pub trait Applicative: Functor {
    /// Lifts `value` into the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpseq::typeclass::Applicative;
    ///
    /// let lifted: Option<i32> = <Option<()>>::pure(1);
    /// assert_eq!(lifted, Some(1));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + 'static;

    /// Combines the values of two structures with `function`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: Fn(Self::Inner, B) -> C + 'static,
        B: Clone + 'static,
        C: Clone + 'static;

    /// Combines the values of three structures with `function`.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: Fn(Self::Inner, B, C) -> D + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static;

    /// Pairs up the values of two structures.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: Clone + 'static,
        B: Clone + 'static,
    {
        self.map2(other, |left, right| (left, right))
    }

    /// Keeps the left values, running `other` only for its shape.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
        Self::Inner: Clone + 'static,
        B: Clone + 'static,
    {
        self.map2(other, |left, _| left)
    }

    /// Keeps the right values, running `self` only for its shape.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.map2(other, |_, right| right)
    }

    /// Applies the functions held by `self` to the values held by `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpseq::typeclass::Applicative;
    ///
    /// let increment: fn(i32) -> i32 = |value| value + 1;
    /// assert_eq!(Some(increment).apply(Some(41)), Some(42));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: Fn(B) -> Output,
        B: Clone + 'static,
        Output: Clone + 'static;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B>
    where
        B: Clone + 'static,
    {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        Some(function(self?, other?))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
    {
        Some(function(self?, second?, third?))
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: Fn(B) -> Output,
        B: Clone + 'static,
        Output: Clone + 'static,
    {
        let function = self?;
        Some(function(other?))
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E>
    where
        B: Clone + 'static,
    {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: Fn(T, B) -> C + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        Ok(function(self?, other?))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: Fn(T, B, C) -> D + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
    {
        Ok(function(self?, second?, third?))
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: Fn(B) -> Output,
        B: Clone + 'static,
        Output: Clone + 'static,
    {
        let function = self?;
        Ok(function(other?))
    }
}

impl<A: Clone> Applicative for Vec<A> {
    #[inline]
    fn pure<B>(value: B) -> Vec<B>
    where
        B: Clone + 'static,
    {
        vec![value]
    }

    fn map2<B, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        let mut result = Vec::with_capacity(self.len() * other.len());
        for left in self {
            for right in &other {
                result.push(function(left.clone(), right.clone()));
            }
        }
        result
    }

    fn map3<B, C, D, F>(self, second: Vec<B>, third: Vec<C>, function: F) -> Vec<D>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
    {
        let mut result = Vec::with_capacity(self.len() * second.len() * third.len());
        for first in self {
            for middle in &second {
                for last in &third {
                    result.push(function(first.clone(), middle.clone(), last.clone()));
                }
            }
        }
        result
    }

    fn apply<B, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        A: Fn(B) -> Output,
        B: Clone + 'static,
        Output: Clone + 'static,
    {
        self.iter()
            .flat_map(|function| other.iter().map(move |value| function(value.clone())))
            .collect()
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B>
    where
        B: Clone + 'static,
    {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
    {
        Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: Fn(B) -> Output,
        B: Clone + 'static,
        Output: Clone + 'static,
    {
        Identity((self.0)(other.0))
    }
}

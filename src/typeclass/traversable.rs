//! Traversable type class - mapping with an effect and collecting the results.
//!
//! Without higher-kinded types there is no single `traverse` over every
//! applicative, so the two effects that matter in practice get their own
//! methods: `Option` (absence) and `Result` (failure). Both stop at the first
//! `None` or `Err`; later values are never visited.
//!
//! # Examples
//!
//! ```rust
//! use fpseq::typeclass::Traversable;
//!
//! let parsed: Option<Vec<i32>> = vec!["1", "2", "3"].traverse_option(|text| text.parse().ok());
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//!
//! let broken: Option<Vec<i32>> = vec!["1", "two"].traverse_option(|text| text.parse().ok());
//! assert_eq!(broken, None);
//! ```

use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// Structures that can be traversed with an `Option` or `Result` effect.
///
/// # Laws
///
/// ```text
/// fa.traverse_option(Some) == Some(fa)
/// fa.traverse_result(Ok)   == Ok(fa)
/// ```
pub trait Traversable: Functor + Foldable {
    /// Applies `function` to every value; `None` as soon as one result is `None`.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>,
        B: Clone + 'static;

    /// Applies `function` to every value; the first `Err` wins.
    ///
    /// ```rust
    /// use fpseq::typeclass::Traversable;
    ///
    /// let checked: Result<Vec<u8>, String> = vec![1, 200, 3]
    ///     .traverse_result(|value: i32| u8::try_from(value * 2).map_err(|_| format!("{value} overflows")));
    /// assert_eq!(checked, Err("200 overflows".to_string()));
    /// ```
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>,
        B: Clone + 'static;

    /// Turns a structure of `Option`s into an optional structure.
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
        <Self::Inner as TypeConstructor>::Inner: Clone + 'static,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of `Result`s into a fallible structure.
    ///
    /// ```rust
    /// use fpseq::typeclass::Traversable;
    ///
    /// let values: Vec<Result<i32, &str>> = vec![Ok(1), Err("second"), Err("third")];
    /// assert_eq!(values.sequence_result(), Err("second"));
    /// ```
    fn sequence_result<E>(
        self,
    ) -> Result<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Result<<Self::Inner as TypeConstructor>::Inner, E>>,
        <Self::Inner as TypeConstructor>::Inner: Clone + 'static,
    {
        self.traverse_result(Into::into)
    }

    /// Runs `function` for its effect only.
    fn for_each_option<F>(self, function: F) -> Option<()>
    where
        F: FnMut(Self::Inner) -> Option<()>,
        Self: Sized,
    {
        self.traverse_option(function).map(|_| ())
    }

    /// Runs `function` for its effect only, stopping at the first error.
    fn for_each_result<E, F>(self, function: F) -> Result<(), E>
    where
        F: FnMut(Self::Inner) -> Result<(), E>,
        Self: Sized,
    {
        self.traverse_result(function).map(|_| ())
    }
}

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
        B: Clone + 'static,
    {
        match self {
            Some(value) => function(value).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
        B: Clone + 'static,
    {
        self.map(function).transpose()
    }
}

impl<T, E> Traversable for Result<T, E> {
    fn traverse_option<B, F>(self, function: F) -> Option<Result<B, E>>
    where
        F: FnMut(T) -> Option<B>,
        B: Clone + 'static,
    {
        self.map(function).map_or_else(|error| Some(Err(error)), |value| value.map(Ok))
    }

    fn traverse_result<B, E2, F>(self, function: F) -> Result<Result<B, E>, E2>
    where
        F: FnMut(T) -> Result<B, E2>,
        B: Clone + 'static,
    {
        match self.map(function) {
            Ok(inner) => inner.map(Ok),
            Err(error) => Ok(Err(error)),
        }
    }
}

impl<A> Traversable for Vec<A> {
    fn traverse_option<B, F>(self, function: F) -> Option<Vec<B>>
    where
        F: FnMut(A) -> Option<B>,
        B: Clone + 'static,
    {
        self.into_iter().map(function).collect()
    }

    fn traverse_result<B, E, F>(self, function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
        B: Clone + 'static,
    {
        self.into_iter().map(function).collect()
    }
}

impl<A> Traversable for Identity<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Identity<B>>
    where
        F: FnMut(A) -> Option<B>,
        B: Clone + 'static,
    {
        function(self.0).map(Identity)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Identity<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
        B: Clone + 'static,
    {
        function(self.0).map(Identity)
    }
}

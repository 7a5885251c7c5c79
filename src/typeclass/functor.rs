//! Functor type class - mapping over the values inside a structure.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Why `Fn` and not `FnOnce`
//!
//! A lazy sequence such as `StatelessIterator` applies the mapping function
//! once per element, and every fork of the sequence may force the same
//! element again. The function therefore has to be callable many times and
//! has to outlive the call to `fmap`, which is exactly `Fn + 'static`. The
//! mapped values are `Clone` so that a re-forced step can hand out the value
//! it already holds.
//!
//! # Examples
//!
//! ```rust
//! use fpseq::typeclass::Functor;
//!
//! let lengths: Vec<usize> = vec!["a", "bb", "ccc"].fmap(str::len);
//! assert_eq!(lengths, vec![1, 2, 3]);
//!
//! let nothing: Option<i32> = None;
//! assert_eq!(nothing.fmap(|value| value + 1), None);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for structures whose values can be transformed in place.
///
/// # Examples
///
/// ```rust
/// use fpseq::iterator::StatelessIterator;
/// use fpseq::typeclass::Functor;
///
/// let squares = StatelessIterator::from_array(vec![1, 2, 3]).fmap(|value| value * value);
/// assert_eq!(squares.to_array(), vec![1, 4, 9]);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to every value inside the structure.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: Clone + 'static;

    /// Replaces every value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpseq::typeclass::Functor;
    ///
    /// assert_eq!(vec![1, 2].replace('x'), vec!['x', 'x']);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Keeps the shape, forgets the values.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> B + 'static,
        B: Clone + 'static,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> B + 'static,
        B: Clone + 'static,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: Fn(T) -> B + 'static,
        B: Clone + 'static,
    {
        self.into_iter().map(function).collect()
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> B + 'static,
        B: Clone + 'static,
    {
        Identity(function(self.0))
    }
}

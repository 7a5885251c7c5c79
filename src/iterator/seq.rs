//! Bridges to `std::iter::Iterator`.
//!
//! [`Seq`] walks a `StatelessIterator` with an ordinary mutable cursor, so
//! the whole standard iterator toolbox (`for` loops, `sum`, `collect`, ...)
//! becomes available. The `StatelessIterator` itself is left untouched.

use std::iter::FusedIterator;

use super::generic::Unfold;
use super::stateless::StatelessIterator;
use crate::pair::Pair;

/// A `std` iterator over the values of a [`StatelessIterator`].
///
/// Once the underlying sequence reports exhaustion the cursor stays
/// exhausted, even for effectful sources that might produce again.
#[derive(Debug, Clone)]
pub struct Seq<U> {
    cursor: Option<StatelessIterator<U>>,
}

impl<U: Clone + 'static> Iterator for Seq<U> {
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let step = self.cursor.as_ref()?.unfold();
        match step {
            Some(pair) => {
                let (next, value) = pair.into_parts();
                self.cursor = Some(next);
                Some(value)
            }
            None => {
                self.cursor = None;
                None
            }
        }
    }
}

impl<U: Clone + 'static> FusedIterator for Seq<U> {}

/// A `std` iterator over the key/value pairs of a
/// `StatelessIterator<Pair<K, V>>`, yielding tuples.
#[derive(Debug, Clone)]
pub struct Seq2<K, V> {
    inner: Seq<Pair<K, V>>,
}

impl<K: Clone + 'static, V: Clone + 'static> Iterator for Seq2<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next().map(Pair::into_parts)
    }
}

impl<K: Clone + 'static, V: Clone + 'static> FusedIterator for Seq2<K, V> {}

impl<U: Clone + 'static> StatelessIterator<U> {
    /// Walks the sequence with a `std` iterator.
    ///
    /// ```rust
    /// use fpseq::iterator::StatelessIterator;
    ///
    /// let total: i32 = StatelessIterator::count(1).take(4).to_seq().sum();
    /// assert_eq!(total, 10);
    /// ```
    #[must_use]
    pub fn to_seq(self) -> Seq<U> {
        Seq { cursor: Some(self) }
    }
}

impl<K: Clone + 'static, V: Clone + 'static> StatelessIterator<Pair<K, V>> {
    /// Walks a sequence of pairs as `(key, value)` tuples.
    ///
    /// ```rust
    /// use fpseq::iterator::StatelessIterator;
    ///
    /// let scores = StatelessIterator::from_array(vec!["ann", "bo"])
    ///     .zip(StatelessIterator::from_array(vec![3, 5]));
    /// let table: Vec<(&str, i32)> = scores.to_seq2().collect();
    /// assert_eq!(table, vec![("ann", 3), ("bo", 5)]);
    /// ```
    #[must_use]
    pub fn to_seq2(self) -> Seq2<K, V> {
        Seq2 {
            inner: self.to_seq(),
        }
    }
}

impl<U: Clone + 'static> IntoIterator for StatelessIterator<U> {
    type Item = U;
    type IntoIter = Seq<U>;

    fn into_iter(self) -> Seq<U> {
        self.to_seq()
    }
}

//! The concrete lazy sequence type.

use std::fmt;
use std::hash::Hash;
use std::mem;
use std::ops::Add;
use std::rc::Rc;

use super::generic::{self, Step, Unfold};
use crate::pair::Pair;
use crate::typeclass::Monoid;

/// A lazy, immutable, possibly infinite sequence.
///
/// A `StatelessIterator<U>` is a shared thunk that, when unfolded, produces
/// either nothing or the current value together with the rest of the
/// sequence. Nothing is computed until a consumer (`to_array`, `first`,
/// `reduce`, a `for` loop over [`StatelessIterator::to_seq`], ...) asks for it.
///
/// Unlike `std::iter::Iterator`, advancing never mutates the sequence:
/// cloning is O(1) and every clone, or every remainder kept from an earlier
/// step, can be consumed independently.
///
/// # Examples
///
/// ```rust
/// use fpseq::iterator::StatelessIterator;
///
/// let evens = StatelessIterator::count(0)
///     .filter(|value| value % 2 == 0)
///     .map(|value| value * value);
///
/// assert_eq!(evens.clone().take(4).to_array(), vec![0, 4, 16, 36]);
/// assert_eq!(evens.first(), Some(0));
/// ```
pub struct StatelessIterator<U> {
    thunk: Thunk<U>,
}

enum Thunk<U> {
    Empty,
    Step(Rc<dyn Fn() -> Step<StatelessIterator<U>, U>>),
    // Kept apart so nested concatenations are walked in a loop.
    Concat(Rc<Pair<StatelessIterator<U>, StatelessIterator<U>>>),
}

impl<U> Clone for StatelessIterator<U> {
    fn clone(&self) -> Self {
        let thunk = match &self.thunk {
            Thunk::Empty => Thunk::Empty,
            Thunk::Step(step) => Thunk::Step(Rc::clone(step)),
            Thunk::Concat(halves) => Thunk::Concat(Rc::clone(halves)),
        };
        Self { thunk }
    }
}

impl<U> Drop for StatelessIterator<U> {
    fn drop(&mut self) {
        // Uniquely owned concatenation chains are unlinked one node at a time.
        let mut pending = Vec::new();
        if let Thunk::Concat(halves) = mem::replace(&mut self.thunk, Thunk::Empty) {
            pending.push(halves);
        }
        while let Some(halves) = pending.pop() {
            let Ok(pair) = Rc::try_unwrap(halves) else {
                continue;
            };
            let (mut first, mut second) = pair.into_parts();
            for half in [&mut first, &mut second] {
                if let Thunk::Concat(inner) = mem::replace(&mut half.thunk, Thunk::Empty) {
                    pending.push(inner);
                }
            }
        }
    }
}

impl<U> fmt::Debug for StatelessIterator<U> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("StatelessIterator")
            .finish_non_exhaustive()
    }
}

impl<U: Clone + 'static> Unfold for StatelessIterator<U> {
    type Item = U;

    #[inline]
    fn unfold(&self) -> Step<Self, U> {
        match &self.thunk {
            Thunk::Empty => None,
            Thunk::Step(step) => step(),
            Thunk::Concat(halves) => generic::unfold_concat(halves.head(), halves.tail()),
        }
    }

    #[inline]
    fn from_step<F>(step: F) -> Self
    where
        F: Fn() -> Step<Self, U> + 'static,
    {
        Self {
            thunk: Thunk::Step(Rc::new(step)),
        }
    }

    fn from_concat(first: Self, second: Self) -> Self {
        Self {
            thunk: Thunk::Concat(Rc::new(Pair::new(first, second))),
        }
    }

    fn concat_parts(&self) -> Option<Pair<Self, Self>> {
        match &self.thunk {
            Thunk::Concat(halves) => Some((**halves).clone()),
            Thunk::Empty | Thunk::Step(_) => None,
        }
    }
}

impl<U: Clone + 'static> StatelessIterator<U> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// The exhausted sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            thunk: Thunk::Empty,
        }
    }

    /// A sequence of exactly one value.
    ///
    /// ```rust
    /// use fpseq::iterator::StatelessIterator;
    ///
    /// assert_eq!(StatelessIterator::of('a').to_array(), vec!['a']);
    /// ```
    #[must_use]
    pub fn of(value: U) -> Self {
        generic::of(value)
    }

    /// A sequence over the elements of `values`.
    #[must_use]
    pub fn from_array(values: Vec<U>) -> Self {
        generic::from_array(values)
    }

    /// The infinite sequence `function(0), function(1), ...`.
    pub fn make_by<F>(function: F) -> Self
    where
        F: Fn(usize) -> U + 'static,
    {
        generic::make_by(function)
    }

    /// The infinite sequence `value, value, ...`.
    #[must_use]
    pub fn replicate(value: U) -> Self {
        generic::replicate(value)
    }

    /// `count` copies of `value`.
    ///
    /// ```rust
    /// use fpseq::iterator::StatelessIterator;
    ///
    /// assert_eq!(StatelessIterator::repeat(3, "ho").to_array(), vec!["ho"; 3]);
    /// ```
    #[must_use]
    pub fn repeat(count: usize, value: U) -> Self {
        generic::repeat(count, value)
    }

    /// The infinite sequence `start, start + 1, ...`.
    #[must_use]
    pub fn count(start: U) -> Self
    where
        U: Add<Output = U> + From<u8>,
    {
        generic::count(start)
    }

    /// A single value computed by `thunk` each time the sequence is unfolded.
    pub fn from_lazy<F>(thunk: F) -> Self
    where
        F: Fn() -> U + 'static,
    {
        generic::from_lazy(thunk)
    }

    /// A single value produced by running `effect` on every unfold.
    pub fn from_io<F>(effect: F) -> Self
    where
        F: Fn() -> U + 'static,
    {
        generic::from_io(effect)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to every value.
    #[must_use]
    pub fn map<V, F>(self, function: F) -> StatelessIterator<V>
    where
        V: Clone + 'static,
        F: Fn(U) -> V + 'static,
    {
        generic::monad_map(self, function)
    }

    /// Applies `function` to every value together with its position.
    #[must_use]
    pub fn map_with_index<V, F>(self, function: F) -> StatelessIterator<V>
    where
        V: Clone + 'static,
        F: Fn(usize, U) -> V + 'static,
    {
        generic::map_with_index(self, function)
    }

    /// Expands every value into a sequence and concatenates the results.
    ///
    /// ```rust
    /// use fpseq::iterator::StatelessIterator;
    ///
    /// let words = StatelessIterator::from_array(vec!["ab", "c"])
    ///     .chain(|word| StatelessIterator::from_array(word.chars().collect()));
    /// assert_eq!(words.to_array(), vec!['a', 'b', 'c']);
    /// ```
    #[must_use]
    pub fn chain<V, F>(self, function: F) -> StatelessIterator<V>
    where
        V: Clone + 'static,
        F: Fn(U) -> StatelessIterator<V> + 'static,
    {
        generic::monad_chain(self, function)
    }

    /// Like [`StatelessIterator::chain`], but keeps the original values.
    #[must_use]
    pub fn chain_first<V, F>(self, function: F) -> Self
    where
        V: Clone + 'static,
        F: Fn(U) -> StatelessIterator<V> + 'static,
    {
        generic::chain_first(self, function)
    }

    /// Every value of `self`, then every value of `other`.
    #[must_use]
    pub fn concat(self, other: Self) -> Self {
        generic::concat(self, other)
    }

    /// Applies every function of `self` to every value of `values`,
    /// functions outermost.
    ///
    /// ```rust
    /// use fpseq::iterator::StatelessIterator;
    ///
    /// let increment: fn(i32) -> i32 = |value| value + 1;
    /// let negate: fn(i32) -> i32 = |value| -value;
    /// let applied = StatelessIterator::from_array(vec![increment, negate])
    ///     .ap(StatelessIterator::from_array(vec![1, 2]));
    /// assert_eq!(applied.to_array(), vec![2, 3, -1, -2]);
    /// ```
    #[must_use]
    pub fn ap<A, B>(self, values: StatelessIterator<A>) -> StatelessIterator<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        U: Fn(A) -> B,
    {
        generic::monad_ap(self, values)
    }

    /// Keeps the values satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&U) -> bool + 'static,
    {
        generic::filter(self, predicate)
    }

    /// Keeps the `Some` results of `function`.
    #[must_use]
    pub fn filter_map<V, F>(self, function: F) -> StatelessIterator<V>
    where
        V: Clone + 'static,
        F: Fn(U) -> Option<V> + 'static,
    {
        generic::filter_map(self, function)
    }

    /// At most the first `count` values.
    #[must_use]
    pub fn take(self, count: usize) -> Self {
        generic::take(self, count)
    }

    /// Skips the leading values satisfying `predicate`.
    #[must_use]
    pub fn drop_while<P>(self, predicate: P) -> Self
    where
        P: Fn(&U) -> bool + 'static,
    {
        generic::drop_while(self, predicate)
    }

    /// Repeats the sequence forever. The cycle of an empty sequence is empty.
    #[must_use]
    pub fn cycle(self) -> Self {
        generic::cycle(self)
    }

    /// Drops values whose `key` has been seen before.
    #[must_use]
    pub fn uniq<K, F>(self, key: F) -> Self
    where
        K: Eq + Hash + Clone + 'static,
        F: Fn(&U) -> K + 'static,
    {
        generic::uniq(self, key)
    }

    /// Drops values that have been seen before.
    #[must_use]
    pub fn strict_uniq(self) -> Self
    where
        U: Eq + Hash,
    {
        generic::strict_uniq(self)
    }

    /// Combines the values of `self` and `other` pairwise.
    #[must_use]
    pub fn zip_with<V, W, F>(self, other: StatelessIterator<V>, function: F) -> StatelessIterator<W>
    where
        V: Clone + 'static,
        W: Clone + 'static,
        F: Fn(U, V) -> W + 'static,
    {
        generic::zip_with(self, other, function)
    }

    /// Pairs the values of `self` (heads) with those of `other` (tails).
    #[must_use]
    pub fn zip<V>(self, other: StatelessIterator<V>) -> StatelessIterator<Pair<U, V>>
    where
        V: Clone + 'static,
    {
        generic::zip(self, other)
    }

    /// The running fold of the sequence, excluding `initial`.
    ///
    /// ```rust
    /// use fpseq::iterator::StatelessIterator;
    ///
    /// let totals = StatelessIterator::from_array(vec![5, 1, 4]).scan(|total, value| total + value, 0);
    /// assert_eq!(totals.to_array(), vec![5, 6, 10]);
    /// ```
    #[must_use]
    pub fn scan<V, F>(self, function: F, initial: V) -> StatelessIterator<V>
    where
        V: Clone + 'static,
        F: Fn(V, U) -> V + 'static,
    {
        generic::scan(self, function, initial)
    }

    /// Keeps the values whose matching selector is `true`.
    #[must_use]
    pub fn compress(self, selectors: StatelessIterator<bool>) -> Self {
        generic::compress(self, selectors)
    }

    // =========================================================================
    // Consumption
    // =========================================================================

    /// Folds every value from left to right.
    pub fn reduce<V, F>(self, function: F, initial: V) -> V
    where
        F: FnMut(V, U) -> V,
    {
        generic::reduce(self, function, initial)
    }

    /// Collects every value into a `Vec`.
    #[must_use]
    pub fn to_array(self) -> Vec<U> {
        generic::to_array(self)
    }

    /// The first value. Forces exactly one step.
    #[must_use]
    pub fn first(&self) -> Option<U> {
        generic::first(self)
    }

    /// The last value of a finite sequence.
    #[must_use]
    pub fn last(self) -> Option<U> {
        generic::last(self)
    }

    /// Whether any value satisfies `predicate`. Stops at the first match.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&U) -> bool,
    {
        generic::any(self, predicate)
    }

    /// Combines every value with the monoid of `U`.
    #[must_use]
    pub fn fold(self) -> U
    where
        U: Monoid,
    {
        generic::fold(self)
    }

    /// Maps every value into a monoid and combines the results.
    pub fn fold_map<M, F>(self, function: F) -> M
    where
        M: Monoid,
        F: FnMut(U) -> M,
    {
        generic::fold_map(self, function)
    }
}

impl<U: Clone + 'static> StatelessIterator<StatelessIterator<U>> {
    /// Concatenates a sequence of sequences.
    #[must_use]
    pub fn flatten(self) -> StatelessIterator<U> {
        generic::flatten(self)
    }
}

impl<U: Clone + 'static> Default for StatelessIterator<U> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<U: Clone + 'static> From<Vec<U>> for StatelessIterator<U> {
    fn from(values: Vec<U>) -> Self {
        Self::from_array(values)
    }
}

impl<U: Clone + 'static, const N: usize> From<[U; N]> for StatelessIterator<U> {
    fn from(values: [U; N]) -> Self {
        Self::from_array(Vec::from(values))
    }
}

impl<U: Clone + 'static> FromIterator<U> for StatelessIterator<U> {
    fn from_iter<I: IntoIterator<Item = U>>(iterable: I) -> Self {
        Self::from_array(iterable.into_iter().collect())
    }
}

// Sequences share their step functions through `Rc`.
static_assertions::assert_not_impl_any!(StatelessIterator<i32>: Send, Sync);
static_assertions::assert_impl_all!(
    StatelessIterator<i32>: Clone, Default, fmt::Debug, FromIterator<i32>
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn debug_does_not_force_the_sequence() {
        let poisoned: StatelessIterator<i32> =
            StatelessIterator::from_step(|| unreachable!("debug must not unfold"));
        assert_eq!(format!("{poisoned:?}"), "StatelessIterator { .. }");
    }

    #[rstest]
    fn first_calls_the_mapper_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mapped = StatelessIterator::from_array(vec![1, 2, 3, 4]).map(move |value| {
            counter.set(counter.get() + 1);
            value * 2
        });
        assert_eq!(mapped.first(), Some(2));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn forks_are_independent() {
        let source = StatelessIterator::from_array(vec![1, 2, 3]);
        let (rest, head) = source.unfold().map(Pair::into_parts).unwrap();
        assert_eq!(head, 1);
        assert_eq!(rest.clone().to_array(), vec![2, 3]);
        assert_eq!(rest.to_array(), vec![2, 3]);
        assert_eq!(source.to_array(), vec![1, 2, 3]);
    }

    #[rstest]
    fn flatten_concatenates_inner_sequences() {
        let nested = StatelessIterator::from_array(vec![
            StatelessIterator::from_array(vec![1]),
            StatelessIterator::empty(),
            StatelessIterator::from_array(vec![2, 3]),
        ]);
        assert_eq!(nested.flatten().to_array(), vec![1, 2, 3]);
    }

    #[rstest]
    fn conversions_build_the_same_sequence() {
        let from_vec: StatelessIterator<i32> = vec![1, 2].into();
        let from_array: StatelessIterator<i32> = [1, 2].into();
        let collected: StatelessIterator<i32> = (1..=2).collect();
        assert_eq!(from_vec.to_array(), vec![1, 2]);
        assert_eq!(from_array.to_array(), vec![1, 2]);
        assert_eq!(collected.to_array(), vec![1, 2]);
        assert!(StatelessIterator::<i32>::default().first().is_none());
    }

    #[rstest]
    fn last_and_reduce_walk_everything() {
        let values = StatelessIterator::from_array(vec![3, 1, 4]);
        assert_eq!(values.clone().last(), Some(4));
        assert_eq!(values.reduce(|product, value| product * value, 1), 12);
    }

    #[rstest]
    fn from_io_observes_fresh_values() {
        let source = Rc::new(Cell::new(10));
        let reader = Rc::clone(&source);
        let sensor = StatelessIterator::from_io(move || reader.get());
        assert_eq!(sensor.first(), Some(10));
        source.set(11);
        assert_eq!(sensor.first(), Some(11));
    }
}

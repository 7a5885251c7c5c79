//! Curried, data-last versions of the `StatelessIterator` operations.
//!
//! Each function takes its configuration first and returns a function
//! expecting the sequence, which is the shape `pipe!` composes:
//!
//! ```rust
//! use fpseq::iterator::StatelessIterator;
//! use fpseq::iterator::operators::{filter, map, take, to_array};
//! use fpseq::pipe;
//!
//! let result = pipe!(
//!     StatelessIterator::count(1),
//!     filter(|value: &i32| value % 3 == 0),
//!     map(|value: i32| value * 10),
//!     take(3),
//!     to_array
//! );
//! assert_eq!(result, vec![30, 60, 90]);
//! ```
//!
//! Operators that need no configuration (`cycle`, `to_array`, ...) are plain
//! functions of the sequence.

use std::hash::Hash;

use super::stateless::StatelessIterator;
use crate::pair::Pair;
use crate::typeclass::Monoid;

/// Curried [`StatelessIterator::map`].
pub fn map<U, V, F>(function: F) -> impl FnOnce(StatelessIterator<U>) -> StatelessIterator<V>
where
    U: Clone + 'static,
    V: Clone + 'static,
    F: Fn(U) -> V + 'static,
{
    move |sequence| sequence.map(function)
}

/// Curried [`StatelessIterator::map_with_index`].
pub fn map_with_index<U, V, F>(
    function: F,
) -> impl FnOnce(StatelessIterator<U>) -> StatelessIterator<V>
where
    U: Clone + 'static,
    V: Clone + 'static,
    F: Fn(usize, U) -> V + 'static,
{
    move |sequence| sequence.map_with_index(function)
}

/// Curried [`StatelessIterator::chain`].
pub fn chain<U, V, F>(function: F) -> impl FnOnce(StatelessIterator<U>) -> StatelessIterator<V>
where
    U: Clone + 'static,
    V: Clone + 'static,
    F: Fn(U) -> StatelessIterator<V> + 'static,
{
    move |sequence| sequence.chain(function)
}

/// Curried [`StatelessIterator::chain_first`].
pub fn chain_first<U, V, F>(
    function: F,
) -> impl FnOnce(StatelessIterator<U>) -> StatelessIterator<U>
where
    U: Clone + 'static,
    V: Clone + 'static,
    F: Fn(U) -> StatelessIterator<V> + 'static,
{
    move |sequence| sequence.chain_first(function)
}

/// Curried [`StatelessIterator::ap`]: applies the incoming functions to
/// `values`.
pub fn ap<A, B, F>(
    values: StatelessIterator<A>,
) -> impl FnOnce(StatelessIterator<F>) -> StatelessIterator<B>
where
    A: Clone + 'static,
    B: Clone + 'static,
    F: Fn(A) -> B + Clone + 'static,
{
    move |functions| functions.ap(values)
}

/// Curried [`StatelessIterator::filter`].
pub fn filter<U, P>(predicate: P) -> impl FnOnce(StatelessIterator<U>) -> StatelessIterator<U>
where
    U: Clone + 'static,
    P: Fn(&U) -> bool + 'static,
{
    move |sequence| sequence.filter(predicate)
}

/// Curried [`StatelessIterator::filter_map`].
pub fn filter_map<U, V, F>(function: F) -> impl FnOnce(StatelessIterator<U>) -> StatelessIterator<V>
where
    U: Clone + 'static,
    V: Clone + 'static,
    F: Fn(U) -> Option<V> + 'static,
{
    move |sequence| sequence.filter_map(function)
}

/// Curried [`StatelessIterator::take`].
pub fn take<U>(count: usize) -> impl Fn(StatelessIterator<U>) -> StatelessIterator<U>
where
    U: Clone + 'static,
{
    move |sequence| sequence.take(count)
}

/// Curried [`StatelessIterator::drop_while`].
pub fn drop_while<U, P>(predicate: P) -> impl FnOnce(StatelessIterator<U>) -> StatelessIterator<U>
where
    U: Clone + 'static,
    P: Fn(&U) -> bool + 'static,
{
    move |sequence| sequence.drop_while(predicate)
}

/// Curried [`StatelessIterator::uniq`].
pub fn uniq<U, K, F>(key: F) -> impl FnOnce(StatelessIterator<U>) -> StatelessIterator<U>
where
    U: Clone + 'static,
    K: Eq + Hash + Clone + 'static,
    F: Fn(&U) -> K + 'static,
{
    move |sequence| sequence.uniq(key)
}

/// Curried [`StatelessIterator::zip`]: `zip(first)(second)` pairs the
/// values of `first` (heads) with those of `second` (tails).
pub fn zip<U, V>(
    first: StatelessIterator<U>,
) -> impl FnOnce(StatelessIterator<V>) -> StatelessIterator<Pair<U, V>>
where
    U: Clone + 'static,
    V: Clone + 'static,
{
    move |second| first.zip(second)
}

/// Curried [`StatelessIterator::zip_with`] with `first` supplying the left
/// arguments.
pub fn zip_with<U, V, W, F>(
    first: StatelessIterator<U>,
    function: F,
) -> impl FnOnce(StatelessIterator<V>) -> StatelessIterator<W>
where
    U: Clone + 'static,
    V: Clone + 'static,
    W: Clone + 'static,
    F: Fn(U, V) -> W + 'static,
{
    move |second| first.zip_with(second, function)
}

/// Curried [`StatelessIterator::scan`].
pub fn scan<U, V, F>(
    function: F,
    initial: V,
) -> impl FnOnce(StatelessIterator<U>) -> StatelessIterator<V>
where
    U: Clone + 'static,
    V: Clone + 'static,
    F: Fn(V, U) -> V + 'static,
{
    move |sequence| sequence.scan(function, initial)
}

/// Curried [`StatelessIterator::compress`].
pub fn compress<U>(
    selectors: StatelessIterator<bool>,
) -> impl FnOnce(StatelessIterator<U>) -> StatelessIterator<U>
where
    U: Clone + 'static,
{
    move |sequence| sequence.compress(selectors)
}

/// Curried [`StatelessIterator::reduce`].
pub fn reduce<U, V, F>(function: F, initial: V) -> impl FnOnce(StatelessIterator<U>) -> V
where
    U: Clone + 'static,
    F: FnMut(V, U) -> V,
{
    move |sequence| sequence.reduce(function, initial)
}

/// Curried [`StatelessIterator::any`].
pub fn any<U, P>(predicate: P) -> impl FnOnce(StatelessIterator<U>) -> bool
where
    U: Clone + 'static,
    P: FnMut(&U) -> bool,
{
    move |sequence| sequence.any(predicate)
}

/// Curried [`StatelessIterator::fold_map`].
pub fn fold_map<U, M, F>(function: F) -> impl FnOnce(StatelessIterator<U>) -> M
where
    U: Clone + 'static,
    M: Monoid,
    F: FnMut(U) -> M,
{
    move |sequence| sequence.fold_map(function)
}

/// [`StatelessIterator::cycle`] as a function.
pub fn cycle<U: Clone + 'static>(sequence: StatelessIterator<U>) -> StatelessIterator<U> {
    sequence.cycle()
}

/// [`StatelessIterator::strict_uniq`] as a function.
pub fn strict_uniq<U>(sequence: StatelessIterator<U>) -> StatelessIterator<U>
where
    U: Clone + Eq + Hash + 'static,
{
    sequence.strict_uniq()
}

/// [`StatelessIterator::flatten`] as a function.
pub fn flatten<U: Clone + 'static>(
    nested: StatelessIterator<StatelessIterator<U>>,
) -> StatelessIterator<U> {
    nested.flatten()
}

/// [`StatelessIterator::to_array`] as a function.
pub fn to_array<U: Clone + 'static>(sequence: StatelessIterator<U>) -> Vec<U> {
    sequence.to_array()
}

/// [`StatelessIterator::first`] as a function.
pub fn first<U: Clone + 'static>(sequence: StatelessIterator<U>) -> Option<U> {
    sequence.first()
}

/// [`StatelessIterator::last`] as a function.
pub fn last<U: Clone + 'static>(sequence: StatelessIterator<U>) -> Option<U> {
    sequence.last()
}

/// [`StatelessIterator::fold`] as a function.
pub fn fold<U: Monoid + Clone + 'static>(sequence: StatelessIterator<U>) -> U {
    sequence.fold()
}

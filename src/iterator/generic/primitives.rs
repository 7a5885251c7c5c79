//! Constructors, the monad operations and the strict consumers.

use std::ops::Add;
use std::rc::Rc;

use super::{Step, Unfold};
use super::combinators::take;
use crate::pair::Pair;
use crate::typeclass::{Monoid, Semigroup};

/// The exhausted sequence.
pub fn empty<GU: Unfold>() -> GU {
    GU::from_step(|| None)
}

/// A sequence of exactly one value.
pub fn of<GU: Unfold>(value: GU::Item) -> GU {
    GU::from_step(move || Some(Pair::new(empty(), value.clone())))
}

/// A sequence over the elements of `values`, in order.
///
/// The vector is moved into shared storage once; every step is an index into
/// it, so construction is O(1) regardless of the length.
pub fn from_array<GU: Unfold>(values: Vec<GU::Item>) -> GU {
    from_shared_slice(Rc::from(values), 0)
}

fn from_shared_slice<GU: Unfold>(values: Rc<[GU::Item]>, index: usize) -> GU {
    GU::from_step(move || {
        values
            .get(index)
            .map(|value| Pair::new(from_shared_slice(Rc::clone(&values), index + 1), value.clone()))
    })
}

/// The infinite sequence `function(0), function(1), ...`.
pub fn make_by<GU, F>(function: F) -> GU
where
    GU: Unfold,
    F: Fn(usize) -> GU::Item + 'static,
{
    make_by_from(Rc::new(function), 0)
}

fn make_by_from<GU, F>(function: Rc<F>, index: usize) -> GU
where
    GU: Unfold,
    F: Fn(usize) -> GU::Item + 'static,
{
    GU::from_step(move || {
        Some(Pair::new(
            make_by_from(Rc::clone(&function), index + 1),
            function(index),
        ))
    })
}

/// The infinite sequence `value, value, ...`.
pub fn replicate<GU: Unfold>(value: GU::Item) -> GU {
    GU::from_step(move || Some(Pair::new(replicate(value.clone()), value.clone())))
}

/// `count` copies of `value`.
pub fn repeat<GU: Unfold>(count: usize, value: GU::Item) -> GU {
    take(replicate(value), count)
}

/// The infinite sequence `start, start + 1, start + 2, ...`.
pub fn count<GU>(start: GU::Item) -> GU
where
    GU: Unfold,
    GU::Item: Add<Output = GU::Item> + From<u8>,
{
    GU::from_step(move || {
        let current = start.clone();
        // The successor is only computed once the remainder is unfolded.
        let rest = GU::from_step(move || {
            count::<GU>(current.clone() + <GU::Item as From<u8>>::from(1)).unfold()
        });
        Some(Pair::new(rest, start.clone()))
    })
}

/// A one-element sequence whose value is computed by `thunk` on every unfold.
pub fn from_lazy<GU, F>(thunk: F) -> GU
where
    GU: Unfold,
    F: Fn() -> GU::Item + 'static,
{
    GU::from_step(move || Some(Pair::new(empty(), thunk())))
}

/// A one-element sequence that runs `effect` each time it is unfolded.
///
/// Two unfolds of the same sequence may see two different values.
pub fn from_io<GU, F>(effect: F) -> GU
where
    GU: Unfold,
    F: Fn() -> GU::Item + 'static,
{
    from_lazy(effect)
}

/// Applies `function` to every value, lazily.
pub fn monad_map<GU, GV, F>(sequence: GU, function: F) -> GV
where
    GU: Unfold,
    GV: Unfold,
    F: Fn(GU::Item) -> GV::Item + 'static,
{
    map_shared(sequence, Rc::new(function))
}

fn map_shared<GU, GV, F>(sequence: GU, function: Rc<F>) -> GV
where
    GU: Unfold,
    GV: Unfold,
    F: Fn(GU::Item) -> GV::Item + 'static,
{
    GV::from_step(move || {
        sequence.unfold().map(|step| {
            let (next, value) = step.into_parts();
            Pair::new(map_shared(next, Rc::clone(&function)), function(value))
        })
    })
}

/// Every value of `first`, then every value of `second`.
pub fn concat<GU: Unfold>(first: GU, second: GU) -> GU {
    GU::from_concat(first, second)
}

/// One step of `first` followed by `second`.
///
/// Concatenations the carrier exposes through [`Unfold::concat_parts`] are
/// taken apart in a loop, so neither a long left-nested chain of
/// concatenations nor a long run of empty parts grows the stack.
pub fn unfold_concat<GU: Unfold>(first: &GU, second: &GU) -> Step<GU, GU::Item> {
    // Parts still to visit, the next one on top.
    let mut pending = vec![second.clone()];
    let mut current = first.clone();
    loop {
        while let Some(halves) = current.concat_parts() {
            let (left, right) = halves.into_parts();
            pending.push(right);
            current = left;
        }
        match current.unfold() {
            Some(step) => return Some(step.map_head(|next| rejoin(next, pending))),
            None => current = pending.pop()?,
        }
    }
}

fn rejoin<GU: Unfold>(next: GU, pending: Vec<GU>) -> GU {
    match pending
        .into_iter()
        .reduce(|rest, part| GU::from_concat(part, rest))
    {
        Some(rest) => GU::from_concat(next, rest),
        None => next,
    }
}

/// Expands every value into a sub-sequence and concatenates them in order.
pub fn monad_chain<GU, GV, F>(sequence: GU, function: F) -> GV
where
    GU: Unfold,
    GV: Unfold,
    F: Fn(GU::Item) -> GV + 'static,
{
    chain_shared(sequence, Rc::new(function))
}

fn chain_shared<GU, GV, F>(sequence: GU, function: Rc<F>) -> GV
where
    GU: Unfold,
    GV: Unfold,
    F: Fn(GU::Item) -> GV + 'static,
{
    GV::from_step(move || {
        let mut outer = sequence.clone();
        // Empty sub-sequences are skipped in a loop, not by recursion.
        loop {
            let (next_outer, value) = outer.unfold()?.into_parts();
            if let Some(step) = function(value).unfold() {
                let rest = chain_shared(next_outer, Rc::clone(&function));
                return Some(step.map_head(|next_inner| concat(next_inner, rest)));
            }
            outer = next_outer;
        }
    })
}

/// Concatenates a sequence of sequences.
pub fn flatten<GGU, GU>(nested: GGU) -> GU
where
    GGU: Unfold<Item = GU>,
    GU: Unfold,
{
    monad_chain(nested, |inner: GU| inner)
}

/// Applies every function of `functions` to every value of `values`.
///
/// Functions are the outer loop: the result lists `f1(v1), f1(v2), ...,
/// f2(v1), ...`.
pub fn monad_ap<GAB, GA, GB>(functions: GAB, values: GA) -> GB
where
    GAB: Unfold,
    GA: Unfold,
    GB: Unfold,
    GAB::Item: Fn(GA::Item) -> GB::Item,
{
    monad_chain(functions, move |function: GAB::Item| {
        monad_map(values.clone(), function)
    })
}

/// Combines every value of `first` with every value of `second`, `first`
/// outermost.
pub fn map2<GA, GB, GC, F>(first: GA, second: GB, function: F) -> GC
where
    GA: Unfold,
    GB: Unfold,
    GC: Unfold,
    F: Fn(GA::Item, GB::Item) -> GC::Item + 'static,
{
    let function = Rc::new(function);
    monad_chain(first, move |left: GA::Item| {
        let function = Rc::clone(&function);
        monad_map(second.clone(), move |right| function(left.clone(), right))
    })
}

/// Keeps the `Some` results of `function`, dropping the values it rejects.
pub fn filter_map<GU, GV, F>(sequence: GU, function: F) -> GV
where
    GU: Unfold,
    GV: Unfold,
    F: Fn(GU::Item) -> Option<GV::Item> + 'static,
{
    filter_map_shared(sequence, Rc::new(function))
}

fn filter_map_shared<GU, GV, F>(sequence: GU, function: Rc<F>) -> GV
where
    GU: Unfold,
    GV: Unfold,
    F: Fn(GU::Item) -> Option<GV::Item> + 'static,
{
    GV::from_step(move || {
        let mut current = sequence.clone();
        loop {
            let (next, value) = current.unfold()?.into_parts();
            if let Some(mapped) = function(value) {
                return Some(Pair::new(filter_map_shared(next, Rc::clone(&function)), mapped));
            }
            current = next;
        }
    })
}

/// Keeps the values satisfying `predicate`.
pub fn filter<GU, P>(sequence: GU, predicate: P) -> GU
where
    GU: Unfold,
    P: Fn(&GU::Item) -> bool + 'static,
{
    filter_map(sequence, move |value| predicate(&value).then_some(value))
}

/// Folds every value from left to right. Only terminates on finite input.
pub fn reduce<GU, V, F>(sequence: GU, mut function: F, initial: V) -> V
where
    GU: Unfold,
    F: FnMut(V, GU::Item) -> V,
{
    let mut accumulator = initial;
    let mut current = sequence;
    while let Some(step) = current.unfold() {
        let (next, value) = step.into_parts();
        accumulator = function(accumulator, value);
        current = next;
    }
    accumulator
}

/// Collects every value into a `Vec`.
pub fn to_array<GU: Unfold>(sequence: GU) -> Vec<GU::Item> {
    reduce(
        sequence,
        |mut values, value| {
            values.push(value);
            values
        },
        Vec::new(),
    )
}

/// The first value, forcing exactly one step.
pub fn first<GU: Unfold>(sequence: &GU) -> Option<GU::Item> {
    sequence.unfold().map(|step| step.into_parts().1)
}

/// The last value of a finite sequence.
pub fn last<GU: Unfold>(sequence: GU) -> Option<GU::Item> {
    reduce(sequence, |_, value| Some(value), None)
}

/// The first value satisfying `predicate`, forcing no step past it.
pub fn find<GU, P>(sequence: &GU, mut predicate: P) -> Option<GU::Item>
where
    GU: Unfold,
    P: FnMut(&GU::Item) -> bool,
{
    let mut step = sequence.unfold();
    while let Some(pair) = step {
        let (next, value) = pair.into_parts();
        if predicate(&value) {
            return Some(value);
        }
        step = next.unfold();
    }
    None
}

/// Whether any value satisfies `predicate`. `false` for the empty sequence.
pub fn any<GU, P>(sequence: &GU, predicate: P) -> bool
where
    GU: Unfold,
    P: FnMut(&GU::Item) -> bool,
{
    find(sequence, predicate).is_some()
}

/// Combines every value with the element type's monoid.
pub fn fold<GU>(sequence: GU) -> GU::Item
where
    GU: Unfold,
    GU::Item: Monoid,
{
    reduce(sequence, Semigroup::combine, <GU::Item as Monoid>::empty())
}

/// Maps every value into a monoid and combines the results.
pub fn fold_map<GU, M, F>(sequence: GU, mut function: F) -> M
where
    GU: Unfold,
    M: Monoid,
    F: FnMut(GU::Item) -> M,
{
    reduce(
        sequence,
        |accumulator: M, value| accumulator.combine(function(value)),
        M::empty(),
    )
}

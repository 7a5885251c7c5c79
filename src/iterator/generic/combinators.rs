//! Derived combinators: slicing, cycling, deduplication, zipping and
//! running folds.

use std::hash::Hash;
use std::rc::Rc;

use super::Unfold;
use super::primitives::{empty, monad_chain, monad_map};
use crate::pair::Pair;

#[cfg(feature = "fxhash")]
type SeenKeys<K> = rustc_hash::FxHashSet<K>;

#[cfg(not(feature = "fxhash"))]
type SeenKeys<K> = std::collections::HashSet<K>;

/// At most the first `count` values. `take(_, 0)` is empty and forces nothing.
pub fn take<GU: Unfold>(sequence: GU, count: usize) -> GU {
    if count == 0 {
        return empty();
    }
    GU::from_step(move || {
        sequence
            .unfold()
            .map(|step| step.map_head(|next| take(next, count - 1)))
    })
}

/// Skips the leading values satisfying `predicate`, then yields the rest
/// untouched. The predicate is not consulted again after its first `false`.
pub fn drop_while<GU, P>(sequence: GU, predicate: P) -> GU
where
    GU: Unfold,
    P: Fn(&GU::Item) -> bool + 'static,
{
    GU::from_step(move || {
        let mut current = sequence.clone();
        loop {
            let step = current.unfold()?;
            if !predicate(step.tail()) {
                return Some(step);
            }
            current = step.into_parts().0;
        }
    })
}

/// Restarts `sequence` every time it is exhausted.
///
/// The cycle of an empty sequence is empty: restarting an empty sequence
/// yields `None` again, so the step never loops.
pub fn cycle<GU: Unfold>(sequence: GU) -> GU {
    cycle_from(sequence.clone(), sequence)
}

fn cycle_from<GU: Unfold>(current: GU, origin: GU) -> GU {
    GU::from_step(move || {
        let step = current.unfold().or_else(|| origin.unfold())?;
        Some(step.map_head(|next| cycle_from(next, origin.clone())))
    })
}

/// Drops every value whose `key` was already produced, keeping the first
/// occurrence.
///
/// Each emitted value carries its own snapshot of the keys seen so far, so
/// forks of the result never observe each other. The snapshot is copied on
/// every emitted value, which makes long sequences of distinct keys
/// quadratic.
pub fn uniq<GU, K, F>(sequence: GU, key: F) -> GU
where
    GU: Unfold,
    K: Eq + Hash + Clone + 'static,
    F: Fn(&GU::Item) -> K + 'static,
{
    uniq_from(sequence, Rc::new(key), Rc::new(SeenKeys::default()))
}

fn uniq_from<GU, K, F>(sequence: GU, key: Rc<F>, seen: Rc<SeenKeys<K>>) -> GU
where
    GU: Unfold,
    K: Eq + Hash + Clone + 'static,
    F: Fn(&GU::Item) -> K + 'static,
{
    GU::from_step(move || {
        let mut current = sequence.clone();
        loop {
            let (next, value) = current.unfold()?.into_parts();
            let derived = key(&value);
            if !seen.contains(&derived) {
                let mut snapshot = (*seen).clone();
                snapshot.insert(derived);
                let rest = uniq_from(next, Rc::clone(&key), Rc::new(snapshot));
                return Some(Pair::new(rest, value));
            }
            current = next;
        }
    })
}

/// [`uniq`] keyed by the values themselves.
pub fn strict_uniq<GU>(sequence: GU) -> GU
where
    GU: Unfold,
    GU::Item: Eq + Hash,
{
    uniq(sequence, <GU::Item as Clone>::clone)
}

/// Advances both sequences in lockstep, combining their values with
/// `function`. Stops with the shorter one.
pub fn zip_with<GA, GB, GC, F>(first: GA, second: GB, function: F) -> GC
where
    GA: Unfold,
    GB: Unfold,
    GC: Unfold,
    F: Fn(GA::Item, GB::Item) -> GC::Item + 'static,
{
    zip_with_shared(first, second, Rc::new(function))
}

fn zip_with_shared<GA, GB, GC, F>(first: GA, second: GB, function: Rc<F>) -> GC
where
    GA: Unfold,
    GB: Unfold,
    GC: Unfold,
    F: Fn(GA::Item, GB::Item) -> GC::Item + 'static,
{
    GC::from_step(move || {
        let (next_first, left) = first.unfold()?.into_parts();
        let (next_second, right) = second.unfold()?.into_parts();
        Some(Pair::new(
            zip_with_shared(next_first, next_second, Rc::clone(&function)),
            function(left, right),
        ))
    })
}

/// Pairs up the values of two sequences; `first` supplies the heads.
pub fn zip<GA, GB, GP>(first: GA, second: GB) -> GP
where
    GA: Unfold,
    GB: Unfold,
    GP: Unfold<Item = Pair<GA::Item, GB::Item>>,
{
    zip_with(first, second, Pair::new)
}

/// The running fold of `sequence`, one accumulator per input value.
///
/// `initial` itself is not emitted, so the result is exactly as long as
/// the input.
pub fn scan<GU, GV, F>(sequence: GU, function: F, initial: GV::Item) -> GV
where
    GU: Unfold,
    GV: Unfold,
    F: Fn(GV::Item, GU::Item) -> GV::Item + 'static,
{
    scan_from(sequence, Rc::new(function), initial)
}

fn scan_from<GU, GV, F>(sequence: GU, function: Rc<F>, accumulator: GV::Item) -> GV
where
    GU: Unfold,
    GV: Unfold,
    F: Fn(GV::Item, GU::Item) -> GV::Item + 'static,
{
    GV::from_step(move || {
        let (next, value) = sequence.unfold()?.into_parts();
        let updated = function(accumulator.clone(), value);
        Some(Pair::new(
            scan_from(next, Rc::clone(&function), updated.clone()),
            updated,
        ))
    })
}

/// Keeps the values whose selector is `true`. Stops with the shorter input.
pub fn compress<GU, GB>(sequence: GU, selectors: GB) -> GU
where
    GU: Unfold,
    GB: Unfold<Item = bool>,
{
    GU::from_step(move || {
        let mut data = sequence.clone();
        let mut flags = selectors.clone();
        loop {
            let (next_data, value) = data.unfold()?.into_parts();
            let (next_flags, keep) = flags.unfold()?.into_parts();
            if keep {
                return Some(Pair::new(compress(next_data, next_flags), value));
            }
            data = next_data;
            flags = next_flags;
        }
    })
}

/// Like `monad_map`, but `function` also receives the zero-based position.
pub fn map_with_index<GU, GV, F>(sequence: GU, function: F) -> GV
where
    GU: Unfold,
    GV: Unfold,
    F: Fn(usize, GU::Item) -> GV::Item + 'static,
{
    map_with_index_from(sequence, Rc::new(function), 0)
}

fn map_with_index_from<GU, GV, F>(sequence: GU, function: Rc<F>, index: usize) -> GV
where
    GU: Unfold,
    GV: Unfold,
    F: Fn(usize, GU::Item) -> GV::Item + 'static,
{
    GV::from_step(move || {
        let (next, value) = sequence.unfold()?.into_parts();
        Some(Pair::new(
            map_with_index_from(next, Rc::clone(&function), index + 1),
            function(index, value),
        ))
    })
}

/// Runs `function` for every value but keeps the original value, once per
/// element of the sub-sequence `function` returns.
pub fn chain_first<GU, GV, F>(sequence: GU, function: F) -> GU
where
    GU: Unfold,
    GV: Unfold,
    F: Fn(GU::Item) -> GV + 'static,
{
    monad_chain(sequence, move |value: GU::Item| {
        let kept = value.clone();
        monad_map::<GV, GU, _>(function(value), move |_| kept.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::generic::{count, from_array, replicate, to_array};
    use crate::iterator::StatelessIterator;
    use rstest::rstest;

    type Numbers = StatelessIterator<i32>;

    fn numbers(values: &[i32]) -> Numbers {
        from_array(values.to_vec())
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    #[case(10, vec![1, 2, 3])]
    fn take_bounds_the_length(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(to_array(take(numbers(&[1, 2, 3]), count)), expected);
    }

    #[rstest]
    fn take_zero_never_forces_the_source() {
        let poisoned: Numbers = Numbers::from_step(|| unreachable!("source must stay unforced"));
        assert!(take(poisoned, 0).unfold().is_none());
    }

    #[rstest]
    fn drop_while_stops_checking_after_the_first_failure() {
        let rest = drop_while(numbers(&[0, 1, 2, 3, 0, 1]), |value| *value <= 2);
        assert_eq!(to_array(rest), vec![3, 0, 1]);
    }

    #[rstest]
    fn cycle_repeats_and_empty_stays_empty() {
        assert_eq!(to_array(take(cycle(numbers(&[1, 2, 3])), 7)), vec![1, 2, 3, 1, 2, 3, 1]);
        assert!(cycle(numbers(&[])).unfold().is_none());
    }

    #[rstest]
    fn uniq_keeps_first_occurrences_by_key() {
        let words: StatelessIterator<&str> =
            from_array(vec!["apple", "avocado", "banana", "blueberry", "cherry"]);
        let by_initial = uniq(words, |word: &&str| word.chars().next());
        assert_eq!(to_array(by_initial), vec!["apple", "banana", "cherry"]);
    }

    #[rstest]
    fn strict_uniq_over_an_infinite_source() {
        let bounded = take(strict_uniq(cycle(numbers(&[4, 4, 5]))), 2);
        assert_eq!(to_array(bounded), vec![4, 5]);
    }

    #[rstest]
    fn uniq_forks_do_not_share_seen_keys() {
        let unique = strict_uniq(numbers(&[1, 2, 1, 3]));
        let (rest, head) = unique.unfold().map(Pair::into_parts).unwrap();
        assert_eq!(head, 1);
        assert_eq!(to_array(rest.clone()), vec![2, 3]);
        assert_eq!(to_array(rest), vec![2, 3]);
        assert_eq!(to_array(unique), vec![1, 2, 3]);
    }

    #[rstest]
    fn zip_stops_with_the_shorter_input() {
        let letters: StatelessIterator<&str> = from_array(vec!["a", "b", "c", "d"]);
        let zipped: StatelessIterator<Pair<i32, &str>> = zip(numbers(&[1, 2, 3]), letters);
        assert_eq!(
            to_array(zipped),
            vec![Pair::new(1, "a"), Pair::new(2, "b"), Pair::new(3, "c")]
        );
    }

    #[rstest]
    fn zip_with_an_infinite_side() {
        let sums: Numbers =
            zip_with(count::<Numbers>(10), numbers(&[1, 2]), |left, right| left + right);
        assert_eq!(to_array(sums), vec![11, 13]);
    }

    #[rstest]
    fn scan_emits_every_accumulator() {
        let running: Numbers = scan(numbers(&[1, 2, 3, 4]), |total, value| total + value, 0);
        assert_eq!(to_array(running), vec![1, 3, 6, 10]);
    }

    #[rstest]
    fn compress_selects_by_flag() {
        let flags: StatelessIterator<bool> = from_array(vec![true, false, true]);
        assert_eq!(to_array(compress(numbers(&[1, 2, 3, 4]), flags)), vec![1, 3]);
    }

    #[rstest]
    fn map_with_index_counts_from_zero() {
        let labelled: StatelessIterator<String> =
            map_with_index(numbers(&[7, 8]), |index, value| format!("{index}:{value}"));
        assert_eq!(to_array(labelled), vec!["0:7", "1:8"]);
    }

    #[rstest]
    fn chain_first_keeps_outer_values() {
        let kept = chain_first(numbers(&[1, 2]), |value| {
            take(replicate::<Numbers>(0), usize::try_from(value).unwrap())
        });
        assert_eq!(to_array(kept), vec![1, 2, 2]);
    }
}

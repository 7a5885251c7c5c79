//! Integration tests for the generic sequence layer.
//!
//! The algorithms in `fpseq::iterator::generic` are written against the
//! `Unfold` trait, so they work for any sequence type. These tests supply a
//! second implementation, `Tape`, and check that the algorithms behave the
//! same for it and that they can move values between sequence types.

use std::rc::Rc;

use fpseq::iterator::generic::{self, Step, Unfold};
use fpseq::iterator::StatelessIterator;
use fpseq::pair::Pair;
use fpseq::typeclass::Sum;
use rstest::rstest;

#[derive(Clone)]
struct Tape<T>(Rc<dyn Fn() -> Step<Tape<T>, T>>);

impl<T: Clone + 'static> Unfold for Tape<T> {
    type Item = T;

    fn unfold(&self) -> Step<Self, T> {
        (self.0)()
    }

    fn from_step<F>(step: F) -> Self
    where
        F: Fn() -> Step<Self, T> + 'static,
    {
        Self(Rc::new(step))
    }
}

fn tape<T: Clone + 'static>(values: Vec<T>) -> Tape<T> {
    generic::from_array(values)
}

// =============================================================================
// Algorithms on a custom sequence type
// =============================================================================

#[rstest]
fn test_unfold_walks_step_by_step() {
    let source = tape(vec![1, 2]);

    let Some(first) = source.unfold() else {
        panic!("expected a first step");
    };
    let (rest, value) = first.into_parts();
    assert_eq!(value, 1);

    let Some(second) = rest.unfold() else {
        panic!("expected a second step");
    };
    let (rest, value) = second.into_parts();
    assert_eq!(value, 2);
    assert!(rest.unfold().is_none());

    assert_eq!(generic::to_array(source), vec![1, 2]);
}

#[rstest]
fn test_concat_works_without_exposed_halves() {
    let left = generic::concat(tape(vec![1]), generic::empty());
    let joined = generic::concat(left, generic::concat(tape(vec![2, 3]), tape(vec![4])));

    assert!(joined.concat_parts().is_none());
    assert_eq!(generic::to_array(joined), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_filter_and_take_on_custom_type() {
    let evens: Tape<u32> = generic::filter(generic::count(0_u32), |value| value % 2 == 0);
    assert_eq!(generic::to_array(generic::take(evens, 4)), vec![0, 2, 4, 6]);
}

#[rstest]
fn test_monad_chain_on_custom_type() {
    let expanded: Tape<char> = generic::monad_chain(tape(vec!["ab", "", "c"]), |word: &str| {
        generic::from_array(word.chars().collect())
    });
    assert_eq!(generic::to_array(expanded), vec!['a', 'b', 'c']);
}

#[rstest]
fn test_cycle_and_uniq_on_custom_type() {
    let cycled = generic::cycle(tape(vec![1, 2, 2, 3]));
    let distinct = generic::strict_uniq(cycled);
    assert_eq!(generic::to_array(generic::take(distinct, 3)), vec![1, 2, 3]);
}

#[rstest]
fn test_fold_and_fold_map_on_custom_type() {
    assert_eq!(generic::fold(tape(vec![vec![1], vec![2, 3]])), vec![1, 2, 3]);
    assert_eq!(generic::fold_map(tape(vec![2, 3]), Sum), Sum(5));
}

#[rstest]
fn test_find_and_any_leave_the_sequence_usable() {
    let source = tape(vec![5, 8, 13]);
    assert_eq!(generic::find(&source, |value| value % 2 == 0), Some(8));
    assert!(generic::any(&source, |value| *value == 13));
    assert_eq!(generic::first(&source), Some(5));
    assert_eq!(generic::last(source), Some(13));
}

// =============================================================================
// Moving between sequence types
// =============================================================================

#[rstest]
fn test_monad_map_changes_the_sequence_type() {
    let lengths: StatelessIterator<usize> =
        generic::monad_map(tape(vec!["one", "three"]), str::len);
    assert_eq!(lengths.to_array(), vec![3, 5]);
}

#[rstest]
fn test_zip_mixes_sequence_types() {
    let zipped: StatelessIterator<Pair<char, i32>> =
        generic::zip(tape(vec!['x', 'y']), StatelessIterator::from_array(vec![1, 2, 3]));
    assert_eq!(zipped.to_array(), vec![Pair::new('x', 1), Pair::new('y', 2)]);
}

#[rstest]
fn test_map2_is_the_cartesian_product_across_types() {
    let labels: Tape<String> = generic::map2(
        StatelessIterator::from_array(vec!['a', 'b']),
        tape(vec![1, 2]),
        |letter, number| format!("{letter}{number}"),
    );
    assert_eq!(generic::to_array(labels), vec!["a1", "a2", "b1", "b2"]);
}

#[rstest]
fn test_scan_into_another_type() {
    let totals: StatelessIterator<i64> =
        generic::scan(tape(vec![1_i64, 2, 3]), |total, value| total + value, 0);
    assert_eq!(totals.to_array(), vec![1, 3, 6]);
}

// =============================================================================
// Do-notation
// =============================================================================

#[derive(Clone, Debug, PartialEq, Default)]
struct Draft {
    width: u32,
    height: u32,
    area: u32,
}

#[rstest]
fn test_do_notation_builds_every_combination() {
    let started: Tape<Draft> = generic::do_(Draft::default());
    let widths: Tape<Draft> = generic::bind(
        started,
        |draft: Draft, width: u32| Draft { width, ..draft },
        |_: &Draft| tape(vec![1_u32, 2]),
    );
    let heights: Tape<Draft> = generic::bind(
        widths,
        |draft: Draft, height: u32| Draft { height, ..draft },
        |draft: &Draft| tape((draft.width..=2).collect()),
    );
    let sized: Tape<Draft> = generic::let_(
        heights,
        |draft: Draft, area: u32| Draft { area, ..draft },
        |draft: &Draft| draft.width * draft.height,
    );

    let areas: Vec<(u32, u32, u32)> = generic::to_array(sized)
        .into_iter()
        .map(|draft| (draft.width, draft.height, draft.area))
        .collect();
    assert_eq!(areas, vec![(1, 1, 1), (1, 2, 2), (2, 2, 4)]);
}

#[rstest]
fn test_bind_to_let_to_and_ap_s() {
    let named: Tape<(&str, u32)> = generic::bind_to(tape(vec!["w"]), |name| (name, 0));
    let constant: Tape<(&str, u32)> = generic::let_to(named, |(name, _), value| (name, value), 9);
    let combined: StatelessIterator<(&str, u32, bool)> = generic::ap_s(
        constant,
        |(name, value), flag| (name, value, flag),
        tape(vec![true, false]),
    );
    assert_eq!(combined.to_array(), vec![("w", 9, true), ("w", 9, false)]);
}

//! Integration tests for `StatelessIterator`.
//!
//! Exercises the public surface the way a caller would: constructors,
//! transformations, consumers, and the conversions into std iterators.

use std::cell::Cell;
use std::rc::Rc;

use fpseq::iterator::StatelessIterator;
use fpseq::pair::Pair;
use fpseq::typeclass::{Foldable, Sum};
use rstest::rstest;

fn naturals() -> StatelessIterator<u64> {
    StatelessIterator::count(1)
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_empty_has_no_first_value() {
    assert_eq!(StatelessIterator::<i32>::empty().first(), None);
    assert!(StatelessIterator::<i32>::empty().to_array().is_empty());
}

#[rstest]
fn test_of_yields_exactly_one_value() {
    assert_eq!(StatelessIterator::of("only").to_array(), vec!["only"]);
}

#[rstest]
#[case(vec![], vec![])]
#[case(vec![7], vec![7])]
#[case(vec![3, 1, 2], vec![3, 1, 2])]
fn test_from_array_preserves_order(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(StatelessIterator::from_array(input).to_array(), expected);
}

#[rstest]
fn test_make_by_feeds_the_index() {
    let squares = StatelessIterator::make_by(|index| index * index);
    assert_eq!(squares.take(5).to_array(), vec![0, 1, 4, 9, 16]);
}

#[rstest]
#[case(0, vec![])]
#[case(3, vec!['z', 'z', 'z'])]
fn test_repeat_yields_count_copies(#[case] count: usize, #[case] expected: Vec<char>) {
    assert_eq!(StatelessIterator::repeat(count, 'z').to_array(), expected);
}

#[rstest]
fn test_count_starts_at_the_given_value() {
    assert_eq!(StatelessIterator::count(-2_i64).take(4).to_array(), vec![-2, -1, 0, 1]);
}

#[rstest]
fn test_from_lazy_runs_the_thunk_on_every_force() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let lazy = StatelessIterator::from_lazy(move || {
        counter.set(counter.get() + 1);
        counter.get()
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(lazy.first(), Some(1));
    assert_eq!(lazy.first(), Some(2));
    assert_eq!(lazy.to_array(), vec![3]);
}

#[rstest]
fn test_from_io_is_a_single_element_sequence() {
    let reading = StatelessIterator::from_io(|| String::from("sensor"));
    assert_eq!(reading.to_array(), vec!["sensor".to_string()]);
}

#[rstest]
fn test_collect_and_from_conversions_agree() {
    let collected: StatelessIterator<i32> = (1..=3).collect();
    let from_array = StatelessIterator::from([1, 2, 3]);
    let from_vec = StatelessIterator::from(vec![1, 2, 3]);

    assert_eq!(collected.to_array(), from_array.clone().to_array());
    assert_eq!(from_array.to_array(), from_vec.to_array());
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn test_map_and_filter_on_an_infinite_source() {
    let even_squares = naturals().map(|value| value * value).filter(|value| value % 2 == 0);
    assert_eq!(even_squares.take(3).to_array(), vec![4, 16, 36]);
}

#[rstest]
fn test_map_with_index_pairs_positions() {
    let labelled = StatelessIterator::from_array(vec!["a", "b"])
        .map_with_index(|index, letter| format!("{index}:{letter}"));
    assert_eq!(labelled.to_array(), vec!["0:a", "1:b"]);
}

#[rstest]
fn test_chain_skips_empty_expansions() {
    let expanded = StatelessIterator::from_array(vec![0_usize, 2, 0, 1])
        .chain(|copies| StatelessIterator::repeat(copies, copies));
    assert_eq!(expanded.to_array(), vec![2, 2, 1]);
}

#[rstest]
fn test_chain_first_keeps_the_source_values() {
    let kept = StatelessIterator::from_array(vec![1, 2, 3])
        .chain_first(|value| StatelessIterator::repeat(usize::try_from(value % 2).unwrap(), ()));
    assert_eq!(kept.to_array(), vec![1, 3]);
}

#[rstest]
fn test_flatten_concatenates_inner_sequences() {
    let nested = StatelessIterator::from_array(vec![
        StatelessIterator::from_array(vec![1, 2]),
        StatelessIterator::empty(),
        StatelessIterator::of(3),
    ]);
    assert_eq!(nested.flatten().to_array(), vec![1, 2, 3]);
}

#[rstest]
fn test_concat_appends_lazily() {
    let joined =
        StatelessIterator::from_array(vec![1, 2]).concat(naturals().map(|value| value * 100));
    assert_eq!(joined.take(4).to_array(), vec![1, 2, 100, 200]);
}

#[rstest]
fn test_ap_applies_every_function_to_every_value() {
    let add_one: fn(i32) -> i32 = |value| value + 1;
    let negate: fn(i32) -> i32 = |value| -value;
    let applied = StatelessIterator::from_array(vec![add_one, negate])
        .ap(StatelessIterator::from_array(vec![1, 2]));
    assert_eq!(applied.to_array(), vec![2, 3, -1, -2]);
}

#[rstest]
fn test_filter_map_parses_and_drops() {
    let parsed = StatelessIterator::from_array(vec!["1", "x", "3"])
        .filter_map(|text| text.parse::<i32>().ok());
    assert_eq!(parsed.to_array(), vec![1, 3]);
}

#[rstest]
fn test_take_zero_does_not_force_the_source() {
    let forced = Rc::new(Cell::new(false));
    let flag = Rc::clone(&forced);
    let source = StatelessIterator::from_lazy(move || {
        flag.set(true);
        1
    });

    assert!(source.take(0).to_array().is_empty());
    assert!(!forced.get());
}

#[rstest]
fn test_drop_while_only_drops_the_prefix() {
    let rest = StatelessIterator::from_array(vec![1, 2, 5, 1, 2]).drop_while(|value| *value < 3);
    assert_eq!(rest.to_array(), vec![5, 1, 2]);
}

#[rstest]
fn test_cycle_of_empty_is_empty() {
    assert!(StatelessIterator::<i32>::empty().cycle().to_array().is_empty());
}

#[rstest]
fn test_cycle_repeats_the_source() {
    let cycled = StatelessIterator::from_array(vec!['a', 'b']).cycle();
    assert_eq!(cycled.take(5).to_array(), vec!['a', 'b', 'a', 'b', 'a']);
}

#[rstest]
fn test_uniq_by_key_keeps_first_of_each_key() {
    let words =
        StatelessIterator::from_array(vec!["apple", "avocado", "banana", "blueberry", "cherry"]);
    let by_initial = words.uniq(|word| word.chars().next());
    assert_eq!(by_initial.to_array(), vec!["apple", "banana", "cherry"]);
}

#[rstest]
fn test_strict_uniq_on_an_infinite_source() {
    let residues = naturals().map(|value| value % 4).strict_uniq();
    assert_eq!(residues.take(4).to_array(), vec![1, 2, 3, 0]);
}

#[rstest]
fn test_zip_pairs_first_as_head() {
    let zipped = StatelessIterator::from_array(vec!['a', 'b', 'c']).zip(naturals());
    assert_eq!(
        zipped.to_array(),
        vec![Pair::new('a', 1), Pair::new('b', 2), Pair::new('c', 3)]
    );
}

#[rstest]
fn test_zip_with_combines_position_by_position() {
    let sums = StatelessIterator::from_array(vec![1, 2, 3])
        .zip_with(StatelessIterator::from_array(vec![10, 20]), |left, right| left + right);
    assert_eq!(sums.to_array(), vec![11, 22]);
}

#[rstest]
fn test_scan_emits_running_totals_without_the_initial_value() {
    let totals =
        StatelessIterator::from_array(vec![1, 2, 3, 4]).scan(|total, value| total + value, 10);
    assert_eq!(totals.to_array(), vec![11, 13, 16, 20]);
}

#[rstest]
fn test_compress_stops_at_the_shorter_side() {
    let selected =
        naturals().compress(StatelessIterator::from_array(vec![true, false, true, true, false]));
    assert_eq!(selected.to_array(), vec![1, 3, 4]);
}

// =============================================================================
// Consumption
// =============================================================================

#[rstest]
fn test_reduce_folds_from_the_left() {
    let digits =
        StatelessIterator::from_array(vec![1, 2, 3]).reduce(|acc, digit| acc * 10 + digit, 0);
    assert_eq!(digits, 123);
}

#[rstest]
fn test_first_forces_a_single_step() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let traced = naturals().map(move |value| {
        counter.set(counter.get() + 1);
        value
    });

    assert_eq!(traced.first(), Some(1));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_last_of_finite_sequence() {
    assert_eq!(StatelessIterator::from_array(vec![4, 5, 6]).last(), Some(6));
    assert_eq!(StatelessIterator::<i32>::empty().last(), None);
}

#[rstest]
fn test_any_stops_at_the_first_match() {
    assert!(naturals().any(|value| *value > 1_000));
    assert!(!StatelessIterator::<u64>::empty().any(|_| true));
}

#[rstest]
fn test_fold_uses_the_monoid() {
    let words = StatelessIterator::from_array(vec!["fp".to_string(), "seq".to_string()]);
    assert_eq!(words.fold(), "fpseq");
    assert_eq!(StatelessIterator::<String>::empty().fold(), "");
}

#[rstest]
fn test_fold_map_with_sum() {
    let total = StatelessIterator::from_array(vec![1, 2, 3, 4]).fold_map(Sum);
    assert_eq!(total, Sum(10));
}

#[rstest]
fn test_foldable_find_stops_early_on_infinite_source() {
    assert_eq!(naturals().find(|value| value % 7 == 0), Some(7));
}

// =============================================================================
// Sharing and std interop
// =============================================================================

#[rstest]
fn test_clones_replay_from_the_same_point() {
    let source = naturals().take(3);
    let first_pass = source.clone().to_array();
    let second_pass = source.to_array();
    assert_eq!(first_pass, second_pass);
}

#[rstest]
fn test_into_iterator_drives_std_adaptors() {
    let collected: Vec<u64> = naturals().take(4).into_iter().step_by(2).collect();
    assert_eq!(collected, vec![1, 3]);

    let mut total = 0;
    for value in naturals().take(3) {
        total += value;
    }
    assert_eq!(total, 6);
}

#[rstest]
fn test_to_seq2_yields_tuples() {
    let pairs = StatelessIterator::from_array(vec!["x", "y"]).zip(naturals());
    let tuples: Vec<(&str, u64)> = pairs.to_seq2().collect();
    assert_eq!(tuples, vec![("x", 1), ("y", 2)]);
}

#[rstest]
fn test_debug_does_not_force_the_sequence() {
    let rendered = format!("{:?}", naturals());
    assert!(rendered.starts_with("StatelessIterator"));
}

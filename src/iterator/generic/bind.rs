//! Do-notation over lazy sequences.
//!
//! A computation threads a state value `S` through a series of steps. Each
//! step produces a new value `T` and a `setter` folds it into the state:
//! `setter(state, value) -> next_state`. `bind` and `ap_s` fan out over
//! every value of a sequence, like nested `for` loops; `let_` and `let_to`
//! compute exactly one value per state.
//!
//! ```rust
//! use fpseq::iterator::StatelessIterator;
//! use fpseq::iterator::generic;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Point { x: i32, y: i32 }
//!
//! let origin: StatelessIterator<Point> = generic::do_(Point { x: 0, y: 0 });
//! let columns: StatelessIterator<Point> = generic::bind(
//!     origin,
//!     |point, x| Point { x, ..point },
//!     |_| StatelessIterator::from_array(vec![1, 2]),
//! );
//! let grid: StatelessIterator<Point> = generic::bind(
//!     columns,
//!     |point, y| Point { y, ..point },
//!     |point| StatelessIterator::from_array(vec![point.x * 10]),
//! );
//! assert_eq!(grid.to_array(), vec![Point { x: 1, y: 10 }, Point { x: 2, y: 20 }]);
//! ```

use std::rc::Rc;

use super::Unfold;
use super::primitives::{map2, monad_chain, monad_map, of};

/// Starts a computation from `initial`.
pub fn do_<GS: Unfold>(initial: GS::Item) -> GS {
    of(initial)
}

/// Runs `function` on every state and stores each produced value with
/// `setter`, expanding one state into as many as `function` yields.
pub fn bind<GS1, GS2, GT, S, F>(sequence: GS1, setter: S, function: F) -> GS2
where
    GS1: Unfold,
    GS2: Unfold,
    GT: Unfold,
    S: Fn(GS1::Item, GT::Item) -> GS2::Item + 'static,
    F: Fn(&GS1::Item) -> GT + 'static,
{
    let setter = Rc::new(setter);
    monad_chain(sequence, move |state: GS1::Item| {
        let setter = Rc::clone(&setter);
        let values = function(&state);
        monad_map(values, move |value| setter(state.clone(), value))
    })
}

/// Stores a value computed purely from the current state.
pub fn let_<GS1, GS2, T, S, F>(sequence: GS1, setter: S, function: F) -> GS2
where
    GS1: Unfold,
    GS2: Unfold,
    S: Fn(GS1::Item, T) -> GS2::Item + 'static,
    F: Fn(&GS1::Item) -> T + 'static,
{
    monad_map(sequence, move |state| {
        let value = function(&state);
        setter(state, value)
    })
}

/// Stores the constant `value` in every state.
pub fn let_to<GS1, GS2, T, S>(sequence: GS1, setter: S, value: T) -> GS2
where
    GS1: Unfold,
    GS2: Unfold,
    T: Clone + 'static,
    S: Fn(GS1::Item, T) -> GS2::Item + 'static,
{
    monad_map(sequence, move |state| setter(state, value.clone()))
}

/// Starts a computation from the values of an existing sequence.
pub fn bind_to<GT, GS, S>(sequence: GT, setter: S) -> GS
where
    GT: Unfold,
    GS: Unfold,
    S: Fn(GT::Item) -> GS::Item + 'static,
{
    monad_map(sequence, setter)
}

/// Like [`bind`], but the values do not depend on the state: every state
/// is combined with every value of `values`.
pub fn ap_s<GS1, GS2, GT, S>(sequence: GS1, setter: S, values: GT) -> GS2
where
    GS1: Unfold,
    GS2: Unfold,
    GT: Unfold,
    S: Fn(GS1::Item, GT::Item) -> GS2::Item + 'static,
{
    map2(sequence, values, setter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::StatelessIterator;
    use crate::iterator::generic::{empty, from_array, to_array};
    use rstest::rstest;

    #[derive(Clone, Debug, PartialEq, Default)]
    struct Order {
        item: &'static str,
        quantity: u32,
        label: String,
    }

    type Orders = StatelessIterator<Order>;

    fn items(values: &[&'static str]) -> StatelessIterator<&'static str> {
        from_array(values.to_vec())
    }

    #[rstest]
    fn do_starts_with_one_state() {
        assert_eq!(to_array::<Orders>(do_(Order::default())), vec![Order::default()]);
    }

    #[rstest]
    fn bind_fans_out_per_state() {
        let with_items: Orders = bind_to(items(&["tea", "cake"]), |item| Order {
            item,
            ..Order::default()
        });
        let with_quantities: Orders = bind(
            with_items,
            |order, quantity| Order { quantity, ..order },
            |order| {
                let limit = if order.item == "tea" { 2 } else { 1 };
                from_array::<StatelessIterator<u32>>((1..=limit).collect())
            },
        );
        let quantities: Vec<(&str, u32)> = to_array(with_quantities)
            .into_iter()
            .map(|order| (order.item, order.quantity))
            .collect();
        assert_eq!(quantities, vec![("tea", 1), ("tea", 2), ("cake", 1)]);
    }

    #[rstest]
    fn bind_with_an_empty_branch_drops_the_state() {
        let with_items: Orders = bind_to(items(&["tea"]), |item| Order {
            item,
            ..Order::default()
        });
        let dropped: Orders = bind(
            with_items,
            |order, quantity| Order { quantity, ..order },
            |_| empty::<StatelessIterator<u32>>(),
        );
        assert!(to_array(dropped).is_empty());
    }

    #[rstest]
    fn let_and_let_to_compute_one_value_per_state() {
        let start: Orders = do_(Order { item: "scone", quantity: 3, label: String::new() });
        let labelled: Orders = let_(start, |order, label| Order { label, ..order }, |order| {
            format!("{}x{}", order.quantity, order.item)
        });
        let doubled: Orders = let_to(labelled, |order, quantity| Order { quantity, ..order }, 6);
        let result = to_array(doubled);
        assert_eq!(result[0].label, "3xscone");
        assert_eq!(result[0].quantity, 6);
    }

    #[rstest]
    fn ap_s_is_the_cartesian_product() {
        let start: Orders = bind_to(items(&["tea", "cake"]), |item| Order {
            item,
            ..Order::default()
        });
        let quantities: StatelessIterator<u32> = from_array(vec![1, 5]);
        let combined: Orders =
            ap_s(start, |order, quantity| Order { quantity, ..order }, quantities);
        let pairs: Vec<(&str, u32)> = to_array(combined)
            .into_iter()
            .map(|order| (order.item, order.quantity))
            .collect();
        assert_eq!(pairs, vec![("tea", 1), ("tea", 5), ("cake", 1), ("cake", 5)]);
    }
}

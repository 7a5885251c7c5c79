//! Right-to-left function composition.

/// Composes functions right to left: `compose!(f, g, h)(x) == f(g(h(x)))`.
///
/// Useful for naming a reusable stage of a pipeline:
///
/// ```rust
/// use fpseq::compose;
/// use fpseq::iterator::StatelessIterator;
///
/// let evens_squared = compose!(
///     |sequence: StatelessIterator<i32>| sequence.map(|value| value * value),
///     |sequence: StatelessIterator<i32>| sequence.filter(|value| value % 2 == 0)
/// );
/// let result = evens_squared(StatelessIterator::from_array(vec![1, 2, 3, 4]));
/// assert_eq!(result.to_array(), vec![4, 16]);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

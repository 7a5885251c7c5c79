//! Left-to-right application.

/// Passes a value through a list of functions, first to last.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`. Each function may be any callable
/// expression, including the closures returned by the curried operators in
/// `iterator::operators`.
///
/// # Examples
///
/// ```rust
/// use fpseq::iterator::StatelessIterator;
/// use fpseq::iterator::operators::{filter, first};
/// use fpseq::pipe;
///
/// let first_multiple = pipe!(
///     StatelessIterator::count(50),
///     filter(|value: &i32| value % 7 == 0),
///     first
/// );
/// assert_eq!(first_multiple, Some(56));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

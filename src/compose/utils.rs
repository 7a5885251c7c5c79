//! Elementary combinators.

/// Returns its argument.
///
/// ```rust
/// use fpseq::compose::identity;
/// use fpseq::iterator::StatelessIterator;
///
/// let same = StatelessIterator::from_array(vec![1, 2]).map(identity);
/// assert_eq!(same.to_array(), vec![1, 2]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its argument and returns `value`.
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// ```rust
/// use fpseq::compose::flip;
/// use fpseq::iterator::StatelessIterator;
///
/// let prepend = flip(|mut tail: Vec<char>, head: char| {
///     tail.insert(0, head);
///     tail
/// });
/// let reversed = StatelessIterator::from_array(vec!['a', 'b', 'c'])
///     .reduce(|acc, value| prepend(value, acc), Vec::new());
/// assert_eq!(reversed, vec!['c', 'b', 'a']);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

//! Comprehension syntax over `StatelessIterator`.
//!
//! `for_!` is do-notation for the sequence monad. Each `pattern <= source;`
//! line binds every value of `source` in turn (a nested loop), `if cond;`
//! keeps only the combinations for which `cond` holds, `let` binds a plain
//! value, and the final `yield` produces one element per surviving
//! combination. The result is itself a lazy `StatelessIterator`; nothing is
//! evaluated until it is consumed.
//!
//! Sources are converted with `StatelessIterator::from`, so a `Vec`, an
//! array or another `StatelessIterator` (possibly infinite) can be bound.
//!
//! Every line after a bind runs inside a `move` closure that is called once
//! per bound value, so a source or a yielded expression that uses an outer
//! non-`Copy` variable has to clone it.
//!
//! # Examples
//!
//! ```rust
//! use fpseq::for_;
//! use fpseq::iterator::StatelessIterator;
//!
//! let triples = for_! {
//!     c <= StatelessIterator::count(1_u32);
//!     b <= StatelessIterator::count(1).take(c as usize);
//!     a <= StatelessIterator::count(1).take(b as usize);
//!     if a * a + b * b == c * c;
//!     yield (a, b, c)
//! };
//!
//! assert_eq!(triples.take(2).to_array(), vec![(3, 4, 5), (6, 8, 10)]);
//! ```

/// Builds a `StatelessIterator` from a comprehension.
///
/// See the [module documentation](self) for the syntax.
#[macro_export]
macro_rules! for_ {
    (yield $result:expr) => {
        $crate::iterator::StatelessIterator::of($result)
    };

    // Guard: `if condition;`
    (if $condition:expr ; $($rest:tt)+) => {
        if $condition {
            $crate::for_!($($rest)+)
        } else {
            $crate::iterator::StatelessIterator::empty()
        }
    };

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::for_!($($rest)+)
    }};

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expr;
        $crate::for_!($($rest)+)
    }};

    (_ <= $source:expr ; $($rest:tt)+) => {
        $crate::iterator::StatelessIterator::chain(
            $crate::iterator::StatelessIterator::from($source),
            move |_| $crate::for_!($($rest)+),
        )
    };

    ($pattern:ident <= $source:expr ; $($rest:tt)+) => {
        $crate::iterator::StatelessIterator::chain(
            $crate::iterator::StatelessIterator::from($source),
            move |$pattern| $crate::for_!($($rest)+),
        )
    };

    (($($pattern:tt)*) <= $source:expr ; $($rest:tt)+) => {
        $crate::iterator::StatelessIterator::chain(
            $crate::iterator::StatelessIterator::from($source),
            move |($($pattern)*)| $crate::for_!($($rest)+),
        )
    };
}

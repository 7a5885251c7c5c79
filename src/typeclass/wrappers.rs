//! Newtype wrappers selecting a particular monoid for a value type.
//!
//! Integers combine by addition and by multiplication, ordered types by
//! maximum and by minimum. Each wrapper picks one of those, which is what
//! `fold_map` on a `StatelessIterator` needs to know:
//!
//! ```rust
//! use fpseq::iterator::StatelessIterator;
//! use fpseq::typeclass::{Max, Sum};
//!
//! let values = StatelessIterator::from_array(vec![3, 9, 4]);
//! assert_eq!(values.clone().fold_map(Sum), Sum(16));
//! assert_eq!(values.fold_map(Max), Max(9));
//! ```
//!
//! [`Bounded`] supplies the identity elements of `Max` (the type minimum) and
//! `Min` (the type maximum).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! define_wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps `value`.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Returns the wrapped value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Borrows the wrapped value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self(value)
            }
        }
    };
}

define_wrapper!(
    /// Combines by addition; the identity is zero.
    Sum
);

define_wrapper!(
    /// Combines by multiplication; the identity is one.
    Product
);

define_wrapper!(
    /// Keeps the larger value; the identity is [`Bounded::MIN_VALUE`].
    Max
);

define_wrapper!(
    /// Keeps the smaller value; the identity is [`Bounded::MAX_VALUE`].
    Min
);

/// Types with a smallest and a largest value.
///
/// # Examples
///
/// ```rust
/// use fpseq::typeclass::Bounded;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
/// struct Percent(u8);
///
/// impl Bounded for Percent {
///     const MIN_VALUE: Self = Percent(0);
///     const MAX_VALUE: Self = Percent(100);
/// }
///
/// assert!(Percent::MIN_VALUE < Percent::MAX_VALUE);
/// ```
pub trait Bounded {
    /// The smallest value.
    const MIN_VALUE: Self;

    /// The largest value.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = <$numeric>::MIN;
                const MAX_VALUE: Self = <$numeric>::MAX;
            }
        )*
    };
}

impl_bounded!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

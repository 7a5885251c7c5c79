//! Monoid type class - a semigroup with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! `StatelessIterator::fold` and `fold_map` start from [`Monoid::empty`] and
//! combine every element into it.

use std::ops::Add;

use super::Identity;
use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use fpseq::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
/// assert_eq!(Sum::<i32>::empty().combine(Sum(5)), Sum(5));
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Combines every value of `values`, starting from [`Monoid::empty`].
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        values.into_iter().fold(Self::empty(), Self::combine)
    }

    /// Whether `self` equals the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($one:literal => $($numeric:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_product_monoid!(1.0 => f32, f64);

impl<A: PartialOrd + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: PartialOrd + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_is_neutral_on_both_sides() {
        let value = String::from("pair");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn combine_all_of_nothing_is_empty() {
        assert_eq!(Product::<i64>::combine_all(Vec::new()), Product(1));
        assert_eq!(Max::<u8>::combine_all(Vec::new()), Max(0));
        assert_eq!(Min::<u8>::combine_all(Vec::new()), Min(255));
    }

    #[rstest]
    fn combine_all_folds_left_to_right() {
        let words = vec![String::from("a"), String::from("b"), String::from("c")];
        assert_eq!(String::combine_all(words), "abc");
    }

    #[rstest]
    fn float_product_starts_at_one() {
        assert!((Product::<f64>::empty().0 - 1.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn is_empty_value_detects_identity() {
        assert!(Sum::<i32>::empty().is_empty_value());
        assert!(!Sum(2).is_empty_value());
        assert!(<(Sum<i32>, String)>::empty().is_empty_value());
    }
}

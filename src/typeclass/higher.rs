//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust has no way to abstract over `Option<_>` or `StatelessIterator<_>` as
//! unapplied type constructors. [`TypeConstructor`] recovers that ability with
//! a GAT: a value of `F<A>` knows how to name `F<B>` for any `B`, which is all
//! `Functor`, `Applicative` and `Monad` need to describe their signatures.
//!
//! # Example
//!
//! ```rust
//! use fpseq::typeclass::TypeConstructor;
//!
//! fn rebuild<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = rebuild(Some(42));
//! assert_eq!(none, None);
//! ```

/// A type constructor applied to some type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` must be `F` itself.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// The bound keeps the result a type constructor, so rebinding can be
    /// chained (`F<A> -> F<B> -> F<C>`).
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_inner<T: TypeConstructor<Inner = i32>>() {}

    #[rstest]
    fn option_inner_type_is_the_payload() {
        assert_inner::<Option<i32>>();
    }

    #[rstest]
    fn result_inner_type_is_the_success_type() {
        assert_inner::<Result<i32, String>>();
    }

    #[rstest]
    fn vec_inner_type_is_the_element() {
        assert_inner::<Vec<i32>>();
    }

    #[rstest]
    fn result_with_type_keeps_the_error_type() {
        fn assert_rebinding<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_rebinding::<i32, String, bool>();
        assert_rebinding::<Vec<u8>, (), char>();
    }

    #[rstest]
    fn with_type_can_be_chained() {
        fn twice<T>() -> <T::WithType<String> as TypeConstructor>::WithType<bool>
        where
            T: TypeConstructor,
            <T::WithType<String> as TypeConstructor>::WithType<bool>: Default,
        {
            Default::default()
        }

        let rebuilt: Vec<bool> = twice::<Vec<i32>>();
        assert!(rebuilt.is_empty());
    }
}

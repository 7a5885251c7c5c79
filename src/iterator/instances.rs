//! Type-class instances for [`StatelessIterator`].
//!
//! The instances follow list semantics: `pure` is a one-element sequence,
//! `map2`/`apply` visit every combination (left outermost), `flat_map`
//! concatenates, and the monoid is concatenation with the empty sequence.
//!
//! Only `Foldable` and `Traversable` force the sequence, and only they can
//! diverge on infinite input; `find`, `exists`, `for_all` and `is_empty`
//! stop as soon as the answer is known.

use super::generic::{self, Unfold};
use super::stateless::StatelessIterator;
use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Monoid, Semigroup, Traversable, TypeConstructor,
};

impl<U> TypeConstructor for StatelessIterator<U> {
    type Inner = U;
    type WithType<B> = StatelessIterator<B>;
}

impl<U: Clone + 'static> Functor for StatelessIterator<U> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> StatelessIterator<B>
    where
        F: Fn(U) -> B + 'static,
        B: Clone + 'static,
    {
        generic::monad_map(self, function)
    }
}

impl<U: Clone + 'static> Applicative for StatelessIterator<U> {
    #[inline]
    fn pure<B>(value: B) -> StatelessIterator<B>
    where
        B: Clone + 'static,
    {
        generic::of(value)
    }

    fn map2<B, C, F>(self, other: StatelessIterator<B>, function: F) -> StatelessIterator<C>
    where
        F: Fn(U, B) -> C + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
    {
        generic::map2(self, other, function)
    }

    fn map3<B, C, D, F>(
        self,
        second: StatelessIterator<B>,
        third: StatelessIterator<C>,
        function: F,
    ) -> StatelessIterator<D>
    where
        F: Fn(U, B, C) -> D + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
    {
        let pairs: StatelessIterator<(U, B)> =
            generic::map2(self, second, |first, middle| (first, middle));
        generic::map2(pairs, third, move |(first, middle), last| function(first, middle, last))
    }

    fn apply<B, Output>(self, other: StatelessIterator<B>) -> StatelessIterator<Output>
    where
        U: Fn(B) -> Output,
        B: Clone + 'static,
        Output: Clone + 'static,
    {
        generic::monad_ap(self, other)
    }
}

impl<U: Clone + 'static> Monad for StatelessIterator<U> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> StatelessIterator<B>
    where
        F: Fn(U) -> StatelessIterator<B> + 'static,
        B: Clone + 'static,
    {
        generic::monad_chain(self, function)
    }
}

impl<U: Clone + 'static> Foldable for StatelessIterator<U> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, U) -> B,
    {
        generic::reduce(self, function, init)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(U, B) -> B,
    {
        generic::to_array(self)
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn is_empty(&self) -> bool {
        self.unfold().is_none()
    }

    fn find<P>(&self, predicate: P) -> Option<U>
    where
        P: FnMut(&U) -> bool,
    {
        generic::find(self, predicate)
    }
}

impl<U: Clone + 'static> Traversable for StatelessIterator<U> {
    fn traverse_option<B, F>(self, function: F) -> Option<StatelessIterator<B>>
    where
        F: FnMut(U) -> Option<B>,
        B: Clone + 'static,
    {
        self.to_seq()
            .map(function)
            .collect::<Option<Vec<B>>>()
            .map(StatelessIterator::from_array)
    }

    fn traverse_result<B, E, F>(self, function: F) -> Result<StatelessIterator<B>, E>
    where
        F: FnMut(U) -> Result<B, E>,
        B: Clone + 'static,
    {
        self.to_seq()
            .map(function)
            .collect::<Result<Vec<B>, E>>()
            .map(StatelessIterator::from_array)
    }
}

impl<U: Clone + 'static> Semigroup for StatelessIterator<U> {
    fn combine(self, other: Self) -> Self {
        generic::concat(self, other)
    }
}

impl<U: Clone + 'static> Monoid for StatelessIterator<U> {
    fn empty() -> Self {
        Self::empty()
    }

    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        StatelessIterator::from_array(values.into_iter().collect()).flatten()
    }
}

//! Internal macros.

/// Emits a `trace`-level event for one operation call when the `tracing`
/// feature is enabled; expands to nothing otherwise.
macro_rules! trace_operation {
    ($operation:literal, $shape:expr, $len:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(operation = $operation, shape = $shape, len = $len);
    };
}

/// Implements an element-shaped op trait (`SequenceOps` or `SetOps`) by
/// delegating every method to `crate::algorithms`.
///
/// The container's `Traverse::Element<'a>` must be `&'a T`.
macro_rules! impl_element_ops {
    (impl<$($generic:ident),*> $ops:ident<$element:ident> for $container:ty $(where $($bound:tt)+)?) => {
        impl<$($generic),*> $ops<$element> for $container $(where $($bound)+)? {
            #[inline]
            fn filter<P>(&self, predicate: P) -> Self
            where
                $element: Clone,
                P: FnMut(&$element) -> bool,
            {
                $crate::algorithms::filter(self, predicate)
            }

            #[inline]
            fn try_filter<P, E>(&self, predicate: P) -> Result<Self, E>
            where
                $element: Clone,
                P: FnMut(&$element) -> Result<bool, E>,
            {
                $crate::algorithms::try_filter(self, predicate)
            }

            #[inline]
            fn first<P>(&self, predicate: P) -> Option<&$element>
            where
                P: FnMut(&$element) -> bool,
            {
                $crate::algorithms::first(self, predicate)
            }

            #[inline]
            fn try_first<P, E>(&self, predicate: P) -> Result<Option<&$element>, E>
            where
                P: FnMut(&$element) -> Result<bool, E>,
            {
                $crate::algorithms::try_first(self, predicate)
            }

            #[inline]
            fn map<B, F>(&self, mapper: F) -> Vec<$crate::Slot<B>>
            where
                F: FnMut(&$element) -> Option<B>,
            {
                $crate::algorithms::map(self, mapper)
            }

            #[inline]
            fn try_map<B, F, E>(&self, mapper: F) -> Result<Vec<$crate::Slot<B>>, E>
            where
                F: FnMut(&$element) -> Result<Option<B>, E>,
            {
                $crate::algorithms::try_map(self, mapper)
            }

            #[inline]
            fn flat_map<B, C, F>(&self, mapper: F) -> Vec<B>
            where
                C: $crate::Splice<B>,
                F: FnMut(&$element) -> $crate::Flatten<B, C>,
            {
                $crate::algorithms::flat_map(self, mapper)
            }

            #[inline]
            fn try_flat_map<B, C, F, E>(&self, mapper: F) -> Result<Vec<B>, E>
            where
                C: $crate::Splice<B>,
                F: FnMut(&$element) -> Result<$crate::Flatten<B, C>, E>,
            {
                $crate::algorithms::try_flat_map(self, mapper)
            }

            #[inline]
            fn for_each<F>(&self, procedure: F)
            where
                F: FnMut(&$element),
            {
                $crate::algorithms::for_each(self, procedure);
            }

            #[inline]
            fn try_for_each<F, E>(&self, procedure: F) -> Result<(), E>
            where
                F: FnMut(&$element) -> Result<(), E>,
            {
                $crate::algorithms::try_for_each(self, procedure)
            }

            #[inline]
            fn reduce<A, F>(&self, initial: A, combiner: F) -> A
            where
                F: FnMut(A, &$element) -> A,
            {
                $crate::algorithms::reduce(self, initial, combiner)
            }

            #[inline]
            fn try_reduce<A, F, E>(&self, initial: A, combiner: F) -> Result<A, E>
            where
                F: FnMut(A, &$element) -> Result<A, E>,
            {
                $crate::algorithms::try_reduce(self, initial, combiner)
            }

            #[inline]
            fn zip<I>(&self, other: I) -> Vec<(&$element, I::Item)>
            where
                I: IntoIterator,
            {
                $crate::algorithms::zip(self, other)
            }
        }
    };
}

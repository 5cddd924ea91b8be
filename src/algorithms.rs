//! The operations, written once over [`Traverse`] / [`Rebuild`].
//!
//! Each shape trait adapts only the callback arity and delegates here.
//! Every function takes the receiver by shared reference; results are
//! freshly allocated. `try_*` functions stop at the first `Err` and hand it
//! back untouched.

use crate::container::{CloneElements, Rebuild, RebuildValues, Traverse};
use crate::flatten::{Flatten, Splice};
use crate::slot::Slot;

pub(crate) fn filter<'a, C, P>(container: &'a C, mut predicate: P) -> C
where
    C: CloneElements,
    P: FnMut(C::Element<'a>) -> bool,
{
    trace_operation!("filter", C::SHAPE, container.element_count());
    let mut filtered = container.empty_like();
    for element in container.elements() {
        if predicate(element) {
            filtered.insert_element(C::clone_element(element));
        }
    }
    filtered
}

pub(crate) fn try_filter<'a, C, P, E>(container: &'a C, mut predicate: P) -> Result<C, E>
where
    C: CloneElements,
    P: FnMut(C::Element<'a>) -> Result<bool, E>,
{
    trace_operation!("try_filter", C::SHAPE, container.element_count());
    let mut filtered = container.empty_like();
    for element in container.elements() {
        if predicate(element)? {
            filtered.insert_element(C::clone_element(element));
        }
    }
    Ok(filtered)
}

pub(crate) fn first<'a, C, P>(container: &'a C, mut predicate: P) -> Option<C::Element<'a>>
where
    C: Traverse,
    P: FnMut(C::Element<'a>) -> bool,
{
    trace_operation!("first", C::SHAPE, container.element_count());
    container.elements().find(|element| predicate(*element))
}

pub(crate) fn try_first<'a, C, P, E>(
    container: &'a C,
    mut predicate: P,
) -> Result<Option<C::Element<'a>>, E>
where
    C: Traverse,
    P: FnMut(C::Element<'a>) -> Result<bool, E>,
{
    trace_operation!("try_first", C::SHAPE, container.element_count());
    for element in container.elements() {
        if predicate(element)? {
            return Ok(Some(element));
        }
    }
    Ok(None)
}

pub(crate) fn map<'a, C, B, F>(container: &'a C, mut mapper: F) -> Vec<Slot<B>>
where
    C: Traverse,
    F: FnMut(C::Element<'a>) -> Option<B>,
{
    trace_operation!("map", C::SHAPE, container.element_count());
    let mut mapped = Vec::with_capacity(container.element_count());
    for element in container.elements() {
        mapped.push(Slot::from(mapper(element)));
    }
    mapped
}

pub(crate) fn try_map<'a, C, B, F, E>(container: &'a C, mut mapper: F) -> Result<Vec<Slot<B>>, E>
where
    C: Traverse,
    F: FnMut(C::Element<'a>) -> Result<Option<B>, E>,
{
    trace_operation!("try_map", C::SHAPE, container.element_count());
    let mut mapped = Vec::with_capacity(container.element_count());
    for element in container.elements() {
        mapped.push(Slot::from(mapper(element)?));
    }
    Ok(mapped)
}

pub(crate) fn map_values<'a, M, B, F>(mapping: &'a M, mut mapper: F) -> M::Rebuilt<Slot<B>>
where
    M: RebuildValues,
    M::Key: Clone,
    F: FnMut(&'a M::Value) -> Option<B>,
{
    trace_operation!("map_values", M::SHAPE, mapping.element_count());
    let mut mapped = mapping.empty_with_values();
    for element in mapping.elements() {
        let (key, value) = M::entry(element);
        mapped.insert_element((key.clone(), Slot::from(mapper(value))));
    }
    mapped
}

pub(crate) fn try_map_values<'a, M, B, F, E>(
    mapping: &'a M,
    mut mapper: F,
) -> Result<M::Rebuilt<Slot<B>>, E>
where
    M: RebuildValues,
    M::Key: Clone,
    F: FnMut(&'a M::Value) -> Result<Option<B>, E>,
{
    trace_operation!("try_map_values", M::SHAPE, mapping.element_count());
    let mut mapped = mapping.empty_with_values();
    for element in mapping.elements() {
        let (key, value) = M::entry(element);
        mapped.insert_element((key.clone(), Slot::from(mapper(value)?)));
    }
    Ok(mapped)
}

pub(crate) fn flat_map<'a, C, B, S, F>(container: &'a C, mut mapper: F) -> Vec<B>
where
    C: Traverse,
    S: Splice<B>,
    F: FnMut(C::Element<'a>) -> Flatten<B, S>,
{
    trace_operation!("flat_map", C::SHAPE, container.element_count());
    let mut flattened = Vec::new();
    for element in container.elements() {
        mapper(element).append_to(&mut flattened);
    }
    flattened
}

pub(crate) fn try_flat_map<'a, C, B, S, F, E>(container: &'a C, mut mapper: F) -> Result<Vec<B>, E>
where
    C: Traverse,
    S: Splice<B>,
    F: FnMut(C::Element<'a>) -> Result<Flatten<B, S>, E>,
{
    trace_operation!("try_flat_map", C::SHAPE, container.element_count());
    let mut flattened = Vec::new();
    for element in container.elements() {
        mapper(element)?.append_to(&mut flattened);
    }
    Ok(flattened)
}

pub(crate) fn for_each<'a, C, F>(container: &'a C, procedure: F)
where
    C: Traverse,
    F: FnMut(C::Element<'a>),
{
    trace_operation!("for_each", C::SHAPE, container.element_count());
    container.elements().for_each(procedure);
}

pub(crate) fn try_for_each<'a, C, F, E>(container: &'a C, procedure: F) -> Result<(), E>
where
    C: Traverse,
    F: FnMut(C::Element<'a>) -> Result<(), E>,
{
    trace_operation!("try_for_each", C::SHAPE, container.element_count());
    container.elements().try_for_each(procedure)
}

pub(crate) fn reduce<'a, C, A, F>(container: &'a C, initial: A, combiner: F) -> A
where
    C: Traverse,
    F: FnMut(A, C::Element<'a>) -> A,
{
    trace_operation!("reduce", C::SHAPE, container.element_count());
    container.elements().fold(initial, combiner)
}

pub(crate) fn try_reduce<'a, C, A, F, E>(container: &'a C, initial: A, combiner: F) -> Result<A, E>
where
    C: Traverse,
    F: FnMut(A, C::Element<'a>) -> Result<A, E>,
{
    trace_operation!("try_reduce", C::SHAPE, container.element_count());
    container.elements().try_fold(initial, combiner)
}

pub(crate) fn zip<'a, C, I>(container: &'a C, other: I) -> Vec<(C::Element<'a>, I::Item)>
where
    C: Traverse,
    I: IntoIterator,
{
    trace_operation!("zip", C::SHAPE, container.element_count());
    container.elements().zip(other).collect()
}

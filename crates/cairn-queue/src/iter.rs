//! Borrowed iteration over a queue's backing store.

use std::iter::FusedIterator;

/// A single-pass iterator over a queue's elements in raw backing-array
/// order.
///
/// Created by [`crate::PriorityQueue::iter`]. The bound of the
/// iteration is the queue's size at construction; because the iterator
/// holds a shared borrow of the queue, no mutation can occur while it
/// is alive, so the bound cannot go stale.
///
/// Deliberately not `Clone`: the sequence is single-pass and
/// non-restartable.
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Self {
            inner: slice.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

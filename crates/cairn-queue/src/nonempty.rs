//! A non-empty sequence wrapper.

/// A sequence guaranteed to hold at least one element.
///
/// Produced by [`crate::PriorityQueue::to_non_empty`]: the head is the
/// first slot of the backing store (the current maximum), the tail is
/// the remaining slots in raw backing-array order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonEmpty<T> {
    /// The first element. Always present.
    pub head: T,
    /// The remaining elements, possibly empty.
    pub tail: Vec<T>,
}

impl<T> NonEmpty<T> {
    /// Create a non-empty sequence from a head and tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Total number of elements, always at least 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`: the sequence is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all elements, head first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(ne: NonEmpty<T>) -> Self {
        let mut v = Vec::with_capacity(1 + ne.tail.len());
        v.push(ne.head);
        v.extend(ne.tail);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_counts_head() {
        let ne = NonEmpty::new(1, vec![2, 3]);
        assert_eq!(ne.len(), 3);
        let single = NonEmpty::new(9, Vec::new());
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn iter_is_head_first() {
        let ne = NonEmpty::new(10, vec![20, 30]);
        let items: Vec<i32> = ne.iter().copied().collect();
        assert_eq!(items, vec![10, 20, 30]);
    }

    #[test]
    fn into_vec_preserves_order() {
        let ne = NonEmpty::new('a', vec!['b', 'c']);
        let v: Vec<char> = ne.into();
        assert_eq!(v, vec!['a', 'b', 'c']);
    }
}

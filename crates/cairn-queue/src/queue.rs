//! The region-bound max-heap priority queue.
//!
//! [`PriorityQueue`] stores elements in an array-packed binary max-heap.
//! Slot `i`'s children live at `2i + 1` and `2i + 2`; the maximum is
//! always at slot 0. Every buffer the queue acquires is charged to the
//! [`Region`] it was created in, and credited back when the queue drops.

use std::fmt;
use std::mem;

use cairn_region::Region;

use crate::iter::Iter;
use crate::nonempty::NonEmpty;

/// Growth policy for the backing store.
///
/// `2n + 2` rather than plain doubling so a zero-capacity store can
/// still grow. From the default starting capacity of 8 the sequence is
/// 8, 18, 38, 78, …
fn grown_capacity(cap: usize) -> usize {
    cap * 2 + 2
}

/// A mutable priority queue backed by a binary max-heap, bound to a
/// [`Region`].
///
/// The queue holds `&'r Region` for its whole lifetime, so it and every
/// view derived from it (iterators, slices) are statically confined to
/// the region's scope. The backing buffer is owned exclusively by the
/// queue; its bytes are accounted to the region on acquisition and
/// growth and credited back on drop.
///
/// Elements need only `Ord`. An inconsistent `Ord` implementation may
/// leave elements in an unspecified order but never corrupts memory.
/// The queue performs no synchronization; it is single-threaded by
/// construction, like the region it is bound to.
///
/// # Example
///
/// ```
/// use cairn_region::Region;
/// use cairn_queue::PriorityQueue;
///
/// let region = Region::new();
/// let mut queue = PriorityQueue::new(&region);
/// queue.enqueue(5);
/// queue.enqueue(3);
/// queue.enqueue(8);
/// queue.enqueue(1);
///
/// assert_eq!(queue.peek(), Some(&8));
/// assert_eq!(queue.dequeue(), Some(8));
/// assert_eq!(queue.dequeue(), Some(5));
/// assert_eq!(queue.dequeue(), Some(3));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct PriorityQueue<'r, T: Ord> {
    /// The allocation scope this queue's storage is accounted against.
    region: &'r Region,
    /// Backing store. `storage.len()` is the logical size; there are no
    /// stale slots past the end — removed elements are dropped.
    storage: Vec<T>,
    /// Policy capacity. The real `Vec` capacity is at least this; the
    /// growth arithmetic and region accounting are defined over this
    /// number, not the allocator's rounding.
    cap: usize,
}

impl<'r, T: Ord> PriorityQueue<'r, T> {
    /// Create an empty queue bound to `region`.
    ///
    /// The starting capacity comes from the region's configuration
    /// (default 8) and is charged to the region immediately.
    ///
    /// # Panics
    ///
    /// Panics if the initial buffer exceeds the region's byte budget.
    pub fn new(region: &'r Region) -> Self {
        let cap = region.config().initial_capacity;
        region.charge(cap * mem::size_of::<T>());
        Self {
            region,
            storage: Vec::with_capacity(cap),
            cap,
        }
    }

    /// Number of elements in the queue.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Current policy capacity of the backing store.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The greatest element, without removing it.
    ///
    /// Returns `None` if the queue is empty. O(1), never mutates.
    pub fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Insert an element.
    ///
    /// Grows the backing store first if it is full, then appends and
    /// sifts the element up to its heap position. Amortized O(log n).
    ///
    /// # Panics
    ///
    /// Panics if growth exceeds the region's byte budget.
    pub fn enqueue(&mut self, value: T) {
        if self.storage.len() == self.cap {
            self.grow();
        }
        self.storage.push(value);
        self.sift_up(self.storage.len() - 1);
    }

    /// Remove and return the greatest element.
    ///
    /// Returns `None` if the queue is empty, with no mutation. The last
    /// slot replaces the root and is sifted down. O(log n).
    pub fn dequeue(&mut self) -> Option<T> {
        if self.storage.is_empty() {
            return None;
        }
        let root = self.storage.swap_remove(0);
        self.sift_down(0);
        Some(root)
    }

    /// Insert every element of `source`, in the source's own order.
    ///
    /// Equivalent to calling [`enqueue`](Self::enqueue) once per
    /// element.
    pub fn enqueue_all<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(source);
    }

    /// Iterate over the elements in raw backing-array order.
    ///
    /// The iterator is single-pass and non-restartable. It borrows the
    /// queue shared, so mutating the queue while it is alive is a
    /// compile error — the aliasing hazard of iterating a live heap is
    /// resolved statically rather than detected at run time.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.storage)
    }

    /// The elements as a slice, in raw backing-array order.
    ///
    /// Raw order is some valid heap layout: membership and count are
    /// guaranteed, relative order is not — it is neither sorted nor
    /// insertion order. Callers wanting sorted output should dequeue.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Copy the elements into a `Vec`, in raw backing-array order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.storage.to_vec()
    }

    /// Consume the queue, returning its elements in raw backing-array
    /// order.
    ///
    /// The returned vector is detached from the region: its bytes are
    /// credited back as the queue drops.
    pub fn into_vec(mut self) -> Vec<T> {
        mem::take(&mut self.storage)
    }

    /// Copy the elements into a [`NonEmpty`] sequence, head first.
    ///
    /// Returns `None` only when the queue is empty. The head is the
    /// current maximum; the tail follows in raw backing-array order.
    pub fn to_non_empty(&self) -> Option<NonEmpty<T>>
    where
        T: Clone,
    {
        let (head, tail) = self.storage.split_first()?;
        Some(NonEmpty::new(head.clone(), tail.to_vec()))
    }

    /// Reallocate the backing store to the next policy capacity.
    ///
    /// The new buffer is charged before the old one is credited,
    /// matching the instant during reallocation when both are live.
    fn grow(&mut self) {
        let new_cap = grown_capacity(self.cap);
        let elem = mem::size_of::<T>();
        self.region.charge(new_cap * elem);
        self.storage.reserve_exact(new_cap - self.storage.len());
        self.region.credit(self.cap * elem);
        self.cap = new_cap;
    }

    /// Restore the heap invariant upward from `idx` after an append.
    ///
    /// Swaps with the parent while strictly greater than it; stops at
    /// the root or at a parent that is already >= the element.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.storage[idx] > self.storage[parent] {
                self.storage.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Restore the heap invariant downward from `idx` after a root
    /// replacement.
    ///
    /// Descends toward the strictly larger child; the left child wins
    /// ties between the two. Stops when neither child exceeds the
    /// current element.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.storage.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut largest = idx;
            if self.storage[left] > self.storage[largest] {
                largest = left;
            }
            if right < len && self.storage[right] > self.storage[largest] {
                largest = right;
            }
            if largest == idx {
                break;
            }
            self.storage.swap(idx, largest);
            idx = largest;
        }
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<'_, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a PriorityQueue<'_, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for PriorityQueue<'_, T> {
    /// Renders `Queue {e0, e1, …}` in raw backing-array order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue {{")?;
        for (i, elem) in self.storage.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, "}}")
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for PriorityQueue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.storage.len())
            .field("capacity", &self.cap)
            .field("storage", &self.storage)
            .finish()
    }
}

impl<T: Ord> Drop for PriorityQueue<'_, T> {
    fn drop(&mut self) {
        self.region.credit(self.cap * mem::size_of::<T>());
    }
}

//! A growable priority queue implemented with a binary heap.
//!
//! Insertion and popping the largest element have amortized O(log(n)) time
//! complexity. Checking the largest element is O(1).
//!
//! [`BinaryHeap<T>`](BinaryHeap) wraps a [`Vec<T>`](alloc::vec::Vec) and can
//! therefore be converted into the underlying vector type at zero cost.
//! Converting a vector to a binary heap can be done in-place, and has O(n)
//! complexity. A binary heap can also be converted to a sorted vector
//! in-place, allowing it to be used for an O(n log(n)) in-place heap sort.

use alloc::vec::Vec;

use core::fmt::{self, Debug, Display, Formatter};
use core::iter::{FromIterator, FusedIterator};
use core::ops::{Deref, DerefMut};

/// The backing capacity allocated by [`BinaryHeap::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// The error returned by [`BinaryHeap::insert`] when passed the absent
/// marker [`None`] in place of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NullElementError;

impl Display for NullElementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("cannot insert an absent element into a binary heap")
    }
}

/// The error returned by the strict accessors [`BinaryHeap::remove_top`] and
/// [`BinaryHeap::peek_top`] when the heap contains no elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyHeapError;

impl Display for EmptyHeapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("the binary heap is empty")
    }
}

/// A growable priority queue implemented with a binary heap.
///
/// This will be a max-heap, i.e. [`heap.pop()`](BinaryHeap::pop) will return
/// the largest value in the queue. [`core::cmp::Reverse`] or a custom `Ord`
/// implementation can be used to make a min-heap instead.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the `Ord`
/// trait, changes while it is in the heap. This is normally only possible
/// through `Cell`, `RefCell`, global state, I/O, or unsafe code.
pub struct BinaryHeap<T: Ord> {
    a: Vec<T>,
}

/// Structure wrapping a mutable reference to the greatest item on a `BinaryHeap`.
///
/// This `struct` is created by the [`BinaryHeap::peek_mut()`] method. See its
/// documentation for more.
pub struct PeekMut<'a, T: 'a + Ord> {
    heap: &'a mut BinaryHeap<T>,
}

impl<T: Ord + Debug> Debug for PeekMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeekMut").field(&self.heap.peek()).finish()
    }
}

impl<T: Ord> Drop for PeekMut<'_, T> {
    fn drop(&mut self) {
        heapify(self.heap.a.as_mut_slice(), 0);
    }
}

impl<T: Ord> Deref for PeekMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        debug_assert!(!self.heap.is_empty());
        unsafe { self.heap.a.get_unchecked(0) }
    }
}

impl<T: Ord> DerefMut for PeekMut<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        debug_assert!(!self.heap.is_empty());
        unsafe { self.heap.a.get_unchecked_mut(0) }
    }
}

impl<T: Ord> PeekMut<'_, T> {
    /// Removes the peeked value from the heap and returns it.
    pub fn pop(this: PeekMut<'_, T>) -> T {
        debug_assert!(!this.heap.is_empty());
        if let Some(value) = this.heap.pop() {
            core::mem::forget(this);
            value
        } else {
            unreachable!()
        }
    }
}

// This implementation is largely based on the pseudocode given in
// CLRS - Introduction to Algorithms (third edition), Chapter 6

// These utility functions for binary tree traversal differ from the reference
// because we're using 0-based indexing, i.e. these are equivalent to
// `PARENT(i + 1) - 1`, `LEFT(i + 1) - 1`, and `RIGHT(i + 1) - 1`, respectively.
#[inline(always)]
fn parent(i: usize) -> usize {
    (i + 1) / 2 - 1
}

#[inline(always)]
fn left(i: usize) -> usize {
    2 * (i + 1) - 1
}

#[inline(always)]
fn right(i: usize) -> usize {
    2 * (i + 1)
}

fn heapify<T: Ord>(a: &mut [T], i: usize) {
    let l = left(i);
    let r = right(i);
    let mut largest = if l < a.len() && a[l] > a[i] { l } else { i };
    if r < a.len() && a[r] > a[largest] {
        largest = r;
    }
    if largest != i {
        a.swap(i, largest);
        heapify(a, largest);
    }
}

impl<T: Ord + Debug> Debug for BinaryHeap<T> {
    /// Formats the raw buffer in heap layout. Use the [`Display`]
    /// implementation to render elements in priority order instead.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord + Display> Display for BinaryHeap<T> {
    /// Formats the elements in descending priority order, i.e. the order in
    /// which [`pop`](BinaryHeap::pop) would return them.
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// heap.push(1); heap.push(3); heap.push(2);
    /// assert_eq!(heap.to_string(), "[3, 2, 1]");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut by_priority: Vec<&T> = self.a.iter().collect();
        by_priority.sort_unstable();

        f.write_str("[")?;
        let mut first = true;
        for item in by_priority.into_iter().rev() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    /// Converts a [`Vec`] into a binary heap.
    ///
    /// This conversion happens in-place, and has O(n) time complexity.
    fn from(mut vec: Vec<T>) -> Self {
        let a = vec.as_mut_slice();
        for i in (0..(a.len() / 2)).rev() {
            heapify(a, i);
        }
        BinaryHeap { a: vec }
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Constructs a new, empty `BinaryHeap<T>` with a backing capacity of
    /// [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    /// ```
    /// let heap = pique::BinaryHeap::<u32>::new();
    /// assert_eq!(heap.capacity(), 10);
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs a new, empty `BinaryHeap<T>` with at least the specified
    /// capacity, but no less than one slot.
    ///
    /// # Examples
    /// ```
    /// let heap = pique::BinaryHeap::<u32>::with_capacity(8);
    /// assert_eq!(heap.capacity(), 8);
    ///
    /// let heap = pique::BinaryHeap::<u32>::with_capacity(0);
    /// assert!(heap.capacity() >= 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeap {
            a: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Doubles the backing capacity.
    ///
    /// The constructors never allocate less than one slot, but conversions
    /// like [`From<Vec<T>>`] may hand us a zero-capacity buffer, so the
    /// doubling is floored at one additional slot.
    fn grow(&mut self) {
        self.a.reserve_exact(self.a.capacity().max(1));
    }

    /// Returns a reference to the greatest item in the binary heap, or
    /// [`None`] if it is empty.
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// assert_eq!(heap.peek(), None);
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.a.first()
    }

    /// Returns a reference to the greatest item in the binary heap, or
    /// [`EmptyHeapError`] if it is empty.
    ///
    /// This is the strict counterpart of [`peek`](BinaryHeap::peek).
    ///
    /// # Examples
    /// ```
    /// use pique::EmptyHeapError;
    ///
    /// let mut heap = pique::BinaryHeap::new();
    /// assert_eq!(heap.peek_top(), Err(EmptyHeapError));
    /// heap.push(3);
    /// assert_eq!(heap.peek_top(), Ok(&3));
    /// ```
    #[inline]
    pub fn peek_top(&self) -> Result<&T, EmptyHeapError> {
        self.peek().ok_or(EmptyHeapError)
    }

    /// Returns a mutable reference to the greatest item in the binary heap,
    /// or [`None`] if it is empty.
    ///
    /// Note: If the `PeekMut` value is leaked, the heap may be left in an
    /// inconsistent state.
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// {
    ///     let mut val = heap.peek_mut().unwrap();
    ///     *val = 0;
    /// }
    ///
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(0));
    /// ```
    #[inline]
    pub fn peek_mut(&mut self) -> Option<PeekMut<'_, T>> {
        if self.is_empty() {
            None
        } else {
            Some(PeekMut { heap: self })
        }
    }

    /// Removes the greatest element from the binary heap and returns it, or
    /// [`None`] if it is empty.
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// heap.push(1);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let result = self.a.swap_remove(0);
        heapify(self.a.as_mut_slice(), 0);
        Some(result)
    }

    /// Removes the greatest element from the binary heap and returns it, or
    /// [`EmptyHeapError`] if it is empty.
    ///
    /// This is the strict counterpart of [`pop`](BinaryHeap::pop).
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// heap.push(1);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.remove_top(), Ok(3));
    /// assert_eq!(heap.remove_top(), Ok(1));
    /// assert!(heap.remove_top().is_err());
    /// ```
    pub fn remove_top(&mut self) -> Result<T, EmptyHeapError> {
        self.pop().ok_or(EmptyHeapError)
    }

    /// Pushes an item onto the binary heap, doubling the backing capacity
    /// first if it is full.
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::with_capacity(2);
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert!(heap.capacity() >= 4);
    /// assert_eq!(heap.peek(), Some(&5));
    /// ```
    pub fn push(&mut self, item: T) {
        if self.a.len() == self.a.capacity() {
            self.grow();
        }

        self.a.push(item);
        let a = self.a.as_mut_slice();
        let mut i = a.len() - 1;
        while i > 0 && a[parent(i)] < a[i] {
            a.swap(i, parent(i));
            i = parent(i);
        }
    }

    /// Pushes an item onto the binary heap, where [`None`] marks an absent
    /// element and is rejected with [`NullElementError`].
    ///
    /// See [`offer`](BinaryHeap::offer) for the lenient counterpart that
    /// reports rejection with a boolean instead.
    ///
    /// # Examples
    /// ```
    /// use pique::NullElementError;
    ///
    /// let mut heap = pique::BinaryHeap::new();
    /// assert_eq!(heap.insert(Some(42)), Ok(()));
    /// assert_eq!(heap.insert(None), Err(NullElementError));
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn insert(&mut self, item: Option<T>) -> Result<(), NullElementError> {
        match item {
            Some(item) => {
                self.push(item);
                Ok(())
            }
            None => Err(NullElementError),
        }
    }

    /// Pushes an item onto the binary heap, where [`None`] marks an absent
    /// element and is rejected by returning `false`.
    ///
    /// See [`insert`](BinaryHeap::insert) for the strict counterpart that
    /// reports rejection with a typed error instead.
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// assert!(heap.offer(Some(42)));
    /// assert!(!heap.offer(None));
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn offer(&mut self, item: Option<T>) -> bool {
        match item {
            Some(item) => {
                self.push(item);
                true
            }
            None => false,
        }
    }

    /// Returns the number of elements the binary heap can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.a.capacity()
    }

    /// Returns the number of elements in the binary heap, also referred to
    /// as its *length*.
    #[inline]
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Returns `true` if the binary heap contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Returns `true` if the binary heap contains an element equal to the
    /// given value.
    ///
    /// This is a linear scan of the live elements, i.e. O(n).
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// heap.push(4);
    /// heap.push(7);
    /// heap.push(2);
    /// assert!(heap.contains(&7));
    /// assert!(!heap.contains(&99));
    /// ```
    pub fn contains(&self, item: &T) -> bool {
        self.a.iter().any(|x| x == item)
    }

    /// Returns an iterator visiting all values in the underlying vector in
    /// arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.a.iter()
    }

    /// Copies the live elements into a new vector in the raw buffer order.
    ///
    /// The returned layout is an implementation artifact: only its length
    /// and membership are meaningful. Use [`into_sorted_vec`](BinaryHeap::into_sorted_vec)
    /// or the [`Display`] implementation for a priority-ordered view.
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// heap.push(2);
    /// heap.push(1);
    /// heap.push(3);
    ///
    /// let snapshot = heap.to_vec();
    /// assert_eq!(snapshot.len(), 3);
    /// assert_eq!(snapshot[0], 3);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.a.clone()
    }

    /// Returns an iterator which retrieves elements in heap order. The
    /// retrieved elements are removed from the original heap. The remaining
    /// elements will be removed on drop in heap order.
    ///
    /// # Remarks
    /// `.drain_sorted()` is O(n log(n)), much slower than draining via
    /// [`clear`](BinaryHeap::clear). The latter is preferable when the order
    /// of removal doesn't matter.
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// heap.push(1); heap.push(3); heap.push(5);
    ///
    /// let mut iter = heap.drain_sorted();
    /// assert_eq!(iter.next(), Some(5));
    /// drop(iter);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { heap: self }
    }

    /// Drops all items from the binary heap. The backing capacity is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// heap.push(1); heap.push(3);
    /// heap.clear();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), 10);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.a.clear();
    }

    /// Consumes the `BinaryHeap` and returns the underlying vector in
    /// arbitrary order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.a
    }

    /// Consumes the `BinaryHeap` and returns a vector in sorted (ascending)
    /// order.
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// heap.push(1); heap.push(5); heap.push(3); heap.push(2); heap.push(4);
    /// let vec = heap.into_sorted_vec();
    /// assert_eq!(vec, &[1, 2, 3, 4, 5][..]);
    /// ```
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut result = self.into_vec();
        let a = result.as_mut_slice();
        for i in (1..a.len()).rev() {
            a.swap(0, i);
            heapify(&mut a[..i], 0);
        }
        result
    }

    /// Consumes the `BinaryHeap` and returns an iterator which yields
    /// elements in heap order.
    ///
    /// When dropped, the remaining elements will be dropped in heap order.
    ///
    /// # Remarks
    /// `.into_iter_sorted()` is O(n log(n)), much slower than
    /// [`.into_iter()`](BinaryHeap::into_iter). The latter is preferable in
    /// most cases.
    ///
    /// # Examples
    /// ```
    /// let mut heap = pique::BinaryHeap::new();
    /// heap.push(1); heap.push(3); heap.push(5);
    ///
    /// let mut iter = heap.into_iter_sorted();
    /// assert_eq!(iter.next(), Some(5));
    /// assert_eq!(iter.next(), Some(3));
    /// assert_eq!(iter.next(), Some(1));
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T> {
        IntoIterSorted { heap: self }
    }

    /// Sorts a vector in descending order by pushing every element onto a
    /// fresh binary heap sized to the input, then popping them back in
    /// non-increasing order.
    ///
    /// This is an O(n log(n)) heap sort with O(n) auxiliary storage.
    ///
    /// # Examples
    /// ```
    /// let mut values = vec![5, 3, 8, 1, 9, 2];
    /// pique::BinaryHeap::sort_descending(&mut values);
    /// assert_eq!(values, [9, 8, 5, 3, 2, 1]);
    /// ```
    pub fn sort_descending(items: &mut Vec<T>) {
        let mut heap = BinaryHeap::with_capacity(items.len());
        for item in items.drain(..) {
            heap.push(item);
        }
        while let Some(item) = heap.pop() {
            items.push(item);
        }
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> Clone for BinaryHeap<T> {
    fn clone(&self) -> Self {
        BinaryHeap { a: self.a.clone() }
    }
}

impl<T: Ord> IntoIterator for BinaryHeap<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    /// Consumes the `BinaryHeap` and yields its elements in arbitrary order.
    fn into_iter(self) -> Self::IntoIter {
        self.a.into_iter()
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.a.extend(iter);
        let a = self.a.as_mut_slice();
        for i in (0..(a.len() / 2)).rev() {
            heapify(a, i);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    /// Creates a binary heap from an iterator.
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

/// A draining iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::drain_sorted()`].
/// See its documentation for more.
pub struct DrainSorted<'a, T: Ord> {
    heap: &'a mut BinaryHeap<T>,
}

impl<T: Ord> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.heap.len();
        (size, Some(size))
    }

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop()
    }
}

impl<T: Ord> ExactSizeIterator for DrainSorted<'_, T> {}
impl<T: Ord> FusedIterator for DrainSorted<'_, T> {}

impl<T: Ord> Drop for DrainSorted<'_, T> {
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

/// A consuming iterator that moves out of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::into_iter_sorted()`].
/// See its documentation for more.
#[derive(Debug)]
pub struct IntoIterSorted<T: Ord> {
    heap: BinaryHeap<T>,
}

impl<T: Ord> Iterator for IntoIterSorted<T> {
    type Item = T;

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.heap.len();
        (size, Some(size))
    }

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }
}

impl<T: Ord> ExactSizeIterator for IntoIterSorted<T> {}
impl<T: Ord> FusedIterator for IntoIterSorted<T> {}

impl<T: Clone + Ord> Clone for IntoIterSorted<T> {
    fn clone(&self) -> Self {
        self.heap.clone().into_iter_sorted()
    }
}

impl<T: Ord> Drop for IntoIterSorted<T> {
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

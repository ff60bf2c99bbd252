//! The `Vector<T>` dynamic array.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Range};

use elastica_buffer::{RawBuffer, ReserveError};

use crate::sort;

/// A contiguous growable sequence of `T` values.
///
/// `Vector` wraps exactly one [`RawBuffer`] and carries no state of its
/// own; it adds the ergonomic sequence surface (front/back access, push and
/// pop, positional insert, ordered and unordered erase, search, sort) on
/// top of the buffer's storage primitives.
///
/// Cloning performs a deep, element-wise copy. The full read surface of
/// `[T]` is available through `Deref`, including indexing (which panics on
/// out-of-range positions) and iteration over the live range.
pub struct Vector<T> {
    pub(crate) buffer: RawBuffer<T>,
}

impl<T> Vector<T> {
    /// Creates an empty vector without allocating.
    pub const fn new() -> Vector<T> {
        Vector {
            buffer: RawBuffer::new(),
        }
    }

    /// Creates an empty vector with capacity for at least `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Vector<T> {
        Vector {
            buffer: RawBuffer::with_capacity(capacity),
        }
    }

    /// Creates a vector of `len` default-constructed elements.
    pub fn with_len(len: usize) -> Vector<T>
    where
        T: Default,
    {
        let mut vector = Vector::new();
        vector.buffer.resize_with_default(len);
        vector
    }

    /// Creates a vector of `len` clones of `value`.
    pub fn from_elem(len: usize, value: T) -> Vector<T>
    where
        T: Clone,
    {
        let mut vector = Vector::new();
        vector.buffer.resize(len, value);
        vector
    }

    /// Creates a vector holding clones of the elements of `values`.
    pub fn from_slice(values: &[T]) -> Vector<T>
    where
        T: Clone,
    {
        let mut vector = Vector::with_capacity(values.len());
        vector.buffer.extend_from_slice(values);
        vector
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the number of elements the vector can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    /// Returns a raw pointer to the base of the element storage.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }

    /// Returns a mutable raw pointer to the base of the element storage.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_mut_ptr()
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a mutable reference to the first element, or `None` if
    /// empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a mutable reference to the last element, or `None` if empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Appends an element. Amortized O(1).
    #[inline]
    pub fn push(&mut self, value: T) {
        self.buffer.push(value);
    }

    /// Appends a default-constructed element.
    pub fn push_default(&mut self)
    where
        T: Default,
    {
        self.buffer.push_default();
    }

    /// Removes and returns the last element, or `None` if the vector is
    /// empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.buffer.pop()
    }

    /// Inserts `value` before position `index`, shifting everything after
    /// it one slot to the right. O(n) in the distance to the end.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        self.buffer.insert(index, value);
    }

    /// Inserts clones of `values` before position `index`, preserving the
    /// order of both the inserted and the shifted elements.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_slice(&mut self, index: usize, values: &[T])
    where
        T: Clone,
    {
        self.buffer.insert_slice(index, values);
    }

    /// Removes the elements in `range`, shifting the rest left and
    /// preserving their order. Returns the new index of the first element
    /// that followed the range.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or extends past `len`.
    pub fn erase(&mut self, range: Range<usize>) -> usize {
        self.buffer.erase(range)
    }

    /// Removes the element at `index`, preserving the order of the rest.
    /// Returns `index`, now occupied by the element that followed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase_at(&mut self, index: usize) -> usize {
        self.buffer.erase(index..index + 1)
    }

    /// Removes the elements in `range`, filling the gap from the tail of
    /// the vector instead of shifting. O(removed), order of survivors not
    /// preserved.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or extends past `len`.
    pub fn erase_unordered(&mut self, range: Range<usize>) -> usize {
        self.buffer.erase_unordered(range)
    }

    /// Removes the element at `index` by moving the last element into its
    /// slot. O(1), order not preserved.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase_unordered_at(&mut self, index: usize) -> usize {
        self.buffer.erase_unordered(index..index + 1)
    }

    /// Sets the length to `new_len`, filling new slots with clones of
    /// `value` when growing.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.buffer.resize(new_len, value);
    }

    /// Sets the length to `new_len`, filling new slots with
    /// default-constructed values when growing.
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.buffer.resize_with_default(new_len);
    }

    /// Shortens the vector to `new_len` elements; no effect if it is
    /// already that short. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        self.buffer.truncate(new_len);
    }

    /// Removes all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Ensures capacity for at least `min_capacity` elements in total.
    pub fn reserve(&mut self, min_capacity: usize) {
        self.buffer.reserve(min_capacity);
    }

    /// Fallible form of [`reserve`](Self::reserve): surfaces allocation
    /// failure instead of escalating it.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), ReserveError> {
        self.buffer.try_reserve(min_capacity)
    }

    /// Reduces capacity to exactly the current length.
    pub fn shrink_to_fit(&mut self) {
        self.buffer.shrink_to_fit();
    }

    /// Replaces the contents with clones of the elements of `values`.
    pub fn assign(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.buffer.clear();
        self.buffer.extend_from_slice(values);
    }

    /// Appends clones of every element of `values`.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.buffer.extend_from_slice(values);
    }

    /// Exchanges the entire storage with `other` in O(1); no elements are
    /// copied.
    pub fn swap_storage(&mut self, other: &mut Vector<T>) {
        self.buffer.swap(&mut other.buffer);
    }

    /// Returns the index of the first element equal to `value`, or `None`
    /// if no element matches. Linear scan.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == value)
    }

    /// Returns `true` if some element equals `value`. Linear scan.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Sorts the vector in place so it is non-decreasing under `compare`.
    ///
    /// Delegates to [`sort::quicksort_by`]: an unstable first-pivot
    /// quicksort with O(n^2) worst case, kept for parity with the legacy
    /// container (see the `sort` module docs).
    pub fn sort_with<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quicksort_by(self.as_mut_slice(), compare);
    }

    /// Sorts only the elements in `range`, leaving the rest untouched.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or extends past `len`.
    pub fn sort_range_with<F>(&mut self, range: Range<usize>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quicksort_by(&mut self.as_mut_slice()[range], compare);
    }
}

impl<T: bytemuck::NoUninit> Vector<T> {
    /// Views the live elements as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }
}

impl<T: bytemuck::NoUninit + bytemuck::AnyBitPattern> Vector<T> {
    /// Views the live elements as mutable raw bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(self.as_mut_slice())
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Vector<T> {
        Vector::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Vector<T> {
        Vector {
            buffer: self.buffer.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Vector<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(values: &[T]) -> Vector<T> {
        Vector::from_slice(values)
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (low, _) = iter.size_hint();
        if let Some(required) = self.len().checked_add(low) {
            self.reserve(required);
        }
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Vector<T> {
        let mut vector = Vector::new();
        vector.extend(iter);
        vector
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

//! Raw growable element storage.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ops::Range;
use std::ptr::{self, NonNull};

use crate::error::ReserveError;

/// Owned, growable, contiguous storage for elements of type `T`.
///
/// A `RawBuffer` tracks two counts over a single allocation: `len`, the
/// number of live (constructed) elements occupying the leading slots, and
/// `cap`, the number of allocated slots. Slots in `[0, len)` always hold
/// valid values of `T`; slots in `[len, cap)` are uninitialized storage.
/// Every mutating operation upholds that invariant, constructing and
/// dropping elements individually as the live range grows and shrinks.
///
/// Growth is geometric: whenever more room is needed, capacity at least
/// doubles (see [`GROWTH_FACTOR`](Self::GROWTH_FACTOR)), which keeps
/// repeated appends amortized O(1). Live elements are relocated with a raw
/// byte move during growth; in Rust every value is trivially relocatable,
/// so no per-element move constructors are involved.
///
/// Zero-sized element types never allocate and report a capacity of
/// `usize::MAX`.
///
/// Index and range arguments must refer to the live range; violations
/// panic. Out-of-memory during growth is the only intrinsic failure:
/// the `try_` operations surface it as a [`ReserveError`], everything else
/// escalates it the way the standard library containers do.
pub struct RawBuffer<T> {
    /// Base of the allocation, dangling while `cap == 0`.
    ptr: NonNull<T>,
    /// Number of live elements.
    len: usize,
    /// Number of allocated slots.
    cap: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawBuffer<T> {}

unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// Minimum geometric growth multiplier applied when the buffer runs out
    /// of room.
    pub const GROWTH_FACTOR: usize = 2;

    /// Creates an empty buffer without allocating.
    pub const fn new() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            len: 0,
            cap: if size_of::<T>() == 0 { usize::MAX } else { 0 },
            _marker: PhantomData,
        }
    }

    /// Creates an empty buffer with capacity for at least `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> RawBuffer<T> {
        let mut buffer = RawBuffer::new();
        buffer.reserve(capacity);
        buffer
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the base of the storage.
    ///
    /// The pointer is dangling (but well aligned) while the buffer has no
    /// allocation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable raw pointer to the base of the storage.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the live range as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns the live range as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Ensures the capacity is at least `min_capacity` without changing the
    /// live count.
    ///
    /// A no-op when the capacity is already sufficient. Growth reallocates
    /// and relocates the live elements in their original order.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), ReserveError> {
        if min_capacity <= self.cap {
            return Ok(());
        }
        let new_cap = min_capacity.max(self.cap.saturating_mul(Self::GROWTH_FACTOR));
        self.grow_to(new_cap)
    }

    /// Infallible form of [`try_reserve`](Self::try_reserve).
    pub fn reserve(&mut self, min_capacity: usize) {
        if let Err(err) = self.try_reserve(min_capacity) {
            err.escalate();
        }
    }

    /// Appends an element to the end of the live range.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow_for(1);
        }
        unsafe {
            ptr::write(self.ptr.as_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Appends a default-constructed element.
    pub fn push_default(&mut self)
    where
        T: Default,
    {
        self.push(T::default());
    }

    /// Removes and returns the last live element, or `None` if the buffer
    /// is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) })
        }
    }

    /// Sets the live count to `new_len`, filling any new slots with clones
    /// of `value`.
    ///
    /// Shrinking drops the excess elements from the end and leaves the
    /// capacity untouched.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len > self.len {
            self.reserve(new_len);
            unsafe {
                while self.len < new_len {
                    ptr::write(self.ptr.as_ptr().add(self.len), value.clone());
                    self.len += 1;
                }
            }
        } else {
            self.truncate(new_len);
        }
    }

    /// Sets the live count to `new_len`, filling any new slots with
    /// default-constructed values.
    pub fn resize_with_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len > self.len {
            self.reserve(new_len);
            unsafe {
                while self.len < new_len {
                    ptr::write(self.ptr.as_ptr().add(self.len), T::default());
                    self.len += 1;
                }
            }
        } else {
            self.truncate(new_len);
        }
    }

    /// Shortens the live range to `new_len` elements, dropping the rest.
    ///
    /// Has no effect if `new_len` is not below the current length. The
    /// capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let removed = self.len - new_len;
        // Adjust `len` before dropping so a panicking Drop cannot lead to a
        // second drop of the same slots; the remainder of the tail leaks
        // instead.
        self.len = new_len;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr().add(new_len),
                removed,
            ));
        }
    }

    /// Drops all live elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Inserts `value` before position `index`, shifting the following
    /// elements one slot to the right.
    ///
    /// The shift is a raw byte relocation of the tail; the new element is
    /// then written in place.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insert index (is {index}) should be <= len (is {})",
            self.len
        );
        if self.len == self.cap {
            self.grow_for(1);
        }
        unsafe {
            let p = self.ptr.as_ptr().add(index);
            ptr::copy(p, p.add(1), self.len - index);
            ptr::write(p, value);
        }
        self.len += 1;
    }

    /// Inserts clones of `values` before position `index`, preserving the
    /// relative order of both the inserted and the shifted elements.
    ///
    /// If a clone panics mid-insertion the buffer remains memory safe, but
    /// the elements at and after `index` are leaked; no rollback is
    /// attempted.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_slice(&mut self, index: usize, values: &[T])
    where
        T: Clone,
    {
        assert!(
            index <= self.len,
            "insert index (is {index}) should be <= len (is {})",
            self.len
        );
        if values.is_empty() {
            return;
        }
        let count = values.len();
        let Some(required) = self.len.checked_add(count) else {
            ReserveError::CapacityOverflow.escalate()
        };
        self.reserve(required);
        let tail = self.len - index;
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::copy(base.add(index), base.add(index + count), tail);
            // The relocated tail must not be reachable through `len` while
            // the gap is being filled: a panicking clone would otherwise
            // let Drop visit half-initialized slots.
            self.len = index;
            for (i, value) in values.iter().enumerate() {
                ptr::write(base.add(index + i), value.clone());
            }
            self.len = index + count + tail;
        }
    }

    /// Removes the live range `[range.start, range.end)`, shifting the
    /// following elements left to close the gap and preserving their order.
    ///
    /// Returns the new index of the first element that followed the erased
    /// range (which equals `range.start`).
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or extends past the live range.
    pub fn erase(&mut self, range: Range<usize>) -> usize {
        let Range { start, end } = range;
        assert!(
            start <= end && end <= self.len,
            "erase range {start}..{end} out of bounds for length {}",
            self.len
        );
        let removed = end - start;
        if removed == 0 {
            return start;
        }
        let tail = self.len - end;
        // Same leak-over-double-drop policy as `truncate`.
        self.len = start;
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), removed));
            ptr::copy(base.add(end), base.add(start), tail);
        }
        self.len = start + tail;
        start
    }

    /// Removes the live range `[range.start, range.end)`, filling the gap
    /// with elements moved from the tail of the live range.
    ///
    /// This performs O(removed) relocations instead of shifting the entire
    /// remainder, at the cost of not preserving the relative order of the
    /// surviving elements. Returns `range.start`.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or extends past the live range.
    pub fn erase_unordered(&mut self, range: Range<usize>) -> usize {
        let Range { start, end } = range;
        assert!(
            start <= end && end <= self.len,
            "erase range {start}..{end} out of bounds for length {}",
            self.len
        );
        let removed = end - start;
        if removed == 0 {
            return start;
        }
        let tail = self.len - end;
        let fill = removed.min(tail);
        let old_len = self.len;
        self.len = start;
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), removed));
            // The fill elements come from past the erased range, so the two
            // regions cannot overlap.
            ptr::copy_nonoverlapping(base.add(old_len - fill), base.add(start), fill);
        }
        self.len = old_len - removed;
        start
    }

    /// Appends clones of every element of `values` to the live range.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        let Some(required) = self.len.checked_add(values.len()) else {
            ReserveError::CapacityOverflow.escalate()
        };
        self.reserve(required);
        unsafe {
            for value in values {
                ptr::write(self.ptr.as_ptr().add(self.len), value.clone());
                self.len += 1;
            }
        }
    }

    /// Reduces the capacity to exactly the live count, releasing the
    /// allocation entirely when the buffer is empty.
    pub fn shrink_to_fit(&mut self) {
        if size_of::<T>() == 0 || self.cap == self.len {
            return;
        }
        let Ok(old_layout) = Layout::array::<T>(self.cap) else {
            return;
        };
        if self.len == 0 {
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), old_layout);
            }
            self.ptr = NonNull::dangling();
            self.cap = 0;
            return;
        }
        let Ok(new_layout) = Layout::array::<T>(self.len) else {
            return;
        };
        let raw = unsafe {
            alloc::realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size())
        };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            alloc::handle_alloc_error(new_layout)
        };
        self.ptr = ptr;
        self.cap = self.len;
    }

    /// Exchanges storage, live count, and capacity with `other` in O(1).
    /// No elements are copied.
    pub fn swap(&mut self, other: &mut RawBuffer<T>) {
        mem::swap(self, other);
    }

    /// Transfers raw ownership of the storage to the caller, resetting the
    /// buffer to the empty state without releasing anything.
    ///
    /// The returned parts must eventually be passed back to
    /// [`from_raw_parts`](Self::from_raw_parts) (and the resulting buffer
    /// dropped) to release the elements and the allocation; otherwise they
    /// leak.
    pub fn abandon(&mut self) -> RawParts<T> {
        let parts = RawParts {
            ptr: self.ptr,
            len: self.len,
            capacity: self.cap,
        };
        self.ptr = NonNull::dangling();
        self.len = 0;
        self.cap = if size_of::<T>() == 0 { usize::MAX } else { 0 };
        parts
    }

    /// Reconstitutes a buffer from parts previously produced by
    /// [`abandon`](Self::abandon).
    ///
    /// # Safety
    ///
    /// `parts` must have been returned by `abandon` on a buffer with the
    /// same element type, and the storage it describes must not have been
    /// released or reconstituted already.
    pub unsafe fn from_raw_parts(parts: RawParts<T>) -> RawBuffer<T> {
        RawBuffer {
            ptr: parts.ptr,
            len: parts.len,
            cap: parts.capacity,
            _marker: PhantomData,
        }
    }

    /// Grows capacity for `additional` more elements past the current live
    /// count, escalating on failure.
    #[cold]
    fn grow_for(&mut self, additional: usize) {
        let Some(required) = self.len.checked_add(additional) else {
            ReserveError::CapacityOverflow.escalate()
        };
        self.reserve(required);
    }

    /// Reallocates the storage to hold exactly `new_cap` slots, relocating
    /// the live elements.
    fn grow_to(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        debug_assert!(new_cap > self.cap);
        debug_assert!(size_of::<T>() != 0);
        let new_layout =
            Layout::array::<T>(new_cap).map_err(|_| ReserveError::CapacityOverflow)?;
        if new_layout.size() > isize::MAX as usize {
            return Err(ReserveError::CapacityOverflow);
        }
        let raw = if self.cap == 0 {
            unsafe { alloc::alloc(new_layout) }
        } else {
            let old_layout =
                Layout::array::<T>(self.cap).map_err(|_| ReserveError::CapacityOverflow)?;
            unsafe {
                alloc::realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size())
            }
        };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            return Err(ReserveError::AllocFailed { layout: new_layout });
        };
        self.ptr = ptr;
        self.cap = new_cap;
        Ok(())
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.clear();
        if self.cap != 0 && size_of::<T>() != 0 {
            if let Ok(layout) = Layout::array::<T>(self.cap) {
                unsafe {
                    alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
                }
            }
        }
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        RawBuffer::new()
    }
}

impl<T: Clone> Clone for RawBuffer<T> {
    fn clone(&self) -> RawBuffer<T> {
        let mut buffer = RawBuffer::with_capacity(self.len);
        buffer.extend_from_slice(self.as_slice());
        buffer
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawBuffer")
            .field("values", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}

/// Raw ownership record produced by [`RawBuffer::abandon`].
///
/// Carries no drop glue: whoever holds it is responsible for releasing the
/// storage through [`RawBuffer::from_raw_parts`].
#[derive(Debug)]
pub struct RawParts<T> {
    /// Base of the allocation (dangling if `capacity` is zero or `T` is
    /// zero sized).
    pub ptr: NonNull<T>,
    /// Number of live elements at the front of the storage.
    pub len: usize,
    /// Number of allocated slots.
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Counts drops through a shared cell.
    #[derive(Clone)]
    struct Tally {
        drops: Rc<Cell<usize>>,
        value: i32,
    }

    impl Tally {
        fn new(drops: &Rc<Cell<usize>>, value: i32) -> Tally {
            Tally {
                drops: drops.clone(),
                value,
            }
        }
    }

    impl Drop for Tally {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = RawBuffer::<u32>::new();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_slice(), &[]);
    }

    #[test]
    fn test_with_capacity() {
        let buffer = RawBuffer::<u64>::with_capacity(100);
        assert_eq!(buffer.len(), 0);
        assert!(buffer.capacity() >= 100);
    }

    #[test]
    fn test_push_and_index_property() {
        let mut buffer = RawBuffer::new();
        for i in 0..1000usize {
            buffer.push(i * 3);
            assert_eq!(buffer.len(), i + 1);
        }
        for i in 0..1000usize {
            assert_eq!(buffer.as_slice()[i], i * 3);
        }
    }

    #[test]
    fn test_growth_doubles_from_one() {
        let mut buffer = RawBuffer::<u8>::new();
        let mut observed = Vec::new();
        for i in 0..33u8 {
            if buffer.len() == buffer.capacity() {
                observed.push(buffer.capacity());
            }
            buffer.push(i);
        }
        assert_eq!(observed, vec![0, 1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn test_reserve_is_total_capacity() {
        let mut buffer = RawBuffer::<u32>::new();
        buffer.reserve(100);
        assert!(buffer.capacity() >= 100);
        assert_eq!(buffer.len(), 0);

        let base = buffer.as_ptr();
        let cap = buffer.capacity();
        for i in 0..100 {
            buffer.push(i);
        }
        // No reallocation while the reserved capacity suffices.
        assert_eq!(buffer.as_ptr(), base);
        assert_eq!(buffer.capacity(), cap);
    }

    #[test]
    fn test_reserve_never_shrinks() {
        let mut buffer = RawBuffer::<u32>::with_capacity(64);
        let cap = buffer.capacity();
        buffer.reserve(3);
        assert_eq!(buffer.capacity(), cap);
    }

    #[test]
    fn test_reserve_preserves_order() {
        let mut buffer = RawBuffer::new();
        for i in 0..10 {
            buffer.push(i);
        }
        buffer.reserve(1000);
        assert_eq!(buffer.as_slice(), (0..10).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_pop() {
        let mut buffer = RawBuffer::new();
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.pop().as_deref(), Some("b"));
        assert_eq!(buffer.pop().as_deref(), Some("a"));
        assert_eq!(buffer.pop(), None);
    }

    #[test]
    fn test_resize_grow_and_shrink() {
        let mut buffer = RawBuffer::new();
        buffer.push(1);
        buffer.push(2);
        buffer.resize(5, 9);
        assert_eq!(buffer.as_slice(), &[1, 2, 9, 9, 9]);

        let cap = buffer.capacity();
        buffer.resize(2, 0);
        assert_eq!(buffer.as_slice(), &[1, 2]);
        assert_eq!(buffer.capacity(), cap);
    }

    #[test]
    fn test_resize_with_default() {
        let mut buffer = RawBuffer::<i64>::new();
        buffer.resize_with_default(4);
        assert_eq!(buffer.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_truncate_drops_exactly_the_tail() {
        let drops = Rc::new(Cell::new(0));
        let mut buffer = RawBuffer::new();
        for i in 0..8 {
            buffer.push(Tally::new(&drops, i));
        }
        buffer.truncate(3);
        assert_eq!(drops.get(), 5);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.as_slice()[2].value, 2);

        buffer.truncate(10);
        assert_eq!(buffer.len(), 3);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let drops = Rc::new(Cell::new(0));
        let mut buffer = RawBuffer::new();
        for i in 0..4 {
            buffer.push(Tally::new(&drops, i));
        }
        let cap = buffer.capacity();
        buffer.clear();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), cap);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_drop_releases_all_elements() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut buffer = RawBuffer::new();
            for i in 0..16 {
                buffer.push(Tally::new(&drops, i));
            }
        }
        assert_eq!(drops.get(), 16);
    }

    #[test]
    fn test_insert_positions() {
        let mut buffer = RawBuffer::new();
        for i in [1, 2, 4] {
            buffer.push(i);
        }
        buffer.insert(2, 3);
        assert_eq!(buffer.as_slice(), &[1, 2, 3, 4]);
        buffer.insert(0, 0);
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4]);
        buffer.insert(5, 5);
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_slice_preserves_order() {
        let mut buffer = RawBuffer::new();
        buffer.extend_from_slice(&[1, 2, 7, 8]);
        buffer.insert_slice(2, &[3, 4, 5, 6]);
        assert_eq!(buffer.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);

        buffer.insert_slice(0, &[0]);
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);

        let len = buffer.len();
        buffer.insert_slice(len, &[9]);
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

        buffer.insert_slice(5, &[]);
        assert_eq!(buffer.len(), 10);
    }

    #[test]
    fn test_erase_shifts_and_returns_position() {
        let mut buffer = RawBuffer::new();
        buffer.extend_from_slice(&[0, 1, 2, 3, 4, 5]);
        let pos = buffer.erase(1..3);
        assert_eq!(pos, 1);
        assert_eq!(buffer.as_slice(), &[0, 3, 4, 5]);

        let pos = buffer.erase(3..4);
        assert_eq!(pos, 3);
        assert_eq!(buffer.as_slice(), &[0, 3, 4]);

        let pos = buffer.erase(2..2);
        assert_eq!(pos, 2);
        assert_eq!(buffer.as_slice(), &[0, 3, 4]);
    }

    #[test]
    fn test_erase_drops_removed_elements() {
        let drops = Rc::new(Cell::new(0));
        let mut buffer = RawBuffer::new();
        for i in 0..6 {
            buffer.push(Tally::new(&drops, i));
        }
        buffer.erase(1..4);
        assert_eq!(drops.get(), 3);
        let survivors: Vec<i32> = buffer.as_slice().iter().map(|t| t.value).collect();
        assert_eq!(survivors, vec![0, 4, 5]);
    }

    #[test]
    fn test_erase_unordered_keeps_element_set() {
        let mut buffer = RawBuffer::new();
        buffer.extend_from_slice(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let pos = buffer.erase_unordered(1..3);
        assert_eq!(pos, 1);
        assert_eq!(buffer.len(), 6);

        let mut survivors = buffer.as_slice().to_vec();
        survivors.sort();
        assert_eq!(survivors, vec![0, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_erase_unordered_at_tail() {
        let mut buffer = RawBuffer::new();
        buffer.extend_from_slice(&[0, 1, 2, 3]);
        buffer.erase_unordered(2..4);
        assert_eq!(buffer.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_erase_unordered_short_tail() {
        let mut buffer = RawBuffer::new();
        buffer.extend_from_slice(&[0, 1, 2, 3, 4]);
        // Removes three, only one survivor past the range.
        buffer.erase_unordered(1..4);
        assert_eq!(buffer.len(), 2);
        let mut survivors = buffer.as_slice().to_vec();
        survivors.sort();
        assert_eq!(survivors, vec![0, 4]);
    }

    #[test]
    fn test_erase_unordered_drop_count() {
        let drops = Rc::new(Cell::new(0));
        let mut buffer = RawBuffer::new();
        for i in 0..10 {
            buffer.push(Tally::new(&drops, i));
        }
        buffer.erase_unordered(2..5);
        assert_eq!(drops.get(), 3);
        assert_eq!(buffer.len(), 7);
        drop(buffer);
        assert_eq!(drops.get(), 10);
    }

    #[test]
    fn test_shrink_to_fit_exact() {
        let mut buffer = RawBuffer::<u32>::with_capacity(100);
        buffer.extend_from_slice(&[1, 2, 3]);
        buffer.shrink_to_fit();
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(buffer.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_shrink_to_fit_empty_releases_storage() {
        let mut buffer = RawBuffer::<u32>::with_capacity(100);
        buffer.shrink_to_fit();
        assert_eq!(buffer.capacity(), 0);
        assert_eq!(buffer.len(), 0);
        buffer.push(7);
        assert_eq!(buffer.as_slice(), &[7]);
    }

    #[test]
    fn test_swap_exchanges_storage() {
        let mut a = RawBuffer::new();
        a.extend_from_slice(&[1, 2, 3]);
        let mut b = RawBuffer::new();
        b.extend_from_slice(&[9]);

        let a_ptr = a.as_ptr();
        let b_ptr = b.as_ptr();
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[9]);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(a.as_ptr(), b_ptr);
        assert_eq!(b.as_ptr(), a_ptr);
    }

    #[test]
    fn test_abandon_and_reconstitute() {
        let drops = Rc::new(Cell::new(0));
        let mut buffer = RawBuffer::new();
        for i in 0..5 {
            buffer.push(Tally::new(&drops, i));
        }
        let cap = buffer.capacity();

        let parts = buffer.abandon();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 0);
        assert_eq!(parts.len, 5);
        assert_eq!(parts.capacity, cap);
        assert_eq!(drops.get(), 0);

        let reclaimed = unsafe { RawBuffer::from_raw_parts(parts) };
        let values: Vec<i32> = reclaimed.as_slice().iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
        drop(reclaimed);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = RawBuffer::new();
        original.extend_from_slice(&[1, 2, 3]);
        let mut copy = original.clone();
        copy.push(4);
        copy.as_mut_slice()[0] = 100;
        assert_eq!(original.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.as_slice(), &[100, 2, 3, 4]);
        assert_ne!(original.as_ptr(), copy.as_ptr());
    }

    #[test]
    fn test_try_reserve_capacity_overflow() {
        let mut buffer = RawBuffer::<u64>::new();
        buffer.push(1);
        let err = buffer.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(err, ReserveError::CapacityOverflow);
        // Buffer stays fully usable after the failed reservation.
        buffer.push(2);
        assert_eq!(buffer.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut buffer = RawBuffer::<()>::new();
        assert_eq!(buffer.capacity(), usize::MAX);
        for _ in 0..1000 {
            buffer.push(());
        }
        assert_eq!(buffer.len(), 1000);
        assert_eq!(buffer.pop(), Some(()));
        assert_eq!(buffer.len(), 999);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), usize::MAX);
    }

    #[test]
    fn test_non_copy_elements() {
        let mut buffer = RawBuffer::new();
        buffer.push(String::from("alpha"));
        buffer.push(String::from("beta"));
        buffer.insert(1, String::from("between"));
        assert_eq!(
            buffer.as_slice(),
            &["alpha".to_string(), "between".to_string(), "beta".to_string()]
        );
        buffer.erase(0..1);
        assert_eq!(buffer.as_slice(), &["between".to_string(), "beta".to_string()]);
    }

    #[test]
    fn test_debug_format() {
        let mut buffer = RawBuffer::new();
        buffer.extend_from_slice(&[1, 2]);
        let s = format!("{buffer:?}");
        assert!(s.contains("values"));
        assert!(s.contains("len"));
        assert!(s.contains("cap"));
    }
}

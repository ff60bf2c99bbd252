//! Legacy call-surface compatibility.
//!
//! The container this library replaced exposed a second, older set of
//! method names alongside the regular sequence interface. Each method here
//! is a thin named wrapper over one canonical [`Vector`] operation, kept so
//! code written against the old surface ports over mechanically.
//!
//! One inherited quirk is preserved on purpose: `remove`, `ordered_remove`
//! and `fast_remove` were all identical in the original (the "fast" variant
//! had been downgraded to an ordered erase to fix a leak, and the name was
//! never corrected). They remain identical here; callers who actually want
//! the O(1) unordered removal should use
//! [`Vector::erase_unordered_at`].

use elastica_buffer::RawParts;

use crate::vector::Vector;

impl<T> Vector<T> {
    /// Appends `value` and returns the index it now occupies.
    pub fn add(&mut self, value: T) -> usize {
        self.push(value);
        self.len() - 1
    }

    /// Removes the element at `index`, preserving the order of the rest.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) {
        self.erase_at(index);
    }

    /// Same as [`remove`](Self::remove).
    pub fn ordered_remove(&mut self, index: usize) {
        self.erase_at(index);
    }

    /// Same as [`remove`](Self::remove), despite the name: this is an
    /// ordered O(n) erase, not the O(1) swap-with-last removal the name
    /// suggests. See the module docs; use
    /// [`Vector::erase_unordered_at`] for the genuinely fast variant.
    pub fn fast_remove(&mut self, index: usize) {
        self.erase_at(index);
    }

    /// Sets the length to `new_count`, default-constructing any new
    /// elements.
    pub fn set_count(&mut self, new_count: usize)
    where
        T: Default,
    {
        self.resize_default(new_count);
    }

    /// Returns the number of elements.
    #[inline]
    pub fn get_count(&self) -> usize {
        self.len()
    }

    /// Returns the raw base pointer of the element storage.
    #[inline]
    pub fn get_array(&self) -> *const T {
        self.as_ptr()
    }

    /// Transfers raw ownership of the storage to the caller and leaves the
    /// vector empty with no allocation.
    ///
    /// The returned parts hold the original elements in their original
    /// order. They must be released through the matching mechanism,
    /// [`elastica_buffer::RawBuffer::from_raw_parts`]; dropping them does
    /// nothing and leaks the storage.
    pub fn abandon_array(&mut self) -> RawParts<T> {
        self.buffer.abandon()
    }

    /// Removes all elements. Capacity is unchanged.
    pub fn reset(&mut self) {
        self.clear();
    }
}

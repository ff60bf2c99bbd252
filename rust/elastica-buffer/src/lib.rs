//! Growable contiguous element storage.
//!
//! This crate provides [`RawBuffer<T>`], the low-level storage manager behind
//! the `elastica-vec` dynamic array. A `RawBuffer` owns a single contiguous
//! allocation and tracks how many of its slots hold live (constructed)
//! elements versus plain uninitialized capacity. It offers the primitive
//! operations a sequence container needs: amortized growth, element
//! construction and destruction at the live/uninitialized boundary, ordered
//! and unordered range removal, and O(1) storage swap.
//!
//! `RawBuffer` knows nothing about ordering semantics, search, or sorting;
//! those belong to the layers built on top of it.

pub mod buffer;
pub mod error;

pub use buffer::{RawBuffer, RawParts};
pub use error::ReserveError;

//! A dynamic array over [`elastica_buffer::RawBuffer`] storage.
//!
//! [`Vector<T>`] is a contiguous growable sequence with amortized O(1)
//! append, ordered and unordered erasure, linear search, and an in-place
//! comparator-driven quicksort. It is a thin semantic layer: every
//! operation translates into the storage primitives of the buffer crate,
//! which is the only code that touches raw memory.
//!
//! Besides the core sequence interface the crate carries a compatibility
//! shim (see [`Vector`] methods such as `add`, `get_count`, `fast_remove`
//! and `abandon_array`) that preserves the call surface of the legacy
//! container this library replaced.
//!
//! Instances are independent: distinct vectors may be used from different
//! threads freely (`Vector<T>` is `Send`/`Sync` when `T` is), while access
//! to any one instance must be serialized by the caller.

pub mod compat;
pub mod sort;
pub mod vector;

pub use elastica_buffer::{RawParts, ReserveError};
pub use sort::quicksort_by;
pub use vector::Vector;

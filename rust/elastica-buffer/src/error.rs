use std::alloc::Layout;

/// Error returned by the fallible reservation operations of
/// [`RawBuffer`](crate::RawBuffer).
///
/// Growth is the only operation on a buffer that can fail intrinsically.
/// The infallible mutators translate this error the way the standard
/// library containers do: `CapacityOverflow` becomes a panic and
/// `AllocFailed` is routed to [`std::alloc::handle_alloc_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReserveError {
    /// The requested capacity, in bytes, exceeds the maximum size of a
    /// single allocation (`isize::MAX`).
    #[error("requested buffer capacity overflows the maximum allocation size")]
    CapacityOverflow,

    /// The global allocator declined the request.
    #[error("memory allocation of {} bytes failed", layout.size())]
    AllocFailed {
        /// Layout of the allocation that could not be satisfied.
        layout: Layout,
    },
}

impl ReserveError {
    /// Escalates the error the way the infallible container operations do.
    ///
    /// Capacity overflow is a caller bug and panics; a genuine allocation
    /// failure is handed to the global allocation error hook, which aborts
    /// by default.
    pub(crate) fn escalate(self) -> ! {
        match self {
            ReserveError::CapacityOverflow => panic!("capacity overflow"),
            ReserveError::AllocFailed { layout } => std::alloc::handle_alloc_error(layout),
        }
    }
}

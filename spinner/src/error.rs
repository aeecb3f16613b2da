//! Precondition failures raised by the spin engine.

/// Error returned by spin, settle, reset, and rotation operations.
///
/// Every variant is a caller-visible precondition violation; none of them
/// represent an environmental fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpinError {
    /// A spin was requested with no items left in the pool.
    #[error("no items remain in the pool")]
    EmptyPool,
    /// A spin or reset was requested while a spin is still in flight.
    #[error("a spin is already in flight")]
    Busy,
    /// A settlement arrived for a spin that is no longer in flight.
    #[error("settlement ticket {0} does not match the spin in flight")]
    StaleTicket(u64),
    /// A segment index outside `[0, count)` was passed to the rotation math.
    #[error("segment index {index} out of range for {count} segments")]
    IndexOutOfRange { index: usize, count: usize },
}

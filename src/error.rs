//! Error taxonomy for inventory operations
//!
//! Every failure here is recoverable: the rejected operation is a no-op and
//! both containers keep their previous state.

use std::fmt;
use thiserror::Error;

/// Which container an exchange operation found lacking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Queue,
    Reserve,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Queue => write!(f, "queue"),
            Side::Reserve => write!(f, "reserve"),
        }
    }
}

/// Errors reported by the queue, the reserve and the exchange operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Insertion into a container already at capacity
    #[error("container is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Removal from an empty container
    #[error("container is empty")]
    Empty,

    /// Exchange preconditions unmet; `side` names the container that is short
    #[error("not enough pieces in the {side}")]
    InsufficientPieces { side: Side },

    /// Positional access outside the occupied range
    #[error("position {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

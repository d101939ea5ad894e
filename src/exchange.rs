//! Cross-container exchange operations
//!
//! Stateless procedures over a queue and a reserve. Both validate every
//! precondition before touching either container, so a failure never leaves a
//! partial swap behind.

use crate::error::{InventoryError, Side};
use crate::piece::Piece;
use crate::queue::PieceQueue;
use crate::reserve::PieceReserve;
use serde::{Deserialize, Serialize};

/// How full the reserve must be before a block swap is allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservePolicy {
    /// The reserve must be at capacity
    #[default]
    ExactlyFull,
    /// The reserve only needs enough pieces to cover the block
    AtLeastBlock,
}

/// Swap the queue's front piece with the reserve's top piece, in place.
///
/// Sizes stay untouched; only the two slot values change hands. No piece is
/// created or destroyed.
pub fn swap_front_top(
    queue: &mut PieceQueue,
    reserve: &mut PieceReserve,
) -> Result<(), InventoryError> {
    if queue.is_empty() {
        return Err(InventoryError::InsufficientPieces { side: Side::Queue });
    }
    if reserve.is_empty() {
        return Err(InventoryError::InsufficientPieces { side: Side::Reserve });
    }

    let front = queue.peek_front()?;
    let top = reserve.peek_top()?;
    queue.replace_at(0, top)?;
    reserve.replace_at(0, front)?;
    Ok(())
}

/// Swap the `block_len` front-most queue pieces with the reserve, pairing
/// queue offset `i` with reserve depth `i`.
///
/// Copy-then-commit: both sides are read into holding copies before any slot
/// is written, so the caller either sees the whole block swapped or nothing.
pub fn swap_block(
    queue: &mut PieceQueue,
    reserve: &mut PieceReserve,
    block_len: usize,
    policy: ReservePolicy,
) -> Result<(), InventoryError> {
    if queue.len() < block_len {
        return Err(InventoryError::InsufficientPieces { side: Side::Queue });
    }
    let reserve_ready = match policy {
        ReservePolicy::ExactlyFull => reserve.is_full() && reserve.len() >= block_len,
        ReservePolicy::AtLeastBlock => reserve.len() >= block_len,
    };
    if !reserve_ready {
        return Err(InventoryError::InsufficientPieces { side: Side::Reserve });
    }

    let mut queued: Vec<Piece> = Vec::with_capacity(block_len);
    let mut banked: Vec<Piece> = Vec::with_capacity(block_len);
    for rank in 0..block_len {
        queued.push(queue.peek_at(rank)?);
        banked.push(reserve.peek_at(rank)?);
    }
    for rank in 0..block_len {
        queue.replace_at(rank, banked[rank])?;
        reserve.replace_at(rank, queued[rank])?;
    }
    Ok(())
}

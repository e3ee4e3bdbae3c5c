//! Demand-paging simulation core: a fixed pool of physical frames, a
//! residency index over it, and pluggable victim-selection policies.
//!
//! Invariants:
//! - A page is resident in at most one frame at a time.
//! - The residency index and the frame slots change in the same call; no
//!   state is observable where they disagree.
//! - Victim selection runs only against a full pool and always evicts an
//!   occupied frame.

mod frame;
mod frame_table;
pub mod policy;
mod sim;

pub use frame::Frame;
pub use frame_table::FrameTable;
pub use policy::{PolicyKind, ReplacementPolicy};
pub use sim::{AccessKind, AccessOutcome, SimStats, Simulation, Victim};

use thiserror::Error;

/// Identifies a simulated virtual page.
pub type PageId = u64;

/// Identifies a slot in the physical frame pool.
pub type FrameId = usize;

/// Simulated page size in bytes.
pub const PAGE_SIZE: usize = 4096;

/// Low-order address bits discarded when mapping an address to its page.
pub const PAGE_OFFSET_BITS: u32 = 12;

/// Errors raised by the simulation core.
#[derive(Debug, Error)]
pub enum PagingError {
    /// The configured pool size is unusable.
    #[error("frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),
    /// An allocation targeted a slot that still holds a page.
    #[error("frame {frame_id} already holds page {page_id}")]
    FrameOccupied { frame_id: FrameId, page_id: PageId },
    /// An operation that needs a resident page hit an empty slot.
    #[error("frame {0} holds no page")]
    FrameEmpty(FrameId),
    /// A policy token did not name a supported policy.
    #[error("replacement policy must be rand, fifo, lru, or clock, got {0:?}")]
    UnknownPolicy(String),
    /// The frame store and a policy's bookkeeping disagree.
    #[error("replacement policy invariant violated: {0}")]
    PolicyInvariant(String),
}

/// Convenience alias for core results.
pub type PagingResult<T> = Result<T, PagingError>;

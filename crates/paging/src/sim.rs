use crate::frame_table::FrameTable;
use crate::policy::{PolicyKind, ReplacementPolicy};
use crate::{FrameId, PageId, PagingError, PagingResult};

/// A single trace reference, read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Read,
    Write,
}

/// The page displaced by a fault and whether its eviction cost a disk write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Victim {
    pub page_id: PageId,
    pub was_dirty: bool,
}

/// What one reference did to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was already resident.
    Hit,
    /// The page had to be read in, displacing `victim` if the pool was full.
    Fault { victim: Option<Victim> },
}

/// Running totals over every reference processed so far.
///
/// Every fault reads the page from disk, so `disk_reads` doubles as the
/// fault count. `disk_writes` counts dirty evictions only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub events: u64,
    pub disk_reads: u64,
    pub disk_writes: u64,
}

impl SimStats {
    /// Faulting fraction of all references, 0.0 for an empty run.
    pub fn fault_rate(&self) -> f64 {
        if self.events == 0 {
            0.0
        } else {
            self.disk_reads as f64 / self.events as f64
        }
    }
}

/// Demand-paging driver over a fixed frame pool.
///
/// Feeds every residency change to the replacement policy and keeps the
/// counters the summary report is printed from.
pub struct Simulation {
    table: FrameTable,
    policy: Box<dyn ReplacementPolicy>,
    stats: SimStats,
}

impl Simulation {
    /// Creates a simulation with an unseeded policy.
    pub fn new(num_frames: usize, kind: PolicyKind) -> PagingResult<Self> {
        Self::build(num_frames, kind, None)
    }

    /// Creates a simulation whose policy draws from a fixed seed.
    pub fn with_seed(num_frames: usize, kind: PolicyKind, seed: u64) -> PagingResult<Self> {
        Self::build(num_frames, kind, Some(seed))
    }

    fn build(num_frames: usize, kind: PolicyKind, seed: Option<u64>) -> PagingResult<Self> {
        let table = FrameTable::new(num_frames)?;
        Ok(Self {
            table,
            policy: kind.build(num_frames, seed),
            stats: SimStats::default(),
        })
    }

    /// Applies one trace reference and reports what it did.
    ///
    /// A resident page is a hit. A missing page is read from disk into a
    /// free frame, or into the policy's victim frame once the pool is full;
    /// evicting a dirty victim costs a disk write, a clean one is dropped.
    /// A `Write` reference dirties the page after it is resident.
    pub fn step(&mut self, page_id: PageId, kind: AccessKind) -> PagingResult<AccessOutcome> {
        let (frame_id, outcome) = match self.table.lookup(page_id) {
            Some(frame_id) => {
                self.policy.record_access(frame_id);
                (frame_id, AccessOutcome::Hit)
            }
            None => {
                self.stats.disk_reads += 1;
                let (frame_id, victim) = self.fault_in(page_id)?;
                (frame_id, AccessOutcome::Fault { victim })
            }
        };
        if kind == AccessKind::Write {
            self.table.mark_dirty(frame_id)?;
        }
        self.stats.events += 1;
        Ok(outcome)
    }

    fn fault_in(&mut self, page_id: PageId) -> PagingResult<(FrameId, Option<Victim>)> {
        if let Some(frame_id) = self.table.find_free() {
            self.table.allocate(frame_id, page_id)?;
            self.policy.record_load(frame_id);
            return Ok((frame_id, None));
        }

        let frame_id = self.policy.select_victim().ok_or_else(|| {
            PagingError::PolicyInvariant("no victim from a full pool".to_string())
        })?;
        if frame_id >= self.table.num_frames() {
            return Err(PagingError::PolicyInvariant(format!(
                "victim frame {frame_id} is out of range"
            )));
        }
        let (victim_page, was_dirty) = self.table.evict(frame_id)?;
        if was_dirty {
            self.stats.disk_writes += 1;
        }
        self.table.allocate(frame_id, page_id)?;
        self.policy.record_load(frame_id);
        Ok((
            frame_id,
            Some(Victim {
                page_id: victim_page,
                was_dirty,
            }),
        ))
    }

    /// Returns the counters accumulated so far.
    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Returns the fixed pool size.
    pub fn num_frames(&self) -> usize {
        self.table.num_frames()
    }

    /// Borrows the frame store for inspection.
    pub fn frame_table(&self) -> &FrameTable {
        &self.table
    }
}

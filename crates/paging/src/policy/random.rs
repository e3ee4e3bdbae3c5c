use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ReplacementPolicy;
use crate::FrameId;

/// Uniform random victim selection.
///
/// Every occupied frame is equally likely. Loads and hits carry no weight,
/// so the policy keeps no history at all, just the pool size and its rng.
#[derive(Debug)]
pub struct RandomPolicy {
    num_frames: usize,
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a random policy over `num_frames` slots.
    ///
    /// A fixed `seed` makes every draw reproducible; without one the rng is
    /// seeded from the operating system.
    pub fn new(num_frames: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { num_frames, rng }
    }
}

impl ReplacementPolicy for RandomPolicy {
    fn record_load(&mut self, _frame_id: FrameId) {}

    fn record_access(&mut self, _frame_id: FrameId) {}

    fn select_victim(&mut self) -> Option<FrameId> {
        if self.num_frames == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..self.num_frames))
    }
}

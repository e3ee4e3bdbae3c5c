use super::ReplacementPolicy;
use crate::FrameId;

/// Least-recently-used victim selection.
///
/// Each frame carries the logical time of its last load or hit. The victim
/// is the frame with the smallest stamp; equal stamps resolve to the lowest
/// frame index, which only matters before every frame has been touched.
#[derive(Debug)]
pub struct LruPolicy {
    stamps: Vec<u64>,
    clock: u64,
}

impl LruPolicy {
    /// Creates an LRU policy over `num_frames` slots.
    pub fn new(num_frames: usize) -> Self {
        Self {
            stamps: vec![0; num_frames],
            clock: 0,
        }
    }

    fn touch(&mut self, frame_id: FrameId) {
        self.clock += 1;
        self.stamps[frame_id] = self.clock;
    }
}

impl ReplacementPolicy for LruPolicy {
    fn record_load(&mut self, frame_id: FrameId) {
        self.touch(frame_id);
    }

    fn record_access(&mut self, frame_id: FrameId) {
        self.touch(frame_id);
    }

    // min_by_key keeps the first minimum, so ties land on the lowest index.
    fn select_victim(&mut self) -> Option<FrameId> {
        self.stamps
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|&(_, stamp)| stamp)
            .map(|(frame_id, _)| frame_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_touch_is_victim() {
        let mut policy = LruPolicy::new(2);
        policy.record_load(0);
        policy.record_load(1);
        assert_eq!(policy.select_victim(), Some(0));
    }

    #[test]
    fn test_hit_refreshes_a_frame() {
        let mut policy = LruPolicy::new(2);
        policy.record_load(0);
        policy.record_load(1);
        policy.record_access(0);
        assert_eq!(policy.select_victim(), Some(1));
    }

    #[test]
    fn test_reload_counts_as_a_touch() {
        let mut policy = LruPolicy::new(3);
        policy.record_load(0);
        policy.record_load(1);
        policy.record_load(2);
        policy.record_load(0);
        assert_eq!(policy.select_victim(), Some(1));
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        let mut policy = LruPolicy::new(3);
        assert_eq!(policy.select_victim(), Some(0));
    }
}

use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::FrameId;

/// First-in first-out victim selection.
///
/// Frames queue up in load order and leave from the front, so the victim
/// always holds the longest-resident page. Hits never reorder the queue.
#[derive(Debug)]
pub struct FifoPolicy {
    order: VecDeque<FrameId>,
}

impl FifoPolicy {
    /// Creates a FIFO policy over `num_frames` slots.
    pub fn new(num_frames: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(num_frames),
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn record_load(&mut self, frame_id: FrameId) {
        self.order.push_back(frame_id);
    }

    fn record_access(&mut self, _frame_id: FrameId) {}

    fn select_victim(&mut self) -> Option<FrameId> {
        self.order.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_victims_follow_load_order() {
        let mut policy = FifoPolicy::new(3);
        policy.record_load(0);
        policy.record_load(1);
        policy.record_load(2);
        assert_eq!(policy.select_victim(), Some(0));
        assert_eq!(policy.select_victim(), Some(1));
        assert_eq!(policy.select_victim(), Some(2));
        assert_eq!(policy.select_victim(), None);
    }

    #[test]
    fn test_hits_do_not_reorder() {
        let mut policy = FifoPolicy::new(2);
        policy.record_load(0);
        policy.record_load(1);
        policy.record_access(0);
        policy.record_access(0);
        assert_eq!(policy.select_victim(), Some(0));
    }

    #[test]
    fn test_reloaded_frame_requeues_at_back() {
        let mut policy = FifoPolicy::new(2);
        policy.record_load(0);
        policy.record_load(1);
        assert_eq!(policy.select_victim(), Some(0));
        policy.record_load(0);
        assert_eq!(policy.select_victim(), Some(1));
        assert_eq!(policy.select_victim(), Some(0));
    }
}

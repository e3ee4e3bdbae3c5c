use super::ReplacementPolicy;
use crate::FrameId;

/// Second-chance victim selection.
///
/// A hand sweeps the pool in index order, wrapping at the end. A set use
/// bit buys the frame one reprieve: the hand clears it and moves on. A
/// clear bit makes the frame the victim. When every bit is set the first
/// pass clears them all and the second pass takes the frame the sweep
/// started on, so selection always ends within two passes.
#[derive(Debug)]
pub struct ClockPolicy {
    use_bits: Vec<bool>,
    hand: usize,
}

impl ClockPolicy {
    /// Creates a clock policy over `num_frames` slots with the hand on
    /// frame 0.
    pub fn new(num_frames: usize) -> Self {
        Self {
            use_bits: vec![false; num_frames],
            hand: 0,
        }
    }
}

impl ReplacementPolicy for ClockPolicy {
    fn record_load(&mut self, frame_id: FrameId) {
        self.use_bits[frame_id] = true;
    }

    fn record_access(&mut self, frame_id: FrameId) {
        self.use_bits[frame_id] = true;
    }

    fn select_victim(&mut self) -> Option<FrameId> {
        // Bounded at two passes; an empty pool falls through to None.
        for _ in 0..2 * self.use_bits.len() {
            let frame_id = self.hand;
            self.hand = (self.hand + 1) % self.use_bits.len();
            if self.use_bits[frame_id] {
                self.use_bits[frame_id] = false;
            } else {
                return Some(frame_id);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bits_set_takes_sweep_start() {
        let mut policy = ClockPolicy::new(3);
        policy.record_load(0);
        policy.record_load(1);
        policy.record_load(2);
        assert_eq!(policy.select_victim(), Some(0));
    }

    #[test]
    fn test_cleared_bits_persist_between_sweeps() {
        let mut policy = ClockPolicy::new(2);
        policy.record_load(0);
        policy.record_load(1);
        // First sweep clears both bits and wraps back to frame 0.
        assert_eq!(policy.select_victim(), Some(0));
        policy.record_load(0);
        // Frame 1's bit is still clear, so the hand takes it directly.
        assert_eq!(policy.select_victim(), Some(1));
    }

    #[test]
    fn test_use_bit_buys_exactly_one_pass() {
        let mut policy = ClockPolicy::new(3);
        policy.record_load(0);
        policy.record_load(1);
        policy.record_load(2);
        assert_eq!(policy.select_victim(), Some(0));
        policy.record_load(0);
        policy.record_access(1);
        // Hand sits on frame 1: its fresh bit defers it, frame 2 is taken.
        assert_eq!(policy.select_victim(), Some(2));
    }

    #[test]
    fn test_hand_resumes_past_last_victim() {
        let mut policy = ClockPolicy::new(3);
        policy.record_load(0);
        policy.record_load(1);
        policy.record_load(2);
        assert_eq!(policy.select_victim(), Some(0));
        policy.record_load(0);
        assert_eq!(policy.select_victim(), Some(1));
        policy.record_load(1);
        assert_eq!(policy.select_victim(), Some(2));
    }

    #[test]
    fn test_empty_pool_yields_no_victim() {
        let mut policy = ClockPolicy::new(0);
        assert_eq!(policy.select_victim(), None);
    }
}

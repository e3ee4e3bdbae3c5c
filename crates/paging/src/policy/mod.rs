mod clock;
mod fifo;
mod lru;
mod random;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use random::RandomPolicy;

use std::fmt;
use std::str::FromStr;

use crate::{FrameId, PagingError};

/// Victim selection strategy over a fixed frame pool.
///
/// The driver reports every load and every hit; a policy answers victim
/// queries from that record alone. Implementations track frame indices
/// only and never see page contents.
pub trait ReplacementPolicy {
    /// Records that a page was just loaded into `frame_id`.
    fn record_load(&mut self, frame_id: FrameId);

    /// Records a hit on the page resident in `frame_id`.
    fn record_access(&mut self, frame_id: FrameId);

    /// Chooses an occupied frame to evict. Called only when the pool is
    /// full, so `None` signals a policy defect rather than free space.
    fn select_victim(&mut self) -> Option<FrameId>;
}

/// The four selectable replacement strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Rand,
    Fifo,
    Lru,
    Clock,
}

impl PolicyKind {
    /// Builds a fresh policy for a pool of `num_frames` slots.
    ///
    /// `seed` fixes the random policy's draws for reproducible runs; the
    /// deterministic policies ignore it.
    pub fn build(self, num_frames: usize, seed: Option<u64>) -> Box<dyn ReplacementPolicy> {
        match self {
            PolicyKind::Rand => Box::new(RandomPolicy::new(num_frames, seed)),
            PolicyKind::Fifo => Box::new(FifoPolicy::new(num_frames)),
            PolicyKind::Lru => Box::new(LruPolicy::new(num_frames)),
            PolicyKind::Clock => Box::new(ClockPolicy::new(num_frames)),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = PagingError;

    /// Parses the exact lowercase policy token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rand" => Ok(PolicyKind::Rand),
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "clock" => Ok(PolicyKind::Clock),
            other => Err(PagingError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Rand => "rand",
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Clock => "clock",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_policy_names() {
        assert_eq!("rand".parse::<PolicyKind>().unwrap(), PolicyKind::Rand);
        assert_eq!("fifo".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert_eq!("lru".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
        assert_eq!("clock".parse::<PolicyKind>().unwrap(), PolicyKind::Clock);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "LRU".parse::<PolicyKind>(),
            Err(PagingError::UnknownPolicy(name)) if name == "LRU"
        ));
        assert!("random".parse::<PolicyKind>().is_err());
        assert!("".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in [
            PolicyKind::Rand,
            PolicyKind::Fifo,
            PolicyKind::Lru,
            PolicyKind::Clock,
        ] {
            assert_eq!(kind.to_string().parse::<PolicyKind>().unwrap(), kind);
        }
    }
}

//! Process-wide version counter used to discard stale spot resolutions.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, OnceLock,
};

/// Monotonically increasing epoch shared by everything that edits itineraries.
///
/// Cloning yields another handle to the same counter. Every resolver dispatch
/// captures [`EpochCounter::current`]; a result is committed only while that
/// value is still current.
#[derive(Debug, Clone, Default)]
pub struct EpochCounter(Arc<AtomicU64>);

impl EpochCounter {
    /// Creates an independent counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The counter shared by the whole process.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<EpochCounter> = OnceLock::new();
        GLOBAL.get_or_init(EpochCounter::new).clone()
    }

    /// Current epoch value.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Advances the epoch and returns the new value.
    pub fn bump(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `epoch` is still the current value.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.current() == epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_is_monotonic() {
        let epoch = EpochCounter::new();
        assert_eq!(epoch.current(), 0);
        assert_eq!(epoch.bump(), 1);
        assert_eq!(epoch.bump(), 2);
        assert!(epoch.is_current(2));
        assert!(!epoch.is_current(1));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let epoch = EpochCounter::new();
        let other = epoch.clone();
        other.bump();
        assert_eq!(epoch.current(), 1);
    }

    #[test]
    fn test_global_is_shared() {
        let a = EpochCounter::global();
        let b = EpochCounter::global();
        let before = b.current();
        a.bump();
        assert!(b.current() > before);
    }
}

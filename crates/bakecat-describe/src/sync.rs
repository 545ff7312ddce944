//! Reentrancy guard between the text → record and record → text directions.

/// Whether a synchronization is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    #[default]
    Idle,
    Syncing,
}

/// Blocks the opposite direction from reacting to an update this side just
/// produced. Entered before the update is handed over, released on the
/// host's next tick.
#[derive(Debug, Clone, Default)]
pub struct SyncGuard {
    state: SyncState,
}

impl SyncGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `Idle` → `Syncing`. Returns `false` and changes nothing if a sync is
    /// already in flight.
    pub fn try_begin(&mut self) -> bool {
        match self.state {
            SyncState::Idle => {
                self.state = SyncState::Syncing;
                true
            }
            SyncState::Syncing => false,
        }
    }

    /// `Syncing` → `Idle`; a no-op when idle.
    pub fn tick(&mut self) {
        self.state = SyncState::Idle;
    }

    #[must_use]
    pub fn state(&self) -> SyncState {
        self.state
    }

    #[must_use]
    pub fn is_syncing(&self) -> bool {
        self.state == SyncState::Syncing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let guard = SyncGuard::new();
        assert_eq!(guard.state(), SyncState::Idle);
        assert!(!guard.is_syncing());
    }

    #[test]
    fn begin_enters_syncing() {
        let mut guard = SyncGuard::new();
        assert!(guard.try_begin());
        assert_eq!(guard.state(), SyncState::Syncing);
    }

    #[test]
    fn second_begin_is_refused() {
        let mut guard = SyncGuard::new();
        assert!(guard.try_begin());
        assert!(!guard.try_begin());
        assert_eq!(guard.state(), SyncState::Syncing);
    }

    #[test]
    fn tick_returns_to_idle() {
        let mut guard = SyncGuard::new();
        guard.try_begin();
        guard.tick();
        assert_eq!(guard.state(), SyncState::Idle);
        assert!(guard.try_begin());
    }

    #[test]
    fn tick_when_idle_is_no_op() {
        let mut guard = SyncGuard::new();
        guard.tick();
        assert_eq!(guard.state(), SyncState::Idle);
    }
}

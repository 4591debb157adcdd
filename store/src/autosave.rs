//! Debounced auto-save core.
//!
//! The timer itself lives in the webapp (a gloo Timeout that the hook restarts
//! on every change); this struct is the deterministic part: snapshot diffing
//! against the last save, arming, expiry and the save-now escape hatch.  Saves
//! are naturally serialized because at most one logical timer is armed.

/// What the caller should do with its timer after reporting a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveAction {
    /// Snapshot matches the last save; leave everything alone.
    Unchanged,
    /// Snapshot differs; (re)start the debounce timer.
    Arm,
}

#[derive(Clone, Debug, Default)]
pub struct AutoSave {
    last_saved: Option<String>,
    pending: Option<String>,
}

impl AutoSave {
    pub fn new() -> Self {
        AutoSave::default()
    }

    /// Treat `snapshot` as already persisted (the state loaded at startup).
    pub fn seeded(snapshot: String) -> Self {
        AutoSave {
            last_saved: Some(snapshot),
            pending: None,
        }
    }

    /// Report the current serialized state after a mutation.
    pub fn observe(&mut self, snapshot: String) -> SaveAction {
        if self.last_saved.as_deref() == Some(snapshot.as_str()) {
            // back to the saved state; an already-armed timer will expire
            // with nothing pending and save nothing
            self.pending = None;
            return SaveAction::Unchanged;
        }
        self.pending = Some(snapshot);
        SaveAction::Arm
    }

    /// The debounce delay elapsed: returns the payload to persist, if any.
    pub fn expire(&mut self) -> Option<String> {
        let payload = self.pending.take()?;
        self.last_saved = Some(payload.clone());
        Some(payload)
    }

    /// Save immediately with the given state, cancelling any pending payload.
    ///
    /// Returns None when the state already matches the last save.
    pub fn save_now(&mut self, snapshot: String) -> Option<String> {
        self.pending = None;
        if self.last_saved.as_deref() == Some(snapshot.as_str()) {
            return None;
        }
        self.last_saved = Some(snapshot.clone());
        Some(snapshot)
    }

    pub fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_changes_saves_once_with_final_state() {
        let mut auto = AutoSave::seeded("v0".into());

        assert_eq!(auto.observe("v1".into()), SaveAction::Arm);
        assert_eq!(auto.observe("v2".into()), SaveAction::Arm);
        assert_eq!(auto.observe("v3".into()), SaveAction::Arm);

        // only the final expiry (the one the last Arm restarted) persists
        assert_eq!(auto.expire(), Some("v3".into()));
        assert_eq!(auto.expire(), None);
    }

    #[test]
    fn unchanged_snapshot_does_not_arm() {
        let mut auto = AutoSave::seeded("v0".into());
        assert_eq!(auto.observe("v0".into()), SaveAction::Unchanged);
        assert_eq!(auto.expire(), None);
    }

    #[test]
    fn revert_to_saved_state_disarms() {
        let mut auto = AutoSave::seeded("v0".into());
        assert_eq!(auto.observe("v1".into()), SaveAction::Arm);
        assert_eq!(auto.observe("v0".into()), SaveAction::Unchanged);
        assert_eq!(auto.expire(), None);
    }

    #[test]
    fn save_now_flushes_and_cancels_pending() {
        let mut auto = AutoSave::seeded("v0".into());
        assert_eq!(auto.observe("v1".into()), SaveAction::Arm);

        assert_eq!(auto.save_now("v1".into()), Some("v1".into()));
        // the timer the caller failed to cancel finds nothing to do
        assert_eq!(auto.expire(), None);

        // and a second save-now with the same state is a no-op
        assert_eq!(auto.save_now("v1".into()), None);
    }

    #[test]
    fn expiry_updates_the_diff_baseline() {
        let mut auto = AutoSave::new();
        assert_eq!(auto.observe("v1".into()), SaveAction::Arm);
        assert_eq!(auto.expire(), Some("v1".into()));
        assert_eq!(auto.observe("v1".into()), SaveAction::Unchanged);
        assert_eq!(auto.observe("v2".into()), SaveAction::Arm);
        assert!(auto.is_dirty());
    }
}

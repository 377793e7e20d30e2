//! # Confirmation flow
//!
//! One small state machine shared by the edit, delete and toggle-status
//! dialogs instead of a per-dialog open-flag/selection pair:
//!
//! ```text
//! Idle --open--> Selected --begin--> InFlight --succeed--> Idle
//!                   ^                    |
//!                   +------- fail ------+
//! ```
//!
//! A failed mutation returns to `Selected` so the dialog stays open with
//! the user's target (and form state) intact; success closes the dialog
//! and clears the selection.

/// Where a confirmation flow currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowStage {
    #[default]
    Idle,
    Selected,
    InFlight,
}

/// Dialog lifecycle for one operation, holding at most one target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfirmationFlow<T> {
    stage: FlowStage,
    target: Option<T>,
}

impl<T: Clone> ConfirmationFlow<T> {
    pub fn new() -> Self {
        Self {
            stage: FlowStage::Idle,
            target: None,
        }
    }

    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// The dialog is visible in `Selected` and `InFlight`.
    pub fn is_open(&self) -> bool {
        self.stage != FlowStage::Idle
    }

    pub fn in_flight(&self) -> bool {
        self.stage == FlowStage::InFlight
    }

    /// Select a target and open the dialog. Ignored while a previous
    /// operation is still in flight.
    pub fn open(&mut self, target: T) {
        if self.stage == FlowStage::InFlight {
            return;
        }
        self.stage = FlowStage::Selected;
        self.target = Some(target);
    }

    /// Dismiss the dialog without acting. Ignored while in flight.
    pub fn cancel(&mut self) {
        if self.stage == FlowStage::InFlight {
            return;
        }
        self.stage = FlowStage::Idle;
        self.target = None;
    }

    /// Move `Selected → InFlight`, handing the caller the target to act
    /// on. Returns `None` (and does nothing) from any other stage, which
    /// makes a double-submit a no-op.
    pub fn begin(&mut self) -> Option<T> {
        if self.stage != FlowStage::Selected {
            return None;
        }
        self.stage = FlowStage::InFlight;
        self.target.clone()
    }

    /// The operation succeeded: close the dialog and clear the selection.
    pub fn succeed(&mut self) {
        self.stage = FlowStage::Idle;
        self.target = None;
    }

    /// The operation failed: back to `Selected`, dialog open, target kept.
    pub fn fail(&mut self) {
        if self.stage == FlowStage::InFlight {
            self.stage = FlowStage::Selected;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_returns_to_idle() {
        let mut flow = ConfirmationFlow::new();
        assert!(!flow.is_open());

        flow.open("acct-1");
        assert_eq!(flow.stage(), FlowStage::Selected);
        assert_eq!(flow.target(), Some(&"acct-1"));

        assert_eq!(flow.begin(), Some("acct-1"));
        assert!(flow.in_flight());

        flow.succeed();
        assert_eq!(flow.stage(), FlowStage::Idle);
        assert!(flow.target().is_none());
    }

    #[test]
    fn failure_keeps_dialog_open_with_target() {
        let mut flow = ConfirmationFlow::new();
        flow.open("acct-1");
        flow.begin();

        flow.fail();
        assert_eq!(flow.stage(), FlowStage::Selected);
        assert_eq!(flow.target(), Some(&"acct-1"));

        // the user may retry
        assert_eq!(flow.begin(), Some("acct-1"));
    }

    #[test]
    fn begin_requires_a_selection() {
        let mut flow = ConfirmationFlow::<&str>::new();
        assert_eq!(flow.begin(), None);
        assert_eq!(flow.stage(), FlowStage::Idle);
    }

    #[test]
    fn double_begin_is_a_noop() {
        let mut flow = ConfirmationFlow::new();
        flow.open("acct-1");
        assert!(flow.begin().is_some());
        assert_eq!(flow.begin(), None);
        assert!(flow.in_flight());
    }

    #[test]
    fn cancel_and_open_are_ignored_in_flight() {
        let mut flow = ConfirmationFlow::new();
        flow.open("acct-1");
        flow.begin();

        flow.cancel();
        assert!(flow.in_flight());

        flow.open("acct-2");
        assert_eq!(flow.target(), Some(&"acct-1"));
    }

    #[test]
    fn cancel_clears_selection() {
        let mut flow = ConfirmationFlow::new();
        flow.open("acct-1");
        flow.cancel();
        assert_eq!(flow.stage(), FlowStage::Idle);
        assert!(flow.target().is_none());
    }

    #[test]
    fn reopening_replaces_target() {
        let mut flow = ConfirmationFlow::new();
        flow.open("acct-1");
        flow.open("acct-2");
        assert_eq!(flow.target(), Some(&"acct-2"));
    }
}

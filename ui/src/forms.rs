//! Form field state and the simulated submission lifecycle.
//!
//! Both site forms (consultation contact, free-reading lead capture) share
//! one state machine instead of two hand-copied controllers. Field values
//! live in a name→value map; the submission phase is
//! `Idle → Submitting → Success → Idle` for the asynchronous form, and
//! `Idle → Success → Idle` for the synchronous one.
//!
//! There is no real backend: the "latency" is a scheduled timer and the
//! submitted values are logged and discarded. The timed transitions carry a
//! submit id minted by [`FormMachine::begin_submit`]; a timer that fires
//! after its submission was superseded (or after the machine was reset) no
//! longer matches and is ignored, so a torn-down or restarted form never
//! sees a stale phase change.

use std::collections::BTreeMap;

/// Simulated round-trip latency before a submission "completes".
pub const SUBMIT_LATENCY_MS: u64 = 1_500;

/// How long the success acknowledgment stays up before the form returns.
pub const SUCCESS_LINGER_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMachine {
    fields: BTreeMap<&'static str, String>,
    phase: SubmitPhase,
    submit_id: u64,
}

impl FormMachine {
    /// A machine holding the given named fields, all empty, in `Idle`.
    pub fn new(field_names: &[&'static str]) -> Self {
        Self {
            fields: field_names.iter().map(|name| (*name, String::new())).collect(),
            phase: SubmitPhase::Idle,
            submit_id: 0,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == SubmitPhase::Success
    }

    /// Current value of a field; unknown names read as empty.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Merge one edit into the record. Names the machine was not constructed
    /// with are ignored. Editing while the success acknowledgment is up
    /// dismisses it; the acknowledgment is one-shot.
    pub fn set_field(&mut self, name: &str, value: String) {
        if let Some(slot) = self.fields.get_mut(name) {
            *slot = value;
            if self.phase == SubmitPhase::Success {
                self.phase = SubmitPhase::Idle;
            }
        }
    }

    /// Snapshot of all field values, for logging at the submission boundary.
    pub fn values(&self) -> BTreeMap<&'static str, String> {
        self.fields.clone()
    }

    pub fn clear_fields(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }

    /// Start an asynchronous submission. Returns the submit id the caller
    /// must thread through its scheduled [`complete_submit`] /
    /// [`dismiss_success`] calls, or `None` when a submission is already in
    /// flight or the acknowledgment is still up.
    pub fn begin_submit(&mut self) -> Option<u64> {
        if self.phase != SubmitPhase::Idle {
            return None;
        }
        self.submit_id += 1;
        self.phase = SubmitPhase::Submitting;
        Some(self.submit_id)
    }

    /// The simulated round trip came back. Clears the fields and shows the
    /// acknowledgment. Stale ids (a superseded submission) are ignored.
    pub fn complete_submit(&mut self, submit_id: u64) -> bool {
        if self.phase != SubmitPhase::Submitting || submit_id != self.submit_id {
            return false;
        }
        self.clear_fields();
        self.phase = SubmitPhase::Success;
        true
    }

    /// The acknowledgment window elapsed; fall back to `Idle`. Stale ids are
    /// ignored, as is a dismissal that already happened via an edit.
    pub fn dismiss_success(&mut self, submit_id: u64) -> bool {
        if self.phase != SubmitPhase::Success || submit_id != self.submit_id {
            return false;
        }
        self.phase = SubmitPhase::Idle;
        true
    }

    /// Synchronous submission (no simulated latency): snapshot the values,
    /// clear every field and show the acknowledgment immediately. Returns
    /// the snapshot for logging.
    pub fn submit_immediate(&mut self) -> BTreeMap<&'static str, String> {
        let snapshot = self.values();
        self.clear_fields();
        self.submit_id += 1;
        self.phase = SubmitPhase::Success;
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &["name", "email", "question"];

    fn filled_machine() -> FormMachine {
        let mut machine = FormMachine::new(FIELDS);
        machine.set_field("name", "Test".into());
        machine.set_field("email", "t@example.com".into());
        machine.set_field("question", "career".into());
        machine
    }

    #[test]
    fn starts_idle_with_empty_named_fields() {
        let machine = FormMachine::new(FIELDS);
        assert_eq!(machine.phase(), SubmitPhase::Idle);
        for name in FIELDS {
            assert_eq!(machine.field(name), "");
        }
    }

    #[test]
    fn unknown_field_edits_are_ignored() {
        let mut machine = FormMachine::new(FIELDS);
        machine.set_field("phone", "123".into());
        assert_eq!(machine.field("phone"), "");
        assert_eq!(machine.values().len(), FIELDS.len());
    }

    #[test]
    fn async_lifecycle_runs_idle_submitting_success_idle() {
        let mut machine = filled_machine();

        let id = machine.begin_submit().expect("submit from idle");
        assert_eq!(machine.phase(), SubmitPhase::Submitting);
        // Fields are intact until the simulated round trip returns.
        assert_eq!(machine.field("name"), "Test");

        assert!(machine.complete_submit(id));
        assert_eq!(machine.phase(), SubmitPhase::Success);
        for name in FIELDS {
            assert_eq!(machine.field(name), "", "{name} not cleared");
        }

        assert!(machine.dismiss_success(id));
        assert_eq!(machine.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn resubmit_is_rejected_while_in_flight_or_acknowledged() {
        let mut machine = filled_machine();
        let id = machine.begin_submit().expect("submit from idle");
        assert_eq!(machine.begin_submit(), None);
        machine.complete_submit(id);
        assert_eq!(machine.begin_submit(), None);
        machine.dismiss_success(id);
        assert!(machine.begin_submit().is_some());
    }

    #[test]
    fn stale_timers_are_ignored() {
        let mut machine = filled_machine();
        let first = machine.begin_submit().expect("first submit");
        assert!(machine.complete_submit(first));
        assert!(machine.dismiss_success(first));

        machine.set_field("name", "Again".into());
        let second = machine.begin_submit().expect("second submit");
        assert_ne!(first, second);

        // Leftover timers from the first submission fire late: no effect.
        assert!(!machine.complete_submit(first));
        assert!(!machine.dismiss_success(first));
        assert_eq!(machine.phase(), SubmitPhase::Submitting);

        assert!(machine.complete_submit(second));
        // A dismiss for the completed submission is a no-op once an edit
        // already dismissed the acknowledgment.
        machine.set_field("name", "Edited".into());
        assert_eq!(machine.phase(), SubmitPhase::Idle);
        assert!(!machine.dismiss_success(second));
    }

    #[test]
    fn immediate_submit_clears_fields_and_returns_snapshot() {
        let mut machine = filled_machine();
        let snapshot = machine.submit_immediate();
        assert_eq!(snapshot.get("name").map(String::as_str), Some("Test"));
        assert_eq!(machine.phase(), SubmitPhase::Success);
        for name in FIELDS {
            assert_eq!(machine.field(name), "");
        }
        // Next edit dismisses the one-shot acknowledgment.
        machine.set_field("name", "Next".into());
        assert_eq!(machine.phase(), SubmitPhase::Idle);
    }
}

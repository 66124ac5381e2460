// SPDX-License-Identifier: Apache-2.0

//! Session lifecycle with typed state transitions.
//!
//! Implements the payload lifecycle: Empty → Loaded → Benchmarking →
//! Complete. Invalid transitions result in StateTransitionError.

use std::path::Path;

use crate::codec::CodecRegistry;
use crate::error::{HarnessError, HarnessResult, StateTransitionError};
use crate::payload::Payload;
use crate::report::RunReport;
use crate::runner::BenchRunner;
use crate::sample;

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No payload loaded; running is rejected.
    Empty,

    /// Payload present, no results yet.
    Loaded,

    /// A run is in progress; re-entrant runs are rejected.
    Benchmarking,

    /// Payload present with results from a completed run.
    Complete,
}

impl SessionState {
    /// Get the state name for error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Loaded => "Loaded",
            Self::Benchmarking => "Benchmarking",
            Self::Complete => "Complete",
        }
    }

    /// Check if transition to the target state is valid.
    pub fn can_transition_to(&self, target: SessionState) -> bool {
        matches!(
            (self, target),
            // Loading (and reloading, which discards stale results)
            (Self::Empty, Self::Loaded) |
            (Self::Loaded, Self::Loaded) |
            (Self::Complete, Self::Loaded) |
            // Running; re-running after a completed run is allowed
            (Self::Loaded, Self::Benchmarking) |
            (Self::Complete, Self::Benchmarking) |
            (Self::Benchmarking, Self::Complete) |
            // Reset is unconditional
            (_, Self::Empty)
        )
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One benchmarking session: the current payload, the current results, and
/// the codec registry they run against.
///
/// The payload and report are exclusively owned here; callers only read
/// committed snapshots through the accessors.
pub struct BenchSession {
    state: SessionState,
    payload: Option<Payload>,
    report: Option<RunReport>,
    registry: CodecRegistry,
    runner: BenchRunner,
}

impl BenchSession {
    /// Create an empty session over the built-in codec registry.
    pub fn new() -> Self {
        Self::with_registry(CodecRegistry::builtin())
    }

    /// Create an empty session over an explicit registry.
    pub fn with_registry(registry: CodecRegistry) -> Self {
        Self {
            state: SessionState::Empty,
            payload: None,
            report: None,
            registry,
            runner: BenchRunner::new(),
        }
    }

    /// Replace the runner configuration (e.g. to disable verification).
    pub fn with_runner(mut self, runner: BenchRunner) -> Self {
        self.runner = runner;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The currently loaded payload, if any.
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// The last completed run's report, if any.
    pub fn report(&self) -> Option<&RunReport> {
        self.report.as_ref()
    }

    /// The registry this session benchmarks against.
    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    /// Load the built-in ~1 MB sample payload.
    pub fn load_sample(&mut self) -> HarnessResult<()> {
        self.install_payload(sample::default_sample())
    }

    /// Load a payload from a local file.
    ///
    /// On any read or parse error the current payload, results, and state
    /// are left unchanged.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> HarnessResult<()> {
        let payload = Payload::from_file(path)?;
        self.install_payload(payload)
    }

    /// Load an in-memory payload directly.
    pub fn load_payload(&mut self, payload: Payload) -> HarnessResult<()> {
        self.install_payload(payload)
    }

    /// Run one benchmark pass over the loaded payload.
    ///
    /// Rejected with [`HarnessError::NoPayload`] when nothing is loaded.
    /// The new report replaces any prior one wholesale.
    pub fn run(&mut self) -> HarnessResult<&RunReport> {
        // The payload is taken for the duration of the run and restored
        // afterwards; it stays the session's property either way.
        let Some(payload) = self.payload.take() else {
            return Err(HarnessError::NoPayload);
        };
        if let Err(err) = self.transition_to(SessionState::Benchmarking) {
            self.payload = Some(payload);
            return Err(err.into());
        }

        let report = self.runner.run(&self.registry, &payload);
        self.payload = Some(payload);
        self.transition_to(SessionState::Complete)?;

        Ok(self.report.insert(report))
    }

    /// Discard payload and results unconditionally.
    pub fn reset(&mut self) {
        tracing::debug!(from = self.state.name(), "session reset");
        self.payload = None;
        self.report = None;
        self.state = SessionState::Empty;
    }

    /// Install a new payload, discarding stale results.
    fn install_payload(&mut self, payload: Payload) -> HarnessResult<()> {
        self.transition_to(SessionState::Loaded)?;
        self.payload = Some(payload);
        self.report = None;
        Ok(())
    }

    fn transition_to(&mut self, target: SessionState) -> Result<(), StateTransitionError> {
        if !self.state.can_transition_to(target) {
            return Err(StateTransitionError::InvalidTransition {
                from: self.state.name(),
                to: target.name(),
            });
        }

        tracing::debug!(from = self.state.name(), to = target.name(), "state transition");
        self.state = target;
        Ok(())
    }
}

impl Default for BenchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Payload {
        Payload::new(serde_json::json!({"a": 1}))
    }

    #[test]
    fn test_run_without_payload_is_rejected() {
        let mut session = BenchSession::new();
        assert_eq!(session.state(), SessionState::Empty);
        assert!(matches!(session.run(), Err(HarnessError::NoPayload)));
        // Rejection leaves the state untouched
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_load_run_complete() {
        let mut session = BenchSession::new();
        session.load_payload(tiny()).unwrap();
        assert_eq!(session.state(), SessionState::Loaded);

        let report = session.run().unwrap();
        assert_eq!(report.results.len(), 5);
        assert_eq!(session.state(), SessionState::Complete);
        assert!(session.report().is_some());
    }

    #[test]
    fn test_reload_clears_stale_results() {
        let mut session = BenchSession::new();
        session.load_payload(tiny()).unwrap();
        session.run().unwrap();
        assert!(session.report().is_some());

        session.load_payload(tiny()).unwrap();
        assert_eq!(session.state(), SessionState::Loaded);
        assert!(session.report().is_none());
    }

    #[test]
    fn test_payload_survives_run() {
        let mut session = BenchSession::new();
        session.load_payload(tiny()).unwrap();
        session.run().unwrap();

        let payload = session.payload().expect("payload must survive the run");
        assert_eq!(payload.value()["a"], 1);
    }

    #[test]
    fn test_rerun_replaces_report() {
        let mut session = BenchSession::new();
        session.load_payload(tiny()).unwrap();
        let first = session.run().unwrap().timestamp;
        let second = session.run().unwrap().timestamp;
        assert!(second >= first);
        assert_eq!(session.state(), SessionState::Complete);
    }

    #[test]
    fn test_reset_then_run_is_rejected() {
        let mut session = BenchSession::new();
        session.load_payload(tiny()).unwrap();
        session.run().unwrap();

        session.reset();
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.payload().is_none());
        assert!(session.report().is_none());
        assert!(matches!(session.run(), Err(HarnessError::NoPayload)));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!SessionState::Empty.can_transition_to(SessionState::Benchmarking));
        assert!(!SessionState::Empty.can_transition_to(SessionState::Complete));
        assert!(!SessionState::Benchmarking.can_transition_to(SessionState::Benchmarking));
        assert!(!SessionState::Benchmarking.can_transition_to(SessionState::Loaded));
        assert!(SessionState::Benchmarking.can_transition_to(SessionState::Empty));
    }

    #[test]
    fn test_failed_file_load_leaves_session_unchanged() {
        let mut session = BenchSession::new();
        session.load_payload(tiny()).unwrap();
        session.run().unwrap();

        let err = session.load_file("/nonexistent/file.json").unwrap_err();
        assert!(matches!(err, HarnessError::PayloadRead { .. }));
        // Previous payload and results survive
        assert_eq!(session.state(), SessionState::Complete);
        assert!(session.payload().is_some());
        assert!(session.report().is_some());
    }
}

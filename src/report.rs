//! Lifecycle of the remote report requests.

use std::{
    collections::HashMap,
    fmt::Display,
    sync::{Mutex, PoisonError},
};

use async_graphql::Enum;
use thiserror::Error;
use tracing::error;

/// Text recorded when the model answers with an empty body.
pub(crate) const NO_DATA: &str = "No data returned.";

/// The independent report actions. Each one has its own state.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum ReportKind {
    AdvisorBrief,
    PlatformComparison,
    AudienceProfile,
}

impl ReportKind {
    /// Message shown in place of a report that could not be generated.
    pub(crate) fn fallback(self) -> &'static str {
        match self {
            Self::AdvisorBrief => {
                "The advisor is currently offline. Please check your API credentials."
            }
            Self::PlatformComparison => "Analysis failed. Please check your connection.",
            Self::AudienceProfile => "Audience profile generation failed. Please try again later.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum ReportState {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    /// Holds the message shown to the user, not the underlying error.
    Failed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0:?} request is already in progress")]
pub(crate) struct ReportBusy(pub(crate) ReportKind);

#[derive(Default)]
pub(crate) struct ReportTracker {
    states: Mutex<HashMap<ReportKind, ReportState>>,
}

impl ReportTracker {
    pub(crate) fn state(&self, kind: ReportKind) -> ReportState {
        self.lock().get(&kind).cloned().unwrap_or_default()
    }

    /// Moves `kind` to `Pending`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportBusy`] if a request of the same kind is still pending.
    pub(crate) fn begin(&self, kind: ReportKind) -> Result<PendingReport<'_>, ReportBusy> {
        let mut states = self.lock();
        let state = states.entry(kind).or_default();
        if *state == ReportState::Pending {
            return Err(ReportBusy(kind));
        }
        *state = ReportState::Pending;
        Ok(PendingReport {
            tracker: self,
            kind,
            finished: false,
        })
    }

    fn set(&self, kind: ReportKind, state: ReportState) {
        self.lock().insert(kind, state);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ReportKind, ReportState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A request in flight. Dropping it without calling [`PendingReport::finish`]
/// records the kind's fallback message, so a state never stays pending.
pub(crate) struct PendingReport<'a> {
    tracker: &'a ReportTracker,
    kind: ReportKind,
    finished: bool,
}

impl PendingReport<'_> {
    /// Records the outcome of the request and returns the new state.
    pub(crate) fn finish<E: Display>(mut self, outcome: Result<String, E>) -> ReportState {
        let state = match outcome {
            Ok(text) if text.trim().is_empty() => ReportState::Succeeded(NO_DATA.to_string()),
            Ok(text) => ReportState::Succeeded(text),
            Err(e) => {
                error!("{:?} request failed: {e}", self.kind);
                ReportState::Failed(self.kind.fallback().to_string())
            }
        };
        self.tracker.set(self.kind, state.clone());
        self.finished = true;
        state
    }
}

impl Drop for PendingReport<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.tracker.set(
                self.kind,
                ReportState::Failed(self.kind.fallback().to_string()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let tracker = ReportTracker::default();
        assert_eq!(tracker.state(ReportKind::AdvisorBrief), ReportState::Idle);
    }

    #[test]
    fn success_path() {
        let tracker = ReportTracker::default();
        let pending = tracker.begin(ReportKind::AdvisorBrief).unwrap();
        assert_eq!(tracker.state(ReportKind::AdvisorBrief), ReportState::Pending);

        let state = pending.finish(Ok::<_, String>("Executive Summary".to_string()));
        assert_eq!(state, ReportState::Succeeded("Executive Summary".to_string()));
        assert_eq!(tracker.state(ReportKind::AdvisorBrief), state);
    }

    #[test]
    fn empty_text_becomes_no_data() {
        let tracker = ReportTracker::default();
        let pending = tracker.begin(ReportKind::PlatformComparison).unwrap();
        let state = pending.finish(Ok::<_, String>(String::new()));
        assert_eq!(state, ReportState::Succeeded(NO_DATA.to_string()));
    }

    #[test]
    fn failure_records_fallback() {
        let tracker = ReportTracker::default();
        let pending = tracker.begin(ReportKind::PlatformComparison).unwrap();
        let state = pending.finish(Err("connection reset"));
        assert_eq!(
            state,
            ReportState::Failed("Analysis failed. Please check your connection.".to_string())
        );
    }

    #[test]
    fn second_begin_while_pending_is_rejected() {
        let tracker = ReportTracker::default();
        let pending = tracker.begin(ReportKind::AudienceProfile).unwrap();
        assert_eq!(
            tracker.begin(ReportKind::AudienceProfile).err(),
            Some(ReportBusy(ReportKind::AudienceProfile))
        );
        // Other kinds are independent.
        assert!(tracker.begin(ReportKind::AdvisorBrief).is_ok());

        pending.finish(Ok::<_, String>("done".to_string()));
        assert!(tracker.begin(ReportKind::AudienceProfile).is_ok());
    }

    #[test]
    fn dropped_request_does_not_stay_pending() {
        let tracker = ReportTracker::default();
        drop(tracker.begin(ReportKind::AdvisorBrief).unwrap());
        assert_eq!(
            tracker.state(ReportKind::AdvisorBrief),
            ReportState::Failed(ReportKind::AdvisorBrief.fallback().to_string())
        );
    }
}

//! The dashboard's presentation state.
//!
//! Fields are private and mutated only through the transition methods, so
//! every visibility change is auditable and testable without a rendering
//! surface. The controller owns one instance behind a lock.

use crate::model::{BeachReport, Coordinates, HistoryEntry, WeatherReport};

/// Label on the submit control when idle.
pub const SUBMIT_LABEL: &str = "Get Weather";
/// Label on the submit control while a lookup is in flight.
pub const LOADING_LABEL: &str = "Loading...";

/// Lifecycle phase of the current lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    phase: Phase,
    error: Option<String>,
    // Bumped on every transition that shows or clears an error, so a timed
    // dismissal can tell whether its banner is still the visible one.
    error_epoch: u64,
    weather: Option<WeatherReport>,
    weather_visible: bool,
    beach: Option<BeachReport>,
    beach_visible: bool,
    history: Vec<HistoryEntry>,
    no_history: bool,
    coords: Option<Coordinates>,
    latest_seq: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn weather(&self) -> Option<&WeatherReport> {
        self.weather.as_ref()
    }

    pub fn weather_visible(&self) -> bool {
        self.weather_visible
    }

    pub fn beach(&self) -> Option<&BeachReport> {
        self.beach.as_ref()
    }

    pub fn beach_visible(&self) -> bool {
        self.beach_visible
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn no_history(&self) -> bool {
        self.no_history
    }

    pub fn coords(&self) -> Option<Coordinates> {
        self.coords
    }

    /// The submit control is disabled exactly while a lookup is in flight.
    pub fn submit_enabled(&self) -> bool {
        self.phase != Phase::Loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.phase == Phase::Loading {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Claim the next request sequence number. Outcomes are applied only if
    /// their number is still the latest issued, so a slow older response
    /// cannot overwrite a newer one.
    pub fn begin_request(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Enter `Loading`: clears any prior error and hides the beach panel
    /// until fresh data arrives. The weather card is left as it was.
    pub fn set_loading(&mut self) {
        self.phase = Phase::Loading;
        self.error = None;
        self.error_epoch += 1;
        self.beach_visible = false;
    }

    /// Enter `Success`: reveal the weather card and remember the lookup's
    /// coordinates for the auxiliary fetch.
    pub fn set_success(&mut self, report: WeatherReport) {
        self.phase = Phase::Success;
        self.error = None;
        self.error_epoch += 1;
        self.coords = report.coord;
        self.weather = Some(report);
        self.weather_visible = true;
    }

    /// Show the error banner; the previous weather card is untouched.
    /// Returns the epoch this banner belongs to, for timed dismissal.
    pub fn set_error(&mut self, message: impl Into<String>) -> u64 {
        self.phase = Phase::Error;
        self.error = Some(message.into());
        self.error_epoch += 1;
        self.error_epoch
    }

    /// Dismiss the error banner iff it is still the one from `epoch`.
    pub fn clear_error_if_current(&mut self, epoch: u64) -> bool {
        if self.error_epoch != epoch || self.error.is_none() {
            return false;
        }
        self.error = None;
        if self.phase == Phase::Error {
            self.phase = Phase::Idle;
        }
        true
    }

    pub fn set_beach(&mut self, report: BeachReport) {
        self.beach = Some(report);
        self.beach_visible = true;
    }

    /// Non-empty history replaces the list and hides the placeholder.
    pub fn set_history(&mut self, entries: Vec<HistoryEntry>) {
        self.history = entries;
        self.no_history = false;
    }

    /// Empty or failed history load: list and placeholder are mutually
    /// exclusive.
    pub fn set_no_history(&mut self) {
        self.history.clear();
        self.no_history = true;
    }
}

//! Fetch orchestration: ties the classifier, the API client, and the
//! dashboard state together and owns the lookup lifecycle.
//!
//! A submit runs one primary fetch. On success it spawns the history reload
//! and, when coordinates are present, the beach fetch; neither is awaited by
//! the submit path. Beach failures never reach the error banner.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::api::ApiClient;
use crate::model::HistoryEntry;
use crate::query::{self, LookupQuery};
use crate::state::DashboardState;

/// How long an error banner stays up before auto-dismissal.
pub const ERROR_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// The dashboard controller. Cheap to clone; clones share one state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    api: Arc<ApiClient>,
    state: Arc<Mutex<DashboardState>>,
}

impl Dashboard {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(Mutex::new(DashboardState::new())),
        }
    }

    /// Read the current state under the lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.state.lock())
    }

    /// Handle one submission of the lookup input.
    ///
    /// Resolves when the primary fetch has settled; the history reload and
    /// beach fetch it triggers run as detached tasks.
    pub async fn submit(&self, input: &str) {
        match query::classify(input) {
            Ok(query) => self.lookup(query).await,
            Err(err) => self.show_error(err.to_string()),
        }
    }

    /// Replay a history entry as if its location had been typed and
    /// submitted, with any trailing comma-qualifier stripped.
    pub async fn replay(&self, entry: &HistoryEntry) {
        if let Some(location) = entry.replay_location() {
            self.submit(&location).await;
        }
    }

    /// Reload the lookup history. Called once at startup and again after
    /// every successful lookup; failures collapse to the placeholder.
    pub async fn refresh_history(&self) {
        match self.api.fetch_history().await {
            Ok(entries) if !entries.is_empty() => self.state.lock().set_history(entries),
            Ok(_) => self.state.lock().set_no_history(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load lookup history");
                self.state.lock().set_no_history();
            }
        }
    }

    async fn lookup(&self, query: LookupQuery) {
        let seq = {
            let mut state = self.state.lock();
            let seq = state.begin_request();
            state.set_loading();
            seq
        };

        tracing::info!(query = query.value(), "starting weather lookup");
        let outcome = self.api.fetch_weather(&query).await;

        let mut state = self.state.lock();
        if !state.is_current(seq) {
            // A newer lookup owns the display now; this result is stale.
            tracing::debug!(query = query.value(), "discarding stale weather response");
            return;
        }

        match outcome {
            Ok(report) => {
                let coords = report.coord;
                state.set_success(report);
                drop(state);

                self.spawn_history_reload();
                // Zero coordinates are treated as absent.
                if let Some(c) = coords.filter(|c| c.lat != 0.0 && c.lon != 0.0) {
                    self.spawn_beach_fetch(c.lat, c.lon);
                }
            }
            Err(err) => {
                tracing::warn!(query = query.value(), error = %err, "weather lookup failed");
                let epoch = state.set_error(err.user_message());
                drop(state);

                self.spawn_error_expiry(epoch);
            }
        }
    }

    fn show_error(&self, message: String) {
        let epoch = self.state.lock().set_error(message);
        self.spawn_error_expiry(epoch);
    }

    fn spawn_history_reload(&self) {
        let this = self.clone();
        tokio::spawn(async move {
            this.refresh_history().await;
        });
    }

    // Beach data is opportunistic: failures are logged and swallowed, and
    // the panel simply stays hidden.
    fn spawn_beach_fetch(&self, lat: f64, lon: f64) {
        let this = self.clone();
        tokio::spawn(async move {
            match this.api.fetch_beach(lat, lon).await {
                Ok(report) => this.state.lock().set_beach(report),
                Err(err) => tracing::debug!(lat, lon, error = %err, "beach data fetch failed"),
            }
        });
    }

    fn spawn_error_expiry(&self, epoch: u64) {
        let this = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ERROR_DISMISS_AFTER).await;
            this.state.lock().clear_error_if_current(epoch);
        });
    }
}

//! Helper that owns the debounce/supersede logic for model-list refreshes.
//!
//! The settings pane publishes *every* edit of the endpoint fields via
//! [`ModelSyncManager::on_endpoint_edited`]. This struct decides when to
//! actually issue the request and which completion is still worth applying.
//! It guarantees:
//!
//! 1. Bursts of edits inside the quiescence window (500 ms) produce at most
//!    one request, carrying only the final values.
//! 2. Only the most recently issued request's result is ever applied;
//!    completions of superseded requests are dropped silently, regardless
//!    of the order they arrive in.
//! 3. Clearing either field supersedes everything outstanding and returns
//!    the pane to the idle prompt.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use skiff_protocol::ModelListParams;

use crate::app_event::SettingsEvent;
use crate::app_event::SettingsEventSender;
use crate::classify::classify_failure;
use crate::client::ModelsClient;
use crate::outcome::FetchOutcome;

/// Quiescence window measured from the most recent edit.
const MODEL_SYNC_DEBOUNCE: Duration = Duration::from_millis(500);

/// State machine for model-list sync orchestration.
pub struct ModelSyncManager {
    /// Unified state guarded by one mutex.
    state: Arc<Mutex<SyncState>>,
    client: Arc<dyn ModelsClient>,
    tx: SettingsEventSender,
    debounce: Duration,
}

struct SyncState {
    /// Bumped on every edit. Scheduled work is tagged with the value
    /// current at scheduling time; a tag that no longer matches means the
    /// work was superseded and its result must not be applied.
    generation: u64,
    outcome: FetchOutcome,
}

impl ModelSyncManager {
    pub fn new(client: Arc<dyn ModelsClient>, tx: SettingsEventSender) -> Self {
        Self::with_debounce(client, tx, MODEL_SYNC_DEBOUNCE)
    }

    /// Same as [`ModelSyncManager::new`] with a custom quiescence window.
    pub fn with_debounce(
        client: Arc<dyn ModelsClient>,
        tx: SettingsEventSender,
        debounce: Duration,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(SyncState {
                generation: 0,
                outcome: FetchOutcome::Idle,
            })),
            client,
            tx,
            debounce,
        }
    }

    /// Current selector state, cloned so the UI can render without holding
    /// the lock.
    pub fn outcome(&self) -> FetchOutcome {
        #[allow(clippy::unwrap_used)]
        let st = self.state.lock().unwrap();
        st.outcome.clone()
    }

    /// Call on every edit of either endpoint field, and once at session
    /// start when a stored config is loaded. Must run inside the tokio
    /// runtime that should carry the scheduled fetch.
    pub fn on_endpoint_edited(&self, base_url: &str, api_key: &str) {
        let generation = {
            #[allow(clippy::unwrap_used)]
            let mut st = self.state.lock().unwrap();
            st.generation += 1;

            if base_url.is_empty() || api_key.is_empty() {
                // Nothing to fetch. Any pending timer or in-flight result
                // is now stale by generation.
                st.outcome = FetchOutcome::Idle;
                drop(st);
                self.tx.send(SettingsEvent::ModelSyncUpdated {
                    outcome: FetchOutcome::Idle,
                });
                return;
            }

            st.outcome = FetchOutcome::Loading;
            st.generation
        };
        self.tx.send(SettingsEvent::ModelSyncUpdated {
            outcome: FetchOutcome::Loading,
        });

        let params = ModelListParams {
            base_url: base_url.to_string(),
            api_key: Some(api_key.to_string()),
        };
        let state = self.state.clone();
        let client = self.client.clone();
        let tx = self.tx.clone();
        let debounce = self.debounce;
        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            {
                #[allow(clippy::unwrap_used)]
                let st = state.lock().unwrap();
                if st.generation != generation {
                    // Superseded while waiting out the quiescence window.
                    return;
                }
            }

            let result = client.list_models(params).await;

            let outcome = {
                #[allow(clippy::unwrap_used)]
                let mut st = state.lock().unwrap();
                if st.generation != generation {
                    // A newer edit superseded this request while it was in
                    // flight; drop the completion.
                    return;
                }
                st.outcome = match result {
                    Ok(response) => FetchOutcome::Success(response.values),
                    Err(err) => {
                        let (category, message) = classify_failure(&err.message);
                        tracing::warn!(
                            category = %category,
                            "model list refresh failed: {}",
                            err.message
                        );
                        FetchOutcome::Failure { category, message }
                    }
                };
                st.outcome.clone()
            };
            tx.send(SettingsEvent::ModelSyncUpdated { outcome });
        });
    }

    /// Call when the settings pane goes away. Pending timers and in-flight
    /// completions become stale and are never applied.
    pub fn dispose(&self) {
        #[allow(clippy::unwrap_used)]
        let mut st = self.state.lock().unwrap();
        st.generation += 1;
    }
}

impl Drop for ModelSyncManager {
    fn drop(&mut self) {
        self.dispose();
    }
}

use std::sync::mpsc::Sender;

use crate::outcome::FetchOutcome;

/// Events the settings session pushes to the embedding UI's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    /// The model sync outcome changed; redraw the selector.
    ModelSyncUpdated { outcome: FetchOutcome },
}

/// Cloneable handle the sync manager uses to notify the UI.
#[derive(Clone, Debug)]
pub struct SettingsEventSender {
    tx: Sender<SettingsEvent>,
}

impl SettingsEventSender {
    pub fn new(tx: Sender<SettingsEvent>) -> Self {
        Self { tx }
    }

    /// Delivery is best-effort: a closed receiver means the UI is gone, so
    /// the failure is only logged.
    pub fn send(&self, event: SettingsEvent) {
        if let Err(err) = self.tx.send(event) {
            tracing::error!("failed to send settings event: {err}");
        }
    }
}

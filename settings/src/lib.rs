//! UI-side state for the endpoint settings pane: the debounce/supersede
//! coordinator that keeps the selectable model list in sync with whatever
//! the user is currently typing.

mod app_event;
mod classify;
mod client;
mod model_sync;
mod outcome;

pub use app_event::SettingsEvent;
pub use app_event::SettingsEventSender;
pub use classify::ErrorCategory;
pub use classify::classify_failure;
pub use client::CoreModelsClient;
pub use client::ModelsClient;
pub use model_sync::ModelSyncManager;
pub use outcome::FetchOutcome;

/// User-editable endpoint configuration for an OpenAI-compatible provider.
///
/// Owned by the settings edit session; every keystroke produces a new value
/// and the whole thing is discarded when the session closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Root URL the provider serves its REST API under.
    pub base_url: String,
    /// Optional bearer credential. `None` and `Some("")` both mean
    /// unauthenticated; no Authorization header is sent in either case.
    pub api_key: Option<String>,
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Credential to attach, if any. Empty strings are treated as absent so
    /// a cleared text field never produces a malformed header.
    pub fn bearer_token(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

//! Discovery of the model identifiers an endpoint offers.
//!
//! Every provider skiff talks to exposes an OpenAI-compatible `GET /models`
//! endpoint returning a JSON payload in the following canonical form:
//!
//! ```json
//! {
//!   "object": "list",
//!   "data": [
//!     { "id": "gpt-a", "object": "model" },
//!     { "id": "gpt-b", "object": "model" }
//!   ]
//! }
//! ```
//!
//! Only the `id` fields are extracted; everything else is ignored so the
//! listing keeps working when providers add or reshape metadata. A missing
//! or malformed `data` collection degrades to an empty list rather than an
//! error.

use std::collections::HashSet;

use serde_json::Value as JsonValue;
use url::Url;

use crate::EndpointConfig;
use crate::error::Result;
use crate::error::SkiffErr;
use crate::flags::SKIFF_CONNECT_TIMEOUT_MS;
use crate::flags::SKIFF_REQUEST_TIMEOUT_MS;

/// Validate the endpoint before any network action is permitted.
///
/// Fails fast with a descriptive error that callers must propagate
/// verbatim; the settings frontend shows these messages as-is.
pub fn validated_base_url(config: &EndpointConfig) -> Result<Url> {
    if config.base_url.is_empty() {
        return Err(SkiffErr::MissingBaseUrl);
    }
    Url::parse(&config.base_url).map_err(|_| SkiffErr::InvalidBaseUrl)
}

/// Controller-side façade: validate, then fetch.
///
/// Validation failures never reach the network; fetch failures are passed
/// through unmodified so the frontend classifier sees the original text.
pub async fn refresh_models(config: &EndpointConfig) -> Result<Vec<String>> {
    let base_url = validated_base_url(config)?;
    tracing::debug!(base_url = %base_url, "refreshing model list");
    fetch_available_models(config).await
}

/// Fetch the list of available model identifiers from the endpoint.
///
/// For endpoints that require authentication the credential is sent via the
/// standard Bearer mechanism; local providers like Ollama do not require a
/// token and the header is omitted entirely.
pub async fn fetch_available_models(config: &EndpointConfig) -> Result<Vec<String>> {
    let base_url = config.base_url.trim_end_matches('/');
    let url = format!("{base_url}/models");

    let client = reqwest::Client::builder()
        .connect_timeout(*SKIFF_CONNECT_TIMEOUT_MS)
        .timeout(*SKIFF_REQUEST_TIMEOUT_MS)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    let mut req = client.get(&url);
    if let Some(token) = config.bearer_token() {
        req = req.bearer_auth(token);
    }

    let resp = req.send().await.map_err(|err| {
        if err.is_timeout() {
            SkiffErr::Timeout(*SKIFF_REQUEST_TIMEOUT_MS)
        } else if err.is_connect() {
            SkiffErr::ConnectionFailed(url.clone())
        } else {
            SkiffErr::Reqwest(err)
        }
    })?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SkiffErr::UnexpectedStatus { status, body });
    }

    let body = resp.text().await?;
    let payload: JsonValue = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!("models payload was not valid JSON; treating as empty: {err}");
            return Ok(Vec::new());
        }
    };
    Ok(extract_model_ids(&payload))
}

/// Pull the `id` fields out of a `{ "data": [...] }` payload, deduplicating
/// while preserving first-seen order.
fn extract_model_ids(payload: &JsonValue) -> Vec<String> {
    let Some(records) = payload.get("data").and_then(|data| data.as_array()) else {
        tracing::warn!("models payload carried no `data` array; treating as empty");
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut models = Vec::new();
    for record in records {
        let Some(id) = record.get("id").and_then(|id| id.as_str()) else {
            continue;
        };
        if seen.insert(id) {
            models.push(id.to_string());
        }
    }
    models
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::Mock;
    use wiremock::MockServer;
    use wiremock::ResponseTemplate;
    use wiremock::matchers::header;
    use wiremock::matchers::header_exists;
    use wiremock::matchers::method;
    use wiremock::matchers::path;

    fn models_body(ids: &[&str]) -> String {
        let data: Vec<JsonValue> = ids.iter().map(|id| json!({ "id": id })).collect();
        json!({ "object": "list", "data": data }).to_string()
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config = EndpointConfig::new("", Some("sk-1".into()));
        let err = validated_base_url(&config).expect_err("must fail");
        assert_eq!(err.to_string(), "Base URL is required");
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let config = EndpointConfig::new("not a url", Some("sk-1".into()));
        let err = validated_base_url(&config).expect_err("must fail");
        assert_eq!(err.to_string(), "Invalid Base URL format");
    }

    #[tokio::test]
    async fn refresh_skips_network_on_validation_failure() {
        // No server is listening anywhere; a validation failure must be
        // returned before any connection attempt.
        let config = EndpointConfig::new("", None);
        let err = refresh_models(&config).await.expect_err("must fail");
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn fetch_models_deduplicates_preserving_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                models_body(&["gpt-a", "gpt-b", "gpt-a"]),
                "application/json",
            ))
            .mount(&server)
            .await;

        let config = EndpointConfig::new(format!("{}/v1", server.uri()), Some("sk-1".into()));
        let models = fetch_available_models(&config).await.expect("fetch models");
        assert_eq!(models, vec!["gpt-a".to_string(), "gpt-b".to_string()]);
    }

    #[tokio::test]
    async fn fetch_is_idempotent_for_unchanged_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(models_body(&["m-1", "m-2"]), "application/json"),
            )
            .mount(&server)
            .await;

        let config = EndpointConfig::new(server.uri(), Some("sk-1".into()));
        let first = fetch_available_models(&config).await.expect("first fetch");
        let second = fetch_available_models(&config).await.expect("second fetch");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn credential_is_sent_as_bearer_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .and(header("authorization", "Bearer sk-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(models_body(&["m-1"]), "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = EndpointConfig::new(server.uri(), Some("sk-1".into()));
        let models = fetch_available_models(&config).await.expect("fetch models");
        assert_eq!(models, vec!["m-1".to_string()]);
    }

    #[tokio::test]
    async fn missing_or_empty_credential_sends_no_header() {
        let server = MockServer::start().await;
        // Reject any request that carries an Authorization header; the
        // catch-all below answers the rest.
        Mock::given(method("GET"))
            .and(path("/models"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(models_body(&["m-1"]), "application/json"),
            )
            .mount(&server)
            .await;

        for api_key in [None, Some(String::new())] {
            let config = EndpointConfig::new(server.uri(), api_key);
            let models = fetch_available_models(&config).await.expect("fetch models");
            assert_eq!(models, vec!["m-1".to_string()]);
        }
    }

    #[tokio::test]
    async fn malformed_payload_degrades_to_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                json!({ "object": "list", "data": "nope" }).to_string(),
                "application/json",
            ))
            .mount(&server)
            .await;

        let config = EndpointConfig::new(server.uri(), Some("sk-1".into()));
        let models = fetch_available_models(&config).await.expect("fetch models");
        assert_eq!(models, Vec::<String>::new());
    }

    #[tokio::test]
    async fn non_json_body_degrades_to_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "text/plain"))
            .mount(&server)
            .await;

        let config = EndpointConfig::new(server.uri(), Some("sk-1".into()));
        let models = fetch_available_models(&config).await.expect("fetch models");
        assert_eq!(models, Vec::<String>::new());
    }

    #[tokio::test]
    async fn records_without_string_ids_are_skipped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                json!({ "data": [ { "id": 5 }, { "name": "x" }, { "id": "m-2" } ] }).to_string(),
                "application/json",
            ))
            .mount(&server)
            .await;

        let config = EndpointConfig::new(server.uri(), Some("sk-1".into()));
        let models = fetch_available_models(&config).await.expect("fetch models");
        assert_eq!(models, vec!["m-2".to_string()]);
    }

    #[tokio::test]
    async fn upstream_401_surfaces_status_in_error_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(401).set_body_raw(
                json!({ "error": "invalid key" }).to_string(),
                "application/json",
            ))
            .mount(&server)
            .await;

        let config = EndpointConfig::new(server.uri(), Some("sk-bad".into()));
        let err = fetch_available_models(&config)
            .await
            .expect_err("must fail");
        assert!(matches!(err, SkiffErr::UnexpectedStatus { .. }));
        assert!(err.to_string().contains("401"), "got: {err}");
    }
}

use crate::JSONRPCRequest;
use crate::RequestId;
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

/// Generates an `enum ClientRequest` where each variant is a request that the
/// client can send to the server. Each variant has associated `params` and
/// `response` types. Also generates an `export_client_responses()` function
/// to export all response types to TypeScript.
macro_rules! client_request_definitions {
    (
        $(
            $(#[$variant_meta:meta])*
            $variant:ident {
                params: $params:ty,
                response: $response:ty,
            }
        ),* $(,)?
    ) => {
        /// Request from the client to the server.
        #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema, TS)]
        #[serde(tag = "method", rename_all = "camelCase")]
        pub enum ClientRequest {
            $(
                $(#[$variant_meta])*
                $variant {
                    #[serde(rename = "id")]
                    request_id: RequestId,
                    params: $params,
                },
            )*
        }

        pub(crate) fn export_client_responses(
            out_dir: &::std::path::Path,
        ) -> ::std::result::Result<(), ::ts_rs::ExportError> {
            $(
                <$response as ::ts_rs::TS>::export_all_to(out_dir)?;
            )*
            Ok(())
        }
    };
}

client_request_definitions! {
    #[serde(rename = "model/list")]
    #[ts(rename = "model/list")]
    ListModels {
        params: ModelListParams,
        response: ModelListResponse,
    },
}

impl TryFrom<JSONRPCRequest> for ClientRequest {
    type Error = serde_json::Error;

    fn try_from(request: JSONRPCRequest) -> Result<Self, Self::Error> {
        let value = serde_json::json!({
            "method": request.method,
            "id": request.id,
            "params": request.params,
        });
        serde_json::from_value(value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, JsonSchema, TS)]
#[serde(rename_all = "camelCase")]
pub struct ModelListParams {
    /// Endpoint root the models listing is served under, e.g.
    /// `https://api.example.com/v1`.
    pub base_url: String,
    /// Bearer credential; omitted entirely for unauthenticated endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, JsonSchema, TS)]
#[serde(rename_all = "camelCase")]
pub struct ModelListResponse {
    /// Model identifiers, deduplicated, in first-seen upstream order.
    pub values: Vec<String>,
}

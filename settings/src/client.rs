use async_trait::async_trait;
use skiff_core::EndpointConfig;
use skiff_protocol::JSONRPCErrorError;
use skiff_protocol::ModelListParams;
use skiff_protocol::ModelListResponse;

/// Channel to whichever process issues the actual models request.
///
/// The built-in frontend talks to skiff-core in-process; external frontends
/// get the same contract over the app-server's JSON-RPC channel. Either
/// way a failure arrives as a code plus descriptive message, which is all
/// the classifier needs.
#[async_trait]
pub trait ModelsClient: Send + Sync {
    async fn list_models(
        &self,
        params: ModelListParams,
    ) -> Result<ModelListResponse, JSONRPCErrorError>;
}

/// In-process client used by the built-in settings pane.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoreModelsClient;

#[async_trait]
impl ModelsClient for CoreModelsClient {
    async fn list_models(
        &self,
        params: ModelListParams,
    ) -> Result<ModelListResponse, JSONRPCErrorError> {
        let config = EndpointConfig::new(params.base_url, params.api_key);
        match skiff_core::refresh_models(&config).await {
            Ok(values) => Ok(ModelListResponse { values }),
            Err(err) => Err((&err).into()),
        }
    }
}

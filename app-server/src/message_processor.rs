use std::sync::Arc;

use skiff_core::EndpointConfig;
use skiff_protocol::ClientRequest;
use skiff_protocol::INVALID_REQUEST_ERROR_CODE;
use skiff_protocol::JSONRPCErrorError;
use skiff_protocol::JSONRPCRequest;
use skiff_protocol::ModelListParams;
use skiff_protocol::ModelListResponse;
use skiff_protocol::RequestId;

use crate::outgoing_message::OutgoingMessageSender;

/// Routes requests from the settings frontend to the controller logic.
#[derive(Clone)]
pub struct MessageProcessor {
    outgoing: Arc<OutgoingMessageSender>,
}

impl MessageProcessor {
    pub fn new(outgoing: OutgoingMessageSender) -> Self {
        Self {
            outgoing: Arc::new(outgoing),
        }
    }

    pub async fn process_request(&self, request: JSONRPCRequest) {
        // Hold on to the ID so we can respond.
        let request_id = request.id.clone();

        let client_request = match ClientRequest::try_from(request) {
            Ok(client_request) => client_request,
            Err(err) => {
                tracing::warn!("failed to convert request: {err}");
                self.outgoing.send_error(
                    request_id,
                    JSONRPCErrorError {
                        code: INVALID_REQUEST_ERROR_CODE,
                        message: err.to_string(),
                        data: None,
                    },
                );
                return;
            }
        };

        match client_request {
            ClientRequest::ListModels { request_id, params } => {
                self.handle_list_models(request_id, params).await;
            }
        }
    }

    /// Validate, fetch, and answer. Recognized failures cross the boundary
    /// with their descriptive text intact so the frontend classifier can
    /// render something actionable.
    async fn handle_list_models(&self, request_id: RequestId, params: ModelListParams) {
        let config = EndpointConfig::new(params.base_url, params.api_key);
        match skiff_core::refresh_models(&config).await {
            Ok(values) => {
                self.outgoing
                    .send_response(request_id, ModelListResponse { values });
            }
            Err(err) => {
                tracing::warn!("model list refresh failed: {err}");
                self.outgoing.send_error(request_id, (&err).into());
            }
        }
    }
}

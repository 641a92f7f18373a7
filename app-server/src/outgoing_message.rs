use serde::Serialize;
use skiff_protocol::INTERNAL_ERROR_CODE;
use skiff_protocol::JSONRPC_VERSION;
use skiff_protocol::JSONRPCError;
use skiff_protocol::JSONRPCErrorError;
use skiff_protocol::JSONRPCMessage;
use skiff_protocol::JSONRPCResponse;
use skiff_protocol::RequestId;
use tokio::sync::mpsc;

/// Sends messages to the client over the stdout channel.
pub struct OutgoingMessageSender {
    sender: mpsc::UnboundedSender<OutgoingMessage>,
}

impl OutgoingMessageSender {
    pub fn new(sender: mpsc::UnboundedSender<OutgoingMessage>) -> Self {
        Self { sender }
    }

    pub fn send_response<T: Serialize>(&self, id: RequestId, response: T) {
        match serde_json::to_value(response) {
            Ok(result) => {
                let _ = self
                    .sender
                    .send(OutgoingMessage::Response(OutgoingResponse { id, result }));
            }
            Err(err) => {
                // Handler-internal failure the frontend cannot act on;
                // coerce to the generic message and keep the detail local.
                tracing::error!("failed to serialize response: {err}");
                self.send_error(
                    id,
                    JSONRPCErrorError {
                        code: INTERNAL_ERROR_CODE,
                        message: "Failed to fetch models. Please check your Base URL and API Key."
                            .to_string(),
                        data: None,
                    },
                );
            }
        }
    }

    pub fn send_error(&self, id: RequestId, error: JSONRPCErrorError) {
        let _ = self
            .sender
            .send(OutgoingMessage::Error(OutgoingError { id, error }));
    }
}

/// Outgoing message from the server to the client.
#[derive(Debug)]
pub enum OutgoingMessage {
    Response(OutgoingResponse),
    Error(OutgoingError),
}

#[derive(Debug)]
pub struct OutgoingResponse {
    pub id: RequestId,
    pub result: serde_json::Value,
}

#[derive(Debug)]
pub struct OutgoingError {
    pub id: RequestId,
    pub error: JSONRPCErrorError,
}

impl From<OutgoingMessage> for JSONRPCMessage {
    fn from(message: OutgoingMessage) -> Self {
        match message {
            OutgoingMessage::Response(OutgoingResponse { id, result }) => {
                JSONRPCMessage::Response(JSONRPCResponse {
                    jsonrpc: JSONRPC_VERSION.into(),
                    id,
                    result,
                })
            }
            OutgoingMessage::Error(OutgoingError { id, error }) => {
                JSONRPCMessage::Error(JSONRPCError {
                    jsonrpc: JSONRPC_VERSION.into(),
                    id,
                    error,
                })
            }
        }
    }
}

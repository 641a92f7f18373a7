//! stdio JSON-RPC server exposing the model-list controller to an external
//! settings frontend. One JSON object per line in each direction; stdout
//! belongs to the protocol, diagnostics go to stderr.

mod message_processor;
mod outgoing_message;

pub use message_processor::MessageProcessor;
pub use outgoing_message::OutgoingMessage;
pub use outgoing_message::OutgoingMessageSender;

use anyhow::Result;
use skiff_protocol::JSONRPCMessage;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio::sync::mpsc;

pub async fn run_main() -> Result<()> {
    let (outgoing_tx, mut outgoing_rx) = mpsc::unbounded_channel::<OutgoingMessage>();

    // Writer task: drain outgoing messages to stdout.
    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(message) = outgoing_rx.recv().await {
            match serde_json::to_string(&JSONRPCMessage::from(message)) {
                Ok(json) => {
                    if stdout.write_all(json.as_bytes()).await.is_err()
                        || stdout.write_all(b"\n").await.is_err()
                    {
                        break;
                    }
                    let _ = stdout.flush().await;
                }
                Err(err) => {
                    tracing::error!("failed to serialize outgoing message: {err}");
                }
            }
        }
    });

    let processor = MessageProcessor::new(OutgoingMessageSender::new(outgoing_tx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<JSONRPCMessage>(line) {
            Ok(JSONRPCMessage::Request(request)) => {
                // Requests are handled concurrently; the frontend's
                // generation check copes with out-of-order completions.
                let processor = processor.clone();
                tokio::spawn(async move {
                    processor.process_request(request).await;
                });
            }
            Ok(JSONRPCMessage::Notification(notification)) => {
                tracing::debug!("ignoring notification: {}", notification.method);
            }
            Ok(other) => {
                tracing::warn!("unexpected message from client: {other:?}");
            }
            Err(err) => {
                tracing::warn!("failed to parse message: {err}");
            }
        }
    }

    // Stdin closed: drop our sender so the writer drains and exits once
    // in-flight handlers finish.
    drop(processor);
    writer.await?;
    Ok(())
}

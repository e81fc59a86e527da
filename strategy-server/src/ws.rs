//! WebSocket chat sessions.
//!
//! Each `user_message` frame gets an acknowledgement, then one frame per
//! persona reply, each held back by the configured pacing delay.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::extract::ws::{Message as WsMessage, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::server::SharedState;

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

pub const ACK_TEXT: &str = "Message received, agents are processing...";

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClientFrame {
    UserMessage {
        #[serde(default)]
        message: String,
        #[serde(default)]
        agents: Vec<String>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ServerFrame<'a> {
    MessageReceived { message: &'a str },
    Error { message: String },
}

pub(crate) async fn ws_upgrade(
    ws: WebSocketUpgrade,
    State(state): State<Arc<SharedState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(mut socket: WebSocket, state: Arc<SharedState>) {
    let conn = state.connections.connect();
    if let Err(e) = session(&mut socket, &state).await {
        tracing::debug!(conn, "WebSocket session ended: {e}");
    }
    state.connections.disconnect(conn);
    let _ = socket.send(WsMessage::Close(None)).await;
}

/// Socket went away or stopped accepting frames.
#[derive(Debug, thiserror::Error)]
enum SessionError {
    #[error("send failed: {0}")]
    Send(#[from] axum::Error),
    #[error("send timed out")]
    Timeout,
    #[error("encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

async fn session(socket: &mut WebSocket, state: &SharedState) -> Result<(), SessionError> {
    let pacing = state.config.reply_pacing();
    loop {
        let text = match socket.recv().await {
            Some(Ok(WsMessage::Text(text))) => text,
            Some(Ok(WsMessage::Close(_))) | None => return Ok(()),
            Some(Ok(_)) => continue, // Ping/Pong handled by axum
            Some(Err(e)) => {
                tracing::debug!("WebSocket receive error: {e}");
                return Ok(());
            }
        };

        let value: serde_json::Value = match serde_json::from_str(text.as_str()) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Malformed WebSocket frame: {e}");
                let frame = ServerFrame::Error { message: format!("Invalid JSON: {e}") };
                send_json(socket, &frame).await?;
                continue;
            }
        };

        let (message, agents) = match serde_json::from_value::<ClientFrame>(value) {
            Ok(ClientFrame::UserMessage { message, agents }) => (message, agents),
            Ok(ClientFrame::Other) | Err(_) => {
                tracing::debug!("Ignoring WebSocket frame without a known type");
                continue;
            }
        };

        send_json(socket, &ServerFrame::MessageReceived { message: ACK_TEXT }).await?;

        let responses = state.agents.process_user_message(&message, &agents).await;
        for response in &responses {
            tokio::time::sleep(pacing).await;
            send_json(socket, response).await?;
        }
    }
}

async fn send_json<T: Serialize>(socket: &mut WebSocket, frame: &T) -> Result<(), SessionError> {
    let text = serde_json::to_string(frame)?;
    match tokio::time::timeout(SEND_TIMEOUT, socket.send(WsMessage::Text(text.into()))).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(SessionError::Timeout),
    }
}

//! WebSocket feed of new cards

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::models::{CardEvent, WelcomeMessage};
use crate::AppState;

const WELCOME: WelcomeMessage = WelcomeMessage {
    message: "Connected to WebSocket server",
};

/// GET /ws
pub async fn connect(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    let events = state.store.subscribe();
    ws.on_upgrade(move |socket| forward(socket, events))
}

async fn forward(mut socket: WebSocket, mut events: broadcast::Receiver<CardEvent>) {
    tracing::info!("client connected via websocket");

    if !send_json(&mut socket, &WELCOME).await {
        return;
    }

    loop {
        tokio::select! {
            incoming = socket.recv() => match incoming {
                // Pings are answered by axum; other client frames are ignored.
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
            event = events.recv() => match event {
                Ok(event) => {
                    if !send_json(&mut socket, &event).await {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "websocket client lagging, events dropped");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    tracing::info!("websocket client disconnected");
}

/// Send `value` as a JSON text frame; false once the client is gone.
async fn send_json<T: serde::Serialize>(socket: &mut WebSocket, value: &T) -> bool {
    let text = match serde_json::to_string(value) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "failed to encode websocket message");
            return false;
        }
    };
    socket.send(Message::Text(text.into())).await.is_ok()
}

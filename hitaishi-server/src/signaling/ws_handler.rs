use crate::AppState;
use crate::signaling::Relay;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use hitaishi_core::ClientSignal;
use tokio::sync::mpsc;
use tracing::{error, warn};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let relay = state.relay().clone();

    ws.on_upgrade(move |socket| handle_socket(socket, relay))
}

async fn handle_socket(socket: WebSocket, relay: Relay) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let conn_id = relay.on_connect(tx);

    let mut send_task = tokio::spawn(async move {
        while let Some(signal) = rx.recv().await {
            let json = match serde_json::to_string(&signal) {
                Ok(json) => json,
                Err(e) => {
                    error!("Failed to serialize signal: {}", e);
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let relay = relay.clone();
        let conn_id = conn_id.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientSignal>(&text) {
                        Ok(signal) => relay.dispatch(&conn_id, signal),
                        Err(e) => warn!("Invalid signal from {}: {}", conn_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    relay.on_disconnect(&conn_id);
}

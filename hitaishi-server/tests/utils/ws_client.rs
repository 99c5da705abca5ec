use futures::{SinkExt, StreamExt};
use hitaishi_core::{ConnectionId, ServerSignal};
use hitaishi_server::{AppState, app};
use serde_json::Value;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

/// Serve the full app on an ephemeral local port.
pub async fn spawn_app(state: AppState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });
    addr
}

/// A real websocket client talking to `/ws`.
pub struct WsClient {
    pub id: ConnectionId,
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsClient {
    /// Connect and consume the welcome frame.
    pub async fn connect(addr: SocketAddr) -> Self {
        let (socket, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();
        let mut client = Self {
            id: ConnectionId::new(),
            socket,
        };

        match client.recv(1000).await {
            Some(ServerSignal::Welcome { id }) => client.id = id,
            other => panic!("expected welcome, got {:?}", other),
        }
        client
    }

    pub async fn send_json(&mut self, frame: Value) {
        self.send_text(&frame.to_string()).await;
    }

    pub async fn send_text(&mut self, text: &str) {
        self.socket
            .send(Message::Text(text.to_owned().into()))
            .await
            .unwrap();
    }

    /// Next signal, skipping control frames. `None` on timeout or close.
    pub async fn recv(&mut self, timeout_ms: u64) -> Option<ServerSignal> {
        let next = async {
            while let Some(Ok(msg)) = self.socket.next().await {
                match msg {
                    Message::Text(text) => {
                        return Some(serde_json::from_str(text.as_str()).unwrap());
                    }
                    Message::Close(_) => return None,
                    _ => {}
                }
            }
            None
        };

        tokio::time::timeout(Duration::from_millis(timeout_ms), next)
            .await
            .ok()
            .flatten()
    }

    pub async fn close(mut self) {
        self.socket.close(None).await.unwrap();
        // Drain until the server hangs up.
        let drain = async { while let Some(Ok(_)) = self.socket.next().await {} };
        let _ = tokio::time::timeout(Duration::from_secs(1), drain).await;
    }
}

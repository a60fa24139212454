//! Per-connection serve loop for push-only topic feeds.
//!
//! The attendance feed has no client-side protocol: the server forwards topic
//! broadcasts and answers pings. Outbound frames go through a bounded queue;
//! when a client stops draining it, new frames are dropped for that client
//! only, so one stalled socket can never hold up the broadcast.

use axum::extract::ws::{Message, WebSocket};
use bytes::Bytes;
use chrono::Utc;
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::{sync::mpsc, time};

use super::WebSocketManager;

/// Outbound queue depth per connection.
const OUT_QUEUE: usize = 64;

pub struct WsServerOptions {
    pub ws_ping_sec: u64,
    pub enable_app_ping: bool,
}

impl Default for WsServerOptions {
    fn default() -> Self {
        Self {
            ws_ping_sec: 30,
            enable_app_ping: true,
        }
    }
}

/// Serves one WebSocket client subscribed to `topic` until it disconnects.
pub async fn serve_topic(
    socket: WebSocket,
    manager: WebSocketManager,
    topic: String,
    opts: WsServerOptions,
) {
    let mut rx = manager.subscribe(&topic).await;

    let (mut sink, mut socket_rx) = socket.split();

    // Outbound queue and writer task
    let (out_tx, mut out_rx) = mpsc::channel::<Message>(OUT_QUEUE);
    let writer_task = tokio::spawn(async move {
        while let Some(frame) = out_rx.recv().await {
            if sink.send(frame).await.is_err() {
                break;
            }
        }
    });

    // S→C: forward broadcasts on this topic. `try_send` keeps a slow client
    // from back-pressuring the broadcast; its own frames are dropped instead.
    let forward_task = {
        let out_tx = out_tx.clone();
        let topic = topic.clone();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(msg) => {
                        if let Err(mpsc::error::TrySendError::Closed(_)) =
                            out_tx.try_send(Message::Text(msg.into()))
                        {
                            tracing::info!("Client disconnected while sending to '{topic}'");
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("WS client on '{topic}' lagged, skipped {n} messages");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    };

    // WS-level periodic ping
    let ping_task = {
        let out_tx = out_tx.clone();
        tokio::spawn(async move {
            loop {
                time::sleep(std::time::Duration::from_secs(opts.ws_ping_sec)).await;
                if out_tx.send(Message::Ping(Bytes::new())).await.is_err() {
                    break;
                }
            }
        })
    };

    // C→S: only ping/pong and close are meaningful on a push-only feed.
    let receive_task = {
        let out_tx = out_tx.clone();
        let topic = topic.clone();
        tokio::spawn(async move {
            while let Some(Ok(msg)) = socket_rx.next().await {
                match msg {
                    Message::Text(text) => {
                        if opts.enable_app_ping && is_app_ping(text.as_str()) {
                            let pong = serde_json::json!({
                                "event": "pong",
                                "topic": topic,
                                "payload": {},
                                "ts": Utc::now().to_rfc3339(),
                            });
                            let _ = out_tx.send(Message::Text(pong.to_string().into())).await;
                        } else {
                            tracing::warn!("Ignoring client message on push-only topic '{topic}'");
                        }
                    }
                    Message::Ping(payload) => {
                        let _ = out_tx.send(Message::Pong(payload)).await;
                    }
                    Message::Pong(_) => {}
                    Message::Binary(_) => {
                        tracing::warn!("Ignoring binary on topic '{topic}'");
                    }
                    Message::Close(_) => break,
                }
            }
        })
    };

    let _ = tokio::join!(forward_task, receive_task, ping_task, writer_task);
    tracing::info!("WS session ended for topic '{topic}'");
}

fn is_app_ping(raw: &str) -> bool {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
        if let Some(Value::String(t)) = map.get("type") {
            return t == "ping";
        }
    }
    false
}

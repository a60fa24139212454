//! A thread-safe WebSocket manager for topic-based message broadcasting.
//!
//! Uses Tokio broadcast channels per topic. Subscribers attach and detach at
//! any time; a detached or lagging subscriber never blocks delivery to the
//! rest, and new subscribers see no history (broadcast channels only carry
//! messages sent after subscription).

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

/// Type alias for topic name.
type Topic = String;

/// Sender for a topic's broadcast channel.
type Sender = broadcast::Sender<String>;

/// Receiver for a topic's broadcast channel.
type Receiver = broadcast::Receiver<String>;

/// Capacity of each per-topic channel. A subscriber that falls further behind
/// than this drops its oldest messages rather than stalling the broadcast.
const TOPIC_CAPACITY: usize = 100;

/// Manages broadcast channels per topic to support real-time attendance feeds.
///
/// - Lazily creates broadcast channels per topic on first subscription
/// - Removes topics when their subscriber count drops to zero after sending
#[derive(Clone, Default)]
pub struct WebSocketManager {
    /// Map of topics to broadcast senders.
    pub inner: Arc<RwLock<HashMap<Topic, Sender>>>,
}

impl WebSocketManager {
    /// Creates a new, empty `WebSocketManager`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to the given topic, creating it if necessary.
    pub async fn subscribe(&self, topic: &str) -> Receiver {
        let mut map = self.inner.write().await;
        map.entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(TOPIC_CAPACITY).0)
            .subscribe()
    }

    /// Broadcasts a message to all subscribers of `topic`.
    ///
    /// If the topic does not exist, it's a no-op.
    /// If the topic has zero subscribers after sending, it is removed.
    pub async fn broadcast<T: Into<String>>(&self, topic: &str, msg: T) {
        let mut map = self.inner.write().await;
        if let Some(sender) = map.get(topic) {
            let _ = sender.send(msg.into());
            if sender.receiver_count() == 0 {
                tracing::info!("Removing topic '{topic}' due to no subscribers.");
                map.remove(topic);
            }
        }
    }

    /// Number of live subscribers on `topic`.
    pub async fn subscriber_count(&self, topic: &str) -> usize {
        let map = self.inner.read().await;
        map.get(topic).map(|s| s.receiver_count()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Duration, timeout};

    #[tokio::test]
    async fn it_broadcasts_to_all_subscribers() {
        let manager = WebSocketManager::new();
        let topic = "test-topic";

        let mut r1 = manager.subscribe(topic).await;
        let mut r2 = manager.subscribe(topic).await;

        manager.broadcast(topic, "hello world").await;

        let msg1 = timeout(Duration::from_millis(50), r1.recv())
            .await
            .unwrap()
            .unwrap();
        let msg2 = timeout(Duration::from_millis(50), r2.recv())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(msg1, "hello world");
        assert_eq!(msg2, "hello world");
    }

    #[tokio::test]
    async fn it_creates_topic_lazily() {
        let manager = WebSocketManager::new();
        let topic = "lazy-create";
        assert!(manager.inner.read().await.get(topic).is_none());
        let _ = manager.subscribe(topic).await;
        assert!(manager.inner.read().await.get(topic).is_some());
    }

    #[tokio::test]
    async fn broadcast_to_empty_topic_does_not_panic() {
        let manager = WebSocketManager::new();
        manager.broadcast("no-subscribers", "silent").await;
    }

    #[tokio::test]
    async fn topic_is_removed_after_broadcast_if_no_subscribers() {
        let manager = WebSocketManager::new();
        let topic = "ephemeral-topic";
        {
            let _ = manager.subscribe(topic).await;
        } // drop receiver
        manager.broadcast(topic, "cleanup").await;
        let map = manager.inner.read().await;
        assert!(!map.contains_key(topic));
    }

    #[tokio::test]
    async fn detached_subscriber_does_not_block_others() {
        let manager = WebSocketManager::new();
        let topic = "detach";
        let r1 = manager.subscribe(topic).await;
        let mut r2 = manager.subscribe(topic).await;
        drop(r1);

        manager.broadcast(topic, "still delivered").await;

        let msg = timeout(Duration::from_millis(50), r2.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(msg, "still delivered");
    }

    #[tokio::test]
    async fn new_subscriber_sees_no_history() {
        let manager = WebSocketManager::new();
        let topic = "no-replay";
        let _keepalive = manager.subscribe(topic).await;

        manager.broadcast(topic, "before").await;

        let mut late = manager.subscribe(topic).await;
        manager.broadcast(topic, "after").await;

        let msg = timeout(Duration::from_millis(50), late.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(msg, "after");
    }
}

//! Native event dispatch
//!
//! The host shell pushes raw native events (name + JSON payload) into the
//! dispatcher; a background task parses them and fans them out to registered
//! observers. Events with undeclared names are dropped.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::types::NotificationEvent;

use super::adapter::BridgeError;

/// Observer for notification events while the app is in the foreground
#[uniffi::export(callback_interface)]
pub trait ForegroundEventObserver: Send + Sync {
    fn on_event(&self, event: NotificationEvent);
}

/// A raw event as delivered by the host runtime
#[derive(Debug, Clone)]
pub struct RawNativeEvent {
    /// Native event name the host emitted under
    pub name: String,
    /// JSON payload describing the event
    pub payload: String,
}

type ObserverList = Arc<RwLock<Vec<Arc<dyn ForegroundEventObserver>>>>;

/// Builds the dispatch task for a set of declared event names
pub struct EventDispatcher {
    accepted: HashSet<String>,
    observers: ObserverList,
}

impl EventDispatcher {
    pub fn new(accepted: impl IntoIterator<Item = String>) -> Self {
        Self {
            accepted: accepted.into_iter().collect(),
            observers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Start the dispatch task on its own runtime
    pub fn start(self) -> Result<DispatcherHandle, BridgeError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("herald-events")
            .enable_all()
            .build()?;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawNativeEvent>();

        let accepted = self.accepted;
        let observers = Arc::clone(&self.observers);

        runtime.spawn(async move {
            info!("Event dispatch task started ({} event names)", accepted.len());

            while let Some(raw) = event_rx.recv().await {
                if !accepted.contains(&raw.name) {
                    warn!("Dropping event with undeclared name: {}", raw.name);
                    continue;
                }

                match serde_json::from_str::<NotificationEvent>(&raw.payload) {
                    Ok(event) => {
                        debug!("Dispatching {:?} event", event.event_type);
                        for observer in observers.read().iter() {
                            observer.on_event(event.clone());
                        }
                    }
                    Err(e) => {
                        warn!("Dropping malformed {} payload: {}", raw.name, e);
                    }
                }
            }

            debug!("Event dispatch task ended");
        });

        Ok(DispatcherHandle {
            runtime,
            event_tx,
            observers: self.observers,
        })
    }
}

/// Handle to a running dispatch task
pub struct DispatcherHandle {
    runtime: Runtime,
    event_tx: mpsc::UnboundedSender<RawNativeEvent>,
    observers: ObserverList,
}

impl DispatcherHandle {
    /// Enqueue a raw native event; never blocks the calling thread
    pub fn emit(&self, name: impl Into<String>, payload: impl Into<String>) -> Result<(), BridgeError> {
        self.event_tx
            .send(RawNativeEvent {
                name: name.into(),
                payload: payload.into(),
            })
            .map_err(|_| BridgeError::DispatchClosed)
    }

    /// Register an observer for dispatched events
    pub fn add_observer(&self, observer: Arc<dyn ForegroundEventObserver>) {
        self.observers.write().push(observer);
        debug!("Observer registered ({} total)", self.observers.read().len());
    }

    /// Drop all registered observers
    pub fn clear_observers(&self) {
        self.observers.write().clear();
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    /// The runtime driving the dispatch task
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc as std_mpsc;
    use std::time::Duration;

    /// Observer double that forwards events to a channel
    struct ChannelObserver {
        tx: std_mpsc::Sender<NotificationEvent>,
    }

    impl ForegroundEventObserver for ChannelObserver {
        fn on_event(&self, event: NotificationEvent) {
            let _ = self.tx.send(event);
        }
    }

    fn started_dispatcher(event_name: &str) -> (DispatcherHandle, std_mpsc::Receiver<NotificationEvent>) {
        let handle = EventDispatcher::new([event_name.to_string()])
            .start()
            .unwrap();

        let (tx, rx) = std_mpsc::channel();
        handle.add_observer(Arc::new(ChannelObserver { tx }));
        (handle, rx)
    }

    #[test]
    fn test_dispatches_declared_event_to_observer() {
        let (handle, rx) = started_dispatcher("app.test.event");

        handle
            .emit("app.test.event", r#"{"type":"delivered"}"#)
            .unwrap();

        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(event.event_type, crate::types::EventType::Delivered);
    }

    #[test]
    fn test_drops_undeclared_event_name() {
        let (handle, rx) = started_dispatcher("app.test.event");

        handle
            .emit("app.other.event", r#"{"type":"delivered"}"#)
            .unwrap();

        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }

    #[test]
    fn test_drops_malformed_payload() {
        let (handle, rx) = started_dispatcher("app.test.event");

        handle.emit("app.test.event", "not json").unwrap();

        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }

    #[test]
    fn test_clear_observers() {
        let (handle, rx) = started_dispatcher("app.test.event");
        assert_eq!(handle.observer_count(), 1);

        handle.clear_observers();
        assert_eq!(handle.observer_count(), 0);

        handle
            .emit("app.test.event", r#"{"type":"press"}"#)
            .unwrap();
        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }
}

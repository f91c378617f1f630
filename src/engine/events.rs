use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

/// Change notifications published by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    TrackChanged { index: Option<usize> },
    VolumeChanged(f64),
    PositionChanged(Duration),
    ShuffleChanged(bool),
}

#[derive(Debug, Default)]
struct Subscribers {
    next_id: u64,
    senders: Vec<(u64, Sender<EngineEvent>)>,
}

/// Fan-out of [`EngineEvent`]s to any number of subscribers.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<Subscribers>>,
}

impl EventBus {
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        let id = match self.inner.lock() {
            Ok(mut subs) => {
                let id = subs.next_id;
                subs.next_id += 1;
                subs.senders.push((id, tx));
                id
            }
            Err(_) => {
                tracing::warn!(target: "engine", "event bus lock poisoned; subscription is inert");
                u64::MAX
            }
        };

        Subscription {
            id,
            rx,
            bus: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `event` to every live subscriber, pruning dead ones.
    pub fn publish(&self, event: EngineEvent) {
        if let Ok(mut subs) = self.inner.lock() {
            subs.senders.retain(|(_, tx)| tx.send(event.clone()).is_ok());
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|s| s.senders.len()).unwrap_or(0)
    }
}

/// A registered event handler slot. Dropping it unregisters.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    rx: Receiver<EngineEvent>,
    bus: Weak<Mutex<Subscribers>>,
}

impl Subscription {
    /// Drain events received so far without blocking.
    pub fn try_iter(&self) -> impl Iterator<Item = EngineEvent> + '_ {
        self.rx.try_iter()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            if let Ok(mut subs) = bus.lock() {
                subs.senders.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

//! Asynchronous "what is in the play queue right now" queries.
//!
//! A query runs off the UI thread and posts a [`QueryCompletion`] back to the
//! event loop's channel. Every request carries a [`QueryTicket`] so the loop
//! can discard completions that a newer request has superseded.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use super::model::Track;

/// Point-in-time copy of the engine's queue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueSnapshot {
    pub tracks: Vec<Arc<Track>>,
    /// Queue index the engine is playing, if any.
    pub playing: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("playback session is unavailable")]
    Unavailable,
}

/// Something that can produce a [`QueueSnapshot`]. Called on a worker thread.
pub trait QueueSource: Send + Sync {
    fn fetch_queue_snapshot(&self) -> Result<QueueSnapshot, FetchError>;
}

/// Identifies one issued query; higher generations supersede lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryTicket {
    pub generation: u64,
}

#[derive(Debug)]
pub struct QueryCompletion {
    pub ticket: QueryTicket,
    pub result: Result<QueueSnapshot, FetchError>,
}

/// Starts queries on behalf of the queue view.
pub trait QueryDispatch {
    fn dispatch(&self, ticket: QueryTicket);
}

/// Runs each query on its own short-lived thread.
pub struct QueryRunner {
    source: Arc<dyn QueueSource>,
    completions: Sender<QueryCompletion>,
}

impl QueryRunner {
    pub fn new(source: Arc<dyn QueueSource>, completions: Sender<QueryCompletion>) -> Self {
        Self {
            source,
            completions,
        }
    }
}

impl QueryDispatch for QueryRunner {
    fn dispatch(&self, ticket: QueryTicket) {
        let source = Arc::clone(&self.source);
        let completions = self.completions.clone();

        let spawned = thread::Builder::new()
            .name("queue-query".into())
            .spawn(move || {
                let result = source.fetch_queue_snapshot();
                // The loop may already be gone during shutdown.
                let _ = completions.send(QueryCompletion { ticket, result });
            });

        if let Err(e) = spawned {
            tracing::warn!(target: "library", "could not start queue query {}: {e}", ticket.generation);
        }
    }
}

//! Fetch worker thread
//!
//! Hosts a single-threaded tokio runtime off the UI thread. Every request
//! becomes its own spawned task and is never cancelled once started, so
//! responses come back in completion order, not request order. The UI thread
//! drains responses with [`FetchWorker::try_recv`] on each tick.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::{DetailSource, SuggestionSource};
use crate::detail::DetailOutcome;

/// Request messages sent to the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Suggestions {
        query: String,
        /// Increments per dispatch, used to recognise stale responses
        request_id: u64,
    },
    Detail {
        name: String,
    },
}

/// Response messages received from the worker thread
#[derive(Debug)]
pub enum FetchResponse {
    Suggestions {
        query: String,
        request_id: u64,
        suggestions: Vec<String>,
    },
    Detail {
        name: String,
        outcome: DetailOutcome,
    },
}

/// Handle owned by the UI thread
pub struct FetchWorker {
    request_tx: UnboundedSender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
    shutdown: CancellationToken,
}

impl FetchWorker {
    /// Queue a request; returns false once the worker has gone away
    pub fn send(&self, request: FetchRequest) -> bool {
        match self.request_tx.send(request) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Fetch worker unavailable, dropping {:?}", e.0);
                false
            }
        }
    }

    /// Next completed response, if any, without blocking
    pub fn try_recv(&self) -> Option<FetchResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Spawn the worker thread serving requests from `source`
pub fn spawn_worker<S>(source: S) -> FetchWorker
where
    S: SuggestionSource + DetailSource + Send + Sync + 'static,
{
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let shutdown = CancellationToken::new();
    let token = shutdown.clone();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("Failed to start fetch runtime: {}", e);
                return;
            }
        };
        runtime.block_on(worker_loop(Arc::new(source), request_rx, response_tx, token));
        log::debug!("Fetch worker thread shutting down");
    });

    FetchWorker {
        request_tx,
        response_rx,
        shutdown,
    }
}

/// Main worker loop - spawns one task per request until shutdown
async fn worker_loop<S>(
    source: Arc<S>,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
    shutdown: CancellationToken,
) where
    S: SuggestionSource + DetailSource + Send + Sync + 'static,
{
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => {
                let Some(request) = request else { break };
                let source = Arc::clone(&source);
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let response = handle_request(source.as_ref(), request).await;
                    // The UI may have quit already
                    let _ = response_tx.send(response);
                });
            }
        }
    }
}

async fn handle_request<S>(source: &S, request: FetchRequest) -> FetchResponse
where
    S: SuggestionSource + DetailSource,
{
    match request {
        FetchRequest::Suggestions { query, request_id } => {
            let suggestions = source.search(&query).await;
            log::debug!(
                "Request {} for {:?} returned {} suggestions",
                request_id,
                query,
                suggestions.len()
            );
            FetchResponse::Suggestions {
                query,
                request_id,
                suggestions,
            }
        }
        FetchRequest::Detail { name } => {
            let outcome = source.fetch_detail(&name).await;
            FetchResponse::Detail { name, outcome }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

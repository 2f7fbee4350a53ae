//! Lookup worker thread
//!
//! Runs dictionary lookups off the UI thread. Requests arrive over a tokio
//! channel and each one runs as its own task on a current-thread runtime, so
//! a slow fetch never holds up hovers for other words. Responses go back
//! over a std channel tagged with the request id; the editor decides whether
//! a response is still wanted.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::dictionary::{DefinitionSource, DictionaryClient};
use crate::host::provide_hover;

/// Work the editor can hand to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Hover { word: String, request_id: u64 },
}

/// Results sent back to the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    /// `lines` is `None` when the dictionary has no definitions
    Hover {
        request_id: u64,
        word: String,
        lines: Option<Vec<String>>,
    },
    Failed {
        request_id: u64,
        word: String,
        message: String,
    },
}

impl LookupResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            LookupResponse::Hover { request_id, .. } | LookupResponse::Failed { request_id, .. } => {
                *request_id
            }
        }
    }
}

/// Spawn the lookup worker thread
///
/// The thread exits once every request sender has been dropped.
pub fn spawn_worker<S>(
    client: DictionaryClient<S>,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) where
    S: DefinitionSource + 'static,
{
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create tokio runtime for lookups: {}", e);
                return;
            }
        };

        rt.block_on(worker_loop(Arc::new(client), request_rx, response_tx));
        log::debug!("Lookup worker stopped");
    });
}

/// Receive requests until the channel closes, spawning a task per request
async fn worker_loop<S>(
    client: Arc<DictionaryClient<S>>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) where
    S: DefinitionSource + 'static,
{
    while let Some(request) = request_rx.recv().await {
        match request {
            LookupRequest::Hover { word, request_id } => {
                let client = Arc::clone(&client);
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let response = handle_hover(&client, word, request_id).await;
                    // The editor may already be gone; nothing to do then
                    let _ = response_tx.send(response);
                });
            }
        }
    }
}

async fn handle_hover<S: DefinitionSource>(
    client: &DictionaryClient<S>,
    word: String,
    request_id: u64,
) -> LookupResponse {
    match provide_hover(client, &word).await {
        Ok(lines) => LookupResponse::Hover {
            request_id,
            word,
            lines,
        },
        Err(e) => LookupResponse::Failed {
            request_id,
            word,
            message: e.to_string(),
        },
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

//! Oracle worker thread
//!
//! Owns the outbound HTTP side of the suggestion and refine features so the
//! UI event loop never blocks on the network. Requests arrive over a channel
//! and are serviced one at a time on a current-thread tokio runtime; each
//! call races against its cancellation token, so a superseded request aborts
//! promptly instead of running to completion.

use std::future::Future;
use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::{OracleRequest, OracleResponse};
use crate::oracle::{OracleClient, OracleError};

/// Spawn the oracle worker thread
///
/// The worker exits when the request channel closes (all senders dropped)
/// or when the response receiver goes away.
pub fn spawn_worker(
    client: OracleClient,
    request_rx: Receiver<OracleRequest>,
    response_tx: Sender<OracleResponse>,
) {
    std::thread::spawn(move || worker_loop(client, request_rx, response_tx));
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: OracleClient,
    request_rx: Receiver<OracleRequest>,
    response_tx: Sender<OracleResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("failed to start oracle worker runtime: {}", e);
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        let response = match request {
            OracleRequest::Complete {
                text,
                request_id,
                cancel,
            } => match runtime.block_on(run_cancellable(client.complete(&text), &cancel)) {
                None => OracleResponse::Cancelled { request_id },
                Some(Ok(text)) => OracleResponse::Suggestion { text, request_id },
                Some(Err(e)) => OracleResponse::Failed {
                    message: e.to_string(),
                    request_id,
                },
            },
            OracleRequest::Refine {
                text,
                request_id,
                cancel,
            } => match runtime.block_on(run_cancellable(client.refine(&text), &cancel)) {
                None => OracleResponse::Cancelled { request_id },
                Some(Ok(text)) => OracleResponse::Refined { text, request_id },
                Some(Err(e)) => OracleResponse::Failed {
                    message: e.to_string(),
                    request_id,
                },
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected, stop working
            break;
        }
    }

    log::debug!("oracle worker shutting down");
}

/// Race an oracle call against its cancellation token
///
/// Returns `None` when cancelled. A token cancelled while the request was
/// still queued wins outright; the call is never started.
async fn run_cancellable<F>(
    call: F,
    cancel: &CancellationToken,
) -> Option<Result<String, OracleError>>
where
    F: Future<Output = Result<String, OracleError>>,
{
    if cancel.is_cancelled() {
        return None;
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        result = call => Some(result),
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

//! Inline suggestion subsystem
//!
//! Owns the lifecycle of "does the current cursor position merit an inline
//! continuation, and if so, what is it". The controller debounces text-change
//! events, keeps at most one oracle request in flight, and discards responses
//! from superseded requests. The worker thread owns the HTTP side so the UI
//! event loop never blocks on the network.

mod controller;
mod debouncer;
mod worker;

pub use controller::SuggestController;
pub use debouncer::Debouncer;
pub use worker::spawn_worker;

use tokio_util::sync::CancellationToken;

/// Request messages sent to the oracle worker thread
#[derive(Debug)]
pub enum OracleRequest {
    /// Ask for a short inline continuation of `text`
    Complete {
        text: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
        /// Cancelling this token aborts the call mid-flight
        cancel: CancellationToken,
    },
    /// Ask for a full rewrite of the draft prompt
    Refine {
        text: String,
        request_id: u64,
        cancel: CancellationToken,
    },
}

/// Response messages received from the oracle worker thread
#[derive(Debug)]
pub enum OracleResponse {
    /// Completion result for a `Complete` request
    Suggestion { text: String, request_id: u64 },
    /// Rewrite result for a `Refine` request
    Refined { text: String, request_id: u64 },
    /// The call failed (network, API status, malformed payload)
    Failed { message: String, request_id: u64 },
    /// The call was cancelled; expected when superseded, never an error
    Cancelled { request_id: u64 },
}

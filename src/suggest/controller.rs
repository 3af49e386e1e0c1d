//! Inline-suggestion controller
//!
//! Decides on every text change whether an inline continuation should be
//! (re)computed, keeps exactly one outstanding oracle request, and exposes
//! the current suggestion/busy state to the host UI.
//!
//! Contract with the host:
//! - `on_key_down` is called before the key mutates the text buffer
//! - `on_text_changed` is called after every buffer mutation with the full
//!   updated text and the new cursor offset (in chars)
//! - `accept_suggestion` returns raw text; the host splices it at the cursor
//!
//! Responses are applied in "last request wins" order: a response belonging
//! to any but the most recently issued request is discarded.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

use crossterm::event::KeyCode;
use tokio_util::sync::CancellationToken;

use super::debouncer::Debouncer;
use super::{OracleRequest, OracleResponse};

/// Minimum text length (chars) before suggestions are considered
const MIN_TEXT_LEN: usize = 5;

/// The single authoritative outbound request
#[derive(Debug)]
struct InFlight {
    request_id: u64,
    cancel: CancellationToken,
}

/// Debounced, cancellable inline-suggestion state machine
pub struct SuggestController {
    /// Most recently accepted suggestion text; empty when none applies
    suggestion: String,
    /// True while a completion request is in flight
    pending: bool,
    /// Set on each keydown, read by the next debounced evaluation
    last_key_was_backspace: bool,
    debouncer: Debouncer,
    request_tx: Option<Sender<OracleRequest>>,
    response_rx: Option<Receiver<OracleResponse>>,
    /// Monotonically increasing request counter; stale responses carry an
    /// older ID and are dropped
    request_id: u64,
    in_flight: Option<InFlight>,
}

impl SuggestController {
    /// Create a controller with the given debounce window
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            suggestion: String::new(),
            pending: false,
            last_key_was_backspace: false,
            debouncer: Debouncer::new(debounce_ms),
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight: None,
        }
    }

    /// Wire up the channels to the oracle worker thread
    ///
    /// Without channels the controller still debounces and evaluates
    /// eligibility, but eligible evaluations are no-ops.
    pub fn set_channels(
        &mut self,
        request_tx: Sender<OracleRequest>,
        response_rx: Receiver<OracleResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Current suggestion text; empty when none applies
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    /// Whether a completion request is in flight
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a text change, (re)arming the debounce window
    ///
    /// `cursor` is the insertion-point offset into `text`, in chars.
    pub fn on_text_changed(&mut self, text: &str, cursor: usize) {
        self.debouncer.trigger(text.to_string(), cursor);
    }

    /// Record a keydown; must be called before the key mutates the buffer
    ///
    /// Backspace synchronously clears the suggestion so a deletion never
    /// shows stale text; the flag suppresses the next debounced evaluation.
    pub fn on_key_down(&mut self, key: KeyCode) {
        if key == KeyCode::Backspace {
            self.last_key_was_backspace = true;
            self.clear_suggestion();
        } else {
            self.last_key_was_backspace = false;
        }
    }

    /// Take the current suggestion, clearing the state
    ///
    /// The caller splices the returned text into the buffer at the cursor;
    /// the controller never mutates the buffer itself.
    pub fn accept_suggestion(&mut self) -> String {
        let accepted = std::mem::take(&mut self.suggestion);
        self.clear_suggestion();
        accepted
    }

    /// Reset to empty/not-pending; idempotent
    ///
    /// Also invalidates any in-flight request so its response cannot
    /// resurface a suggestion that was just cleared.
    pub fn clear_suggestion(&mut self) {
        self.suggestion.clear();
        self.pending = false;
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.cancel.cancel();
            log::debug!("cleared suggestion, cancelled request {}", in_flight.request_id);
        }
    }

    /// Fire the debounced evaluation and apply worker responses
    ///
    /// Called once per host event-loop tick.
    pub fn poll(&mut self) {
        self.poll_at(Instant::now());
    }

    /// Like [`poll`](Self::poll) with an explicit clock, for tests
    pub fn poll_at(&mut self, now: Instant) {
        if let Some((text, cursor)) = self.debouncer.fire(now) {
            self.evaluate(&text, cursor);
        }
        self.drain_responses();
    }

    /// Evaluate eligibility against the latest debounced arguments
    ///
    /// Mid-text insertion points, short text, a missing trailing space, or a
    /// preceding backspace all clear the suggestion without an oracle call.
    fn evaluate(&mut self, text: &str, cursor: usize) {
        let len = text.chars().count();
        let eligible = len >= MIN_TEXT_LEN
            && cursor == len
            && text.ends_with(' ')
            && !self.last_key_was_backspace;

        if !eligible {
            self.suggestion.clear();
            return;
        }

        let Some(request_tx) = &self.request_tx else {
            return;
        };

        // Supersede any in-flight request before issuing the new one
        if let Some(previous) = self.in_flight.take() {
            previous.cancel.cancel();
            log::debug!("superseded request {}", previous.request_id);
        }

        self.request_id = self.request_id.wrapping_add(1);
        let cancel = CancellationToken::new();
        let request = OracleRequest::Complete {
            text: text.to_string(),
            request_id: self.request_id,
            cancel: cancel.clone(),
        };

        if request_tx.send(request).is_ok() {
            self.pending = true;
            self.in_flight = Some(InFlight {
                request_id: self.request_id,
                cancel,
            });
        } else {
            log::warn!("oracle worker is gone; suggestion request dropped");
        }
    }

    /// Apply any responses waiting on the worker channel
    fn drain_responses(&mut self) {
        let Some(response_rx) = &self.response_rx else {
            return;
        };
        let mut responses = Vec::new();
        while let Ok(response) = response_rx.try_recv() {
            responses.push(response);
        }
        for response in responses {
            self.handle_response(response);
        }
    }

    fn handle_response(&mut self, response: OracleResponse) {
        match response {
            OracleResponse::Suggestion { text, request_id } => {
                if self.current_request_id() == Some(request_id) {
                    self.suggestion = strip_leading_quote(&text).to_string();
                    self.pending = false;
                    self.in_flight = None;
                } else {
                    log::debug!("discarding stale suggestion for request {}", request_id);
                }
            }
            OracleResponse::Failed { message, request_id } => {
                if self.current_request_id() == Some(request_id) {
                    log::warn!("suggestion request {} failed: {}", request_id, message);
                    self.pending = false;
                    self.in_flight = None;
                }
            }
            OracleResponse::Cancelled { request_id } => {
                // Expected outcome of being superseded; not an error
                log::debug!("suggestion request {} cancelled", request_id);
            }
            OracleResponse::Refined { request_id, .. } => {
                log::warn!("unexpected refine response {} on suggestion channel", request_id);
            }
        }
    }

    fn current_request_id(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|in_flight| in_flight.request_id)
    }

    /// Whether a request is currently in flight
    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight.is_some()
    }
}

/// Strip a single leading quotation mark, a cosmetic artifact of the
/// oracle's output style. Leading only; the oracle never emits trailing
/// quotes without a leading one.
fn strip_leading_quote(text: &str) -> &str {
    text.strip_prefix('"')
        .or_else(|| text.strip_prefix('\''))
        .unwrap_or(text)
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;

//! Application state

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tokio_util::sync::CancellationToken;
use tui_textarea::TextArea;

use crate::cli::Cli;
use crate::config::{ClipboardBackend, Config};
use crate::export::{self, DEFAULT_EXPORT_FILE, ExportData};
use crate::oracle::OracleClient;
use crate::suggest::{OracleRequest, OracleResponse, SuggestController, spawn_worker};
use crate::wizard::{Step, Wizard};

/// A refine call that has been sent but not yet resolved
pub(super) struct RefineInFlight {
    pub request_id: u64,
    pub cancel: CancellationToken,
    /// Draft text the call was issued for; cached on success so an
    /// unchanged draft skips the next refine
    pub draft: String,
}

/// Application state
pub struct App {
    /// Draft step editor
    pub draft: TextArea<'static>,
    /// Refine step editor (pre-filled by the refine oracle)
    pub refined: TextArea<'static>,
    /// Rate step free-text feedback
    pub feedback: TextArea<'static>,
    pub wizard: Wizard,
    pub suggest: SuggestController,
    /// Channel to the refine worker thread
    pub refine_tx: Option<Sender<OracleRequest>>,
    /// Channel from the refine worker thread
    pub refine_rx: Option<Receiver<OracleResponse>>,
    pub(super) refine_request_id: u64,
    pub(super) refine_in_flight: Option<RefineInFlight>,
    /// Status-line message, replaced by the next notable event
    pub notice: Option<String>,
    pub should_quit: bool,
    pub(super) export_path: PathBuf,
    pub(super) clipboard_backend: ClipboardBackend,
    oracle_configured: bool,
}

impl App {
    /// Create a new App from loaded configuration and CLI options
    pub fn new(config: Config, cli: &Cli) -> Self {
        let mut suggest = SuggestController::new(config.suggest.debounce_ms);
        let mut refine_tx = None;
        let mut refine_rx = None;

        let oracle_configured = match OracleClient::from_config(&config.oracle) {
            Ok(client) => {
                if config.suggest.enabled && !cli.no_suggest {
                    let (request_tx, request_rx) = mpsc::channel();
                    let (response_tx, response_rx) = mpsc::channel();
                    spawn_worker(client.clone(), request_rx, response_tx);
                    suggest.set_channels(request_tx, response_rx);
                }

                let (request_tx, request_rx) = mpsc::channel();
                let (response_tx, response_rx) = mpsc::channel();
                spawn_worker(client, request_rx, response_tx);
                refine_tx = Some(request_tx);
                refine_rx = Some(response_rx);
                true
            }
            Err(e) => {
                log::warn!("oracle disabled: {}", e);
                false
            }
        };

        Self {
            draft: make_textarea(" Draft Prompt ", "Enter your initial prompt here..."),
            refined: make_textarea(" Refined Prompt ", "The refined prompt appears here..."),
            feedback: make_textarea(" Feedback ", "Any additional feedback?"),
            wizard: Wizard::new(),
            suggest,
            refine_tx,
            refine_rx,
            refine_request_id: 0,
            refine_in_flight: None,
            notice: None,
            should_quit: false,
            export_path: cli
                .export
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE)),
            clipboard_backend: config.clipboard.backend,
            oracle_configured,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a refine call is outstanding
    pub fn is_refining(&self) -> bool {
        self.refine_in_flight.is_some()
    }

    /// Whether an oracle API key was configured at startup
    pub fn oracle_configured(&self) -> bool {
        self.oracle_configured
    }

    /// Current draft text
    pub fn draft_text(&self) -> String {
        full_text(&self.draft)
    }

    /// Current refined text
    pub fn refined_text(&self) -> String {
        full_text(&self.refined)
    }

    /// The prompt the Export step operates on: refined when available
    pub fn final_prompt(&self) -> String {
        let refined = self.refined_text();
        if refined.trim().is_empty() {
            self.draft_text()
        } else {
            refined
        }
    }

    /// Per-tick work: fire the suggestion debouncer and apply worker
    /// responses
    pub fn tick(&mut self) {
        self.suggest.poll();
        self.drain_refine_responses();
    }

    /// Advance the wizard, refining the draft first when it changed
    pub(super) fn next_step(&mut self) {
        match self.wizard.step() {
            Step::Draft => {
                let draft = self.draft_text();
                if draft.trim().is_empty() {
                    self.notice = Some("Enter a prompt before continuing".to_string());
                    return;
                }
                if self.is_refining() {
                    return;
                }
                if self.wizard.needs_refine(&draft) {
                    self.send_refine(draft);
                } else {
                    self.wizard.advance();
                }
            }
            _ => {
                self.wizard.advance();
            }
        }
    }

    pub(super) fn previous_step(&mut self) {
        self.wizard.retreat();
    }

    /// Send the draft to the refine oracle; the wizard advances when the
    /// response lands
    fn send_refine(&mut self, draft: String) {
        let Some(request_tx) = &self.refine_tx else {
            self.notice = Some(
                "Oracle not configured; set PROMPTMAGIC_API_KEY or [oracle] api_key".to_string(),
            );
            return;
        };

        if let Some(previous) = self.refine_in_flight.take() {
            previous.cancel.cancel();
        }

        self.refine_request_id = self.refine_request_id.wrapping_add(1);
        let cancel = CancellationToken::new();
        let request = OracleRequest::Refine {
            text: draft.clone(),
            request_id: self.refine_request_id,
            cancel: cancel.clone(),
        };

        if request_tx.send(request).is_ok() {
            self.refine_in_flight = Some(RefineInFlight {
                request_id: self.refine_request_id,
                cancel,
                draft,
            });
            self.notice = None;
        } else {
            log::warn!("refine worker is gone; request dropped");
        }
    }

    /// Apply any refine responses waiting on the worker channel
    fn drain_refine_responses(&mut self) {
        let Some(response_rx) = &self.refine_rx else {
            return;
        };
        let mut responses = Vec::new();
        while let Ok(response) = response_rx.try_recv() {
            responses.push(response);
        }
        for response in responses {
            self.handle_refine_response(response);
        }
    }

    fn handle_refine_response(&mut self, response: OracleResponse) {
        let current_id = self.refine_in_flight.as_ref().map(|r| r.request_id);
        match response {
            OracleResponse::Refined { text, request_id } if current_id == Some(request_id) => {
                if let Some(in_flight) = self.refine_in_flight.take() {
                    set_text(&mut self.refined, &text);
                    self.wizard.record_refined(&in_flight.draft);
                    self.wizard.advance();
                }
            }
            OracleResponse::Failed { message, request_id } if current_id == Some(request_id) => {
                log::warn!("refine request {} failed: {}", request_id, message);
                self.refine_in_flight = None;
                self.notice = Some(format!("Refine failed: {}", message));
            }
            OracleResponse::Cancelled { request_id } => {
                log::debug!("refine request {} cancelled", request_id);
            }
            other => {
                log::debug!("discarding stale refine response {:?}", other);
            }
        }
    }

    /// Copy the refined prompt back into the draft and return to the Draft
    /// step for another pass
    pub(super) fn iterate(&mut self) {
        let refined = self.refined_text();
        set_text(&mut self.draft, &refined);
        self.suggest.clear_suggestion();
        self.wizard.iterate();
    }

    /// Copy `text` to the clipboard and report the outcome in the status
    /// line
    pub(super) fn copy_to_clipboard(&mut self, text: String) {
        match crate::clipboard::copy(&text, self.clipboard_backend) {
            Ok(()) => self.notice = Some("Copied to clipboard".to_string()),
            Err(e) => {
                log::warn!("clipboard copy failed: {}", e);
                self.notice = Some(format!("Copy failed: {}", e));
            }
        }
    }

    /// Write the export JSON for the finished session
    pub(super) fn export_session(&mut self) {
        let feedback = match self.wizard.rating() {
            Some(rating) => {
                let comments = full_text(&self.feedback);
                if comments.trim().is_empty() {
                    rating.label().to_string()
                } else {
                    format!("{}: {}", rating.label(), comments)
                }
            }
            None => full_text(&self.feedback),
        };
        let data = ExportData::new(self.draft_text(), self.refined_text(), feedback);
        match export::write_json(&data, &self.export_path) {
            Ok(()) => {
                self.notice = Some(format!("Exported to {}", self.export_path.display()));
            }
            Err(e) => {
                log::warn!("export failed: {}", e);
                self.notice = Some(format!("Export failed: {}", e));
            }
        }
    }
}

/// Create a styled textarea
fn make_textarea(title: &'static str, placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(placeholder);
    textarea
}

/// Full text of a textarea, lines joined with newlines
pub(super) fn full_text(textarea: &TextArea<'_>) -> String {
    textarea.lines().join("\n")
}

/// Cursor position as a char offset into the full text
///
/// This is the offset the suggestion controller compares against the text
/// length: it only reaches the length when the cursor sits on the last
/// column of the last line.
pub(super) fn char_offset(textarea: &TextArea<'_>) -> usize {
    let (row, col) = textarea.cursor();
    let mut offset = 0;
    for line in textarea.lines().iter().take(row) {
        offset += line.chars().count() + 1; // +1 for the newline
    }
    offset + col
}

/// Replace a textarea's content in place, keeping its styling
pub(super) fn set_text(textarea: &mut TextArea<'static>, text: &str) {
    textarea.select_all();
    textarea.cut();
    textarea.insert_str(text);
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;

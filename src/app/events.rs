//! Key event handling
//!
//! Global keys first (quit, step navigation), then per-step handling. On the
//! Draft step the suggestion controller is notified before the key mutates
//! the textarea (`on_key_down`) and after every mutation (`on_text_changed`),
//! which is the order its contract requires.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, char_offset, full_text};
use crate::wizard::{Rating, Step};

impl App {
    /// Handle a key press event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.wizard.step() {
            Step::Draft => self.handle_draft_key(key),
            Step::Refine => self.handle_refine_key(key),
            Step::Rate => self.handle_rate_key(key),
            Step::Export => self.handle_export_key(key),
        }
    }

    /// Keys that work on every step; returns true when handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('n') if ctrl => {
                self.next_step();
                true
            }
            KeyCode::Char('p') if ctrl => {
                self.previous_step();
                true
            }
            _ => false,
        }
    }

    fn handle_draft_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Tab {
            let accepted = self.suggest.accept_suggestion();
            if !accepted.is_empty() {
                self.draft.insert_str(&accepted);
                self.notify_draft_changed();
            }
            return;
        }

        // Keydown first: backspace must clear the suggestion before the
        // deletion is applied
        self.suggest.on_key_down(key.code);
        if self.draft.input(key) {
            self.notify_draft_changed();
        }
    }

    /// Report the draft's new text and cursor offset to the controller
    fn notify_draft_changed(&mut self) {
        let text = full_text(&self.draft);
        let cursor = char_offset(&self.draft);
        self.suggest.on_text_changed(&text, cursor);
    }

    fn handle_refine_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            // Copy the whole refined prompt
            KeyCode::Char('y') if ctrl => {
                let text = self.refined_text();
                self.copy_to_clipboard(text);
            }
            // Iterate: bring the refined prompt back to Draft
            KeyCode::Char('i') if ctrl => self.iterate(),
            _ => {
                self.refined.input(key);
            }
        }
    }

    fn handle_rate_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('r') {
            self.cycle_rating();
            return;
        }
        self.feedback.input(key);
    }

    /// Step through the rating choices, wrapping at the end
    fn cycle_rating(&mut self) {
        let next = match self.wizard.rating() {
            None => Rating::VerySatisfied,
            Some(current) => {
                let index = Rating::ALL
                    .iter()
                    .position(|r| *r == current)
                    .unwrap_or(Rating::ALL.len() - 1);
                Rating::ALL[(index + 1) % Rating::ALL.len()]
            }
        };
        self.wizard.set_rating(next);
    }

    fn handle_export_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('e') => self.export_session(),
            KeyCode::Char('c') => {
                let text = self.final_prompt();
                self.copy_to_clipboard(text);
            }
            KeyCode::Char('q') | KeyCode::Enter => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;

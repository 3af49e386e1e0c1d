//! UI rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthChar;

use super::state::App;
use crate::wizard::{Rating, Step};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Step header
            Constraint::Length(1), // Progress gauge
            Constraint::Min(3),    // Step body
            Constraint::Length(1), // Status / hints
        ])
        .split(frame.area());

        self.render_step_header(frame, layout[0]);
        self.render_progress(frame, layout[1]);
        match self.wizard.step() {
            Step::Draft => self.render_draft_step(frame, layout[2]),
            Step::Refine => self.render_refine_step(frame, layout[2]),
            Step::Rate => self.render_rate_step(frame, layout[2]),
            Step::Export => self.render_export_step(frame, layout[2]),
        }
        self.render_status_line(frame, layout[3]);
    }

    /// Step titles with the current one highlighted
    fn render_step_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            " PromptMagic ",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )];
        for (i, step) in Step::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
            }
            let style = if *step == self.wizard.step() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(step.title(), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let done = self.wizard.step().ordinal() + 1;
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .ratio(done as f64 / Step::ALL.len() as f64)
            .label(format!("step {}/{}", done, Step::ALL.len()));
        frame.render_widget(gauge, area);
    }

    /// Draft editor plus the inline-suggestion line beneath it
    fn render_draft_step(&mut self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

        frame.render_widget(&self.draft, layout[0]);

        let suggestion_line = if self.suggest.is_pending() {
            Line::from(Span::styled(
                " Thinking...",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else if !self.suggest.suggestion().is_empty() {
            let max_width = layout[1].width.saturating_sub(8) as usize;
            let suggestion = truncate_to_width(self.suggest.suggestion(), max_width);
            Line::from(vec![
                Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(suggestion, Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::default()
        };
        frame.render_widget(Paragraph::new(suggestion_line), layout[1]);
    }

    fn render_refine_step(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.refined, area);
    }

    /// Rating choices above the free-text feedback editor
    fn render_rate_step(&mut self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);

        let mut spans = vec![Span::raw(" How satisfied are you with the refined prompt?  ")];
        for (i, rating) in Rating::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if self.wizard.rating() == Some(*rating) {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(rating.label(), style));
        }
        let choices = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Rate "));
        frame.render_widget(choices, layout[0]);

        frame.render_widget(&self.feedback, layout[1]);
    }

    /// Read-only preview of the final prompt
    fn render_export_step(&self, frame: &mut Frame, area: Rect) {
        let preview = Paragraph::new(self.final_prompt())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Final Prompt ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(preview, area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let text = if self.is_refining() {
            " Refining...".to_string()
        } else if let Some(notice) = &self.notice {
            format!(" {}", notice)
        } else {
            let hints = match self.wizard.step() {
                Step::Draft => "Ctrl+N next | Tab accept suggestion | Esc quit",
                Step::Refine => "Ctrl+N next | Ctrl+P back | Ctrl+Y copy | Ctrl+I iterate",
                Step::Rate => "Ctrl+N next | Ctrl+P back | Ctrl+R rating",
                Step::Export => "e export JSON | c copy | q quit | Ctrl+P back",
            };
            format!(" {}", hints)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))),
            area,
        );
    }
}

/// Truncate to a display width, appending an ellipsis when cut short
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            out.push('…');
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;

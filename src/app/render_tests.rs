//! Rendering tests against ratatui's TestBackend

use super::*;
use crate::cli::Cli;
use crate::config::Config;
use ratatui::{Terminal, backend::TestBackend};

fn test_app() -> App {
    let cli = Cli {
        config: None,
        export: None,
        no_suggest: true,
    };
    App::new(Config::default(), &cli)
}

fn render_to_text(app: &mut App) -> String {
    let backend = TestBackend::new(80, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_render_draft_step() {
    let mut app = test_app();
    let text = render_to_text(&mut app);
    assert!(text.contains("PromptMagic"));
    assert!(text.contains("Draft"));
    assert!(text.contains("step 1/4"));
    assert!(text.contains("Esc quit"));
}

#[test]
fn test_render_shows_pending_indicator() {
    let mut app = test_app();
    let (request_tx, _request_rx) = std::sync::mpsc::channel();
    let (_response_tx, response_rx) = std::sync::mpsc::channel();
    app.suggest.set_channels(request_tx, response_rx);
    app.suggest.on_text_changed("write me a ", 11);
    app.suggest
        .poll_at(std::time::Instant::now() + std::time::Duration::from_millis(301));
    assert!(app.suggest.is_pending());

    let text = render_to_text(&mut app);
    assert!(text.contains("Thinking..."));
}

#[test]
fn test_render_rate_step_lists_ratings() {
    let mut app = test_app();
    app.wizard.advance();
    app.wizard.advance();
    let text = render_to_text(&mut app);
    assert!(text.contains("Very Satisfied"));
    assert!(text.contains("Unsatisfied"));
}

#[test]
fn test_render_export_step_shows_final_prompt() {
    let mut app = test_app();
    app.draft.insert_str("final words");
    app.wizard.advance();
    app.wizard.advance();
    app.wizard.advance();
    let text = render_to_text(&mut app);
    assert!(text.contains("Final Prompt"));
    assert!(text.contains("final words"));
}

#[test]
fn test_render_status_shows_notice() {
    let mut app = test_app();
    app.notice = Some("Copied to clipboard".to_string());
    let text = render_to_text(&mut app);
    assert!(text.contains("Copied to clipboard"));
}

// =========================================================================
// truncate_to_width
// =========================================================================

#[test]
fn test_truncate_short_text_unchanged() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
}

#[test]
fn test_truncate_appends_ellipsis() {
    assert_eq!(truncate_to_width("hello world", 5), "hello…");
}

#[test]
fn test_truncate_counts_wide_chars() {
    // Each CJK char is two columns wide
    assert_eq!(truncate_to_width("日本語", 4), "日本…");
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate_to_width("abc", 0), "…");
}

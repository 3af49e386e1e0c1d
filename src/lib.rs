//! promptmagic - terminal wizard for composing, refining, rating, and
//! exporting LLM prompts.
//!
//! The interesting piece lives in [`suggest`]: a debounced, cancellable
//! inline-suggestion controller that keeps at most one completion request in
//! flight and discards stale responses. Everything else is host plumbing
//! around it: the four-step wizard, the oracle HTTP client, JSON export,
//! clipboard copy, and configuration.

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod export;
pub mod oracle;
pub mod suggest;
pub mod wizard;

//! Dúvidas — desktop chat client for the academic assistant.
//!
//! Type a question, see it in the log, get the reply appended under it.
//! The submission rules live in [`handler`] behind a small surface trait so
//! they run in tests without a webview; [`api`] speaks the server's
//! `/pergunta` protocol; [`views`] and [`ui`] are the Dioxus front.

pub mod api;
pub mod handler;
pub mod types;
pub mod ui;
pub mod views;

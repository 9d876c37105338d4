//! HTTP client for the assistant's question endpoint.
//!
//! One request shape, one response shape: `POST /pergunta` with
//! `{"pergunta": ...}` comes back as `{"resposta": ...}`. Everything that
//! can go wrong on the way is an [`AskError`].

mod client;

pub use client::{AskClient, AskError, ask};

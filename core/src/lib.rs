//! Synchronous client core for the GitHub Gist API.
//!
//! # Overview
//! Builds authenticated requests, performs a single blocking exchange per
//! operation, and decodes JSON responses. Every failure surfaces as one
//! member of the closed [`GistError`] taxonomy, so callers branch on the
//! error kind instead of inspecting raw HTTP details.
//!
//! # Design
//! - `GistClient` holds only immutable configuration (token plus optional
//!   proxy URLs); operations share no mutable state.
//! - Precondition guards run before a request is built: a missing token or
//!   an empty gist id fails locally, never as a network error.
//! - The network sits behind the [`Transport`] trait. The default
//!   implementation executes over ureq with a fresh per-call agent, so
//!   proxy settings never leak between calls; tests substitute a recording
//!   transport.
//! - Response bodies are surfaced as `serde_json::Value`, mirroring the
//!   remote API's shape with no field renaming or filtering.

pub mod client;
pub mod error;
pub mod guard;
pub mod http;
pub mod proxy;
pub mod request;
pub mod transport;

pub use client::{GistClient, GistConfig};
pub use error::GistError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use proxy::{is_valid_proxy_url, EffectiveProxies};
pub use transport::{Transport, TransportError, UreqTransport};

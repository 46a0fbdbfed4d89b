//! Plain-data types describing the transport boundary.
//!
//! # Design
//! A request is built as data, handed to a [`Transport`] implementation for
//! the actual exchange, and the response comes back as data. Keeping both
//! sides inert makes request construction and status interpretation pure
//! functions that tests can exercise without a network.
//!
//! [`Transport`]: crate::transport::Transport

/// HTTP method for a request. The Gist API uses exactly these four.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// A fully-formed request: URL, headers, and an optional JSON body already
/// encoded to bytes. Built fresh per call and not retained.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// A completed exchange as seen by the client: status code, body text if
/// one was read, and the status line's reason phrase when known.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Option<String>,
    pub reason: Option<String>,
}

//! Client facade for the Gist API.
//!
//! # Design
//! `GistClient` holds immutable configuration and a [`Transport`]; every
//! operation runs the same pipeline: precondition guards, request build,
//! one transport exchange, status mapping, JSON decode. Nothing is retained
//! between calls, so concurrent use needs no locking.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::GistError;
use crate::guard;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::proxy::{is_valid_proxy_url, EffectiveProxies};
use crate::request::{self, API_ROOT};
use crate::transport::{Transport, UreqTransport};

/// Connection settings handed in by the caller. Immutable for the lifetime
/// of one client instance.
#[derive(Debug, Clone, Default)]
pub struct GistConfig {
    pub token: Option<String>,
    pub http_proxy_url: Option<String>,
    pub https_proxy_url: Option<String>,
}

impl GistConfig {
    /// The configured proxies that survive validation. Invalid entries are
    /// dropped silently so a stale proxy setting never blocks a call.
    pub fn effective_proxies(&self) -> EffectiveProxies {
        let validated = |url: &Option<String>| {
            url.as_deref()
                .filter(|candidate| is_valid_proxy_url(Some(candidate)))
                .map(str::to_string)
        };
        EffectiveProxies {
            http: validated(&self.http_proxy_url),
            https: validated(&self.https_proxy_url),
        }
    }
}

/// Synchronous client for the five gist operations.
///
/// Responses are surfaced as [`serde_json::Value`], mirroring the remote
/// API's shape exactly. Failures are one [`GistError`] each; precondition
/// violations fail before any network I/O.
#[derive(Debug, Clone)]
pub struct GistClient<T = UreqTransport> {
    config: GistConfig,
    api_root: String,
    transport: T,
}

impl GistClient<UreqTransport> {
    pub fn new(config: GistConfig) -> Self {
        Self::with_transport(config, UreqTransport)
    }
}

impl<T: Transport> GistClient<T> {
    pub fn with_transport(config: GistConfig, transport: T) -> Self {
        Self {
            config,
            api_root: API_ROOT.to_string(),
            transport,
        }
    }

    /// Point the client at a different API root, e.g. a GitHub Enterprise
    /// host or a local test server. The default is the public endpoint.
    pub fn with_api_root(mut self, api_root: &str) -> Self {
        self.api_root = api_root.trim_end_matches('/').to_string();
        self
    }

    /// Create a gist from a non-empty payload object. Requires a token.
    pub fn create<D: Serialize>(&self, data: &D) -> Result<Value, GistError> {
        let token = guard::require_token(self.config.token.as_deref())?;
        let payload = guard::require_payload(data, "created")?;
        let request = request::build(
            HttpMethod::Post,
            request::gist_uri(&self.api_root, None),
            Some(&payload),
            Some(token),
        )?;
        decode_json(&self.send(request)?)
    }

    /// Update an existing gist from a non-empty payload object. Requires a
    /// token and a non-empty id.
    pub fn update<D: Serialize>(&self, gist_id: &str, data: &D) -> Result<Value, GistError> {
        let token = guard::require_token(self.config.token.as_deref())?;
        guard::require_gist_id(gist_id)?;
        let payload = guard::require_payload(data, "updated")?;
        let request = request::build(
            HttpMethod::Patch,
            request::gist_uri(&self.api_root, Some(gist_id)),
            Some(&payload),
            Some(token),
        )?;
        decode_json(&self.send(request)?)
    }

    /// Delete a gist. Returns `true` iff the service answered 204; any
    /// other successful status yields `false`.
    pub fn delete(&self, gist_id: &str) -> Result<bool, GistError> {
        let token = guard::require_token(self.config.token.as_deref())?;
        guard::require_gist_id(gist_id)?;
        let request = request::build(
            HttpMethod::Delete,
            request::gist_uri(&self.api_root, Some(gist_id)),
            None,
            Some(token),
        )?;
        let response = self.send(request)?;
        Ok(response.status == 204)
    }

    /// Fetch a gist. Reads are permitted without a token; one is sent when
    /// configured so private gists stay reachable.
    pub fn get(&self, gist_id: &str) -> Result<Value, GistError> {
        guard::require_gist_id(gist_id)?;
        let request = request::build(
            HttpMethod::Get,
            request::gist_uri(&self.api_root, Some(gist_id)),
            None,
            self.config.token.as_deref(),
        )?;
        decode_json(&self.send(request)?)
    }

    /// Fetch a gist's commit history as the raw JSON array.
    pub fn commits(&self, gist_id: &str) -> Result<Value, GistError> {
        guard::require_gist_id(gist_id)?;
        let resource = format!("{gist_id}/commits");
        let request = request::build(
            HttpMethod::Get,
            request::gist_uri(&self.api_root, Some(&resource)),
            None,
            self.config.token.as_deref(),
        )?;
        decode_json(&self.send(request)?)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, GistError> {
        let proxies = self.config.effective_proxies();
        let response = self
            .transport
            .execute(&request, &proxies)
            .map_err(|err| GistError::NetworkFailure(err.to_string()))?;
        check_status(response)
    }
}

/// Map a completed exchange to its error kind, or pass a successful
/// response through.
///
/// Specific codes are matched before the generic >=300 fallback, so 404,
/// 401/403, and 422 always win over the catch-all bucket. 408 and other
/// unlisted codes deliberately stay in the fallback.
fn check_status(response: HttpResponse) -> Result<HttpResponse, GistError> {
    match response.status {
        404 => Err(GistError::NotFound),
        401 | 403 => Err(GistError::AuthenticationFailed {
            status: response.status,
        }),
        422 => Err(GistError::UnprocessableData),
        status if status >= 300 => {
            let raw = response.body.as_deref().unwrap_or_default();
            tracing::warn!(status, body = raw, "unexpected response from the gist API");
            let message = serde_json::from_str::<Value>(raw)
                .ok()
                .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_string))
                .or_else(|| response.reason.clone())
                .unwrap_or_else(|| format!("HTTP {status}"));
            Err(GistError::UnexpectedFailure {
                message,
                status: Some(status),
            })
        }
        _ => Ok(response),
    }
}

/// Decode a successful response body. An empty or absent body decodes to an
/// empty JSON object, matching the service's empty replies.
fn decode_json(response: &HttpResponse) -> Result<Value, GistError> {
    match response.body.as_deref() {
        Some(body) if !body.is_empty() => Ok(serde_json::from_str(body)?),
        _ => Ok(Value::Object(Map::new())),
    }
}

//! Transport seam between the client and the network.
//!
//! # Design
//! The client hands a built [`HttpRequest`] and the call's effective
//! proxies to a [`Transport`] and gets back a plain [`HttpResponse`], or a
//! [`TransportError`] when the exchange could not be completed at all.
//! Tests substitute a recording implementation; the default executes over
//! ureq.

use thiserror::Error;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::proxy::EffectiveProxies;

/// Reason an exchange could not be completed (DNS, connection, TLS, bad
/// proxy URL). Carries the underlying transport reason as text.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Executes one blocking HTTP exchange.
///
/// Implementations take all per-call configuration as arguments and keep no
/// shared mutable state, so concurrent calls with different proxy settings
/// stay independent.
pub trait Transport {
    fn execute(
        &self,
        request: &HttpRequest,
        proxies: &EffectiveProxies,
    ) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by ureq.
///
/// A fresh agent is configured per call, with the proxy matching the
/// request URL's scheme when the effective mapping has one. Status-as-error
/// handling is disabled so non-2xx responses come back as data and the
/// client interprets the status itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn execute(
        &self,
        request: &HttpRequest,
        proxies: &EffectiveProxies,
    ) -> Result<HttpResponse, TransportError> {
        let agent = build_agent(proxies.for_url(&request.url))?;

        let result = match (&request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(agent.get(&request.url), request).call(),
            (HttpMethod::Delete, _) => with_headers(agent.delete(&request.url), request).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(agent.post(&request.url), request).send(body)
            }
            (HttpMethod::Post, None) => {
                with_headers(agent.post(&request.url), request).send_empty()
            }
            (HttpMethod::Patch, Some(body)) => {
                with_headers(agent.patch(&request.url), request).send(body)
            }
            (HttpMethod::Patch, None) => {
                with_headers(agent.patch(&request.url), request).send_empty()
            }
        };

        let mut response = result.map_err(|err| TransportError::new(err.to_string()))?;
        let status = response.status();
        let body = response.body_mut().read_to_string().ok();

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
            reason: status.canonical_reason().map(str::to_string),
        })
    }
}

fn with_headers<Any>(
    mut builder: ureq::RequestBuilder<Any>,
    request: &HttpRequest,
) -> ureq::RequestBuilder<Any> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn build_agent(proxy_url: Option<&str>) -> Result<ureq::Agent, TransportError> {
    let mut config = ureq::Agent::config_builder().http_status_as_error(false);
    if let Some(url) = proxy_url {
        let proxy = ureq::Proxy::new(url).map_err(|err| TransportError::new(err.to_string()))?;
        config = config.proxy(Some(proxy));
    }
    Ok(config.build().new_agent())
}

//! Pure request construction for the Gist API.
//!
//! # Design
//! Building a request performs no I/O and touches no state: verb, URL,
//! headers, and body bytes come out as an [`HttpRequest`] for the transport
//! to execute. Payloads arrive already validated as JSON objects.

use serde_json::Value;

use crate::error::GistError;
use crate::http::{HttpMethod, HttpRequest};

/// Root endpoint for gist operations on the public API.
pub const API_ROOT: &str = "https://api.github.com/gists";

/// Join an API root with an optional resource suffix, e.g. a gist id or
/// `{id}/commits`.
pub fn gist_uri(api_root: &str, resource: Option<&str>) -> String {
    match resource {
        Some(resource) => format!("{api_root}/{resource}"),
        None => api_root.to_string(),
    }
}

/// Build a fully-formed request for the given verb and URL.
///
/// Every request carries the v3 Accept header and a JSON Content-Type. An
/// Authorization header is added only when a token is present: fine-grained
/// tokens (`ghp_`, `github_pat_`) use the `Bearer` scheme, anything else
/// the legacy `token` scheme. The payload is encoded to UTF-8 bytes with
/// non-ASCII characters preserved literally.
pub fn build(
    method: HttpMethod,
    url: String,
    payload: Option<&Value>,
    token: Option<&str>,
) -> Result<HttpRequest, GistError> {
    let mut headers = vec![
        (
            "Accept".to_string(),
            "application/vnd.github.v3+json".to_string(),
        ),
        ("Content-Type".to_string(), "application/json".to_string()),
    ];
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.push(("Authorization".to_string(), authorization_header(token)));
    }

    let body = match payload {
        Some(payload) => Some(serde_json::to_vec(payload)?),
        None => None,
    };

    Ok(HttpRequest {
        method,
        url,
        headers,
        body,
    })
}

fn authorization_header(token: &str) -> String {
    if token.starts_with("ghp_") || token.starts_with("github_pat_") {
        format!("Bearer {token}")
    } else {
        format!("token {token}")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn uri_without_resource_is_the_root() {
        assert_eq!(gist_uri(API_ROOT, None), "https://api.github.com/gists");
    }

    #[test]
    fn uri_appends_gist_id_and_commits() {
        assert_eq!(
            gist_uri(API_ROOT, Some("aa5a315d61ae9438b18d")),
            "https://api.github.com/gists/aa5a315d61ae9438b18d"
        );
        assert_eq!(
            gist_uri(API_ROOT, Some("aa5a315d61ae9438b18d/commits")),
            "https://api.github.com/gists/aa5a315d61ae9438b18d/commits"
        );
    }

    #[test]
    fn standard_headers_are_always_present() {
        let request = build(HttpMethod::Get, gist_uri(API_ROOT, None), None, None).unwrap();
        assert_eq!(
            header(&request, "Accept"),
            Some("application/vnd.github.v3+json")
        );
        assert_eq!(header(&request, "Content-Type"), Some("application/json"));
    }

    #[test]
    fn no_token_means_no_authorization_header() {
        let request = build(HttpMethod::Get, gist_uri(API_ROOT, None), None, None).unwrap();
        assert_eq!(header(&request, "Authorization"), None);

        let request = build(HttpMethod::Get, gist_uri(API_ROOT, None), None, Some("")).unwrap();
        assert_eq!(header(&request, "Authorization"), None);
    }

    #[test]
    fn fine_grained_tokens_use_the_bearer_scheme() {
        let request =
            build(HttpMethod::Post, gist_uri(API_ROOT, None), None, Some("ghp_abc123")).unwrap();
        assert_eq!(header(&request, "Authorization"), Some("Bearer ghp_abc123"));

        let request = build(
            HttpMethod::Post,
            gist_uri(API_ROOT, None),
            None,
            Some("github_pat_abc123"),
        )
        .unwrap();
        assert_eq!(
            header(&request, "Authorization"),
            Some("Bearer github_pat_abc123")
        );
    }

    #[test]
    fn other_tokens_use_the_legacy_scheme() {
        let request =
            build(HttpMethod::Post, gist_uri(API_ROOT, None), None, Some("s3cr3t")).unwrap();
        assert_eq!(header(&request, "Authorization"), Some("token s3cr3t"));
    }

    #[test]
    fn payload_is_encoded_to_json_bytes() {
        let payload = json!({"description": "gist description"});
        let request = build(
            HttpMethod::Post,
            gist_uri(API_ROOT, None),
            Some(&payload),
            Some("token"),
        )
        .unwrap();
        let body = request.body.expect("body present");
        let decoded: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn non_ascii_payload_characters_stay_literal() {
        let payload = json!({"description": "descripciónño"});
        let request = build(
            HttpMethod::Post,
            gist_uri(API_ROOT, None),
            Some(&payload),
            Some("token"),
        )
        .unwrap();
        let body = String::from_utf8(request.body.unwrap()).unwrap();
        assert!(body.contains("descripción"), "got {body}");
        assert!(!body.contains("\\u"), "got {body}");
    }

    #[test]
    fn absent_payload_yields_absent_body() {
        let request = build(
            HttpMethod::Delete,
            gist_uri(API_ROOT, Some("abc")),
            None,
            Some("token"),
        )
        .unwrap();
        assert!(request.body.is_none());
    }
}

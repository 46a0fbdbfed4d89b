//! Proxy-URL validation and the effective-proxies mapping.
//!
//! # Design
//! Proxy use is best effort: a configured URL that fails validation is
//! silently dropped from the effective mapping rather than reported, so a
//! stale proxy setting never blocks gist operations.

use once_cell::sync::Lazy;
use regex::Regex;

// Scheme, then a hostname with a plausible TLD, `localhost`, or a dotted
// quad, then optional port and path. Bare `host:port` is rejected.
static PROXY_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^https?://(?:(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,6}\.?|[a-z0-9-]{2,}\.?)|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$",
    )
    .expect("proxy URL pattern compiles")
});

/// Whether `value` looks like a well-formed `http://` or `https://` proxy
/// URL. `None` and the empty string are invalid.
pub fn is_valid_proxy_url(value: Option<&str>) -> bool {
    value.is_some_and(|v| PROXY_URL.is_match(v))
}

/// The subset of configured proxy URLs that passed validation, keyed by the
/// scheme they serve. Computed per call and handed to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveProxies {
    pub http: Option<String>,
    pub https: Option<String>,
}

impl EffectiveProxies {
    /// Proxy to use for a request to `url`, selected by the URL's scheme.
    pub fn for_url(&self, url: &str) -> Option<&str> {
        if url.starts_with("https://") {
            self.https.as_deref()
        } else {
            self.http.as_deref()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.http.is_none() && self.https.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_schemed_host_and_port() {
        assert!(is_valid_proxy_url(Some("http://localhost:9090")));
        assert!(is_valid_proxy_url(Some("https://localhost:9090")));
        assert!(is_valid_proxy_url(Some("http://proxy.example.com:8080")));
        assert!(is_valid_proxy_url(Some("HTTP://PROXY.EXAMPLE.COM")));
        assert!(is_valid_proxy_url(Some("http://10.0.0.1:3128")));
        assert!(is_valid_proxy_url(Some("http://proxy.example.com:8080/path")));
    }

    #[test]
    fn rejects_missing_scheme() {
        assert!(!is_valid_proxy_url(Some("localhost:9090")));
        assert!(!is_valid_proxy_url(Some("123.123.123.123")));
    }

    #[test]
    fn rejects_malformed_hosts() {
        assert!(!is_valid_proxy_url(Some("http://12.1")));
        assert!(!is_valid_proxy_url(Some("ftp://proxy.example.com")));
        assert!(!is_valid_proxy_url(Some("http://")));
    }

    #[test]
    fn rejects_none_and_empty() {
        assert!(!is_valid_proxy_url(None));
        assert!(!is_valid_proxy_url(Some("")));
    }

    #[test]
    fn for_url_selects_by_scheme() {
        let proxies = EffectiveProxies {
            http: Some("http://localhost:9090".to_string()),
            https: Some("https://localhost:9443".to_string()),
        };
        assert_eq!(
            proxies.for_url("https://api.github.com/gists"),
            Some("https://localhost:9443")
        );
        assert_eq!(
            proxies.for_url("http://127.0.0.1:3000/gists"),
            Some("http://localhost:9090")
        );
    }

    #[test]
    fn empty_mapping_yields_no_proxy() {
        let proxies = EffectiveProxies::default();
        assert!(proxies.is_empty());
        assert_eq!(proxies.for_url("https://api.github.com/gists"), None);
    }
}

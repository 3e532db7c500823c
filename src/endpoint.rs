//! Endpoint resolution and request transformation
//!
//! This module turns a base URL from the configured mirror list plus a
//! relative resource path into a concrete request description. Mirrors that
//! sit behind Cloudflare are marked with a `cloudflare+` prefix on their URL
//! and get rewritten to go through Cloudflare's front door with a spoofed
//! `Host` header, because the edge proxy challenges requests that do not
//! look like they come from a browser.

/// User agent sent for Cloudflare-fronted mirrors.
///
/// The proxy rejects or challenges requests without a plausible browser
/// signature, so we present an older standards-compliant browser.
pub(crate) const SPOOF_USER_AGENT: &str =
    "Mozilla/5.0 (Linux) AppleWebkit/534.30 (KHTML, like Gecko) PT/3.8.0";

/// A fully resolved request description for a single fetch attempt.
///
/// Built fresh for every attempt; never shared or mutated across attempts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RequestSpec {
    /// The URL the request is sent to
    pub url: String,
    /// Query parameters, already in their final encoded-value form
    pub query: Vec<(String, String)>,
    /// Header overrides; empty for direct (non-spoofed) requests
    pub headers: Vec<(&'static str, String)>,
}

/// Builds the request description for one attempt against one mirror.
///
/// The URL is the mirror's base URL concatenated with the relative resource
/// path (base URLs are expected to end with `/`). If the base URL carries the
/// `cloudflare+<scheme>://<host>` marker, the request is redirected to
/// `<scheme>://cloudflare.com/` and the real target is preserved in a `Host`
/// header alongside the spoofed user agent.
///
/// # Arguments
///
/// * `endpoints` - The ordered mirror list
/// * `index` - Which mirror to build the request for (must be in bounds)
/// * `path` - Relative resource path, e.g. `shows/1` or `random/show`
/// * `query` - Query parameters to send with the request
pub(crate) fn build_request(
    endpoints: &[String],
    index: usize,
    path: &str,
    query: &[(String, String)],
) -> RequestSpec {
    let base = &endpoints[index];

    if let Some((scheme, host)) = spoof_target(base) {
        return RequestSpec {
            url: format!("{scheme}://cloudflare.com/"),
            query: query.to_vec(),
            headers: vec![
                ("Host", host.to_string()),
                ("User-Agent", SPOOF_USER_AGENT.to_string()),
            ],
        };
    }

    RequestSpec {
        url: format!("{base}{path}"),
        query: query.to_vec(),
        headers: Vec::new(),
    }
}

/// Extracts `(scheme, host)` from a `cloudflare+<scheme>://<host>` base URL.
///
/// Returns `None` when the base URL is a plain mirror. A trailing `/` is
/// trimmed from the host so it is usable as a `Host` header value. A
/// degenerate empty host is passed through unchanged; the resulting transport
/// failure is handled by the failover engine.
fn spoof_target(base: &str) -> Option<(&str, &str)> {
    let rest = base.strip_prefix("cloudflare+")?;
    let (scheme, host) = rest.split_once("://")?;
    Some((scheme, host.trim_end_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_plain_endpoint_is_untouched() {
        let list = endpoints(&["https://plain.example/"]);
        let spec = build_request(&list, 0, "shows/1", &[]);

        assert_eq!(spec.url, "https://plain.example/shows/1");
        assert!(spec.headers.is_empty());
    }

    #[test]
    fn test_cloudflare_endpoint_is_rewritten() {
        let list = endpoints(&["cloudflare+https://host.example/"]);
        let spec = build_request(&list, 0, "shows/1", &[]);

        assert_eq!(spec.url, "https://cloudflare.com/");
        assert_eq!(
            spec.headers,
            vec![
                ("Host", "host.example".to_string()),
                ("User-Agent", SPOOF_USER_AGENT.to_string()),
            ]
        );
    }

    #[test]
    fn test_cloudflare_rewrite_preserves_scheme() {
        let list = endpoints(&["cloudflare+http://host.example/"]);
        let spec = build_request(&list, 0, "show/tt123", &[]);

        assert_eq!(spec.url, "http://cloudflare.com/");
    }

    #[test]
    fn test_cloudflare_rewrite_with_empty_host() {
        // Degenerate host segments are propagated, not rejected here.
        let list = endpoints(&["cloudflare+https://"]);
        let spec = build_request(&list, 0, "shows/1", &[]);

        assert_eq!(spec.url, "https://cloudflare.com/");
        assert_eq!(spec.headers[0], ("Host", String::new()));
    }

    #[test]
    fn test_query_parameters_are_kept_in_both_branches() {
        let query = vec![("genre".to_string(), "drama".to_string())];

        let plain = endpoints(&["https://plain.example/"]);
        assert_eq!(build_request(&plain, 0, "shows/1", &query).query, query);

        let spoofed = endpoints(&["cloudflare+https://host.example/"]);
        assert_eq!(build_request(&spoofed, 0, "shows/1", &query).query, query);
    }

    #[test]
    fn test_partial_prefix_without_scheme_separator_is_plain() {
        let list = endpoints(&["cloudflare+nonsense/"]);
        let spec = build_request(&list, 0, "shows/1", &[]);

        assert_eq!(spec.url, "cloudflare+nonsense/shows/1");
        assert!(spec.headers.is_empty());
    }

    #[test]
    fn test_index_selects_the_mirror() {
        let list = endpoints(&["https://one.example/", "https://two.example/"]);
        let spec = build_request(&list, 1, "random/show", &[]);

        assert_eq!(spec.url, "https://two.example/random/show");
    }
}

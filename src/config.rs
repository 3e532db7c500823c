//! Provider configuration
//!
//! This module holds the immutable configuration the provider is constructed
//! with (the ordered mirror list) together with the static filter
//! vocabularies the host application can present to users.

/// Configuration supplied by the host at construction.
///
/// The configuration is immutable once the provider is built; there is no
/// shared mutable state between calls.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Ordered list of mirror base URLs, highest priority first.
    ///
    /// Each entry is either a plain `scheme://host/` base URL or a
    /// `cloudflare+scheme://host/` marker requesting the Cloudflare
    /// front-door rewrite. Base URLs must end with `/`.
    pub api_urls: Vec<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_urls: vec![
                "https://tv-v2.api-fetch.website/".to_string(),
                "cloudflare+https://tv-v2.api-fetch.website/".to_string(),
            ],
        }
    }
}

/// Descriptive contract shared by metadata providers.
///
/// Hosts that aggregate several providers use this to identify the provider,
/// label its tab and know which payload field uniquely identifies an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderInfo {
    /// Machine name of the provider
    pub name: &'static str,
    /// Display name for the host application's tab
    pub tab_name: &'static str,
    /// Payload field that uniquely identifies an item
    pub unique_id: &'static str,
}

/// Sort orders the list endpoint understands, as `(key, display label)`.
///
/// The key is the value sent in the `sort` query parameter; `popularity` is
/// the upstream default and is never sent explicitly.
pub const SORTERS: &[(&str, &str)] = &[
    ("trending", "Trending"),
    ("popularity", "Popularity"),
    ("updated", "Updated"),
    ("year", "Year"),
    ("name", "Name"),
    ("rating", "Rating"),
];

/// Genres the list endpoint understands, as `(key, display label)`.
pub const GENRES: &[(&str, &str)] = &[
    ("all", "All"),
    ("action", "Action"),
    ("adventure", "Adventure"),
    ("animation", "Animation"),
    ("comedy", "Comedy"),
    ("crime", "Crime"),
    ("disaster", "Disaster"),
    ("documentary", "Documentary"),
    ("drama", "Drama"),
    ("eastern", "Eastern"),
    ("family", "Family"),
    ("fan-film", "Fan-Film"),
    ("fantasy", "Fantasy"),
    ("film-noir", "Film-Noir"),
    ("history", "History"),
    ("holiday", "Holiday"),
    ("horror", "Horror"),
    ("indie", "Indie"),
    ("music", "Music"),
    ("mystery", "Mystery"),
    ("none", "None"),
    ("road", "Road"),
    ("romance", "Romance"),
    ("science-fiction", "Science-Fiction"),
    ("short", "Short"),
    ("sports", "Sports"),
    ("sporting-event", "Sporting-Event"),
    ("suspense", "Suspense"),
    ("thriller", "Thriller"),
    ("tv-movie", "TV-Movie"),
    ("war", "War"),
    ("western", "Western"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_lists_both_mirrors() {
        let config = ProviderConfig::default();

        assert_eq!(config.api_urls.len(), 2);
        assert!(config.api_urls[0].starts_with("https://"));
        assert!(config.api_urls[1].starts_with("cloudflare+https://"));
    }

    #[test]
    fn test_vocabularies_have_unique_keys() {
        for vocabulary in [SORTERS, GENRES] {
            let mut keys: Vec<_> = vocabulary.iter().map(|(key, _)| key).collect();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), vocabulary.len());
        }
    }
}

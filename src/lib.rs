//! tvshow-api - Client for mirrored TV show metadata endpoints
//!
//! This library queries one of several mirrored metadata endpoints for TV
//! show information, normalizes the heterogeneous responses into a stable
//! schema and transparently falls back across mirrors when a request fails.
//! Mirrors sitting behind Cloudflare can be marked in the configuration and
//! are reached through the proxy's front door with a spoofed `Host` header.
//!
//! ```no_run
//! use tvshow_api::{Filters, ProviderConfig, TvShowApi};
//!
//! let provider = TvShowApi::new(ProviderConfig::default());
//!
//! let filters = Filters {
//!     genre: Some("drama".to_string()),
//!     ..Filters::default()
//! };
//! for show in provider.fetch(&filters).unwrap().results {
//!     println!("{} ({}) - {}", show.title, show.year, show.rating);
//! }
//! ```

mod config;
mod endpoint;
mod fetch;
mod provider;

// Re-export error types
pub use fetch::{EndpointFailure, FetchError};
pub use provider::ProviderError;

pub use config::{GENRES, ProviderConfig, ProviderInfo, SORTERS};
pub use provider::{
    Episode, Filters, ItemType, ShowDetail, ShowPage, ShowSummary, TvShowApi,
};

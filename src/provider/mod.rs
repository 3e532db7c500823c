//! TV show provider
//!
//! This module defines the stable output schema the provider normalizes
//! upstream payloads into, the filter arguments of the list query and the
//! provider error type, plus the provider implementation itself.

mod api_types;
mod tvshow_api;

pub use tvshow_api::TvShowApi;

use crate::fetch::FetchError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The failover fetch failed or ended in a terminal payload error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The payload did not match the expected schema
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Media type tag carried by every normalized item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// A TV show
    TvShow,
}

/// Filter arguments for the paginated list query.
///
/// All fields are optional; an empty filter lists the first page in the
/// upstream's default order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Free-text keyword search
    pub keywords: Option<String>,
    /// Genre key, see [`crate::config::GENRES`]
    pub genre: Option<String>,
    /// Sort direction, `1` ascending or `-1` descending
    pub order: Option<i32>,
    /// Sorter key, see [`crate::config::SORTERS`]
    pub sorter: Option<String>,
    /// 1-based page number; defaults to the first page
    pub page: Option<u32>,
}

/// A single show as returned by the paginated list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowSummary {
    /// IMDB identifier, the unique id of a show
    pub imdb_id: String,
    /// The show title
    pub title: String,
    /// First-air year
    pub year: String,
    /// Genre keys the show is tagged with
    pub genres: Vec<String>,
    /// Rating on a 0-10 scale, rescaled from the upstream percentage
    pub rating: f64,
    /// Poster image reference
    pub poster: Option<String>,
    /// Media type tag, always [`ItemType::TvShow`]
    #[serde(rename = "type")]
    pub kind: ItemType,
    /// Number of seasons
    pub num_seasons: u32,
}

/// Full detail of a single show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowDetail {
    /// IMDB identifier, the unique id of a show
    pub imdb_id: String,
    /// The show title
    pub title: String,
    /// First-air year
    pub year: String,
    /// Genre keys the show is tagged with
    pub genres: Vec<String>,
    /// Rating on a 0-10 scale, rescaled from the upstream percentage
    pub rating: f64,
    /// Poster image reference
    pub poster: Option<String>,
    /// Media type tag, always [`ItemType::TvShow`]
    #[serde(rename = "type")]
    pub kind: ItemType,
    /// Number of seasons
    pub num_seasons: u32,
    /// Episode runtime in minutes
    pub runtime: Option<String>,
    /// Backdrop image reference
    pub backdrop: Option<String>,
    /// Plain-text synopsis, HTML stripped
    pub synopsis: String,
    /// Airing status, e.g. `returning series`
    pub status: Option<String>,
    /// All known episodes
    pub episodes: Vec<Episode>,
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub episode: u32,
    /// Episode title
    pub title: String,
    /// Episode overview
    pub overview: String,
    /// First-air date as a unix timestamp
    pub first_aired: Option<i64>,
    /// TVDB identifier of the episode
    pub tvdb_id: Option<i64>,
}

/// One page of list-query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowPage {
    /// The normalized shows on this page
    pub results: Vec<ShowSummary>,
    /// Whether more pages may be available
    pub has_more: bool,
}

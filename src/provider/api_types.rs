/// Upstream API response types for deserialization.
///
/// These structures mirror the JSON shape the mirrors return for the list,
/// detail and random endpoints. The list endpoint returns an array of shows
/// without the detail-only fields; those are optional here so one type
/// covers both shapes.
use serde::Deserialize;
use serde_json::Value;

/// A show as returned by the upstream API.
#[derive(Debug, Deserialize)]
pub(super) struct ApiShow {
    /// IMDB identifier
    pub imdb_id: String,
    /// The show title
    pub title: String,
    /// First-air year
    pub year: String,
    /// Genre keys
    #[serde(default)]
    pub genres: Vec<String>,
    /// Rating block
    #[serde(default)]
    pub rating: ApiRating,
    /// Image references
    #[serde(default)]
    pub images: ApiImages,
    /// Number of seasons
    #[serde(default)]
    pub num_seasons: u32,
    /// Episode runtime in minutes (detail only)
    pub runtime: Option<String>,
    /// Synopsis, possibly containing HTML (detail only)
    pub synopsis: Option<String>,
    /// Airing status (detail only)
    pub status: Option<String>,
    /// Episode list (detail only)
    #[serde(default)]
    pub episodes: Vec<ApiEpisode>,
}

/// The rating block of a show.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ApiRating {
    /// Rating percentage; the mirrors serve this as either a number or a
    /// numeric string
    #[serde(default)]
    pub percentage: Value,
}

/// Image references of a show.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ApiImages {
    /// Poster image reference
    pub poster: Option<String>,
    /// Backdrop image reference
    pub fanart: Option<String>,
}

/// A single episode from the upstream API.
#[derive(Debug, Deserialize)]
pub(super) struct ApiEpisode {
    /// Season number
    #[serde(default)]
    pub season: u32,
    /// Episode number within the season
    #[serde(default)]
    pub episode: u32,
    /// Episode title (may be null)
    pub title: Option<String>,
    /// Episode overview (may be null)
    pub overview: Option<String>,
    /// First-air date as a unix timestamp
    pub first_aired: Option<i64>,
    /// TVDB identifier of the episode
    pub tvdb_id: Option<i64>,
}

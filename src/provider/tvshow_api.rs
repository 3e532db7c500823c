//! TV show API provider implementation.
use super::api_types::{ApiEpisode, ApiShow};
use super::{Episode, Filters, ItemType, ProviderError, ShowDetail, ShowPage, ShowSummary};
use crate::config::{ProviderConfig, ProviderInfo};
use crate::fetch::FailoverClient;
use serde_json::Value;

/// Metadata provider for the mirrored TV show API.
///
/// Exposes the three upstream resources — a paginated, filterable show list,
/// a single-show detail lookup and a random show — and normalizes every
/// payload into the stable schema of [`ShowSummary`] and [`ShowDetail`].
/// All three operations share the same failover chain over the configured
/// mirror list.
pub struct TvShowApi {
    client: FailoverClient,
}

impl TvShowApi {
    /// Descriptive contract of this provider.
    pub const INFO: ProviderInfo = ProviderInfo {
        name: "TVShowApi",
        tab_name: "TVShowApi",
        unique_id: "imdb_id",
    };

    /// Creates a provider over the configured mirror list.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tvshow_api::{ProviderConfig, TvShowApi, Filters};
    ///
    /// let provider = TvShowApi::new(ProviderConfig::default());
    /// let page = provider.fetch(&Filters::default()).unwrap();
    /// println!("{} shows", page.results.len());
    /// ```
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: FailoverClient::new(config.api_urls),
        }
    }

    /// Fetches one page of the show list.
    ///
    /// # Arguments
    ///
    /// * `filters` - Keyword, genre, order and sorter filters plus the
    ///   1-based page number (defaults to the first page)
    ///
    /// # Returns
    ///
    /// A page of normalized show summaries, or a [`ProviderError`] when the
    /// failover chain ends in failure or the payload does not match the
    /// expected schema
    pub fn fetch(&self, filters: &Filters) -> Result<ShowPage, ProviderError> {
        let query = Self::build_list_query(filters);
        let page = filters.page.unwrap_or(1);

        let payload = self.client.get_json(&format!("shows/{page}"), &query)?;
        let shows: Vec<ApiShow> = serde_json::from_value(payload)?;

        Ok(ShowPage {
            results: shows.into_iter().map(Self::convert_summary).collect(),
            // The upstream reports no totals; callers page until a page
            // comes back empty.
            has_more: true,
        })
    }

    /// Fetches the full detail of a single show.
    ///
    /// # Arguments
    ///
    /// * `imdb_id` - The show's unique id
    pub fn detail(&self, imdb_id: &str) -> Result<ShowDetail, ProviderError> {
        let payload = self.client.get_json(&format!("show/{imdb_id}"), &[])?;
        Ok(Self::convert_detail(serde_json::from_value(payload)?))
    }

    /// Fetches the full detail of a randomly chosen show.
    pub fn random(&self) -> Result<ShowDetail, ProviderError> {
        let payload = self.client.get_json("random/show", &[])?;
        Ok(Self::convert_detail(serde_json::from_value(payload)?))
    }

    /// Extracts the unique id of every show on a page.
    pub fn extract_ids(page: &ShowPage) -> Vec<String> {
        page.results
            .iter()
            .map(|show| show.imdb_id.clone())
            .collect()
    }

    /// Builds the query parameters for the list endpoint.
    ///
    /// `popularity` is the upstream default sorter and is never sent
    /// explicitly.
    fn build_list_query(filters: &Filters) -> Vec<(String, String)> {
        let mut query = Vec::new();

        if let Some(keywords) = &filters.keywords {
            query.push(("keywords".to_string(), encode_keywords(keywords)));
        }
        if let Some(genre) = &filters.genre {
            query.push(("genre".to_string(), genre.clone()));
        }
        if let Some(order) = filters.order {
            query.push(("order".to_string(), order.to_string()));
        }
        if let Some(sorter) = &filters.sorter {
            if sorter != "popularity" {
                query.push(("sort".to_string(), sorter.clone()));
            }
        }

        query
    }

    /// Converts an upstream show to a normalized summary.
    fn convert_summary(show: ApiShow) -> ShowSummary {
        ShowSummary {
            imdb_id: show.imdb_id,
            title: show.title,
            year: show.year,
            genres: show.genres,
            rating: scale_rating(&show.rating.percentage),
            poster: show.images.poster,
            kind: ItemType::TvShow,
            num_seasons: show.num_seasons,
        }
    }

    /// Converts an upstream show to its normalized full detail.
    fn convert_detail(show: ApiShow) -> ShowDetail {
        ShowDetail {
            rating: scale_rating(&show.rating.percentage),
            synopsis: show
                .synopsis
                .map(|s| nanohtml2text::html2text(&s).trim().to_string())
                .unwrap_or_default(),
            episodes: show.episodes.into_iter().map(Self::convert_episode).collect(),
            imdb_id: show.imdb_id,
            title: show.title,
            year: show.year,
            genres: show.genres,
            poster: show.images.poster,
            kind: ItemType::TvShow,
            num_seasons: show.num_seasons,
            runtime: show.runtime,
            backdrop: show.images.fanart,
            status: show.status,
        }
    }

    /// Converts an upstream episode to the normalized episode structure.
    fn convert_episode(episode: ApiEpisode) -> Episode {
        Episode {
            season: episode.season,
            episode: episode.episode,
            title: episode.title.unwrap_or_else(|| "Unknown".to_string()),
            overview: episode.overview.unwrap_or_default(),
            first_aired: episode.first_aired,
            tvdb_id: episode.tvdb_id,
        }
    }
}

/// Applies the upstream keyword-encoding rule.
///
/// Every whitespace character is replaced with `"% "`, which the mirrors
/// interpret as a wildcard between words.
fn encode_keywords(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_whitespace() {
            encoded.push_str("% ");
        } else {
            encoded.push(c);
        }
    }
    encoded
}

/// Rescales an upstream rating percentage to the 0-10 output scale.
///
/// The percentage is truncated to its integral part before dividing by ten,
/// never rounded, and the mirrors serve it as either a number or a numeric
/// string. Anything unparseable rates as zero.
fn scale_rating(percentage: &Value) -> f64 {
    let integral = match percentage {
        Value::Number(n) => n.as_f64().map(f64::trunc),
        Value::String(s) => leading_integer(s),
        _ => None,
    };
    integral.unwrap_or(0.0) / 10.0
}

/// Parses the leading integer of a numeric string, ignoring any trailing
/// garbage, in the manner of JavaScript's `parseInt`.
fn leading_integer(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<f64>().ok().map(|value| sign * value)
}

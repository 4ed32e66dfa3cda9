use serde::{Deserialize, Deserializer, Serialize};

use crate::filter::{ContentTag, FilterState, SortBy};
use crate::time_window::now_unix;

/// One request against the external search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub sort_by: SortBy,
    pub query: String,
    pub tag: ContentTag,
    /// `created_at_i>N` expression, absent for the all-time range.
    pub numeric_filter: Option<String>,
    pub page: u32,
}

impl SearchRequest {
    /// Translate a filter state, resolving the time window against `now`
    /// (Unix seconds).
    pub fn from_filters(filters: &FilterState, now: i64) -> Self {
        Self {
            sort_by: filters.sort_by,
            query: filters.query.clone(),
            tag: filters.tag,
            numeric_filter: filters.time_range.numeric_filter(now),
            page: filters.page,
        }
    }

    /// Translate a filter state against the current wall clock.
    pub fn from_filters_now(filters: &FilterState) -> Self {
        Self::from_filters(filters, now_unix())
    }

    /// Endpoint path segment (`search` or `search_by_date`).
    pub fn endpoint(&self) -> &'static str {
        self.sort_by.endpoint()
    }

    /// Query parameters in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("query", self.query.clone()),
            ("tags", self.tag.as_str().to_string()),
        ];
        if let Some(filter) = &self.numeric_filter {
            pairs.push(("numericFilters", filter.clone()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs
    }
}

/// A single search hit. Display-only; never mutated after receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    #[serde(rename = "objectID")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub points: u64,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub num_comments: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ResultItem {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => "No Title Available",
        }
    }

    pub fn display_author(&self) -> &str {
        match self.author.as_deref() {
            Some(author) if !author.is_empty() => author,
            _ => "Unknown",
        }
    }

    /// External link, if the hit carries a non-empty one.
    pub fn external_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Link to the discussion page for this hit.
    pub fn item_link(&self, item_base_url: &str) -> String {
        format!("{item_base_url}{}", self.id)
    }
}

/// Null, missing and negative counts all read as zero.
fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.unwrap_or(0).max(0) as u64)
}

/// Wire shape of a search response; every field is optional.
#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    #[serde(default)]
    hits: Option<Vec<ResultItem>>,
    #[serde(default, rename = "nbPages")]
    nb_pages: Option<u32>,
}

/// One page of results plus the total page count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSearchResponse")]
pub struct SearchResponse {
    /// Hits in server order; never re-sorted.
    pub items: Vec<ResultItem>,
    /// Always at least 1.
    pub total_pages: u32,
}

impl From<RawSearchResponse> for SearchResponse {
    fn from(raw: RawSearchResponse) -> Self {
        Self {
            items: raw.hits.unwrap_or_default(),
            total_pages: raw.nb_pages.unwrap_or(1).max(1),
        }
    }
}

impl Default for SearchResponse {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// URL query keys recognized by [`FilterState`].
pub const QUERY_KEY: &str = "query";
pub const TAGS_KEY: &str = "tags";
pub const PAGE_KEY: &str = "page";
pub const TIME_RANGE_KEY: &str = "timeRange";
pub const SORT_BY_KEY: &str = "sortBy";

/// Kind of item a search targets (the `tags` URL parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTag {
    #[default]
    Story,
    Poll,
    Comment,
}

impl ContentTag {
    /// All tags in selector order.
    pub const ALL: [ContentTag; 3] = [ContentTag::Story, ContentTag::Poll, ContentTag::Comment];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentTag::Story => "story",
            ContentTag::Poll => "poll",
            ContentTag::Comment => "comment",
        }
    }

    /// Human-readable name for the filter selector.
    pub fn label(&self) -> &'static str {
        match self {
            ContentTag::Story => "Story",
            ContentTag::Poll => "Poll",
            ContentTag::Comment => "Comment",
        }
    }

    /// Parse a tag key, falling back to `Story`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "poll" => ContentTag::Poll,
            "comment" => ContentTag::Comment,
            _ => ContentTag::Story,
        }
    }
}

/// Human time-range choice, resolved to a creation-time lower bound when
/// the request is built (see `time_window`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeRange {
    #[default]
    All,
    Last24h,
    PastWeek,
    PastMonth,
    PastYear,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::All,
        TimeRange::Last24h,
        TimeRange::PastWeek,
        TimeRange::PastMonth,
        TimeRange::PastYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::All => "all",
            TimeRange::Last24h => "last24h",
            TimeRange::PastWeek => "pastWeek",
            TimeRange::PastMonth => "pastMonth",
            TimeRange::PastYear => "pastYear",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::All => "All Time",
            TimeRange::Last24h => "Last 24h",
            TimeRange::PastWeek => "Past Week",
            TimeRange::PastMonth => "Past Month",
            TimeRange::PastYear => "Past Year",
        }
    }

    /// Parse a time-range key, falling back to `All`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "last24h" => TimeRange::Last24h,
            "pastWeek" => TimeRange::PastWeek,
            "pastMonth" => TimeRange::PastMonth,
            "pastYear" => TimeRange::PastYear,
            _ => TimeRange::All,
        }
    }
}

/// Result ordering. Selects between the relevance-ranked and the
/// recency-ranked search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Popularity,
    Date,
}

impl SortBy {
    pub const ALL: [SortBy; 2] = [SortBy::Popularity, SortBy::Date];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Popularity => "popularity",
            SortBy::Date => "date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Popularity => "Popularity",
            SortBy::Date => "Date",
        }
    }

    /// Parse a sort key, falling back to `Popularity`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "date" => SortBy::Date,
            _ => SortBy::Popularity,
        }
    }

    /// Path segment of the search endpoint serving this ordering.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SortBy::Popularity => "search",
            SortBy::Date => "search_by_date",
        }
    }
}

/// A single-field edit to a [`FilterState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Query(String),
    Tag(ContentTag),
    /// Zero-based page index. The only change that keeps pagination.
    Page(u32),
    TimeRange(TimeRange),
    SortBy(SortBy),
}

/// The search parameters of the results screen.
///
/// Always derived from the page URL: [`FilterState::from_query`] parses a
/// query string and [`FilterState::to_query`] writes every field back, so a
/// URL fully round-trips to the same state. Missing or malformed parameters
/// fall back to their defaults instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub tag: ContentTag,
    pub page: u32,
    pub time_range: TimeRange,
    pub sort_by: SortBy,
}

impl FilterState {
    /// Parse a URL query string (with or without the leading `?`).
    ///
    /// Unknown keys are ignored. When a key repeats, its first occurrence
    /// wins.
    pub fn from_query(query: &str) -> Self {
        let pairs = decode_pairs(query.trim_start_matches('?'));
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        Self {
            query: get(QUERY_KEY).unwrap_or_default().to_string(),
            tag: get(TAGS_KEY)
                .map(ContentTag::from_str_or_default)
                .unwrap_or_default(),
            page: get(PAGE_KEY)
                .and_then(|p| p.trim().parse::<u32>().ok())
                .unwrap_or(0),
            time_range: get(TIME_RANGE_KEY)
                .map(TimeRange::from_str_or_default)
                .unwrap_or_default(),
            sort_by: get(SORT_BY_KEY)
                .map(SortBy::from_str_or_default)
                .unwrap_or_default(),
        }
    }

    /// Serialize every recognized field as a URL query string (no `?`).
    pub fn to_query(&self) -> String {
        format!(
            "{QUERY_KEY}={}&{TAGS_KEY}={}&{PAGE_KEY}={}&{TIME_RANGE_KEY}={}&{SORT_BY_KEY}={}",
            urlencoding::encode(&self.query),
            self.tag.as_str(),
            self.page,
            self.time_range.as_str(),
            self.sort_by.as_str(),
        )
    }

    /// Copy this state with exactly one field replaced.
    ///
    /// Every change except [`FilterChange::Page`] resets `page` to 0, since a
    /// new filter combination invalidates the pagination position.
    pub fn apply_change(&self, change: FilterChange) -> Self {
        let mut next = Self {
            page: 0,
            ..self.clone()
        };
        match change {
            FilterChange::Query(query) => next.query = query,
            FilterChange::Tag(tag) => next.tag = tag,
            FilterChange::Page(page) => next.page = page,
            FilterChange::TimeRange(range) => next.time_range = range,
            FilterChange::SortBy(sort) => next.sort_by = sort,
        }
        next
    }

    /// One-based page number for display.
    pub fn display_page(&self) -> u32 {
        self.page.saturating_add(1)
    }
}

/// Router-facing form of [`FilterState::to_query`].
///
/// The router percent-decodes the whole query segment once before handing
/// it to `From<&str>`, and leaves `%` alone when writing the URL. Escaping
/// every `%` here makes that extra decode land exactly on `to_query`'s
/// output, so text containing `&`, `+` or `%XX` survives a push or reload.
impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query().replace('%', "%25"))
    }
}

/// Lets the router build a `FilterState` from the (already once-decoded)
/// URL query segment.
impl From<&str> for FilterState {
    fn from(query: &str) -> Self {
        Self::from_query(query)
    }
}

/// Split `a=1&b=2` into decoded pairs. `+` decodes to a space; pairs whose
/// percent-encoding is invalid are dropped.
fn decode_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = urlencoding::decode(&key.replace('+', " ")).ok()?.into_owned();
            let value = urlencoding::decode(&value.replace('+', " ")).ok()?.into_owned();
            Some((key, value))
        })
        .collect()
}

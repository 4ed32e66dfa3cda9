use shared_types::{AppError, ResultItem, SearchResponse};

/// Identifies one issued search request. Tokens increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// What [`FetchCycle::settle`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Success for the latest request; the display was replaced.
    Replaced,
    /// Failure for the latest request; the previous display was kept.
    Retained,
    /// A newer request was issued meanwhile; the outcome was dropped.
    Stale,
}

/// Displayed search results plus the bookkeeping for in-flight requests.
///
/// The only writer of the displayed list and page count is [`settle`],
/// which discards outcomes for anything but the latest issued token. A
/// slow response for an old filter combination therefore never overwrites
/// a newer one, whatever order responses arrive in.
///
/// [`settle`]: FetchCycle::settle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchCycle {
    response: SearchResponse,
    issued: u64,
    settled: u64,
    loaded: bool,
    last_error: Option<AppError>,
}

impl FetchCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new request. Supersedes every earlier token.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    /// Apply the outcome of the request identified by `token`.
    pub fn settle(
        &mut self,
        token: RequestToken,
        outcome: Result<SearchResponse, AppError>,
    ) -> Settled {
        if !self.is_latest(token) {
            tracing::debug!(
                token = token.0,
                latest = self.issued,
                "Discarding stale search response"
            );
            return Settled::Stale;
        }

        self.settled = token.0;
        match outcome {
            Ok(response) => {
                self.response = response;
                self.loaded = true;
                self.last_error = None;
                Settled::Replaced
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching results");
                self.last_error = Some(err);
                Settled::Retained
            }
        }
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.response.items
    }

    /// Always at least 1.
    pub fn total_pages(&self) -> u32 {
        self.response.total_pages
    }

    /// Whether the latest issued request has not settled yet.
    pub fn is_loading(&self) -> bool {
        self.settled < self.issued
    }

    /// Whether any request has succeeded so far.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// Error from the latest settled request, if it failed.
    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }
}

use crate::filter::TimeRange;

/// Name of the creation-timestamp field on the search index.
pub const CREATED_AT_FIELD: &str = "created_at_i";

const SECONDS_PER_DAY: i64 = 86_400;

/// Current wall-clock time in Unix seconds.
pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

impl TimeRange {
    /// Length of the window in seconds, or `None` for `All`.
    ///
    /// Uses fixed 30-day months and 365-day years.
    pub fn window_secs(&self) -> Option<i64> {
        let days = match self {
            TimeRange::All => return None,
            TimeRange::Last24h => 1,
            TimeRange::PastWeek => 7,
            TimeRange::PastMonth => 30,
            TimeRange::PastYear => 365,
        };
        Some(days * SECONDS_PER_DAY)
    }

    /// Exclusive lower bound on the creation timestamp relative to `now`.
    pub fn lower_bound(&self, now: i64) -> Option<i64> {
        self.window_secs().map(|window| now - window)
    }

    /// Server-side numeric filter expression, e.g. `created_at_i>1700000000`.
    pub fn numeric_filter(&self, now: i64) -> Option<String> {
        self.lower_bound(now)
            .map(|bound| format!("{CREATED_AT_FIELD}>{bound}"))
    }
}

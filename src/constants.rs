//! Application-wide constants and configuration values
//!
//! Hosts, retry tuning and environment variable names live here so the
//! gateway, config layer and CLI agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Upstream hosts
pub mod hosts {
    /// Primary versioned stats API
    pub const API_BASE_URL: &str = "https://statsapi.web.nhl.com/api/v1/";

    /// Stat-leader report host (`reportType`/`reportName`/`cayenneExp` dialect)
    pub const STATS_BASE_URL: &str = "http://www.nhl.com/stats/rest/";

    /// Bulk player directory host
    pub const RECORDS_BASE_URL: &str = "https://records.nhl.com/site/api/";
}

/// Retry configuration
pub mod retry {
    /// Automatic retries on a retryable 5xx response
    pub const MAX_RETRIES: u32 = 5;

    /// Backoff factor in milliseconds; the nth retry waits factor * 2^(n-1)
    pub const BACKOFF_FACTOR_MS: u64 = 1000;

    /// Upper bound for a single backoff wait (seconds)
    pub const MAX_BACKOFF_SECONDS: u64 = 120;

    /// First and last status code that triggers a retry
    pub const RETRY_STATUS_FIRST: u16 = 500;
    pub const RETRY_STATUS_LAST: u16 = 505;

    /// Wait before the single retry after a DNS resolution failure (seconds)
    pub const DNS_RETRY_DELAY_SECONDS: u64 = 1;

    /// Wait before the single retry after a connection failure (seconds)
    pub const CONNECT_RETRY_DELAY_SECONDS: u64 = 2;
}

/// Season and leaderboard defaults
pub mod season {
    /// First month (October) that belongs to the season starting that year
    pub const SEASON_START_MONTH: u32 = 10;

    /// Days after season start before time-on-ice filtering kicks in
    pub const STATS_FILTER_GRACE_DAYS: i64 = 30;

    /// Minimum time on ice (seconds) applied when the filter is active
    pub const FILTERED_TIME_ON_ICE_SECONDS: u32 = 25200;

    /// Default number of rows in a leaderboard
    pub const DEFAULT_LEADERS: usize = 10;

    /// League identifier used by the team summary report
    pub const LEAGUE_ID: u32 = 133;
}

/// Environment variable names
pub mod env_vars {
    pub const API_BASE_URL: &str = "NHL_API_BASE_URL";
    pub const STATS_BASE_URL: &str = "NHL_STATS_BASE_URL";
    pub const RECORDS_BASE_URL: &str = "NHL_RECORDS_BASE_URL";
    pub const HTTP_TIMEOUT: &str = "NHL_HTTP_TIMEOUT";
    pub const SEASON_SOURCE: &str = "NHL_SEASON_SOURCE";
    pub const LOG_FILE: &str = "NHL_LOG_FILE";
}

/// Game state and type markers used by the upstream schedule payloads
pub mod game {
    pub const STATE_FINAL: &str = "Final";
    pub const STATE_PREVIEW: &str = "Preview";
    pub const STATE_LIVE: &str = "Live";

    /// Preseason game type, excluded from every schedule bucket
    pub const TYPE_PRESEASON: &str = "PR";
}

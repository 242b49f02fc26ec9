use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to serialize output: {0}")]
    OutputSerialize(#[from] serde_json::Error),

    // Terminal HTTP failure after the retry budget is spent
    #[error("Error with NHL API request | status: {status} | url: {url} | body: {body}")]
    RequestFailed {
        status: u16,
        url: String,
        body: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Identifier resolution
    #[error("Unrecognized team: {team}")]
    UnknownTeam { team: String },

    #[error("Player not found: {player}")]
    PlayerNotFound { player: String },

    #[error("Error retrieving ID for {team}")]
    ResolutionError { team: String },

    // Invalid caller-supplied values
    #[error("Invalid conference: {conference}")]
    InvalidConference { conference: String },

    #[error("Invalid player type: {player_type}")]
    InvalidPlayerType { player_type: String },

    #[error("Unknown stat '{stat}' in leaders report")]
    UnknownStat { stat: String },

    #[error("Invalid season: {season}")]
    InvalidSeason { season: String },

    #[error("Season required for inactive player {player_id}")]
    SeasonRequired { player_id: u32 },

    #[error("League data error: {0}")]
    LeagueData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a league data error with context
    pub fn league_data_error(msg: impl Into<String>) -> Self {
        Self::LeagueData(msg.into())
    }

    /// Create a terminal request failure carrying status, URL and response body
    pub fn request_failed(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn unknown_team(team: impl Into<String>) -> Self {
        Self::UnknownTeam { team: team.into() }
    }

    pub fn player_not_found(player: impl Into<String>) -> Self {
        Self::PlayerNotFound {
            player: player.into(),
        }
    }

    pub fn resolution_error(team: impl Into<String>) -> Self {
        Self::ResolutionError { team: team.into() }
    }

    pub fn invalid_conference(conference: impl Into<String>) -> Self {
        Self::InvalidConference {
            conference: conference.into(),
        }
    }

    pub fn invalid_player_type(player_type: impl Into<String>) -> Self {
        Self::InvalidPlayerType {
            player_type: player_type.into(),
        }
    }

    pub fn unknown_stat(stat: impl Into<String>) -> Self {
        Self::UnknownStat { stat: stat.into() }
    }

    pub fn invalid_season(season: impl Into<String>) -> Self {
        Self::InvalidSeason {
            season: season.into(),
        }
    }

    /// Check if error is a transport-level failure worth retrying later
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::NetworkTimeout { .. } | AppError::NetworkConnection { .. } => true,
            AppError::RequestFailed { status, .. } => (500..=505).contains(status),
            _ => false,
        }
    }

    /// Check if error indicates a resolution miss rather than a technical failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::UnknownTeam { .. }
                | AppError::PlayerNotFound { .. }
                | AppError::ApiNoData { .. }
                | AppError::RequestFailed { status: 404, .. }
        )
    }

    /// Check if error was caused by a bad caller-supplied value
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AppError::InvalidConference { .. }
                | AppError::InvalidPlayerType { .. }
                | AppError::InvalidSeason { .. }
                | AppError::UnknownStat { .. }
                | AppError::SeasonRequired { .. }
        )
    }
}

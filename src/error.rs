/// All errors produced by reward evaluation and reward issuance.
#[derive(thiserror::Error, Debug)]
pub enum RewardsError {
    /// A precondition on the input was violated (negative XP, unknown tier, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A referenced reward id is not part of the supplied catalog.
    #[error("reward not found: {reward_id}")]
    NotFound { reward_id: String },

    /// A reward catalog could not be decoded from JSON.
    #[error("failed to parse reward catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    /// A required environment variable is not set.
    #[error("missing configuration: {var} is not set")]
    MissingConfig { var: &'static str },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The store answered an insert without returning the stored row.
    #[error("store returned no rows for {url}")]
    EmptyResponse { url: String },
}

impl RewardsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RewardsError::InvalidInput(msg.into())
    }

    pub(crate) fn not_found(reward_id: impl Into<String>) -> Self {
        RewardsError::NotFound {
            reward_id: reward_id.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RewardsError>;

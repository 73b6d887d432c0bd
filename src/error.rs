use thiserror::Error;

/// Authentication and session lifecycle errors.
///
/// These are terminal for the current session: `InvalidCode` and
/// `RefreshRejected` both require the user to run the authorization flow
/// again before any authenticated operation can proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authorization code was rejected by the token endpoint")]
    InvalidCode,
    #[error("refresh token was rejected; run `moodlist auth` to re-authorize")]
    RefreshRejected,
    #[error("no valid session; run `moodlist auth` first")]
    NotAuthenticated,
    #[error("no authorization is in progress; the code may already have been used")]
    NoPendingAuthorization,
    #[error("token endpoint returned a malformed response: {0}")]
    MalformedResponse(String),
    #[error("network error during token exchange: {0}")]
    Network(String),
}

/// Configuration errors, surfaced immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown mood '{0}', expected one of: happy, sad, calm, energetic")]
    UnknownMood(String),
}

/// Raised when the seed-artist selection is already at capacity.
///
/// Recoverable and user-visible; the selection itself is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("selection is full, no more than {max} seed artists can be chosen")]
pub struct CapacityError {
    pub max: usize,
}

/// Request-assembly validation errors; they block the create action only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least one seed artist is required to request recommendations")]
    NoSeeds,
}

/// Any failure reported by the remote Spotify services.
///
/// Surfaced to the user verbatim and never retried automatically; the user
/// may re-trigger the action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteServiceError {
    #[error("Spotify API request failed: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response from Spotify: {0}")]
    MalformedResponse(String),
}

impl RemoteServiceError {
    /// Maps a reqwest error onto the taxonomy: responses with an error status
    /// become `Api`, everything without one is a transport-level `Network`.
    pub fn from_http(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RemoteServiceError::Api {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => RemoteServiceError::Network(err.to_string()),
        }
    }
}

/// Top-level error for the application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("selection error: {0}")]
    Capacity(#[from] CapacityError),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("remote service error: {0}")]
    Remote(#[from] RemoteServiceError),
}

use std::path::PathBuf;

use chrono::Utc;

use crate::{error::AuthError, types::Session, utils};

// Refresh this many seconds before the stored expiry so a token never goes
// stale mid-request.
const REFRESH_MARGIN_SECS: u64 = 240;

/// The token endpoint of the identity provider.
///
/// Abstracted so the session state machine can be exercised against a mock;
/// the production implementation is `spotify::auth::AccountsEndpoint`.
#[allow(async_fn_in_trait)]
pub trait TokenEndpoint {
    async fn exchange_code(&self, code: &str, verifier: &str) -> Result<Session, AuthError>;
    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError>;
}

#[derive(Debug, Clone)]
enum Phase {
    Unauthenticated,
    AwaitingAuthorization { code_verifier: String },
    Authenticated { session: Session },
}

/// Owns the OAuth session lifecycle: acquire, store, detect expiry, refresh.
///
/// Callers never see OAuth mechanics; `credential()` always yields a usable
/// access token or a typed [`AuthError`]. Expiry is checked here and nowhere
/// else. Every successful exchange or refresh replaces the stored [`Session`]
/// as a whole, so partial token state can never be observed or persisted.
pub struct SessionManager<E: TokenEndpoint> {
    endpoint: E,
    phase: Phase,
}

impl<E: TokenEndpoint> SessionManager<E> {
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            phase: Phase::Unauthenticated,
        }
    }

    pub fn from_session(endpoint: E, session: Session) -> Self {
        Self {
            endpoint,
            phase: Phase::Authenticated { session },
        }
    }

    pub async fn load(endpoint: E) -> Result<Self, String> {
        let path = Self::session_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let session: Session = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self::from_session(endpoint, session))
    }

    pub async fn persist(&self) -> Result<(), String> {
        let Phase::Authenticated { session } = &self.phase else {
            return Err("no authenticated session to persist".to_string());
        };

        let path = Self::session_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(session).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    pub async fn clear_cached() -> Result<(), String> {
        async_fs::remove_file(Self::session_path())
            .await
            .map_err(|e| e.to_string())
    }

    /// Starts a new authorization attempt and returns the PKCE code challenge
    /// for the authorization URL. Any previously stored session is dropped.
    pub fn begin_authorization(&mut self) -> String {
        let code_verifier = utils::generate_code_verifier();
        let code_challenge = utils::generate_code_challenge(&code_verifier);
        self.phase = Phase::AwaitingAuthorization { code_verifier };
        code_challenge
    }

    /// Exchanges the redirect-delivered authorization code for a session.
    ///
    /// A rejected code leaves the manager in `AwaitingAuthorization` so the
    /// user can retry the browser flow. Calling this without a pending
    /// authorization fails: a consumed code can never resurrect a session.
    pub async fn complete_authorization(&mut self, code: &str) -> Result<(), AuthError> {
        let verifier = match &self.phase {
            Phase::AwaitingAuthorization { code_verifier } => code_verifier.clone(),
            _ => return Err(AuthError::NoPendingAuthorization),
        };

        let session = self.endpoint.exchange_code(code, &verifier).await?;
        self.phase = Phase::Authenticated { session };
        Ok(())
    }

    /// Returns a valid access token, refreshing at most once if the stored
    /// session has expired.
    ///
    /// A rejected refresh token clears the session entirely; the user must
    /// re-authorize. Transient network failures leave the session in place so
    /// the caller may try again.
    pub async fn credential(&mut self) -> Result<String, AuthError> {
        let session = match &self.phase {
            Phase::Authenticated { session } => session.clone(),
            _ => return Err(AuthError::NotAuthenticated),
        };

        if !Self::is_expired(&session) {
            return Ok(session.access_token);
        }

        match self.endpoint.refresh(&session.refresh_token).await {
            Ok(renewed) => {
                let token = renewed.access_token.clone();
                self.phase = Phase::Authenticated { session: renewed };
                Ok(token)
            }
            Err(AuthError::RefreshRejected) => {
                self.phase = Phase::Unauthenticated;
                Err(AuthError::RefreshRejected)
            }
            Err(e) => Err(e),
        }
    }

    pub fn needs_refresh(&self) -> bool {
        match &self.phase {
            Phase::Authenticated { session } => Self::is_expired(session),
            _ => false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, Phase::Authenticated { .. })
    }

    pub fn is_awaiting_authorization(&self) -> bool {
        matches!(self.phase, Phase::AwaitingAuthorization { .. })
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            Phase::Authenticated { session } => Some(session),
            _ => None,
        }
    }

    fn is_expired(session: &Session) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= session.expires_at.saturating_sub(REFRESH_MARGIN_SECS)
    }

    fn session_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("moodlist/cache/session.json");
        path
    }
}

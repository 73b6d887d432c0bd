use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config,
    error::AuthError,
    management::{SessionManager, TokenEndpoint},
    server::start_api_server,
    types::{Session, TokenResponse},
    warning,
};

/// Initiates the complete OAuth 2.0 PKCE authentication flow with Spotify.
///
/// This function orchestrates the entire authentication process:
/// 1. The session manager generates the PKCE verifier and hands back the
///    code challenge
/// 2. A local callback server is started to receive the redirect
/// 3. The authorization URL is opened in the user's browser
/// 4. The callback handler drives the code-for-token exchange through the
///    session manager
/// 5. The caller polls the shared manager until it is authenticated
///
/// The PKCE (Proof Key for Code Exchange) flow provides enhanced security
/// for OAuth flows without requiring a client secret to be stored.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe session manager shared between this flow
///   and the callback handler
///
/// # Returns
///
/// `true` once the manager holds an authenticated session, `false` when the
/// 60-second window elapses without a completed callback.
///
/// # Error Handling
///
/// Browser launch failures produce a warning with manual URL instructions;
/// the flow keeps waiting for the callback either way. Exchange failures are
/// reported by the callback handler and leave the manager awaiting
/// authorization so the user may retry from the browser.
pub async fn auth(shared_state: Arc<Mutex<SessionManager<AccountsEndpoint>>>) -> bool {
    let code_challenge = {
        let mut sessions = shared_state.lock().await;
        sessions.begin_authorization()
    };

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::spotify_scope()
    );

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    wait_for_session(shared_state).await
}

/// Waits for the OAuth callback to complete the authorization.
///
/// Polls the shared session manager with a 60-second timeout while the
/// callback handler performs the exchange concurrently.
async fn wait_for_session(shared_state: Arc<Mutex<SessionManager<AccountsEndpoint>>>) -> bool {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let sessions = shared_state.lock().await;
        if sessions.is_authenticated() {
            return true;
        }
        drop(sessions);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    false
}

/// The Spotify accounts token endpoint.
///
/// Performs the authorization-code and refresh-token exchanges against the
/// configured token URL. Responses are decoded into [`TokenResponse`] and
/// folded into a whole [`Session`] value in one step, so no partial token
/// state ever escapes.
pub struct AccountsEndpoint;

impl TokenEndpoint for AccountsEndpoint {
    async fn exchange_code(&self, code: &str, verifier: &str) -> Result<Session, AuthError> {
        let client_id = config::spotify_client_id();
        let redirect_uri = config::spotify_redirect_uri();

        let client = Client::new();
        let res = client
            .post(&config::spotify_apitoken_url())
            .form(&[
                ("grant_type", "authorization_code"),
                ("client_id", client_id.as_str()),
                ("code", code),
                ("code_verifier", verifier),
                ("redirect_uri", redirect_uri.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = res.status();
        if status.is_client_error() {
            return Err(AuthError::InvalidCode);
        }
        if !status.is_success() {
            return Err(AuthError::Network(format!(
                "token endpoint returned status {}",
                status
            )));
        }

        let grant: TokenResponse = res
            .json()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
        into_session(grant, None)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let client_id = config::spotify_client_id();

        let client = Client::new();
        let res = client
            .post(&config::spotify_apitoken_url())
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
                ("client_id", client_id.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = res.status();
        if status.is_client_error() {
            return Err(AuthError::RefreshRejected);
        }
        if !status.is_success() {
            return Err(AuthError::Network(format!(
                "token endpoint returned status {}",
                status
            )));
        }

        let grant: TokenResponse = res
            .json()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
        // the refresh response may omit the refresh token; keep the old one
        into_session(grant, Some(refresh_token))
    }
}

fn into_session(grant: TokenResponse, fallback_refresh: Option<&str>) -> Result<Session, AuthError> {
    let refresh_token = match grant.refresh_token {
        Some(token) => token,
        None => fallback_refresh
            .map(|t| t.to_string())
            .ok_or_else(|| AuthError::MalformedResponse("missing refresh_token".to_string()))?,
    };

    Ok(Session {
        access_token: grant.access_token,
        refresh_token,
        expires_at: Utc::now().timestamp() as u64 + grant.expires_in,
    })
}

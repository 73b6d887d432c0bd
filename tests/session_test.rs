use std::sync::{Arc, Mutex};

use chrono::Utc;
use moodlist::error::AuthError;
use moodlist::management::{SessionManager, TokenEndpoint};
use moodlist::types::Session;

// Helper functions to build sessions relative to the current time
fn now() -> u64 {
    Utc::now().timestamp() as u64
}

fn session(token: &str, expires_at: u64) -> Session {
    Session {
        access_token: token.to_string(),
        refresh_token: "refresh-1".to_string(),
        expires_at,
    }
}

/// Token endpoint double that counts exchanges and refreshes.
struct MockEndpoint {
    accept_code: bool,
    accept_refresh: bool,
    exchanges: Arc<Mutex<u32>>,
    refreshes: Arc<Mutex<u32>>,
}

impl MockEndpoint {
    fn new(accept_code: bool, accept_refresh: bool) -> Self {
        Self {
            accept_code,
            accept_refresh,
            exchanges: Arc::new(Mutex::new(0)),
            refreshes: Arc::new(Mutex::new(0)),
        }
    }
}

impl TokenEndpoint for MockEndpoint {
    async fn exchange_code(&self, _code: &str, _verifier: &str) -> Result<Session, AuthError> {
        *self.exchanges.lock().unwrap() += 1;
        if self.accept_code {
            Ok(session("exchanged", now() + 3600))
        } else {
            Err(AuthError::InvalidCode)
        }
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<Session, AuthError> {
        *self.refreshes.lock().unwrap() += 1;
        if self.accept_refresh {
            Ok(session("refreshed", now() + 3600))
        } else {
            Err(AuthError::RefreshRejected)
        }
    }
}

#[tokio::test]
async fn test_rejected_code_leaves_manager_awaiting() {
    let endpoint = MockEndpoint::new(false, true);
    let exchanges = Arc::clone(&endpoint.exchanges);

    let mut manager = SessionManager::new(endpoint);
    let challenge = manager.begin_authorization();
    assert!(!challenge.is_empty());
    assert!(manager.is_awaiting_authorization());

    let err = manager.complete_authorization("bad-code").await.unwrap_err();
    assert_eq!(err, AuthError::InvalidCode);
    assert_eq!(*exchanges.lock().unwrap(), 1);

    // Still awaiting, so the user can retry the browser flow
    assert!(manager.is_awaiting_authorization());
    assert!(!manager.is_authenticated());
}

#[tokio::test]
async fn test_successful_exchange_authenticates() {
    let endpoint = MockEndpoint::new(true, true);

    let mut manager = SessionManager::new(endpoint);
    manager.begin_authorization();
    manager.complete_authorization("good-code").await.unwrap();

    assert!(manager.is_authenticated());
    assert_eq!(manager.session().unwrap().access_token, "exchanged");
    assert_eq!(manager.credential().await.unwrap(), "exchanged");
}

#[tokio::test]
async fn test_completing_without_pending_authorization_fails() {
    let endpoint = MockEndpoint::new(true, true);
    let exchanges = Arc::clone(&endpoint.exchanges);

    let mut manager = SessionManager::new(endpoint);
    let err = manager.complete_authorization("stale-code").await.unwrap_err();
    assert_eq!(err, AuthError::NoPendingAuthorization);
    assert_eq!(*exchanges.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_replayed_code_cannot_reuse_a_session() {
    let endpoint = MockEndpoint::new(true, true);
    let exchanges = Arc::clone(&endpoint.exchanges);

    let mut manager = SessionManager::new(endpoint);
    manager.begin_authorization();
    manager.complete_authorization("good-code").await.unwrap();

    // The code was consumed; replaying it must fail
    let err = manager.complete_authorization("good-code").await.unwrap_err();
    assert_eq!(err, AuthError::NoPendingAuthorization);
    assert_eq!(*exchanges.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_valid_session_triggers_no_refresh() {
    let endpoint = MockEndpoint::new(true, true);
    let refreshes = Arc::clone(&endpoint.refreshes);

    let mut manager = SessionManager::from_session(endpoint, session("current", now() + 3600));
    assert!(!manager.needs_refresh());
    assert_eq!(manager.credential().await.unwrap(), "current");
    assert_eq!(*refreshes.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_expired_session_refreshes_exactly_once() {
    let endpoint = MockEndpoint::new(true, true);
    let refreshes = Arc::clone(&endpoint.refreshes);

    let mut manager = SessionManager::from_session(endpoint, session("stale", now() - 10));
    assert!(manager.needs_refresh());
    assert_eq!(manager.credential().await.unwrap(), "refreshed");
    assert_eq!(*refreshes.lock().unwrap(), 1);

    // The renewed session is valid, so the next call does not refresh again
    assert_eq!(manager.credential().await.unwrap(), "refreshed");
    assert_eq!(*refreshes.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_rejected_refresh_requires_reauthorization() {
    let endpoint = MockEndpoint::new(true, false);
    let refreshes = Arc::clone(&endpoint.refreshes);

    let mut manager = SessionManager::from_session(endpoint, session("stale", now() - 10));
    let err = manager.credential().await.unwrap_err();
    assert_eq!(err, AuthError::RefreshRejected);
    assert_eq!(*refreshes.lock().unwrap(), 1);

    // Session is gone; further calls demand a fresh authorization
    assert!(!manager.is_authenticated());
    let err = manager.credential().await.unwrap_err();
    assert_eq!(err, AuthError::NotAuthenticated);
    assert_eq!(*refreshes.lock().unwrap(), 1);
}

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error, info,
    management::SessionManager,
    spotify::{self, auth::AccountsEndpoint},
    success,
};

pub async fn auth(shared_state: Arc<Mutex<SessionManager<AccountsEndpoint>>>) {
    if spotify::auth::auth(Arc::clone(&shared_state)).await {
        let sessions = shared_state.lock().await;
        if let Err(e) = sessions.persist().await {
            error!("Failed to save session to cache: {}", e);
        }
        success!("Authentication successful!");
    } else {
        error!("Authentication failed or timed out.");
    }
}

pub async fn logout() {
    match SessionManager::<AccountsEndpoint>::clear_cached().await {
        Ok(()) => success!("Logged out. Cached session removed."),
        Err(_) => info!("No cached session found."),
    }
}

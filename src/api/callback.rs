use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{management::SessionManager, spotify::auth::AccountsEndpoint, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<SessionManager<AccountsEndpoint>>>>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut sessions = shared_state.lock().await;
    match sessions.complete_authorization(code).await {
        Ok(()) => Html("<h2>Authentication successful.</h2><p>Close browser window.</p>"),
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}

use reqwest::Client;

use crate::{config, error::RemoteServiceError, types::UserProfile};

use super::client::read_json;

/// Fetches the authenticated user's profile; the id is needed for playlist
/// creation.
pub async fn me(http: &Client, token: &str) -> Result<UserProfile, RemoteServiceError> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let response = http
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(RemoteServiceError::from_http)?;

    read_json(response).await
}

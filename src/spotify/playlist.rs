use reqwest::Client;

use crate::{
    config,
    error::RemoteServiceError,
    types::{AddItemsRequest, AddItemsResponse, CreatePlaylistRequest, CreatePlaylistResponse},
};

use super::client::read_json;

/// Creates an empty playlist for the user.
pub async fn create(
    http: &Client,
    token: &str,
    user_id: &str,
    request: &CreatePlaylistRequest,
) -> Result<CreatePlaylistResponse, RemoteServiceError> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let response = http
        .post(&api_url)
        .bearer_auth(token)
        .json(request)
        .send()
        .await
        .map_err(RemoteServiceError::from_http)?;

    read_json(response).await
}

/// Appends track URIs to a playlist, preserving their order.
///
/// Returns the snapshot id reported by the service.
pub async fn add_items(
    http: &Client,
    token: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<String, RemoteServiceError> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let request = AddItemsRequest {
        uris: uris.to_vec(),
    };

    let response = http
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await
        .map_err(RemoteServiceError::from_http)?;

    let res: AddItemsResponse = read_json(response).await?;
    Ok(res.snapshot_id)
}

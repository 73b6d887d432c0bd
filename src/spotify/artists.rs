use reqwest::Client;

use crate::{
    config,
    error::RemoteServiceError,
    types::{ArtistRef, SearchArtistsResponse},
};

use super::client::read_json;

/// Searches the catalog for an artist and returns only the top-ranked match.
///
/// One query yields at most one candidate; `None` means the catalog had no
/// match for the query, which is an ordinary result rather than an error.
///
/// # Arguments
///
/// * `http` - Shared HTTP client
/// * `token` - Valid access token for Spotify API authentication
/// * `query` - Free-text artist search query
///
/// # Errors
///
/// Returns [`RemoteServiceError`] for network failures, API error statuses,
/// or a response body that does not match the documented search shape.
pub async fn search(
    http: &Client,
    token: &str,
    query: &str,
) -> Result<Option<ArtistRef>, RemoteServiceError> {
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let response = http
        .get(&api_url)
        .query(&[("q", query), ("type", "artist"), ("limit", "1")])
        .bearer_auth(token)
        .send()
        .await
        .map_err(RemoteServiceError::from_http)?;

    let res: SearchArtistsResponse = read_json(response).await?;
    Ok(res.artists.items.into_iter().next())
}

/// Looks up an artist by id, used to resolve current display names for the
/// playlist description.
pub async fn get(
    http: &Client,
    token: &str,
    artist_id: &str,
) -> Result<ArtistRef, RemoteServiceError> {
    let api_url = format!(
        "{uri}/artists/{id}",
        uri = &config::spotify_apiurl(),
        id = artist_id
    );

    let response = http
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(RemoteServiceError::from_http)?;

    read_json(response).await
}

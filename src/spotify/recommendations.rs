use reqwest::Client;

use crate::{
    config,
    error::RemoteServiceError,
    management::RecommendationRequest,
    types::{RecommendationsResponse, Track},
};

use super::client::read_json;

/// Fetches track recommendations for the assembled request.
///
/// The request renders itself into `seed_artists`, `limit` and
/// `target_<feature>` query parameters; an empty track list in the response is
/// a valid outcome and is returned as such.
///
/// # Errors
///
/// Returns [`RemoteServiceError`] for network failures, API error statuses,
/// or a response body that does not match the documented shape.
pub async fn recommend(
    http: &Client,
    token: &str,
    request: &RecommendationRequest,
) -> Result<Vec<Track>, RemoteServiceError> {
    let api_url = format!("{uri}/recommendations", uri = &config::spotify_apiurl());

    let response = http
        .get(&api_url)
        .query(&request.query())
        .bearer_auth(token)
        .send()
        .await
        .map_err(RemoteServiceError::from_http)?;

    let res: RecommendationsResponse = read_json(response).await?;
    Ok(res.tracks)
}

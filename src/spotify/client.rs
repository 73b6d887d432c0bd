use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::{
    Res,
    error::RemoteServiceError,
    management::{RecommendationRequest, SessionManager},
    types::{ArtistRef, CreatePlaylistRequest, CreatePlaylistResponse, Track, UserProfile},
    warning,
};

use super::{artists, auth::AccountsEndpoint, playlist, recommendations, users};

/// The remote music service as the application sees it.
///
/// One method per operation the flow needs; the production implementation is
/// [`WebClient`], and tests substitute their own.
#[allow(async_fn_in_trait)]
pub trait MusicService {
    async fn current_user(&self) -> Res<UserProfile>;
    async fn search_artist(&self, query: &str) -> Res<Option<ArtistRef>>;
    async fn artist(&self, artist_id: &str) -> Res<ArtistRef>;
    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Res<CreatePlaylistResponse>;
    async fn recommendations(&self, request: &RecommendationRequest) -> Res<Vec<Track>>;
    async fn add_items(&self, playlist_id: &str, uris: &[String]) -> Res<String>;
}

/// Spotify Web API client backed by a session manager.
///
/// Every call obtains a valid bearer token first; when that required a
/// refresh, the renewed session is written back to the cache so subsequent
/// invocations skip the refresh.
pub struct WebClient {
    http: Client,
    sessions: Mutex<SessionManager<AccountsEndpoint>>,
}

impl WebClient {
    pub fn new(sessions: SessionManager<AccountsEndpoint>) -> Self {
        Self {
            http: Client::new(),
            sessions: Mutex::new(sessions),
        }
    }

    async fn bearer(&self) -> Res<String> {
        let mut sessions = self.sessions.lock().await;
        let refreshed = sessions.needs_refresh();
        let token = sessions.credential().await?;
        if refreshed {
            if let Err(e) = sessions.persist().await {
                warning!("Failed to cache refreshed session: {}", e);
            }
        }
        Ok(token)
    }
}

impl MusicService for WebClient {
    async fn current_user(&self) -> Res<UserProfile> {
        let token = self.bearer().await?;
        Ok(users::me(&self.http, &token).await?)
    }

    async fn search_artist(&self, query: &str) -> Res<Option<ArtistRef>> {
        let token = self.bearer().await?;
        Ok(artists::search(&self.http, &token, query).await?)
    }

    async fn artist(&self, artist_id: &str) -> Res<ArtistRef> {
        let token = self.bearer().await?;
        Ok(artists::get(&self.http, &token, artist_id).await?)
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Res<CreatePlaylistResponse> {
        let token = self.bearer().await?;
        Ok(playlist::create(&self.http, &token, user_id, request).await?)
    }

    async fn recommendations(&self, request: &RecommendationRequest) -> Res<Vec<Track>> {
        let token = self.bearer().await?;
        Ok(recommendations::recommend(&self.http, &token, request).await?)
    }

    async fn add_items(&self, playlist_id: &str, uris: &[String]) -> Res<String> {
        let token = self.bearer().await?;
        Ok(playlist::add_items(&self.http, &token, playlist_id, uris).await?)
    }
}

/// Checks the status and decodes the body into a typed record.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
) -> Result<T, RemoteServiceError> {
    let response = response
        .error_for_status()
        .map_err(RemoteServiceError::from_http)?;
    response
        .json::<T>()
        .await
        .map_err(|e| RemoteServiceError::MalformedResponse(e.to_string()))
}

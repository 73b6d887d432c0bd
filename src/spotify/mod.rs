//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the mood
//! playlist generator: authentication, catalog search, recommendations and
//! playlist management. It is the only layer that speaks HTTP; everything above
//! it works with the typed records from [`crate::types`].
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule handles
//! a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Artist Search & Lookup
//!     ├── Recommendations
//!     └── Playlist Operations (Create, Add Tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: authorization URL, code exchange via the
//!   local callback server, and token refresh. The accounts endpoints are
//!   reachable through the [`crate::management::TokenEndpoint`] trait so the
//!   session state machine stays testable offline.
//! - [`artists`] - Catalog search (top match only) and artist lookup by id.
//! - [`recommendations`] - The recommendation endpoint, driven by a
//!   [`crate::management::RecommendationRequest`].
//! - [`playlist`] - Playlist creation and track insertion.
//! - [`users`] - Current-user profile lookup.
//! - [`client`] - The [`MusicService`] trait and its production implementation
//!   [`WebClient`], which owns bearer-token handling. Mock implementations of
//!   the trait back the integration tests.
//!
//! ## Error Handling Philosophy
//!
//! Every response is decoded into a typed record; a decode failure surfaces as
//! `RemoteServiceError::MalformedResponse` instead of a stray key lookup. API
//! failures carry the HTTP status and are reported to the user verbatim. No
//! request is retried automatically; the token refresh performed lazily before
//! an authenticated call is the single exception to that rule.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - code exchange and token refresh (accounts host)
//! - `GET /search?type=artist` - seed-artist search
//! - `GET /artists/{id}` - display-name resolution
//! - `GET /recommendations` - track recommendations
//! - `POST /users/{user_id}/playlists` - playlist creation
//! - `POST /playlists/{playlist_id}/tracks` - track insertion
//! - `GET /me` - current user profile

pub mod artists;
pub mod auth;
pub mod client;
pub mod playlist;
pub mod recommendations;
pub mod users;

pub use client::MusicService;
pub use client::WebClient;

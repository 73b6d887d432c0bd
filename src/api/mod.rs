//! # API Module
//!
//! This module provides the HTTP endpoints served by the local callback
//! server during authentication.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles the OAuth redirect from Spotify's authorization
//!   server. The handler forwards the one-time `code` query parameter to the
//!   shared session manager, which performs the PKCE token exchange and moves
//!   into the authenticated state on success.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version, useful while the short-lived server is up.
//!
//! ## Architecture
//!
//! Built on [Axum](https://docs.rs/axum); each endpoint is an async function
//! wired into the router in [`crate::server`]. The session manager is shared
//! with the waiting CLI flow through an `Extension` layer.
//!
//! ## Security Considerations
//!
//! - The code exchange uses OAuth 2.0 PKCE, so no client secret is involved
//! - A code is consumed exactly once; replays fail because the manager leaves
//!   the awaiting state after a successful exchange

mod callback;
mod health;

pub use callback::callback;
pub use health::health;

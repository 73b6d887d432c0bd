//! # CLI Module
//!
//! This module provides the command-line interface layer for the mood playlist
//! generator. It implements all user-facing commands and coordinates between
//! the Spotify API services, the session/selection management layer, and user
//! interaction.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!   security and persists the resulting session
//! - [`logout`] - Destroys the cached session
//!
//! ### Information
//!
//! - [`moods`] - Displays the mood-to-audio-feature range table driving the
//!   target sampling
//! - [`search`] - Looks up the top catalog match for an artist query
//!
//! ### Playlist Generation
//!
//! - [`playlist`] - The full generation flow: seed-artist accumulation,
//!   per-flow target sampling, playlist creation and track insertion
//!
//! ## Architecture Design
//!
//! The CLI module follows the layered approach of the rest of the crate:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Session, Selection, Assembly)
//!     ↓
//! Spotify Layer (Web API)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command delegates the actual work downward while handling user
//! interaction, progress feedback, and error presentation. Remote failures are
//! shown verbatim and never retried automatically; empty results ("no artists
//! found", "no tracks matched") are reported as information, not errors.

mod artists;
mod auth;
mod moods;
mod playlist;

pub use artists::search;
pub use auth::auth;
pub use auth::logout;
pub use moods::moods;
pub use playlist::playlist;

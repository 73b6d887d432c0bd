//! Spotify Mood Playlist CLI Library
//!
//! This library provides functionality for generating Spotify playlists that match
//! a chosen mood, seeded from a small set of favorite artists. It includes modules
//! for API communication, CLI operations, configuration management, and the
//! mood-to-audio-feature sampling model driving the recommendations.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Typed error taxonomy for auth, validation and remote failures
//! - `management` - Session lifecycle, seed-artist selection and playlist assembly
//! - `mood` - Mood definitions, audio-feature ranges and target sampling
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use moodlist::{config, cli};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.expect("environment");
//!     // Use CLI functions...
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod mood;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::AppError;

/// A convenient Result type alias for operations that may fail.
///
/// All fallible application operations funnel into the [`AppError`] taxonomy,
/// which keeps auth, validation and remote-service failures distinguishable at
/// the call site while allowing `?` everywhere.
pub type Res<T> = std::result::Result<T, AppError>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Starting authentication process...");
/// info!("Added {} to the selection", name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// success!("Playlist created with {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("Session cache not found, will create new one");
/// warning!("Selection is already full");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

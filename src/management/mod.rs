mod auth;
mod playlist;
mod recommend;
mod selection;

pub use auth::SessionManager;
pub use auth::TokenEndpoint;
pub use playlist::PlaylistOutcome;
pub use playlist::create_and_populate;
pub use recommend::MAX_TRACK_LIMIT;
pub use recommend::RecommendationRequest;
pub use recommend::build_request;
pub use selection::MAX_SEED_ARTISTS;
pub use selection::SelectionSet;

use crate::{
    error::ValidationError,
    mood::{Feature, TargetFeatures},
    types::ArtistRef,
};

use super::selection::MAX_SEED_ARTISTS;

/// Maximum track count the recommender accepts per request.
pub const MAX_TRACK_LIMIT: u32 = 100;

/// A fully assembled request for the remote recommender.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub seed_artist_ids: Vec<String>,
    pub limit: u32,
    pub targets: Vec<(Feature, f64)>,
}

impl RecommendationRequest {
    /// Renders the request as URL query parameters: the seed list, the track
    /// limit, and one `target_<feature>` entry per retained feature.
    pub fn query(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("seed_artists".to_string(), self.seed_artist_ids.join(",")),
            ("limit".to_string(), self.limit.to_string()),
        ];
        for (feature, value) in &self.targets {
            params.push((format!("target_{}", feature), value.to_string()));
        }
        params
    }
}

/// Merges seed artists and the sampled target vector into a request.
///
/// Fails when no seeds were selected (the recommender requires at least one).
/// Seeds past the fifth are dropped defensively, features outside the
/// recommender's vocabulary are withheld rather than sent, and the limit is
/// clamped to what the service accepts.
pub fn build_request(
    seeds: &[ArtistRef],
    targets: &TargetFeatures,
    limit: u32,
) -> Result<RecommendationRequest, ValidationError> {
    if seeds.is_empty() {
        return Err(ValidationError::NoSeeds);
    }

    let seed_artist_ids = seeds
        .iter()
        .take(MAX_SEED_ARTISTS)
        .map(|a| a.id.clone())
        .collect();

    let targets = targets
        .iter()
        .filter(|(feature, _)| feature.accepted_by_recommender())
        .collect();

    Ok(RecommendationRequest {
        seed_artist_ids,
        limit: limit.clamp(1, MAX_TRACK_LIMIT),
        targets,
    })
}

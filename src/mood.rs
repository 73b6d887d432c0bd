//! Mood definitions and the audio-feature sampling model.
//!
//! Each mood maps to a fixed set of closed `[lo, hi]` audio-feature ranges. A
//! playlist-creation attempt draws one uniform sample per defined feature,
//! producing the target vector the recommender matches against. The table below
//! is the single source of truth for sampling; features a mood does not define
//! are absent from the sampled vector, never defaulted.

use std::{collections::BTreeMap, fmt, str::FromStr};

use rand::Rng;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Calm,
    Energetic,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Calm, Mood::Energetic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Calm => "calm",
            Mood::Energetic => "energetic",
        }
    }

    /// Capitalized form used in playlist names ("Calm Mood Playlist").
    pub fn title(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Calm => "Calm",
            Mood::Energetic => "Energetic",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "calm" => Ok(Mood::Calm),
            "energetic" => Ok(Mood::Energetic),
            other => Err(ConfigError::UnknownMood(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Danceability,
    Energy,
    Valence,
    Loudness,
    Acousticness,
    Instrumentalness,
    Speechiness,
    Tempo,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Valence => "valence",
            Feature::Loudness => "loudness",
            Feature::Acousticness => "acousticness",
            Feature::Instrumentalness => "instrumentalness",
            Feature::Speechiness => "speechiness",
            Feature::Tempo => "tempo",
        }
    }

    /// Whether the recommender accepts a `target_<feature>` parameter for this
    /// feature. Instrumentalness is sampled for some moods but is not part of
    /// the recommender's vocabulary and must never be sent.
    pub fn accepted_by_recommender(&self) -> bool {
        !matches!(self, Feature::Instrumentalness)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRange {
    pub lo: f64,
    pub hi: f64,
}

impl FeatureRange {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.lo..=self.hi)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

/// The per-mood feature-range table.
pub fn feature_ranges(mood: Mood) -> &'static [(Feature, FeatureRange)] {
    match mood {
        Mood::Happy => &[
            (Feature::Danceability, FeatureRange { lo: 0.502, hi: 0.730 }),
            (Feature::Energy, FeatureRange { lo: 0.615, hi: 0.865 }),
            (Feature::Valence, FeatureRange { lo: 0.361, hi: 0.742 }),
            (Feature::Loudness, FeatureRange { lo: -8.043, hi: -4.20 }),
            (Feature::Acousticness, FeatureRange { lo: 0.011, hi: 0.202 }),
            (Feature::Speechiness, FeatureRange { lo: 0.0381, hi: 0.11 }),
            (Feature::Tempo, FeatureRange { lo: 100.55, hi: 142.40 }),
        ],
        Mood::Sad => &[
            (Feature::Danceability, FeatureRange { lo: 0.211, hi: 0.539 }),
            (Feature::Energy, FeatureRange { lo: 0.0489, hi: 0.261 }),
            (Feature::Valence, FeatureRange { lo: 0.0548, hi: 0.323 }),
            (Feature::Loudness, FeatureRange { lo: -25.438, hi: -15.531 }),
            (Feature::Acousticness, FeatureRange { lo: 0.6, hi: 0.9 }),
            (Feature::Instrumentalness, FeatureRange { lo: 0.7, hi: 0.98 }),
            (Feature::Speechiness, FeatureRange { lo: 0.0367, hi: 0.351 }),
            (Feature::Tempo, FeatureRange { lo: 78.6, hi: 129.227 }),
        ],
        Mood::Calm => &[
            (Feature::Danceability, FeatureRange { lo: 0.422, hi: 0.648 }),
            (Feature::Energy, FeatureRange { lo: 0.241, hi: 0.5 }),
            (Feature::Valence, FeatureRange { lo: 0.225, hi: 0.6 }),
            (Feature::Loudness, FeatureRange { lo: -13.824, hi: -8.264 }),
            (Feature::Acousticness, FeatureRange { lo: 0.589, hi: 0.869 }),
            (Feature::Tempo, FeatureRange { lo: 90.0, hi: 134.43 }),
        ],
        Mood::Energetic => &[
            (Feature::Danceability, FeatureRange { lo: 0.466, hi: 0.72 }),
            (Feature::Energy, FeatureRange { lo: 0.554, hi: 0.882 }),
            (Feature::Valence, FeatureRange { lo: 0.17, hi: 0.613 }),
            (Feature::Loudness, FeatureRange { lo: -11.124, hi: -6.513 }),
            (Feature::Acousticness, FeatureRange { lo: 0.0, hi: 0.2 }),
            (Feature::Instrumentalness, FeatureRange { lo: 0.6, hi: 0.9 }),
            (Feature::Tempo, FeatureRange { lo: 107.0, hi: 140.0 }),
        ],
    }
}

/// One sampled target vector, drawn once per playlist-creation attempt.
///
/// Every key present is a feature actually defined for the sampled mood; the
/// vector is never partially recomputed mid-flow.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetFeatures {
    values: BTreeMap<Feature, f64>,
}

impl TargetFeatures {
    pub fn get(&self, feature: Feature) -> Option<f64> {
        self.values.get(&feature).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        self.values.iter().map(|(feature, value)| (*feature, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Draws a fresh target vector for `mood`, one independent uniform sample per
/// defined feature. Pass a seeded rng for reproducible output.
pub fn sample<R: Rng + ?Sized>(mood: Mood, rng: &mut R) -> TargetFeatures {
    let mut values = BTreeMap::new();
    for (feature, range) in feature_ranges(mood) {
        values.insert(*feature, range.sample(rng));
    }
    TargetFeatures { values }
}

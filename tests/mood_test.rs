use std::str::FromStr;

use moodlist::error::ConfigError;
use moodlist::mood::{self, Feature, Mood};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn test_sample_values_fall_within_declared_ranges() {
    for mood in Mood::ALL {
        for seed in 0..25u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let targets = mood::sample(mood, &mut rng);

            // One value per declared feature, each inside its interval
            assert_eq!(targets.len(), mood::feature_ranges(mood).len());
            for (feature, range) in mood::feature_ranges(mood) {
                let value = targets
                    .get(*feature)
                    .unwrap_or_else(|| panic!("{} missing for {}", feature, mood));
                assert!(
                    range.contains(value),
                    "{} = {} outside [{}, {}] for {}",
                    feature,
                    value,
                    range.lo,
                    range.hi,
                    mood
                );
            }
        }
    }
}

#[test]
fn test_undefined_features_are_absent() {
    let mut rng = StdRng::seed_from_u64(1);

    // calm defines neither instrumentalness nor speechiness
    let calm = mood::sample(Mood::Calm, &mut rng);
    assert!(calm.get(Feature::Instrumentalness).is_none());
    assert!(calm.get(Feature::Speechiness).is_none());

    // happy defines no instrumentalness, energetic no speechiness
    let happy = mood::sample(Mood::Happy, &mut rng);
    assert!(happy.get(Feature::Instrumentalness).is_none());
    let energetic = mood::sample(Mood::Energetic, &mut rng);
    assert!(energetic.get(Feature::Speechiness).is_none());

    // sad defines all eight features
    let sad = mood::sample(Mood::Sad, &mut rng);
    assert_eq!(sad.len(), 8);
}

#[test]
fn test_sample_is_deterministic_for_a_seed() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);

    let first = mood::sample(Mood::Energetic, &mut a);
    let second = mood::sample(Mood::Energetic, &mut b);
    assert_eq!(first, second);

    // A different seed should produce a different vector
    let mut c = StdRng::seed_from_u64(43);
    let third = mood::sample(Mood::Energetic, &mut c);
    assert_ne!(first, third);
}

#[test]
fn test_calm_ranges_match_the_published_table() {
    let ranges = mood::feature_ranges(Mood::Calm);

    let danceability = ranges
        .iter()
        .find(|(f, _)| *f == Feature::Danceability)
        .map(|(_, r)| *r)
        .unwrap();
    assert_eq!(danceability.lo, 0.422);
    assert_eq!(danceability.hi, 0.648);

    let energy = ranges
        .iter()
        .find(|(f, _)| *f == Feature::Energy)
        .map(|(_, r)| *r)
        .unwrap();
    assert_eq!(energy.lo, 0.241);
    assert_eq!(energy.hi, 0.5);
}

#[test]
fn test_mood_parsing() {
    assert_eq!(Mood::from_str("happy").unwrap(), Mood::Happy);
    assert_eq!(Mood::from_str("HAPPY").unwrap(), Mood::Happy);
    assert_eq!(Mood::from_str(" energetic ").unwrap(), Mood::Energetic);

    // Unknown moods are a configuration error
    let err = Mood::from_str("angry").unwrap_err();
    assert_eq!(err, ConfigError::UnknownMood("angry".to_string()));
}

#[test]
fn test_mood_display_and_title() {
    assert_eq!(Mood::Calm.to_string(), "calm");
    assert_eq!(Mood::Calm.title(), "Calm");
    assert_eq!(Mood::Energetic.to_string(), "energetic");
    assert_eq!(Mood::Energetic.title(), "Energetic");

    // Display round-trips through FromStr
    for mood in Mood::ALL {
        assert_eq!(Mood::from_str(mood.as_str()).unwrap(), mood);
    }
}

#[test]
fn test_recommender_vocabulary() {
    // Instrumentalness is sampled for some moods but never sent
    assert!(!Feature::Instrumentalness.accepted_by_recommender());
    for feature in [
        Feature::Danceability,
        Feature::Energy,
        Feature::Valence,
        Feature::Loudness,
        Feature::Acousticness,
        Feature::Speechiness,
        Feature::Tempo,
    ] {
        assert!(feature.accepted_by_recommender());
    }
}

use moodlist::error::ValidationError;
use moodlist::management::{MAX_TRACK_LIMIT, build_request};
use moodlist::mood::{self, Feature, Mood};
use moodlist::types::ArtistRef;
use rand::{SeedableRng, rngs::StdRng};

// Helper function to create a test artist
fn artist(id: &str) -> ArtistRef {
    ArtistRef {
        id: id.to_string(),
        name: format!("Artist {}", id),
    }
}

#[test]
fn test_build_requires_at_least_one_seed() {
    let mut rng = StdRng::seed_from_u64(1);
    let targets = mood::sample(Mood::Happy, &mut rng);

    let err = build_request(&[], &targets, 20).unwrap_err();
    assert_eq!(err, ValidationError::NoSeeds);
}

#[test]
fn test_build_truncates_to_five_seeds() {
    let mut rng = StdRng::seed_from_u64(2);
    let targets = mood::sample(Mood::Happy, &mut rng);

    let seeds: Vec<ArtistRef> = (1..=7).map(|i| artist(&format!("a{}", i))).collect();
    let request = build_request(&seeds, &targets, 20).unwrap();

    assert_eq!(request.seed_artist_ids, vec!["a1", "a2", "a3", "a4", "a5"]);
}

#[test]
fn test_build_drops_features_outside_the_recommender_vocabulary() {
    let mut rng = StdRng::seed_from_u64(3);

    // sad samples all eight features, including instrumentalness
    let targets = mood::sample(Mood::Sad, &mut rng);
    assert!(targets.get(Feature::Instrumentalness).is_some());

    let request = build_request(&[artist("a1")], &targets, 20).unwrap();
    assert_eq!(request.targets.len(), 7);
    assert!(
        request
            .targets
            .iter()
            .all(|(feature, _)| *feature != Feature::Instrumentalness)
    );

    // retained values are the sampled ones, untouched
    for (feature, value) in &request.targets {
        assert_eq!(targets.get(*feature), Some(*value));
    }
}

#[test]
fn test_build_clamps_the_limit() {
    let mut rng = StdRng::seed_from_u64(4);
    let targets = mood::sample(Mood::Calm, &mut rng);
    let seeds = [artist("a1")];

    assert_eq!(build_request(&seeds, &targets, 20).unwrap().limit, 20);
    assert_eq!(build_request(&seeds, &targets, 0).unwrap().limit, 1);
    assert_eq!(
        build_request(&seeds, &targets, 500).unwrap().limit,
        MAX_TRACK_LIMIT
    );
}

#[test]
fn test_request_renders_query_parameters() {
    let mut rng = StdRng::seed_from_u64(5);
    let targets = mood::sample(Mood::Calm, &mut rng);

    let request = build_request(&[artist("a1"), artist("a2")], &targets, 30).unwrap();
    let params = request.query();

    assert_eq!(
        params[0],
        ("seed_artists".to_string(), "a1,a2".to_string())
    );
    assert_eq!(params[1], ("limit".to_string(), "30".to_string()));

    // one target_<feature> parameter per retained feature
    let target_params: Vec<&(String, String)> = params
        .iter()
        .filter(|(key, _)| key.starts_with("target_"))
        .collect();
    assert_eq!(target_params.len(), request.targets.len());

    let danceability = targets.get(Feature::Danceability).unwrap();
    assert!(params.contains(&(
        "target_danceability".to_string(),
        danceability.to_string()
    )));
}

use moodlist::management::{MAX_SEED_ARTISTS, SelectionSet};
use moodlist::types::ArtistRef;

// Helper function to create a test artist
fn artist(id: &str, name: &str) -> ArtistRef {
    ArtistRef {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_add_preserves_insertion_order() {
    let mut selection = SelectionSet::new();
    assert!(selection.add(artist("a3", "Third")).unwrap());
    assert!(selection.add(artist("a1", "First")).unwrap());
    assert!(selection.add(artist("a2", "Second")).unwrap());

    let ids: Vec<&str> = selection.artists().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a3", "a1", "a2"]);
}

#[test]
fn test_capacity_is_never_exceeded() {
    let mut selection = SelectionSet::new();
    for i in 0..MAX_SEED_ARTISTS {
        let added = selection
            .add(artist(&format!("a{}", i), &format!("Artist {}", i)))
            .unwrap();
        assert!(added);
    }
    assert_eq!(selection.len(), MAX_SEED_ARTISTS);
    assert!(selection.is_full());

    // A sixth distinct artist is rejected and the set is unchanged
    let err = selection.add(artist("a5", "One Too Many")).unwrap_err();
    assert_eq!(err.max, MAX_SEED_ARTISTS);
    assert_eq!(selection.len(), MAX_SEED_ARTISTS);
    let ids: Vec<&str> = selection.artists().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a0", "a1", "a2", "a3", "a4"]);
}

#[test]
fn test_duplicate_add_is_a_noop() {
    let mut selection = SelectionSet::new();
    assert!(selection.add(artist("a1", "Artist One")).unwrap());

    // Same id again, even with a different display name
    assert!(!selection.add(artist("a1", "Artist 1 Renamed")).unwrap());
    assert_eq!(selection.len(), 1);
    assert_eq!(selection.artists()[0].name, "Artist One");
}

#[test]
fn test_duplicate_add_on_full_set_is_still_a_noop() {
    let mut selection = SelectionSet::new();
    for i in 0..MAX_SEED_ARTISTS {
        selection
            .add(artist(&format!("a{}", i), &format!("Artist {}", i)))
            .unwrap();
    }

    // Re-adding a member does not raise a capacity error
    assert!(!selection.add(artist("a2", "Artist 2")).unwrap());
    assert_eq!(selection.len(), MAX_SEED_ARTISTS);
}

#[test]
fn test_clear_resets_the_selection() {
    let mut selection = SelectionSet::new();
    selection.add(artist("a1", "Artist One")).unwrap();
    selection.add(artist("a2", "Artist Two")).unwrap();

    selection.clear();
    assert!(selection.is_empty());
    assert_eq!(selection.len(), 0);

    // The set is usable again after clearing
    assert!(selection.add(artist("a1", "Artist One")).unwrap());
    assert_eq!(selection.len(), 1);
}

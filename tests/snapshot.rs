mod fixtures;

use castpath_core::{
    CreditKey, InMemorySnapshotProvider, MediaKind, NodeKey, Person, Snapshot, SnapshotProvider,
    pathfinding::{PathDefect, validate_keys},
};
use fixtures::*;

#[test]
fn test_provider_filters_by_region() {
    let mut local = person(ALICE, "Alice Archer", 90.0, vec![]);
    local.regions = vec!["UK".to_string()];
    let mut everywhere = person(BOB, "Bob Baker", 70.0, vec![]);
    everywhere.regions = vec!["UK".to_string(), "US".to_string()];
    let provider = InMemorySnapshotProvider::new(vec![local, everywhere]);

    let us = provider.load("us").unwrap();
    let global = provider.load("GLOBAL").unwrap();

    assert_eq!(us.len(), 1);
    assert!(us.contains_key(&BOB));
    assert_eq!(global.len(), 2);
}

#[test]
fn test_person_deserializes_with_missing_optional_fields() {
    let json = r#"{
        "1": {
            "id": 1,
            "name": "Alice Archer",
            "popularity": 12.5,
            "movie_credits": [
                {"id": 101, "title": "Midnight Run", "popularity": 4.0, "is_mcu": true}
            ]
        }
    }"#;

    let snapshot: Snapshot = serde_json::from_str(json).unwrap();
    let alice: &Person = &snapshot[&1];

    assert!(!alice.has_profile_image());
    assert!(alice.tv_credits.is_empty());
    assert_eq!(alice.movie_credits[0].kind, MediaKind::Movie);
    assert!(alice.movie_credits[0].is_franchise);
    assert!(alice.movie_credits[0].character.is_empty());
}

#[test]
fn test_blank_profile_path_is_no_image() {
    let mut alice = person(ALICE, "Alice Archer", 90.0, vec![]);
    assert!(alice.has_profile_image());

    alice.profile_path = Some("  ".to_string());
    assert!(!alice.has_profile_image());
}

#[test]
fn test_key_sequence_validation() {
    let a = NodeKey::Actor(ALICE);
    let b = NodeKey::Actor(BOB);
    let m = NodeKey::Media(CreditKey::movie(MIDNIGHT_RUN));

    assert_eq!(validate_keys(&[a, m, b]), Ok(()));
    assert_eq!(validate_keys(&[a]), Ok(()));
    assert_eq!(validate_keys(&[]), Err(PathDefect::Empty));
    assert_eq!(validate_keys(&[a, m]), Err(PathDefect::EvenLength(2)));
    assert_eq!(
        validate_keys(&[m, a, m]),
        Err(PathDefect::BrokenAlternation { index: 0 })
    );
    assert_eq!(validate_keys(&[a, m, a]), Err(PathDefect::DuplicateNode(a)));
}

mod fixtures;

use castpath_core::{
    ConnectionGraph, CreditKey, HintType, NodeKey, Path, PathFinder, PathNode, PathfindingConfig,
    TopRanked, derive_hint,
};
use fixtures::*;

fn reference_path(cast: &TestCast) -> Path {
    let graph = ConnectionGraph::new(&cast.snapshot, all_credits());
    let finder = PathFinder::new(&graph, PathfindingConfig::new(4, 15, 40), &TopRanked);
    finder.find(ALICE, CAROL).unwrap().path.unwrap()
}

#[test]
fn test_hint_names_kind_and_initial_of_next_title() {
    let cast = TestCast::create();
    let reference = reference_path(&cast);

    let hint = derive_hint(&[NodeKey::Actor(ALICE)], &reference);

    assert_eq!(hint.hinted_type, HintType::Media);
    assert!(hint.message.contains("movie"));
    assert!(hint.message.contains("\"M\""));
    assert!(!hint.message.contains("Midnight Run"));
}

#[test]
fn test_hint_after_title_points_to_performer() {
    let cast = TestCast::create();
    let reference = reference_path(&cast);
    let player = [
        NodeKey::Actor(ALICE),
        NodeKey::Media(CreditKey::movie(MIDNIGHT_RUN)),
    ];

    let hint = derive_hint(&player, &reference);

    assert_eq!(hint.hinted_type, HintType::Actor);
    assert!(hint.message.contains("\"B\""));
}

#[test]
fn test_tv_titles_are_described_as_tv_shows() {
    let reference = Path::new(vec![
        PathNode::Actor {
            id: CAROL,
            name: "Carol Cho".to_string(),
            profile_path: None,
        },
        PathNode::Media {
            id: HARBOR_LIGHTS,
            kind: castpath_core::MediaKind::Tv,
            title: "harbor Lights".to_string(),
            poster_path: None,
        },
        PathNode::Actor {
            id: ERIN,
            name: "Erin Ellis".to_string(),
            profile_path: None,
        },
    ]);

    let hint = derive_hint(&[NodeKey::Actor(CAROL)], &reference);

    assert_eq!(hint.hinted_type, HintType::Media);
    assert!(hint.message.contains("TV show"));
    assert!(hint.message.contains("\"H\""));
}

#[test]
fn test_diverged_player_gets_general_hint() {
    let cast = TestCast::create();
    let reference = reference_path(&cast);
    let player = [
        NodeKey::Actor(ALICE),
        NodeKey::Media(CreditKey::movie(QUIET_HARBOR)),
    ];

    let hint = derive_hint(&player, &reference);

    assert_eq!(hint.hinted_type, HintType::General);
}

#[test]
fn test_rejoining_reference_route_resumes_specific_hints() {
    let cast = TestCast::create();
    let reference = reference_path(&cast);
    let player = [
        NodeKey::Actor(ALICE),
        NodeKey::Media(CreditKey::movie(QUIET_HARBOR)),
        NodeKey::Actor(BOB),
    ];

    let hint = derive_hint(&player, &reference);

    assert_eq!(hint.hinted_type, HintType::Media);
    assert!(hint.message.contains("\"N\""));
}

#[test]
fn test_empty_and_finished_paths_get_general_hints() {
    let cast = TestCast::create();
    let reference = reference_path(&cast);

    assert_eq!(derive_hint(&[], &reference).hinted_type, HintType::General);
    assert_eq!(
        derive_hint(&[NodeKey::Actor(CAROL)], &reference).hinted_type,
        HintType::General
    );
    assert_eq!(
        derive_hint(&[NodeKey::Actor(ALICE)], &Path::default()).hinted_type,
        HintType::General
    );
}

#[test]
fn test_initial_skips_leading_punctuation() {
    let reference = Path::new(vec![
        PathNode::Actor {
            id: ALICE,
            name: "Alice Archer".to_string(),
            profile_path: None,
        },
        PathNode::Media {
            id: MIDNIGHT_RUN,
            kind: castpath_core::MediaKind::Movie,
            title: "(500) Days of Summer".to_string(),
            poster_path: None,
        },
        PathNode::Actor {
            id: BOB,
            name: "'bob Baker".to_string(),
            profile_path: None,
        },
    ]);

    let title_hint = derive_hint(&[NodeKey::Actor(ALICE)], &reference);
    let name_hint = derive_hint(
        &[NodeKey::Actor(ALICE), NodeKey::Media(CreditKey::movie(MIDNIGHT_RUN))],
        &reference,
    );

    assert!(title_hint.message.contains("\"5\""));
    assert!(name_hint.message.contains("\"B\""));
}

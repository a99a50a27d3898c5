#![allow(dead_code)]

use castpath_core::{
    CreditFilterOptions, DifficultyProfile, MediaCredit, MediaKind, Person, PopularityBand,
    SelectionConfig, Snapshot, snapshot::snapshot_from_people,
};

pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CAROL: u64 = 3;
pub const DAVE: u64 = 4;
pub const ERIN: u64 = 5;

pub const MIDNIGHT_RUN: u64 = 101;
pub const NIGHT_SHIFT: u64 = 102;
pub const LONE_PEAK: u64 = 103;
pub const QUIET_HARBOR: u64 = 104;
pub const HARBOR_LIGHTS: u64 = 201;
pub const TONIGHT_SHOW: u64 = 202;

pub fn movie(id: u64, title: &str, popularity: f32) -> MediaCredit {
    let mut credit = MediaCredit::new(id, title, MediaKind::Movie, popularity);
    credit.character = "Lead".to_string();
    credit
}

pub fn tv(id: u64, title: &str, popularity: f32) -> MediaCredit {
    let mut credit = MediaCredit::new(id, title, MediaKind::Tv, popularity);
    credit.character = "Lead".to_string();
    credit
}

pub fn person(id: u64, name: &str, popularity: f32, credits: Vec<MediaCredit>) -> Person {
    let mut person = Person::new(id, name, popularity);
    person.profile_path = Some(format!("/profiles/{id}.jpg"));
    person.regions = vec!["US".to_string()];
    for credit in credits {
        match credit.kind {
            MediaKind::Movie => person.movie_credits.push(credit),
            MediaKind::Tv => person.tv_credits.push(credit),
        }
    }
    person
}

/// Alice -[Midnight Run]- Bob -[Night Shift]- Carol -[Harbor Lights (tv)]- Erin
///
/// Alice and Erin also share a talk show, which never counts as a
/// connection. Alice has a second, less popular movie with Bob. Dave only
/// appears in a movie nobody else is in.
pub struct TestCast {
    pub snapshot: Snapshot,
}

impl TestCast {
    pub fn create() -> Self {
        let snapshot = snapshot_from_people(vec![
            person(
                ALICE,
                "Alice Archer",
                90.0,
                vec![
                    movie(MIDNIGHT_RUN, "Midnight Run", 50.0),
                    movie(QUIET_HARBOR, "Quiet Harbor", 10.0),
                    tv(TONIGHT_SHOW, "The Tonight Show", 80.0),
                ],
            ),
            person(
                BOB,
                "Bob Baker",
                70.0,
                vec![
                    movie(MIDNIGHT_RUN, "Midnight Run", 50.0),
                    movie(NIGHT_SHIFT, "Night Shift", 30.0),
                    movie(QUIET_HARBOR, "Quiet Harbor", 10.0),
                ],
            ),
            person(CAROL, "Carol Cho", 50.0, vec![
                movie(NIGHT_SHIFT, "Night Shift", 30.0),
                tv(HARBOR_LIGHTS, "Harbor Lights", 20.0),
            ]),
            person(DAVE, "Dave Diaz", 40.0, vec![movie(LONE_PEAK, "Lone Peak", 5.0)]),
            person(ERIN, "Erin Ellis", 30.0, vec![
                tv(HARBOR_LIGHTS, "Harbor Lights", 20.0),
                tv(TONIGHT_SHOW, "The Tonight Show", 80.0),
            ]),
        ]);

        Self { snapshot }
    }
}

pub fn all_credits() -> CreditFilterOptions {
    CreditFilterOptions::new(true, false)
}

pub fn movies_only() -> CreditFilterOptions {
    CreditFilterOptions::new(false, false)
}

/// Profile that admits every performer with at least one credit.
pub fn open_profile(min_connections: usize, max_connections: usize, max_depth: usize) -> DifficultyProfile {
    DifficultyProfile {
        max_depth,
        min_connections,
        max_connections,
        include_tv: true,
        exclude_franchise: false,
        min_credits: 1,
        target_band: PopularityBand::new(0.0, 1.0),
    }
}

/// Selection config that draws every performer as a start and probes every
/// pair it can.
pub fn exhaustive_selection(seed: u64) -> SelectionConfig {
    SelectionConfig {
        start_band_fraction: 1.0,
        max_start_band: 100,
        start_candidates: 100,
        targets_per_start: 100,
        attempt_budget: 1_000,
        ..SelectionConfig::default()
    }
    .with_seed(seed)
}

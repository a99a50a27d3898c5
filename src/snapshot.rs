use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

pub type PersonId = u64;
pub type CreditId = u64;

/// Region tag that matches every performer in a snapshot.
pub const GLOBAL_REGION: &str = "GLOBAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// Human wording used in hints.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "TV show",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaCredit {
    pub id: CreditId,
    pub title: String,
    #[serde(default)]
    pub kind: MediaKind,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, alias = "is_mcu")]
    pub is_franchise: bool,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub credit_type: String,
}

impl MediaCredit {
    pub fn new(id: CreditId, title: &str, kind: MediaKind, popularity: f32) -> Self {
        Self {
            id,
            title: title.to_string(),
            kind,
            popularity,
            release_date: None,
            poster_path: None,
            is_franchise: false,
            character: String::new(),
            credit_type: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub movie_credits: Vec<MediaCredit>,
    #[serde(default)]
    pub tv_credits: Vec<MediaCredit>,
}

impl Person {
    pub fn new(id: PersonId, name: &str, popularity: f32) -> Self {
        Self {
            id,
            name: name.to_string(),
            popularity,
            profile_path: None,
            regions: Vec::new(),
            movie_credits: Vec::new(),
            tv_credits: Vec::new(),
        }
    }

    /// Movie credits first, then tv credits, in stored order.
    pub fn credits(&self) -> impl Iterator<Item = &MediaCredit> {
        self.movie_credits.iter().chain(self.tv_credits.iter())
    }

    pub fn has_profile_image(&self) -> bool {
        self.profile_path.as_deref().is_some_and(|path| !path.trim().is_empty())
    }

    pub fn in_region(&self, region: &str) -> bool {
        region.eq_ignore_ascii_case(GLOBAL_REGION)
            || self.regions.iter().any(|tag| tag.eq_ignore_ascii_case(region))
    }
}

/// Materialized performer snapshot handed over by the data-loading layer.
pub type Snapshot = FxHashMap<PersonId, Person>;

pub fn snapshot_from_people(people: impl IntoIterator<Item = Person>) -> Snapshot {
    people.into_iter().map(|person| (person.id, person)).collect()
}

/// Boundary capability for whatever backs the performer data: remote
/// database, document store or a bundled file. The engine only ever sees
/// the resulting [`Snapshot`].
pub trait SnapshotProvider {
    type Error;

    fn load(&self, region: &str) -> Result<Snapshot, Self::Error>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotProvider {
    people: Vec<Person>,
}

impl InMemorySnapshotProvider {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }
}

impl SnapshotProvider for InMemorySnapshotProvider {
    type Error = Infallible;

    fn load(&self, region: &str) -> Result<Snapshot, Self::Error> {
        Ok(snapshot_from_people(
            self.people
                .iter()
                .filter(|person| person.in_region(region))
                .cloned(),
        ))
    }
}

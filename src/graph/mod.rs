pub mod sampler;

pub use sampler::{NeighborSampler, NeighborSampling, SeededRandom, TopRanked};

use crate::credit_filter::{CreditFilterOptions, is_substantive};
use crate::difficulty::DifficultyProfile;
use crate::pathfinding::NodeKey;
use crate::snapshot::{CreditId, MediaCredit, MediaKind, Person, PersonId, Snapshot};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Credit ids are only unique within a media kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CreditKey {
    pub kind: MediaKind,
    pub id: CreditId,
}

impl CreditKey {
    pub fn new(kind: MediaKind, id: CreditId) -> Self {
        Self { kind, id }
    }

    pub fn movie(id: CreditId) -> Self {
        Self::new(MediaKind::Movie, id)
    }

    pub fn tv(id: CreditId) -> Self {
        Self::new(MediaKind::Tv, id)
    }

    pub fn of(credit: &MediaCredit) -> Self {
        Self::new(credit.kind, credit.id)
    }
}

impl fmt::Display for CreditKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.id)
    }
}

/// Read-only bipartite view over a snapshot, built once per filter
/// configuration.
pub struct ConnectionGraph<'a> {
    snapshot: &'a Snapshot,
    options: CreditFilterOptions,
    credits_by_performer: FxHashMap<PersonId, Vec<&'a MediaCredit>>,
    cast_by_credit: FxHashMap<CreditKey, Vec<PersonId>>,
    credits: FxHashMap<CreditKey, &'a MediaCredit>,
}

impl<'a> ConnectionGraph<'a> {
    pub fn new(snapshot: &'a Snapshot, options: CreditFilterOptions) -> Self {
        let mut credits_by_performer = FxHashMap::default();
        let mut cast_by_credit: FxHashMap<CreditKey, Vec<PersonId>> = FxHashMap::default();
        let mut credits = FxHashMap::default();

        for (&person_id, person) in snapshot {
            let eligible = collect_eligible_credits(person, &options);

            for credit in &eligible {
                let key = CreditKey::of(credit);
                credits.entry(key).or_insert(*credit);
                cast_by_credit.entry(key).or_default().push(person_id);
            }
            credits_by_performer.insert(person_id, eligible);
        }

        for cast in cast_by_credit.values_mut() {
            sort_by_popularity(cast, snapshot);
        }

        Self {
            snapshot,
            options,
            credits_by_performer,
            cast_by_credit,
            credits,
        }
    }

    pub fn for_profile(snapshot: &'a Snapshot, profile: &DifficultyProfile) -> Self {
        Self::new(snapshot, profile.filter_options())
    }

    pub fn options(&self) -> &CreditFilterOptions {
        &self.options
    }

    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    pub fn performer_count(&self) -> usize {
        self.snapshot.len()
    }

    pub fn credit_count(&self) -> usize {
        self.credits.len()
    }

    pub fn person(&self, person_id: PersonId) -> Option<&'a Person> {
        self.snapshot.get(&person_id)
    }

    pub fn credit(&self, key: CreditKey) -> Option<&'a MediaCredit> {
        self.credits.get(&key).copied()
    }

    pub fn contains(&self, node: NodeKey) -> bool {
        match node {
            NodeKey::Actor(person_id) => self.snapshot.contains_key(&person_id),
            NodeKey::Media(key) => self.credits.contains_key(&key),
        }
    }

    pub fn eligible_credit_count(&self, person_id: PersonId) -> usize {
        self.credits_by_performer
            .get(&person_id)
            .map_or(0, |credits| credits.len())
    }

    /// Eligible credits of a performer, most popular first.
    pub fn neighbors_of_person(&self, person_id: PersonId, cap: Option<usize>) -> Vec<&'a MediaCredit> {
        let Some(credits) = self.credits_by_performer.get(&person_id) else {
            return vec![];
        };
        let limit = cap.unwrap_or(credits.len());
        credits.iter().take(limit).copied().collect()
    }

    /// Performers holding a credit, ranked by popularity.
    pub fn ranked_cast(&self, key: CreditKey) -> &[PersonId] {
        self.cast_by_credit
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Performers holding a credit; capped through the sampler when `cap`
    /// is set.
    pub fn neighbors_of_credit<S: NeighborSampler>(
        &self,
        key: CreditKey,
        cap: Option<usize>,
        sampler: &S,
    ) -> Vec<PersonId> {
        let cast = self.ranked_cast(key);
        match cap {
            Some(cap) => sampler.sample(&key, cast, cap),
            None => cast.to_vec(),
        }
    }

    /// Whether two nodes share an edge: a performer and a credit they hold.
    pub fn connects(&self, a: NodeKey, b: NodeKey) -> bool {
        let (person_id, key) = match (a, b) {
            (NodeKey::Actor(person_id), NodeKey::Media(key))
            | (NodeKey::Media(key), NodeKey::Actor(person_id)) => (person_id, key),
            _ => return false,
        };

        self.credits_by_performer
            .get(&person_id)
            .is_some_and(|credits| credits.iter().any(|credit| CreditKey::of(credit) == key))
    }
}

fn collect_eligible_credits<'a>(person: &'a Person, options: &CreditFilterOptions) -> Vec<&'a MediaCredit> {
    let mut seen = FxHashSet::default();
    let mut eligible: Vec<&MediaCredit> = person
        .credits()
        .filter(|credit| is_substantive(credit, options))
        .filter(|credit| seen.insert(CreditKey::of(credit)))
        .collect();

    eligible.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| CreditKey::of(a).cmp(&CreditKey::of(b)))
    });
    eligible
}

fn sort_by_popularity(cast: &mut [PersonId], snapshot: &Snapshot) {
    let popularity = |id: &PersonId| snapshot.get(id).map_or(0.0, |person| person.popularity);

    cast.sort_by(|a, b| {
        popularity(b)
            .partial_cmp(&popularity(a))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(b))
    });
}

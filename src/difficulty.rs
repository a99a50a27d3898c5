use crate::credit_filter::CreditFilterOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                max_depth: 6,
                min_connections: 1,
                max_connections: 3,
                include_tv: false,
                exclude_franchise: false,
                min_credits: 10,
                target_band: PopularityBand::new(0.0, 0.3),
            },
            Difficulty::Normal => DifficultyProfile {
                max_depth: 10,
                min_connections: 3,
                max_connections: 5,
                include_tv: true,
                exclude_franchise: false,
                min_credits: 5,
                target_band: PopularityBand::new(0.15, 0.6),
            },
            Difficulty::Hard => DifficultyProfile {
                max_depth: 16,
                min_connections: 5,
                max_connections: 8,
                include_tv: true,
                exclude_franchise: false,
                min_credits: 3,
                target_band: PopularityBand::new(0.4, 1.0),
            },
        }
    }
}

impl From<&str> for Difficulty {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Normal,
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        Difficulty::from(value.as_str())
    }
}

/// Slice of a popularity-ranked pool, as fractions of its length.
/// `0.0` is the most popular end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopularityBand {
    pub from: f64,
    pub to: f64,
}

impl PopularityBand {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Index range of this band within a pool of `len` entries.
    /// Never empty for a non-empty pool.
    pub fn index_range(&self, len: usize) -> std::ops::Range<usize> {
        if len == 0 {
            return 0..0;
        }
        let from = self.from.clamp(0.0, 1.0);
        let to = self.to.clamp(from, 1.0);

        let start = ((len as f64) * from).floor() as usize;
        let end = ((len as f64) * to).ceil() as usize;
        let start = start.min(len - 1);
        let end = end.clamp(start + 1, len);
        start..end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// BFS cutoff in graph edges; `k` connections need depth `2k`.
    pub max_depth: usize,
    pub min_connections: usize,
    pub max_connections: usize,
    pub include_tv: bool,
    pub exclude_franchise: bool,
    /// Eligible credits a performer needs to be drawn as start or target.
    pub min_credits: usize,
    pub target_band: PopularityBand,
}

impl DifficultyProfile {
    pub fn with_franchise_excluded(mut self, exclude_franchise: bool) -> Self {
        self.exclude_franchise = exclude_franchise;
        self
    }

    pub fn filter_options(&self) -> CreditFilterOptions {
        CreditFilterOptions::new(self.include_tv, self.exclude_franchise)
    }

    pub fn accepts(&self, connection_count: usize) -> bool {
        (self.min_connections..=self.max_connections).contains(&connection_count)
    }

    pub fn midpoint(&self) -> f64 {
        (self.min_connections + self.max_connections) as f64 / 2.0
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Difficulty::default().profile()
    }
}

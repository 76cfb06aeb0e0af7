//! Seeding configuration.

use std::path::PathBuf;

/// Where fare files live and whether to rebuild them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareDataConfig {
    /// Directory holding `bus_costs.csv` and `train_costs.csv`
    pub dir: PathBuf,

    /// Discard existing files and generate fresh data at startup
    pub reseed: bool,
}

impl FareDataConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            reseed: false,
        }
    }

    /// Force regeneration even if the files are present.
    pub fn with_reseed(mut self, reseed: bool) -> Self {
        self.reseed = reseed;
        self
    }
}

impl Default for FareDataConfig {
    fn default() -> Self {
        Self::new("data")
    }
}

/// Parameters for the sample data generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// RNG seed. The same seed always produces the same fares.
    pub seed: u64,

    /// Number of fares generated for each mode
    pub rows_per_mode: usize,
}

impl SeedConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rows_per_mode: 1000,
        }
    }

    pub fn with_rows_per_mode(mut self, rows: usize) -> Self {
        self.rows_per_mode = rows;
        self
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

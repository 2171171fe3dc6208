//! Generation parameters.

use crate::{GenError, GenResult, Tier};

/// Upper bound on rows per tier.
pub const MAX_ROWS: usize = 500;

/// Seed and per-tier row counts for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    pub seed:           u64,
    pub rows_no_pii:    usize,
    pub rows_light_pii: usize,
    pub rows_heavy_pii: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            seed:           42,
            rows_no_pii:    Tier::NoPii.default_rows(),
            rows_light_pii: Tier::LightPii.default_rows(),
            rows_heavy_pii: Tier::HeavyPii.default_rows(),
        }
    }
}

impl GenConfig {
    pub fn rows(&self, tier: Tier) -> usize {
        match tier {
            Tier::NoPii    => self.rows_no_pii,
            Tier::LightPii => self.rows_light_pii,
            Tier::HeavyPii => self.rows_heavy_pii,
        }
    }

    /// Check every tier's row count against [`MAX_ROWS`].
    ///
    /// Zero is accepted and produces an empty set.
    pub fn validate(&self) -> GenResult<()> {
        for tier in Tier::ALL {
            let rows = self.rows(tier);
            if rows > MAX_ROWS {
                return Err(GenError::RowCount { tier, rows, max: MAX_ROWS });
            }
        }
        Ok(())
    }
}

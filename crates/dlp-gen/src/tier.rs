//! Sensitivity tiers.
//!
//! Each tier fixes a schema and a default row count.  Light-PII and
//! heavy-PII share the sensitive schema; they differ in volume, which is what
//! threshold-based detection rules key on.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::{GenError, SchemaKind};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    NoPii,
    LightPii,
    HeavyPii,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::NoPii, Tier::LightPii, Tier::HeavyPii];

    /// Directory and file-name prefix, e.g. `light_pii`.
    pub fn slug(self) -> &'static str {
        match self {
            Tier::NoPii    => "no_pii",
            Tier::LightPii => "light_pii",
            Tier::HeavyPii => "heavy_pii",
        }
    }

    /// Human-readable label used in titles and captions.
    pub fn label(self) -> &'static str {
        match self {
            Tier::NoPii    => "No PII",
            Tier::LightPii => "Light PII",
            Tier::HeavyPii => "Heavy PII",
        }
    }

    pub fn schema_kind(self) -> SchemaKind {
        match self {
            Tier::NoPii => SchemaKind::NonSensitive,
            Tier::LightPii | Tier::HeavyPii => SchemaKind::Sensitive,
        }
    }

    pub fn default_rows(self) -> usize {
        match self {
            Tier::NoPii    => 100,
            Tier::LightPii => 10,
            Tier::HeavyPii => 250,
        }
    }

    /// Stream number used to derive this tier's RNG from the root seed.
    pub(crate) fn stream(self) -> u64 {
        match self {
            Tier::NoPii    => 1,
            Tier::LightPii => 2,
            Tier::HeavyPii => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Tier {
    type Err = GenError;

    /// Accepts the slug (`no_pii`) or its dashed form (`no-pii`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Tier::ALL
            .into_iter()
            .find(|t| t.slug() == normalized)
            .ok_or_else(|| GenError::UnknownTier(s.to_owned()))
    }
}

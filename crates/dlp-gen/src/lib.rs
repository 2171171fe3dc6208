//! `dlp-gen`: the record generator collaborator.
//!
//! Produces schema-uniform [`RecordSet`]s of fake data for each sensitivity
//! [`Tier`].  The writers in `dlp-output` never look inside the values; this
//! crate only has to guarantee that every record of a set shares one schema.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dlp_gen::{GenConfig, Tier, generate_tier};
//!
//! let config = GenConfig::default();
//! config.validate()?;
//! let records = generate_tier(Tier::HeavyPii, &config)?;
//! assert_eq!(records.len(), config.rows(Tier::HeavyPii));
//! ```

pub mod config;
pub mod error;
pub mod fake;
pub mod rng;
pub mod schema;
pub mod tier;

#[cfg(test)]
mod tests;

use dlp_core::RecordSet;

pub use config::{GenConfig, MAX_ROWS};
pub use error::{GenError, GenResult};
pub use rng::FakeRng;
pub use schema::{SchemaKind, produce};
pub use tier::Tier;

/// Generate the record set for `tier` using `config`'s seed and row count.
///
/// Each tier draws from its own RNG stream, so the output of one tier does
/// not depend on the row counts of the others.
pub fn generate_tier(tier: Tier, config: &GenConfig) -> GenResult<RecordSet> {
    let rows = config.rows(tier);
    if rows > MAX_ROWS {
        return Err(GenError::RowCount { tier, rows, max: MAX_ROWS });
    }
    let mut rng = FakeRng::stream(config.seed, tier.stream());
    let set = produce(tier.schema_kind(), rows, &mut rng)?;
    tracing::debug!(%tier, rows = set.len(), "generated record set");
    Ok(set)
}

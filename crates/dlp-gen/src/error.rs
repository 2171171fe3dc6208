use thiserror::Error;

use crate::Tier;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("tier {tier}: {rows} rows requested, at most {max} allowed")]
    RowCount { tier: Tier, rows: usize, max: usize },

    #[error("unknown tier {0:?} (expected no_pii, light_pii or heavy_pii)")]
    UnknownTier(String),

    #[error(transparent)]
    Core(#[from] dlp_core::CoreError),
}

pub type GenResult<T> = Result<T, GenError>;

//! Run configuration: `dlp-fixtures.toml` < CLI flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use dlp_gen::{GenConfig, Tier};

/// Config file read when `--config` is not given.  Its absence is not an error.
pub const DEFAULT_CONFIG: &str = "dlp-fixtures.toml";

// ── Config file (TOML) ────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub out:            Option<PathBuf>,
    pub seed:           Option<u64>,
    pub rows_no_pii:    Option<usize>,
    pub rows_light_pii: Option<usize>,
    pub rows_heavy_pii: Option<usize>,
    pub tiers:          Option<Vec<Tier>>,
    pub xlsx:           Option<bool>,
    pub docx:           Option<bool>,
    pub stamp:          Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("bad config {}", path.display()))
    }
}

// ── CLI args ──────────────────────────────────────────────────────────────────

#[derive(Parser, Debug, Default)]
#[command(name = "dlp-fixtures", about = "Generate fake PII fixture files for DLP testing")]
pub struct Cli {
    /// Path to a TOML config file (default: ./dlp-fixtures.toml if present)
    #[arg(long, env = "DLP_FIXTURES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output root; each tier gets its own sub-directory
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Seed for the fake-data RNG
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rows in the no-PII tier
    #[arg(long)]
    pub rows_no_pii: Option<usize>,

    /// Rows in the light-PII tier
    #[arg(long)]
    pub rows_light_pii: Option<usize>,

    /// Rows in the heavy-PII tier
    #[arg(long)]
    pub rows_heavy_pii: Option<usize>,

    /// Only generate these tiers (no_pii, light_pii, heavy_pii); repeatable
    #[arg(long = "tier")]
    pub tiers: Vec<Tier>,

    /// Skip the spreadsheet writer and leave a README_XLSX.txt instead
    #[arg(long)]
    pub no_xlsx: bool,

    /// Skip the document writer and leave a README_DOCX.txt instead
    #[arg(long)]
    pub no_docx: bool,

    /// Use bare tier names instead of timestamped file names
    #[arg(long)]
    pub no_stamp: bool,
}

// ── Effective (merged config) ─────────────────────────────────────────────────

/// Final settings after merging the config file under the CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effective {
    pub out:        PathBuf,
    pub generation: GenConfig,
    pub tiers:      Vec<Tier>,
    pub xlsx:       bool,
    pub docx:       bool,
    pub stamp:      bool,
}

impl Effective {
    pub fn new(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None if Path::new(DEFAULT_CONFIG).exists() => FileConfig::load(Path::new(DEFAULT_CONFIG))?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    pub fn merge(cli: &Cli, file: FileConfig) -> Self {
        let defaults = GenConfig::default();
        let generation = GenConfig {
            seed:           cli.seed.or(file.seed).unwrap_or(defaults.seed),
            rows_no_pii:    cli.rows_no_pii.or(file.rows_no_pii).unwrap_or(defaults.rows_no_pii),
            rows_light_pii: cli.rows_light_pii.or(file.rows_light_pii).unwrap_or(defaults.rows_light_pii),
            rows_heavy_pii: cli.rows_heavy_pii.or(file.rows_heavy_pii).unwrap_or(defaults.rows_heavy_pii),
        };

        let mut tiers = if cli.tiers.is_empty() {
            file.tiers.unwrap_or_else(|| Tier::ALL.to_vec())
        } else {
            cli.tiers.clone()
        };
        let mut seen = Vec::with_capacity(tiers.len());
        tiers.retain(|t| {
            let first = !seen.contains(t);
            seen.push(*t);
            first
        });

        Effective {
            out: cli.out.clone().or(file.out).unwrap_or_else(|| PathBuf::from("output")),
            generation,
            tiers,
            xlsx: !cli.no_xlsx && file.xlsx.unwrap_or(true),
            docx: !cli.no_docx && file.docx.unwrap_or(true),
            stamp: !cli.no_stamp && file.stamp.unwrap_or(true),
        }
    }
}

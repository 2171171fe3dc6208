//! dlp-fixtures: writes fake-PII fixture sets for exercising DLP rules.
//!
//! Three tiers (no PII, light PII, heavy PII) are generated from one seed and
//! each is written as CSV, JSON, XML, HTML and plain text, plus XLSX and DOCX
//! when those engines are compiled in and not disabled.  A skipped optional
//! format leaves a `README_<FMT>.txt` explaining how to enable it.
//!
//! ```text
//! cargo run --release -p dlp-fixtures -- --out fixtures --seed 7 --tier heavy_pii
//! RUST_LOG=debug cargo run -p dlp-fixtures -- --no-docx
//! ```

mod config;
mod layout;


use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dlp_gen::generate_tier;
use dlp_output::{BuildProbe, Capability, OverrideProbe, TierDriver, TierLabels};

use config::{Cli, Effective};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let effective = Effective::new(&cli)?;
    effective.generation.validate()?;
    tracing::debug!(?effective, "effective configuration");

    let mut probe = OverrideProbe::new(BuildProbe);
    if !effective.xlsx {
        probe = probe.disable(Capability::Spreadsheet);
    }
    if !effective.docx {
        probe = probe.disable(Capability::Document);
    }

    println!("=== dlp-fixtures ===");
    println!(
        "Out: {}  |  Seed: {}  |  Tiers: {}",
        effective.out.display(),
        effective.generation.seed,
        effective.tiers.iter().map(|t| t.slug()).collect::<Vec<_>>().join(", "),
    );
    println!();

    let stamp = effective.stamp.then(layout::timestamp);
    let t0 = Instant::now();
    let mut failed = 0usize;

    for &tier in &effective.tiers {
        let dir = layout::tier_dir(&effective.out, tier);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("cannot create {}", dir.display()))?;

        let records = generate_tier(tier, &effective.generation)?;
        let base = layout::base_name(tier, stamp.as_deref());
        let driver = TierDriver::standard(&dir, base, &TierLabels::from_label(tier.label()), &probe);
        let report = driver.run(&records);

        println!("{} ({} rows) -> {}", tier.label(), records.len(), dir.display());
        for path in report.written() {
            println!("  wrote   {}", path.display());
        }
        for path in &report.placeholders {
            println!("  skipped {}", path.display());
        }
        for (format, err) in report.failures() {
            println!("  FAILED  {format}: {err}");
        }
        for (capability, err) in &report.fallback_errors {
            println!("  FAILED  {capability} placeholder: {err}");
        }
        if !report.is_success() {
            failed += 1;
        }
    }

    println!();
    println!("Done in {:.2?}", t0.elapsed());

    if failed > 0 {
        bail!("{failed} tier(s) had write failures");
    }
    Ok(())
}

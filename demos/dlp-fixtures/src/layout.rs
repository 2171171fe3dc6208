//! Folder layout and file-name stamping.
//!
//! ```text
//! <out>/no_pii/no_pii_20261019_142501.{csv,json,xml,html,txt,xlsx,docx}
//! <out>/light_pii/light_pii_20261019_142501.*
//! <out>/heavy_pii/heavy_pii_20261019_142501.*
//! ```

use std::path::{Path, PathBuf};

use dlp_gen::Tier;

/// `<out>/<tier slug>`.
pub fn tier_dir(out: &Path, tier: Tier) -> PathBuf {
    out.join(tier.slug())
}

/// `<tier slug>_<stamp>`, or the bare slug when unstamped.
pub fn base_name(tier: Tier, stamp: Option<&str>) -> String {
    match stamp {
        Some(stamp) => format!("{}_{stamp}", tier.slug()),
        None => tier.slug().to_owned(),
    }
}

/// Local time as `YYYYmmdd_HHMMSS`; one stamp is shared by every tier of a run.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

//! Generator configuration.
//!
//! This module defines the configuration structure used to parameterize a
//! generation run. It provides:
//! 1. **Defaults:** Baseline output location and oracle tininess semantics.
//! 2. **Deserialization:** Embedding tools can supply the structure as JSON; the binary uses `GenConfig::default()`.
//!
//! The suite list itself is not configuration: which suites exist, their
//! operand lists, and their policies are fixed in the driver at build time.

use std::path::PathBuf;

use serde::Deserialize;

use crate::oracle::rounding_modes::TininessMode;

/// Default configuration constants for the generator.
mod defaults {
    /// Directory the suite artifacts are written into.
    pub const OUT_DIR: &str = "work";
}

/// Run-level settings for artifact generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenConfig {
    /// Output directory; created if absent, one `<suite>.tv` per suite.
    #[serde(default = "GenConfig::default_out_dir")]
    pub out_dir: PathBuf,

    /// Tininess-detection semantics configured into the oracle session.
    #[serde(default)]
    pub tininess: TininessMode,
}

impl GenConfig {
    /// Returns the default output directory.
    fn default_out_dir() -> PathBuf {
        PathBuf::from(defaults::OUT_DIR)
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            out_dir: Self::default_out_dir(),
            tininess: TininessMode::default(),
        }
    }
}

// ⚙️ Demo Configuration - Settings as data
// Every field has a default; a file only needs the settings it overrides

use crate::car::{Clock, FixedClock, SystemClock};
use crate::word_count::CountPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Policy used by the word-count sample
    pub word_policy: CountPolicy,

    /// Pin "now" to this year; `None` reads the system clock
    pub reference_year: Option<i32>,
}

impl DemoConfig {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: DemoConfig = serde_json::from_str(&content)
            .context("Failed to parse config JSON")?;

        Ok(config)
    }

    /// Clock matching `reference_year`
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.reference_year {
            Some(year) => Box::new(FixedClock(year)),
            None => Box::new(SystemClock),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

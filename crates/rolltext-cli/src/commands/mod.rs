pub mod config;
pub mod demo;
pub mod diff;
pub mod format;
pub mod path;

use anyhow::Result;
use rolltext_core::{AlphabetSet, AppConfig};

/// Alphabets from the command line, or the configured ones when none given
pub(crate) fn alphabet_set(config: &AppConfig, lists: &[String]) -> Result<AlphabetSet> {
    if lists.is_empty() {
        Ok(config.alphabets.build()?)
    } else {
        Ok(AlphabetSet::new(lists)?)
    }
}

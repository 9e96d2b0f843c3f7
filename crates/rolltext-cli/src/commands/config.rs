use std::path::Path;

use anyhow::{bail, Result};

use rolltext_core::AppConfig;

pub fn run(config: &AppConfig, path: &Path, init: bool, force: bool) -> Result<()> {
    if init {
        if path.exists() && !force {
            bail!(
                "{} already exists; pass --force to overwrite it",
                path.display()
            );
        }
        AppConfig::default().save_to(path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    println!("# {}", path.display());
    if !path.exists() {
        println!("# (file not found, showing defaults)");
    }
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

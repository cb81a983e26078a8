use anyhow::{bail, Result};

use crate::cli::Cli;
use crate::config::Config;
use crate::lockfile::{Lockfile, LOCKFILE_NAME};

pub fn run(cli: &Cli, old_key: &str, new_key: &str) -> Result<()> {
    let config_path = &cli.config;
    let lockfile_path = config_path
        .parent()
        .unwrap_or(std::path::Path::new("."))
        .join(LOCKFILE_NAME);

    let mut config = Config::load(config_path)?;
    let mut lockfile = Lockfile::load(&lockfile_path)?;

    rename_icon(&mut config, &mut lockfile, old_key, new_key)?;

    config.save(config_path)?;
    if lockfile_path.exists() || !lockfile.icons.is_empty() {
        lockfile.save(&lockfile_path)?;
    }

    println!("Renamed icon '{old_key}' -> '{new_key}'");
    Ok(())
}

/// Moves the config entry and its lock entry (if any) from `old_key` to `new_key`.
pub fn rename_icon(
    config: &mut Config,
    lockfile: &mut Lockfile,
    old_key: &str,
    new_key: &str,
) -> Result<()> {
    if old_key == new_key {
        bail!("Old and new key are the same: '{old_key}'");
    }
    if !config.icons.contains_key(old_key) {
        bail!("Icon '{old_key}' not found in config");
    }
    if config.icons.contains_key(new_key) {
        bail!("Icon '{new_key}' already exists in config");
    }
    if lockfile.icons.contains_key(new_key) {
        bail!("Icon '{new_key}' already exists in lockfile");
    }

    if let Some(entry) = config.icons.remove(old_key) {
        config.icons.insert(new_key.to_string(), entry);
    }
    if let Some(entry) = lockfile.icons.remove(old_key) {
        lockfile.icons.insert(new_key.to_string(), entry);
    }

    Ok(())
}

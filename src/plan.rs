use std::fmt;
use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::icon::{hash_bytes, hash_file};
use crate::lockfile::{IconLock, Lockfile};

#[derive(Debug)]
pub struct BuildPlan {
    pub icons: Vec<IconAction>,
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct IconAction {
    pub name: String,
    pub action: Action,
}

#[derive(Debug, PartialEq)]
pub enum Action {
    Create,
    Update { reasons: Vec<StaleReason> },
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    SourceChanged,
    SettingsChanged,
    OutputMissing,
    OutputModified,
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaleReason::SourceChanged => write!(f, "source changed"),
            StaleReason::SettingsChanged => write!(f, "settings changed"),
            StaleReason::OutputMissing => write!(f, "output missing"),
            StaleReason::OutputModified => write!(f, "output modified"),
        }
    }
}

impl BuildPlan {
    pub fn has_changes(&self) -> bool {
        self.icons
            .iter()
            .any(|a| !matches!(a.action, Action::Skip))
    }

    pub fn summary(&self) -> String {
        let mut creates = 0;
        let mut updates = 0;
        let mut skips = 0;

        for action in &self.icons {
            match &action.action {
                Action::Create => creates += 1,
                Action::Update { .. } => updates += 1,
                Action::Skip => skips += 1,
            }
        }

        format!(
            "{} to create, {} to update, {} unchanged",
            creates, updates, skips
        )
    }
}

/// Hashes describing an icon's current inputs.
pub struct IconHashes {
    pub source_hash: String,
    pub settings_hash: String,
}

pub fn current_hashes(config: &Config, name: &str, config_dir: &Path) -> Result<IconHashes> {
    let icon = config
        .icons
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Icon '{}' is not in the config", name))?;
    let settings = icon.overrides.apply(&config.defaults);
    let source_path = config_dir.join(&icon.source);
    let source_hash = hash_file(&source_path)?
        .ok_or_else(|| anyhow::anyhow!("Source not found: {}", source_path.display()))?;

    Ok(IconHashes {
        source_hash,
        settings_hash: hash_bytes(settings.to_canonical_toml().as_bytes()),
    })
}

pub fn build_plan(config: &Config, lockfile: &Lockfile, config_dir: &Path) -> Result<BuildPlan> {
    let mut warnings = Vec::new();

    for key in lockfile.icons.keys() {
        if !config.icons.contains_key(key) {
            warnings.push(format!(
                "Icon '{}' exists in lockfile but not in config (its output is left alone)",
                key
            ));
        }
    }

    let mut icons = Vec::new();
    for (name, icon) in &config.icons {
        let action = match lockfile.icons.get(name) {
            None => Action::Create,
            Some(lock) => {
                let current = current_hashes(config, name, config_dir)?;
                let output_hash = hash_file(&config_dir.join(&icon.output))?;
                let reasons = stale_reasons(lock, &current, output_hash.as_deref());
                if reasons.is_empty() {
                    Action::Skip
                } else {
                    Action::Update { reasons }
                }
            }
        };
        icons.push(IconAction {
            name: name.clone(),
            action,
        });
    }

    Ok(BuildPlan { icons, warnings })
}

fn stale_reasons(
    lock: &IconLock,
    current: &IconHashes,
    output_hash: Option<&str>,
) -> Vec<StaleReason> {
    let mut reasons = Vec::new();
    if lock.source_hash != current.source_hash {
        reasons.push(StaleReason::SourceChanged);
    }
    if lock.settings_hash != current.settings_hash {
        reasons.push(StaleReason::SettingsChanged);
    }
    match output_hash {
        None => reasons.push(StaleReason::OutputMissing),
        Some(hash) if hash != lock.output_hash => reasons.push(StaleReason::OutputModified),
        Some(_) => {}
    }
    reasons
}

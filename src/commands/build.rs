use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::icon;
use crate::lockfile::{IconLock, Lockfile, LOCKFILE_NAME};
use crate::plan::{build_plan, current_hashes, Action, IconAction};

pub fn run(cli: &Cli, dry_run: bool, only: Option<Vec<String>>, force: bool) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let config_dir = cli.config.parent().unwrap_or(Path::new("."));
    let lockfile_path = config_dir.join(LOCKFILE_NAME);
    let mut lockfile = Lockfile::load(&lockfile_path)?;
    lockfile.version = 1;

    if let Some(keys) = &only {
        for key in keys {
            if !config.icons.contains_key(key) {
                bail!("Unknown icon '{}' in --only", key);
            }
        }
    }

    let plan = build_plan(&config, &lockfile, config_dir)?;

    for warning in &plan.warnings {
        println!("{} {}", "!".yellow(), warning);
    }

    let selected = |name: &str| only.as_ref().is_none_or(|keys| keys.iter().any(|k| k == name));
    let pending: Vec<&IconAction> = plan
        .icons
        .iter()
        .filter(|a| selected(a.name.as_str()))
        .filter(|a| force || !matches!(a.action, Action::Skip))
        .collect();

    if pending.is_empty() {
        println!("{} Everything is up to date.", "✓".green());
        return Ok(());
    }

    for action in &pending {
        print_action(action);
    }
    println!("\n{}", plan.summary());

    if dry_run {
        println!("\n{} Dry run — nothing written.", "ℹ".blue());
        return Ok(());
    }

    let mut failed = 0;
    for action in &pending {
        print!("  Building '{}'...", action.name);
        match build_icon(&config, &action.name, config_dir) {
            Ok(lock) => {
                println!(" {}", "done".green());
                lockfile.icons.insert(action.name.clone(), lock);
            }
            Err(e) => {
                println!(" {}", "failed".red());
                println!("    {} {:#}", "✗".red(), e);
                failed += 1;
            }
        }
    }

    lockfile.save(&lockfile_path)?;

    if failed > 0 {
        bail!("{} of {} icons failed to build", failed, pending.len());
    }

    println!("{} Built {} icons.", "✓".green(), pending.len());
    Ok(())
}

/// Generates icon `name` and returns the lock entry describing the result.
pub fn build_icon(config: &Config, name: &str, config_dir: &Path) -> Result<IconLock> {
    let icon_cfg = config
        .icons
        .get(name)
        .with_context(|| format!("Icon '{}' is not in the config", name))?;
    let settings = icon_cfg.overrides.apply(&config.defaults);
    let hashes = current_hashes(config, name, config_dir)?;

    let source = config_dir.join(&icon_cfg.source);
    let output = config_dir.join(&icon_cfg.output);
    let bytes = icon::generate_file(&source, &output, &settings)
        .with_context(|| format!("Icon '{}'", name))?;

    Ok(IconLock {
        source_hash: hashes.source_hash,
        settings_hash: hashes.settings_hash,
        output_hash: icon::hash_bytes(&bytes),
    })
}

fn print_action(action: &IconAction) {
    match &action.action {
        Action::Create => println!("  {} {}", "+".green(), action.name),
        Action::Update { reasons } => {
            let reasons: Vec<String> = reasons.iter().map(|r| r.to_string()).collect();
            println!(
                "  {} {} ({})",
                "~".yellow(),
                action.name,
                reasons.join(", ")
            );
        }
        Action::Skip => println!("  {} {} (forced)", "=".blue(), action.name),
    }
}

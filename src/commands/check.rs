use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::lockfile::{Lockfile, LOCKFILE_NAME};
use crate::plan::{build_plan, Action};

pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    println!("{} Config is valid ({})", "✓".green(), cli.config.display());

    let config_dir = cli.config.parent().unwrap_or(Path::new("."));
    let lockfile_path = config_dir.join(LOCKFILE_NAME);

    if !lockfile_path.exists() {
        println!(
            "{} No lockfile found. Run `traystencil build` to create one.",
            "!".yellow()
        );
        return Ok(());
    }

    let lockfile = Lockfile::load(&lockfile_path)?;
    println!(
        "{} Lockfile is valid ({})",
        "✓".green(),
        lockfile_path.display()
    );

    let plan = build_plan(&config, &lockfile, config_dir)?;

    for warning in &plan.warnings {
        println!("{} {}", "!".yellow(), warning);
    }

    for icon in &plan.icons {
        match &icon.action {
            Action::Create => println!("{} '{}' has never been built", "✗".red(), icon.name),
            Action::Update { reasons } => {
                for reason in reasons {
                    println!("{} '{}': {}", "✗".red(), icon.name, reason);
                }
            }
            Action::Skip => {}
        }
    }

    if plan.has_changes() {
        println!(
            "{} Out of date: {}. Run `traystencil build`.",
            "!".yellow(),
            plan.summary()
        );
    } else {
        println!("{} Everything is up to date.", "✓".green());
    }

    Ok(())
}

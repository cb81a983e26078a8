use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::SettingsArgs;
use crate::icon;
use crate::settings::StencilConfig;

pub fn run(source: &Path, dest: &Path, settings: &SettingsArgs) -> Result<()> {
    let cfg = settings.apply(StencilConfig::default());

    icon::generate_file(source, dest, &cfg)
        .with_context(|| format!("Failed to generate stencil from {}", source.display()))?;

    println!(
        "{} {} -> {} ({})",
        "✓".green(),
        source.display(),
        dest.display(),
        cfg.size
    );
    Ok(())
}

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::SettingsArgs;
use crate::settings::StencilConfig;
use crate::stencil;

pub fn run(source: &Path, settings: &SettingsArgs) -> Result<()> {
    let cfg = settings.apply(StencilConfig::default());
    let img = image::open(source)
        .with_context(|| format!("Failed to open {}", source.display()))?
        .to_rgba8();

    let report = stencil::inspect(&img, &cfg);

    println!("{}", source.display().to_string().bold());
    println!("  size:        {}x{}", report.width, report.height);
    match &report.bounds {
        Some(bounds) => println!("  content:     {}", bounds),
        None => println!("  content:     {}", "none".yellow()),
    }
    println!("  opaque:      {}", report.opaque);
    println!("  transparent: {}", report.transparent);
    println!(
        "  thresholds:  brightness > {}, saturation < {}, alpha >= {}",
        cfg.white_brightness, cfg.white_saturation, cfg.alpha_threshold
    );

    if report.bounds.is_none() && cfg.crop_to_content {
        println!(
            "{} No content found. Generating with cropping enabled would fail.",
            "!".yellow()
        );
    }

    Ok(())
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::settings::{EdgeMode, ResizeFilter, StencilConfig, TargetSize};

#[derive(Parser)]
#[command(
    name = "traystencil",
    about = "Turn colour icons into monochrome menu-bar template stencils"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true, default_value = crate::config::CONFIG_NAME)]
    pub config: PathBuf,

    /// Log pipeline details to stderr (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new stencil.toml config file
    Init,

    /// Convert a single image, without a config file
    Generate {
        /// Source image
        source: PathBuf,
        /// Destination PNG
        dest: PathBuf,
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Regenerate every stale icon listed in the config
    Build {
        /// Show what would be regenerated without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Only build specific icons (comma-separated keys)
        #[arg(long, value_delimiter = ',')]
        only: Option<Vec<String>>,

        /// Regenerate icons even if they look up to date
        #[arg(long)]
        force: bool,
    },

    /// Check config validity and report stale icons
    Check,

    /// Show content bounds and pixel classification for an image
    Inspect {
        /// Source image
        source: PathBuf,
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Rename an icon key in config and lockfile
    Rename {
        /// Current key name
        old_key: String,
        /// New key name
        new_key: String,
    },
}

/// Command-line form of the stencil settings. Unset flags keep their defaults.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// Square output size in pixels
    #[arg(long, conflicts_with_all = ["width", "height"])]
    pub size: Option<u32>,

    /// Output width (with --height)
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Output height (with --width)
    #[arg(long, requires = "width")]
    pub height: Option<u32>,

    /// Keep the full canvas instead of cropping to the glyph
    #[arg(long)]
    pub no_crop: bool,

    /// Skip the circular mask
    #[arg(long)]
    pub no_mask: bool,

    /// Pixels shaved off the circular mask radius
    #[arg(long)]
    pub margin: Option<u32>,

    /// Brightness above which grey pixels are background (0-255)
    #[arg(long)]
    pub white_brightness: Option<u8>,

    /// Saturation below which bright pixels are background (0-255)
    #[arg(long)]
    pub white_saturation: Option<u8>,

    /// Source alpha below which pixels are transparent (0-255)
    #[arg(long)]
    pub alpha_threshold: Option<u8>,

    /// Edge handling for opaque pixels
    #[arg(long, value_enum)]
    pub edges: Option<EdgeMode>,

    /// Resampling filter
    #[arg(long, value_enum)]
    pub filter: Option<ResizeFilter>,

    /// Alpha-bleed transparent pixels before resizing
    #[arg(long)]
    pub bleed: bool,
}

impl SettingsArgs {
    pub fn apply(&self, base: StencilConfig) -> StencilConfig {
        let size = match (self.size, self.width, self.height) {
            (Some(side), _, _) => TargetSize::square(side),
            (None, Some(width), Some(height)) => TargetSize { width, height },
            _ => base.size,
        };

        StencilConfig {
            crop_to_content: base.crop_to_content && !self.no_crop,
            circular_mask: base.circular_mask && !self.no_mask,
            mask_margin: self.margin.unwrap_or(base.mask_margin),
            white_brightness: self.white_brightness.unwrap_or(base.white_brightness),
            white_saturation: self.white_saturation.unwrap_or(base.white_saturation),
            alpha_threshold: self.alpha_threshold.unwrap_or(base.alpha_threshold),
            edges: self.edges.unwrap_or(base.edges),
            filter: self.filter.unwrap_or(base.filter),
            bleed: base.bleed || self.bleed,
            size,
        }
    }
}

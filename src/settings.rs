//! Per-icon stencil settings and the overrides layered on top of them.

use clap::ValueEnum;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::error::{StencilError, StencilResult};

/// Immutable settings for one stencil run.
///
/// Every field has a default, so an empty TOML table is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StencilConfig {
    /// Crop to the bounding box of content pixels before resizing.
    pub crop_to_content: bool,

    /// Force pixels outside an inscribed circle to transparent.
    pub circular_mask: bool,

    /// Pixels shaved off the circle radius.
    pub mask_margin: u32,

    /// Brightness above which a low-saturation pixel counts as background.
    pub white_brightness: u8,

    /// Saturation below which a bright pixel counts as background.
    pub white_saturation: u8,

    /// Source alpha below this is always transparent.
    pub alpha_threshold: u8,

    pub edges: EdgeMode,

    pub filter: ResizeFilter,

    /// Alpha-bleed transparent pixels before resampling.
    pub bleed: bool,

    pub size: TargetSize,
}

impl Default for StencilConfig {
    fn default() -> Self {
        Self {
            crop_to_content: true,
            circular_mask: true,
            mask_margin: 1,
            white_brightness: 220,
            white_saturation: 30,
            alpha_threshold: 128,
            edges: EdgeMode::default(),
            filter: ResizeFilter::default(),
            bleed: false,
            size: TargetSize::default(),
        }
    }
}

impl StencilConfig {
    pub fn validate(&self) -> StencilResult<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(StencilError::invalid_config(format!(
                "target size must be non-zero, got {}",
                self.size
            )));
        }
        Ok(())
    }

    /// Canonical TOML form, used for change detection.
    pub fn to_canonical_toml(&self) -> String {
        // Every field is a scalar or a small table, serialization cannot fail.
        toml::to_string(self).unwrap_or_default()
    }
}

/// How opaque-classified pixels keep their alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Opaque pixels become alpha 255. Output is strictly two-state.
    #[default]
    Hard,
    /// Opaque pixels keep their resampled alpha for anti-aliased edges.
    Soft,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Output dimensions. In TOML either `size = 44` or `size = { width = 44, height = 32 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "RawSize", into = "RawSize")]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self::square(44)
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum RawSize {
    Square(u32),
    Rect { width: u32, height: u32 },
}

impl From<RawSize> for TargetSize {
    fn from(raw: RawSize) -> Self {
        match raw {
            RawSize::Square(side) => TargetSize::square(side),
            RawSize::Rect { width, height } => TargetSize { width, height },
        }
    }
}

impl From<TargetSize> for RawSize {
    fn from(size: TargetSize) -> Self {
        if size.width == size.height {
            RawSize::Square(size.width)
        } else {
            RawSize::Rect {
                width: size.width,
                height: size.height,
            }
        }
    }
}

/// Sparse form of [`StencilConfig`]: only the fields an icon sets itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StencilOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_to_content: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circular_mask: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_margin: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_brightness: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_saturation: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_threshold: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<EdgeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ResizeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TargetSize>,
}

impl StencilOverrides {
    pub fn apply(&self, base: &StencilConfig) -> StencilConfig {
        StencilConfig {
            crop_to_content: self.crop_to_content.unwrap_or(base.crop_to_content),
            circular_mask: self.circular_mask.unwrap_or(base.circular_mask),
            mask_margin: self.mask_margin.unwrap_or(base.mask_margin),
            white_brightness: self.white_brightness.unwrap_or(base.white_brightness),
            white_saturation: self.white_saturation.unwrap_or(base.white_saturation),
            alpha_threshold: self.alpha_threshold.unwrap_or(base.alpha_threshold),
            edges: self.edges.unwrap_or(base.edges),
            filter: self.filter.unwrap_or(base.filter),
            bleed: self.bleed.unwrap_or(base.bleed),
            size: self.size.unwrap_or(base.size),
        }
    }
}

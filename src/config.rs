use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::settings::{StencilConfig, StencilOverrides};

pub const CONFIG_NAME: &str = "stencil.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Settings shared by every icon unless the icon overrides them.
    #[serde(default, skip_serializing_if = "is_default_settings")]
    pub defaults: StencilConfig,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub icons: BTreeMap<String, IconConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IconConfig {
    pub source: PathBuf,
    pub output: PathBuf,

    #[serde(flatten)]
    pub overrides: StencilOverrides,

    /// Keys that are neither paths nor settings. Rejected on load.
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub unknown: BTreeMap<String, toml::Value>,
}

fn is_default_settings(settings: &StencilConfig) -> bool {
    *settings == StencilConfig::default()
}

impl Config {
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.validate(config_dir)?;

        Ok(config)
    }

    /// Effective settings for icon `key`: `[defaults]` plus the icon's own fields.
    pub fn resolve(&self, key: &str) -> Option<StencilConfig> {
        self.icons
            .get(key)
            .map(|icon| icon.overrides.apply(&self.defaults))
    }

    fn validate(&self, config_dir: &Path) -> Result<()> {
        self.defaults
            .validate()
            .context("Invalid [defaults] settings")?;

        for (name, icon) in &self.icons {
            if let Some(key) = icon.unknown.keys().next() {
                bail!("Icon '{}': unknown setting `{}`", name, key);
            }
            let full = config_dir.join(&icon.source);
            if !full.exists() {
                bail!(
                    "Icon '{}': source path does not exist: {}",
                    name,
                    full.display()
                );
            }
            if icon.source == icon.output {
                bail!("Icon '{}': output would overwrite its source", name);
            }
            icon.overrides
                .apply(&self.defaults)
                .validate()
                .with_context(|| format!("Icon '{}': invalid settings", name))?;
        }
        Ok(())
    }

    pub fn default_template() -> String {
        r#"# traystencil configuration

# Settings shared by every icon. Each one can be overridden per icon.
# [defaults]
# size = 44                  # square side, or { width = 44, height = 32 }
# crop_to_content = true     # crop to the glyph before resizing
# circular_mask = true       # clear everything outside the inscribed circle
# mask_margin = 1            # pixels shaved off the circle radius
# white_brightness = 220     # brighter than this ...
# white_saturation = 30      # ... and greyer than this counts as background
# alpha_threshold = 128      # source alpha below this is transparent
# edges = "hard"             # "hard" (pure black) or "soft" (keep edge alpha)
# filter = "lanczos3"        # nearest, triangle, catmull-rom, gaussian, lanczos3
# bleed = false              # alpha bleed before resizing

# Icons
# [icons.tray]
# source = "assets/icon.png"
# output = "assets/tray-icon.png"
#
# [icons.tray_small]
# source = "assets/icon.png"
# output = "assets/tray-icon-small.png"
# size = 22
# white_brightness = 200
"#
        .to_string()
    }
}

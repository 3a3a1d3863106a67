use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::sort_name::SortNameGenerator;

/// File name of the mapping store when no path is configured.
pub const DEFAULT_MAPPING_FILE: &str = "artist_sort_mapping.tsv";

/// Sort-key options (`[sort]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    /// Transliterate non-ASCII names into a phonetic reading. When false,
    /// names without an override sort as written.
    pub transliterate: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            transliterate: true,
        }
    }
}

/// Global configuration loaded from `~/.config/setlist/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetlistConfig {
    /// Mapping store location; defaults to `~/.local/share/setlist/artist_sort_mapping.tsv`.
    #[serde(default)]
    pub mapping_file: Option<PathBuf>,
    #[serde(default)]
    pub sort: SortConfig,
}

impl SetlistConfig {
    /// Mapping file to use: explicit `cli_override`, then config, then the XDG default.
    pub fn mapping_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(p) = cli_override {
            return Ok(p.to_path_buf());
        }
        if let Some(p) = &self.mapping_file {
            return Ok(p.clone());
        }
        default_mapping_path()
    }

    /// Generator honoring the `[sort]` options (overrides are attached by the caller).
    pub fn sort_name_generator<'a>(&self) -> SortNameGenerator<'a> {
        if self.sort.transliterate {
            SortNameGenerator::new()
        } else {
            SortNameGenerator::without_transliteration()
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("setlist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

pub fn default_mapping_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("setlist")?;
    Ok(xdg_dirs.get_data_home().join("setlist").join(DEFAULT_MAPPING_FILE))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SetlistConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

pub fn load_or_init_at(path: &Path) -> Result<SetlistConfig> {
    if !path.exists() {
        let default_cfg = SetlistConfig::default();
        let toml = toml::to_string_pretty(&default_cfg).context("serialize default config")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SetlistConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

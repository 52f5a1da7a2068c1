// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use atrium_app::{DEFAULT_COMPACT_BELOW, Theme};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub storage: Storage,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            storage: Storage::default(),
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Storage {
    pub db_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub theme: Option<String>,
    pub compact_below: Option<i64>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            theme: Some("auto".to_owned()),
            compact_below: Some(i64::from(DEFAULT_COMPACT_BELOW)),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("ATRIUM_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set ATRIUM_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(atrium_store::APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [storage] and [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(db_path) = &self.storage.db_path {
            atrium_store::validate_db_path(db_path)?;
        }

        if let Some(theme) = &self.ui.theme
            && !matches!(theme.as_str(), "auto" | "light" | "dark")
        {
            bail!(
                "ui.theme in {} must be one of auto, light, dark; got {theme:?}",
                path.display()
            );
        }

        if let Some(compact_below) = self.ui.compact_below
            && (compact_below <= 0 || compact_below > i64::from(u16::MAX))
        {
            bail!(
                "ui.compact_below in {} must be a positive column count, got {}",
                path.display(),
                compact_below
            );
        }

        Ok(())
    }

    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.storage.db_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => atrium_store::default_db_path(),
        }
    }

    pub fn compact_below(&self) -> u16 {
        self.ui
            .compact_below
            .and_then(|value| u16::try_from(value).ok())
            .unwrap_or(DEFAULT_COMPACT_BELOW)
    }

    pub fn configured_theme(&self) -> Option<Theme> {
        self.ui
            .theme
            .as_deref()
            .and_then(Theme::parse)
    }

    // The ambient hint: an explicit config theme wins, else the terminal
    // background reported through COLORFGBG, else light.
    pub fn ambient_theme(&self) -> Theme {
        if let Some(theme) = self.configured_theme() {
            return theme;
        }
        detect_terminal_theme(env::var("COLORFGBG").ok().as_deref())
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# atrium config\n# Place this file at: {}\n\nversion = 1\n\n[storage]\n# Optional. Default is platform data dir (for example ~/.local/share/atrium/atrium.db)\n# db_path = \"/absolute/path/to/atrium.db\"\n\n[ui]\n# auto follows the terminal background; light and dark force a theme\ntheme = \"auto\"\ncompact_below = {}\n",
            path.display(),
            DEFAULT_COMPACT_BELOW,
        )
    }
}

// COLORFGBG is "<fg>;<bg>" (sometimes "<fg>;default;<bg>"); the low ANSI
// background indexes are the dark ones.
fn detect_terminal_theme(colorfgbg: Option<&str>) -> Theme {
    let Some(raw) = colorfgbg else {
        return Theme::Light;
    };
    let Some(background) = raw.rsplit(';').next() else {
        return Theme::Light;
    };
    match background.parse::<u8>() {
        Ok(index) if index <= 6 || index == 8 => Theme::Dark,
        Ok(_) => Theme::Light,
        Err(_) => Theme::Light,
    }
}

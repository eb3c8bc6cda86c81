//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `config.toml` +
//! `config.<env>.toml` + `APP_*` env vars (`__` separates nested keys, e.g.
//! `APP_RECOMMEND__PAGE_SIZE=5`). Provides helpers to expand `~` and `${VAR}`
//! and to resolve relative paths against a known base directory.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { path: "vendors.csv".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendSettings {
    pub page_size: i64,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthSettings {
    pub count: usize,
    pub seed: u64,
}

impl Default for SynthSettings {
    fn default() -> Self {
        Self { count: 100, seed: 42 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub recommend: RecommendSettings,
    pub synth: SynthSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.catalog.path.trim().is_empty() {
            return Err(Error::InvalidConfig("catalog.path must not be empty".into()));
        }
        if self.recommend.page_size <= 0 {
            return Err(Error::InvalidConfig(format!(
                "recommend.page_size must be positive, got {}",
                self.recommend.page_size
            )));
        }
        if self.synth.count == 0 {
            return Err(Error::InvalidConfig("synth.count must be positive".into()));
        }
        Ok(())
    }

    /// Catalog location after `~`/`${VAR}` expansion, relative paths joined onto `base`.
    pub fn catalog_path(&self, base: &Path) -> PathBuf {
        resolve_with_base(base, &self.catalog.path)
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_for_env(None)
    }

    pub fn load_for_env(env: Option<&str>) -> Result<Self> {
        let env_name = match env {
            Some(name) => name.to_string(),
            None => env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string()),
        };

        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.settings()?.validate()?;
        tracing::debug!(env = %env_name, "configuration loaded");
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{key}': {e}")))
    }

    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}

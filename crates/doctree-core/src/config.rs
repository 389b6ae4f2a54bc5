//! Configuration types for doctree.
//!
//! [`Config::load`] reads `$XDG_CONFIG_HOME/doctree/config.toml` (falling back
//! to `~/.config`) layered over the embedded defaults; a missing file is not an
//! error. [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[index]
max_ngram_len = 32

[navigation]
auto_expand_matches  = true
initial_expand_depth = 0
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// `[index]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    /// Longest substring (in characters) stored as an n-gram key. Queries
    /// longer than this fall back to a full label scan.
    #[serde(default = "default_max_ngram_len")]
    pub max_ngram_len: usize,
}

fn default_max_ngram_len() -> usize { 32 }

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_ngram_len: default_max_ngram_len(),
        }
    }
}

/// `[navigation]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationConfig {
    /// Expand every ancestor of a search match when a query is set.
    #[serde(default = "default_auto_expand_matches")]
    pub auto_expand_matches: bool,
    /// Nodes shallower than this depth start expanded.
    #[serde(default = "default_initial_expand_depth")]
    pub initial_expand_depth: usize,
}

fn default_auto_expand_matches() -> bool { true }
fn default_initial_expand_depth() -> usize { 0 }

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            auto_expand_matches: default_auto_expand_matches(),
            initial_expand_depth: default_initial_expand_depth(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from the user config file, layered on top of the built-in
    /// defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path, layered on top of the built-in defaults.
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.index.max_ngram_len == 0 {
            anyhow::bail!("index.max_ngram_len must be at least 1");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("doctree")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

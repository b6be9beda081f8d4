//! Configuration types for lexfind.
//!
//! [`Config::load`] reads `~/.config/lexfind/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then applies `LEXFIND__*`
//! environment overrides. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
backend = "local"
locale  = "en-US"

[catalog]
path = ""

[remote]
endpoint     = "https://language.googleapis.com/v1/documents:analyzeSyntax"
api_key      = ""
timeout_secs = 10

[dictation]
settle_delay_ms = 2000
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub dictation: DictationConfig,
}

/// Which tagging backend handles submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Local,
    Remote,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Local => write!(f, "local"),
            Backend::Remote => write!(f, "remote"),
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Backend::Local),
            "remote" => Ok(Backend::Remote),
            other => Err(format!("unknown backend: {other}")),
        }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_backend")]
    pub backend: Backend,
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_backend() -> Backend { Backend::Local }
fn default_locale() -> String { "en-US".to_string() }

impl Default for SearchConfig {
    fn default() -> Self {
        Self { backend: default_backend(), locale: default_locale() }
    }
}

/// `[catalog]` section. An empty path selects the embedded demo catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: String,
}

impl CatalogConfig {
    pub fn path(&self) -> Option<PathBuf> {
        if self.path.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.path))
        }
    }
}

/// `[remote]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://language.googleapis.com/v1/documents:analyzeSyntax".to_string()
}
fn default_timeout_secs() -> u64 { 10 }

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[dictation]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DictationConfig {
    /// How long to keep accepting partial transcripts after the stop signal.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

fn default_settle_delay_ms() -> u64 { 2000 }

impl Default for DictationConfig {
    fn default() -> Self {
        Self { settle_delay_ms: default_settle_delay_ms() }
    }
}

impl DictationConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/lexfind/config.toml`, layered on top of the
    /// built-in defaults and under `LEXFIND__SECTION__KEY` environment
    /// variables. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .add_source(config::Environment::with_prefix("LEXFIND").separator("__"))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
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
        .join("lexfind")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

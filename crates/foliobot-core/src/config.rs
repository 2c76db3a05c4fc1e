//! Foliobot configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoliobotConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

impl FoliobotConfig {
    /// Load config from the default path (~/.foliobot/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::FoliobotError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::error::FoliobotError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::FoliobotError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the Foliobot home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".foliobot")
    }
}

/// Remote completion endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the completion service. The chat path (/chat) is appended.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds. The original widget waited forever on a
    /// stalled call; a bounded timeout degrades to the apology path instead.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String { "http://localhost:5000".into() }
fn default_timeout_secs() -> u64 { 30 }

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// FAQ corpus configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    #[serde(default = "default_corpus_path")]
    pub path: String,
}

fn default_corpus_path() -> String { "~/.foliobot/faq.txt".into() }

impl Default for CorpusConfig {
    fn default() -> Self {
        Self { path: default_corpus_path() }
    }
}

/// Identity configuration — the strings baked into canned replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    /// Name of the portfolio owner the bot speaks for.
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Contact referenced by the fallback answer.
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_welcome")]
    pub welcome: String,
}

fn default_bot_name() -> String { "Foliobot".into() }
fn default_owner() -> String { "the site owner".into() }
fn default_contact_email() -> String { "hello@example.com".into() }
fn default_welcome() -> String {
    "Hi! I'm the virtual assistant for this portfolio. Ask me about skills, projects, contacts or more!".into()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            owner: default_owner(),
            contact_email: default_contact_email(),
            welcome: default_welcome(),
        }
    }
}

impl IdentityConfig {
    /// Fallback answer used when no FAQ record scores above threshold.
    /// Always carries a contact reference.
    pub fn fallback_answer(&self) -> String {
        format!(
            "Sorry, I couldn't find a specific answer. Try rephrasing the question or reach out directly at {}.",
            self.contact_email
        )
    }

    /// Apology shown when the remote call or corpus load fails.
    pub fn apology(&self) -> String {
        "Sorry, something went wrong. Please try again in a moment.".into()
    }
}

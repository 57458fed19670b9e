//! Application configuration.
//!
//! Every tunable of the app lives in [`AppConfig`]. The defaults reproduce the
//! behaviour of the published site; the struct is `Deserialize` with
//! `#[serde(default)]` on every level so a partial JSON document can override
//! single values (the frontend currently runs with `AppConfig::default()`).

use serde::{Deserialize, Serialize};

use crate::model::content::Updates;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageKeys,
    pub auth: AuthConfig,
    pub typing: TypingConfig,
    pub install: InstallConfig,
    /// Content used when nothing has been saved yet.
    pub content: Updates,
}

/// Local-storage key names, one per durable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub updates: String,
    pub guest_count: String,
    pub comments: String,
    pub credentials: String,
    pub saved_login: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            updates: "schoolUpdates".to_string(),
            guest_count: "guestCount".to_string(),
            comments: "comments".to_string(),
            credentials: "adminCredentials".to_string(),
            saved_login: "savedLoginInfo".to_string(),
        }
    }
}

/// The fixed login pair accepted next to the configurable admin credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub bypass_account: String,
    pub bypass_password: String,
    /// When `false` only the stored admin credentials are accepted.
    pub allow_bypass: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bypass_account: "Wilsontkay".to_string(),
            bypass_password: "KayP".to_string(),
            allow_bypass: true,
        }
    }
}

/// Guest welcome popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub text: String,
    /// Delay between two revealed characters.
    pub interval_ms: u32,
    /// How long the finished text stays on screen.
    pub hold_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            text: "Welcome Parent".to_string(),
            interval_ms: 70,
            hold_ms: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Wait between the platform offering installation and showing the card.
    pub delay_ms: u32,
    /// Session-storage key remembering a dismissal.
    pub dismissed_key: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            delay_ms: 3000,
            dismissed_key: "installPromptDismissed".to_string(),
        }
    }
}

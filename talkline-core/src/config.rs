// SPDX-FileCopyrightText: 2026 Talkline Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration Types
//!
//! Static plugin configuration and vendor credentials. The host shell ships
//! the plugin configuration as a JSON block; field names follow the shell's
//! camelCase convention.

use serde::{Deserialize, Serialize};

use crate::error::{TalklineError, TalklineResult};

/// Static configuration for the Talkline bridge.
///
/// Both fields are optional: a shell may omit them entirely and supply
/// credentials later through the runtime `load_with_keys` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalklineConfig {
    /// Platform-specific vendor API key.
    pub api_key: Option<String>,
    /// Vendor workspace/application ID.
    pub app_id: Option<String>,
}

impl TalklineConfig {
    /// Creates a configuration with both credentials set.
    pub fn with_keys(api_key: impl Into<String>, app_id: impl Into<String>) -> Self {
        TalklineConfig {
            api_key: Some(api_key.into()),
            app_id: Some(app_id.into()),
        }
    }

    /// Parses a configuration from the shell's JSON configuration block.
    pub fn from_json(json: &str) -> TalklineResult<Self> {
        serde_json::from_str(json).map_err(|e| TalklineError::Configuration(e.to_string()))
    }
}

/// Vendor credentials, as resolved for an initialization attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Platform-specific vendor API key.
    pub api_key: String,
    /// Vendor workspace/application ID.
    pub app_id: String,
}

impl Credentials {
    /// Creates credentials from the given key pair.
    pub fn new(api_key: impl Into<String>, app_id: impl Into<String>) -> Self {
        Credentials {
            api_key: api_key.into(),
            app_id: app_id.into(),
        }
    }

    /// Resolves effective credentials for an initialization attempt.
    ///
    /// An explicit field overrides the statically configured value, even
    /// when the explicit value is empty; a missing field falls back to the
    /// configuration. Completeness is checked separately with
    /// [`Credentials::is_complete`].
    pub fn resolve(
        api_key: Option<String>,
        app_id: Option<String>,
        config: &TalklineConfig,
    ) -> Self {
        Credentials {
            api_key: api_key
                .or_else(|| config.api_key.clone())
                .unwrap_or_default(),
            app_id: app_id.or_else(|| config.app_id.clone()).unwrap_or_default(),
        }
    }

    /// Returns true when both fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.app_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_credentials_override_config() {
        let config = TalklineConfig::with_keys("config-key", "config-app");
        let creds = Credentials::resolve(Some("call-key".into()), None, &config);
        assert_eq!(creds.api_key, "call-key");
        assert_eq!(creds.app_id, "config-app");
    }

    #[test]
    fn explicit_empty_string_is_not_replaced_by_config() {
        let config = TalklineConfig::with_keys("config-key", "config-app");
        let creds = Credentials::resolve(Some(String::new()), None, &config);
        assert!(!creds.is_complete());
    }

    #[test]
    fn missing_fields_resolve_to_empty() {
        let creds = Credentials::resolve(None, None, &TalklineConfig::default());
        assert_eq!(creds.api_key, "");
        assert_eq!(creds.app_id, "");
        assert!(!creds.is_complete());
    }

    #[test]
    fn config_parses_from_shell_json() {
        let config =
            TalklineConfig::from_json(r#"{"apiKey": "key-1", "appId": "app-1"}"#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("key-1"));
        assert_eq!(config.app_id.as_deref(), Some("app-1"));
    }

    #[test]
    fn config_tolerates_missing_fields() {
        let config = TalklineConfig::from_json("{}").unwrap();
        assert!(config.api_key.is_none());
        assert!(config.app_id.is_none());
    }
}

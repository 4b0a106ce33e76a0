//! Configuration loading and management.

use crate::error::LoadError;
use crate::plugin::PluginSet;
use crate::router::HelpOptions;
use serde::Deserialize;
use std::path::Path;

/// Bot configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Help responder settings.
    #[serde(default)]
    pub help: HelpConfig,
    /// Installed plugins. Kept raw so a malformed value is reported by the
    /// index rather than by the TOML parser.
    pub plugins: Option<toml::Value>,
}

/// Help responder configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HelpConfig {
    /// Text preceding the list of available commands.
    pub list_text: Option<String>,
    /// Prefix that marks a line as a bot command (default: "!").
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// The bot's own nickname (default: "helpbot").
    #[serde(default = "default_nickname")]
    pub nickname: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            list_text: None,
            command_prefix: default_command_prefix(),
            nickname: default_nickname(),
        }
    }
}

fn default_command_prefix() -> String {
    "!".to_string()
}

fn default_nickname() -> String {
    "helpbot".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The configured plugin set, if `plugins` is present.
    pub fn plugin_set(&self) -> Option<PluginSet> {
        self.plugins.as_ref().map(PluginSet::from_value)
    }

    /// Construction options for [`HelpRouter`](crate::router::HelpRouter).
    pub fn help_options(&self) -> HelpOptions {
        HelpOptions {
            plugins: self.plugin_set(),
            list_text: self.help.list_text.clone(),
        }
    }
}

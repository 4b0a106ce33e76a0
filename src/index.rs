//! Command discovery from plugin subscriptions.
//!
//! A plugin advertises help for a command by subscribing to
//! `command.<name>.help`. The index collects every such `<name>` once and
//! keeps them in case-insensitive natural order. It is built once and never
//! changes afterwards.

use crate::error::ConfigError;
use crate::natsort;
use crate::plugin::{Plugin, PluginSet};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};
use tracing::debug;

static HELP_EVENT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn help_event_pattern() -> &'static Regex {
    HELP_EVENT_PATTERN
        .get_or_init(|| Regex::new(r"^command\.(.+)\.help$").expect("static pattern is valid"))
}

/// Extract the command name from a `command.<name>.help` event name.
pub fn help_command_name(event_name: &str) -> Option<&str> {
    help_event_pattern()
        .captures(event_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Sorted, deduplicated list of commands that advertise help.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandIndex {
    commands: Vec<String>,
}

impl CommandIndex {
    /// Validate the configured plugin set and index it.
    ///
    /// Fails without producing an index if the set is not a list or if any
    /// element is not a plugin.
    pub fn build(plugins: &PluginSet) -> Result<Self, ConfigError> {
        let plugins = plugins.validate()?;
        Ok(Self::from_plugins(&plugins))
    }

    /// Index plugins that are already known to satisfy the capability.
    pub fn from_plugins(plugins: &[Arc<dyn Plugin>]) -> Self {
        let mut names = BTreeSet::new();
        for plugin in plugins {
            for event_name in plugin.subscribed_events().keys() {
                if let Some(name) = help_command_name(event_name) {
                    names.insert(name.to_string());
                }
            }
        }
        let index = Self::from_names(names);
        debug!(count = index.len(), commands = ?index.commands, "Indexed help commands");
        index
    }

    /// Build an index directly from command names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        let mut commands: Vec<String> = unique.into_iter().collect();
        commands.sort_by(|a, b| natsort::compare(a, b));
        Self { commands }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.iter().any(|c| c == name)
    }
}

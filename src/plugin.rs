//! Plugin capability contract and the configured plugin set.
//!
//! A plugin is anything that can report which events it subscribes to. The
//! configured `plugins` value is kept as a tagged union until it is
//! validated, so non-list values and non-plugin elements are rejected in one
//! pass before any command is indexed.

use crate::bus::EventBus;
use crate::error::ConfigError;
use crate::render;
use crate::router::help_event_name;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Event name to handler identifier.
pub type SubscribedEvents = BTreeMap<String, String>;

/// Capability every installed plugin exposes.
pub trait Plugin: Send + Sync {
    /// Events this plugin handles, keyed by event name.
    fn subscribed_events(&self) -> SubscribedEvents;

    /// Register this plugin's listeners on the bus.
    ///
    /// Plugins that are only inspected for their subscriptions keep the
    /// default, which registers nothing.
    fn attach(self: Arc<Self>, _bus: &mut EventBus) {}
}

/// One element of the configured plugin list.
#[derive(Clone)]
pub enum PluginEntry {
    Plugin(Arc<dyn Plugin>),
    /// A value that does not implement the plugin capability, described by
    /// its type name.
    Foreign(String),
}

impl PluginEntry {
    pub fn plugin<P: Plugin + 'static>(plugin: P) -> Self {
        Self::Plugin(Arc::new(plugin))
    }

    pub fn foreign(kind: impl Into<String>) -> Self {
        Self::Foreign(kind.into())
    }

    /// Interpret a configuration value as a [`StaticPlugin`] descriptor.
    pub fn from_value(value: &toml::Value) -> Self {
        if !value.is_table() {
            return Self::Foreign(value.type_str().to_string());
        }
        match StaticPlugin::deserialize(value.clone()) {
            Ok(plugin) => Self::plugin(plugin),
            Err(e) => {
                debug!(error = %e, "Plugin entry is not a plugin descriptor");
                Self::Foreign(value.type_str().to_string())
            }
        }
    }
}

/// The configured `plugins` value, before validation.
#[derive(Clone)]
pub enum PluginSet {
    List(Vec<PluginEntry>),
    /// Anything other than a list, described by its type name.
    Scalar(String),
}

impl PluginSet {
    /// Build a set from already-typed plugins.
    pub fn from_plugins<I>(plugins: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Plugin>>,
    {
        Self::List(plugins.into_iter().map(PluginEntry::Plugin).collect())
    }

    /// Interpret a raw configuration value.
    pub fn from_value(value: &toml::Value) -> Self {
        match value.as_array() {
            Some(items) => Self::List(items.iter().map(PluginEntry::from_value).collect()),
            None => Self::Scalar(value.type_str().to_string()),
        }
    }

    /// Check the whole set against the plugin capability.
    ///
    /// Either every element is a plugin and all of them are returned, or the
    /// first offending element is reported and nothing is returned.
    pub fn validate(&self) -> Result<Vec<Arc<dyn Plugin>>, ConfigError> {
        let entries = match self {
            Self::List(entries) => entries,
            Self::Scalar(kind) => {
                return Err(ConfigError::NonArray {
                    found: kind.clone(),
                });
            }
        };

        let plugins: Vec<Arc<dyn Plugin>> = entries
            .iter()
            .filter_map(|entry| match entry {
                PluginEntry::Plugin(plugin) => Some(Arc::clone(plugin)),
                PluginEntry::Foreign(_) => None,
            })
            .collect();

        if plugins.len() != entries.len() {
            let (index, found) = entries
                .iter()
                .enumerate()
                .find_map(|(i, entry)| match entry {
                    PluginEntry::Foreign(kind) => Some((i, kind.clone())),
                    PluginEntry::Plugin(_) => None,
                })
                .unwrap_or_default();
            return Err(ConfigError::NonPlugin { index, found });
        }

        Ok(plugins)
    }
}

impl Default for PluginSet {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// A data-only plugin declared in configuration.
///
/// Besides its subscriptions it may carry help text per command, which is
/// sent back when the matching `command.<name>.help` event fires.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticPlugin {
    /// Display name, used in logs.
    #[serde(default)]
    pub name: String,
    /// Subscribed events (event name to handler identifier).
    pub events: SubscribedEvents,
    /// Help text keyed by command name.
    #[serde(default)]
    pub help: BTreeMap<String, String>,
}

impl StaticPlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Subscribe `event` to `handler`.
    pub fn subscribe(mut self, event: impl Into<String>, handler: impl Into<String>) -> Self {
        self.events.insert(event.into(), handler.into());
        self
    }

    /// Advertise help for `command` and answer it with `text`.
    pub fn with_help(mut self, command: &str, text: impl Into<String>) -> Self {
        self.events.insert(
            help_event_name(command),
            format!("handle_{command}_help"),
        );
        self.help.insert(command.to_string(), text.into());
        self
    }
}

impl Plugin for StaticPlugin {
    fn subscribed_events(&self) -> SubscribedEvents {
        self.events.clone()
    }

    fn attach(self: Arc<Self>, bus: &mut EventBus) {
        for (command, text) in &self.help {
            let event_name = help_event_name(command);
            if !self.events.contains_key(&event_name) {
                debug!(
                    plugin = %self.name,
                    command = %command,
                    "Help text without a help subscription, skipping"
                );
                continue;
            }
            let text = text.clone();
            bus.on(event_name, move |_, event, queue| {
                render::reply(event, queue, &text);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_array_value() {
        let set = PluginSet::from_value(&toml::Value::String("foo".into()));
        let err = set.validate().err();
        assert!(matches!(err, Some(ConfigError::NonArray { found }) if found == "string"));
    }

    #[test]
    fn test_foreign_element_rejects_whole_set() {
        let set = PluginSet::List(vec![
            PluginEntry::plugin(StaticPlugin::new("ok")),
            PluginEntry::foreign("integer"),
        ]);
        let err = set.validate().err();
        assert!(matches!(
            err,
            Some(ConfigError::NonPlugin { index: 1, ref found }) if found == "integer"
        ));
    }

    #[test]
    fn test_table_without_events_is_foreign() {
        let value: toml::Value = toml::from_str("name = \"x\"").unwrap();
        assert!(matches!(PluginEntry::from_value(&value), PluginEntry::Foreign(_)));
    }

    #[test]
    fn test_table_with_events_is_plugin() {
        let value: toml::Value = toml::from_str(
            r#"
name = "dice"
[events]
"command.roll" = "handle_roll"
"command.roll.help" = "handle_roll_help"
"#,
        )
        .unwrap();
        let PluginEntry::Plugin(plugin) = PluginEntry::from_value(&value) else {
            panic!("expected a plugin");
        };
        assert!(plugin.subscribed_events().contains_key("command.roll.help"));
    }

    #[test]
    fn test_with_help_subscribes() {
        let plugin = StaticPlugin::new("dice").with_help("roll", "Usage: roll");
        assert_eq!(
            plugin.subscribed_events().get("command.roll.help").map(String::as_str),
            Some("handle_roll_help")
        );
    }
}

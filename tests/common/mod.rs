//! Shared helpers for integration tests.

#![allow(dead_code)]

use slirc_commandhelp::{
    CommandEvent, EventBus, HelpOptions, HelpRouter, MessageCommand, Plugin, PluginEntry,
    PluginSet, StaticPlugin,
};
use std::sync::Arc;

pub const BOT: &str = "bot";
pub const USER: &str = "user";

/// A `help` command event from `user` to `target`.
pub fn help_event(target: &str, params: &[&str]) -> CommandEvent {
    CommandEvent::new(MessageCommand::Privmsg, USER, vec![target.to_string()], BOT)
        .expect("target is present")
        .with_custom_command("help")
        .with_custom_params(params.iter().copied())
}

/// A plugin that handles `command` and advertises help for it.
pub fn command_plugin(command: &str, help: &str) -> StaticPlugin {
    StaticPlugin::new(command)
        .subscribe(format!("command.{command}"), format!("handle_{command}"))
        .with_help(command, help)
}

/// Router and bus wired with `plugins`, the way the console host wires them.
pub fn wired(plugins: Vec<StaticPlugin>, list_text: Option<&str>) -> (Arc<HelpRouter>, EventBus) {
    let plugins: Vec<Arc<dyn Plugin>> = plugins
        .into_iter()
        .map(|p| Arc::new(p) as Arc<dyn Plugin>)
        .collect();

    let router = HelpRouter::new(HelpOptions {
        plugins: Some(PluginSet::from_plugins(plugins.iter().cloned())),
        list_text: list_text.map(str::to_string),
    })
    .expect("valid plugin set");
    let router = Arc::new(router);

    let mut bus = EventBus::new();
    for plugin in plugins {
        plugin.attach(&mut bus);
    }
    Arc::clone(&router).attach(&mut bus);
    (router, bus)
}

/// A plugin set with one non-plugin element in the middle.
pub fn mixed_set() -> PluginSet {
    PluginSet::List(vec![
        PluginEntry::plugin(command_plugin("foo", "foo help")),
        PluginEntry::foreign("string"),
        PluginEntry::plugin(command_plugin("bar", "bar help")),
    ])
}

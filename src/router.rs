//! The `command.help` handler.
//!
//! `help <command>` is forwarded as `command.<command>.help` to whichever
//! plugin advertises it. A bare `help` lists every indexed command.

use crate::bus::{EventBus, EventEmitter};
use crate::error::ConfigError;
use crate::event::CommandEvent;
use crate::index::CommandIndex;
use crate::plugin::{Plugin, PluginSet, SubscribedEvents};
use crate::queue::EventQueue;
use crate::render::{DEFAULT_LIST_TEXT, Renderer};
use crate::telemetry::spans;
use std::sync::Arc;
use tracing::debug;

/// Event the router subscribes to.
pub const HELP_EVENT: &str = "command.help";

/// Handler identifier advertised for [`HELP_EVENT`].
pub const HELP_HANDLER: &str = "handle_help_command";

/// Name of the event that carries help for one command.
pub fn help_event_name(command: &str) -> String {
    format!("command.{command}.help")
}

/// Construction-time options.
#[derive(Clone, Default)]
pub struct HelpOptions {
    /// Installed plugins to index. `None` indexes nothing.
    pub plugins: Option<PluginSet>,
    /// Text preceding the command list. `None` keeps the default.
    pub list_text: Option<String>,
}

/// Responds to help requests.
#[derive(Debug, Clone, Default)]
pub struct HelpRouter {
    index: CommandIndex,
    renderer: Renderer,
}

impl HelpRouter {
    /// Build a router, validating and indexing the configured plugins.
    pub fn new(options: HelpOptions) -> Result<Self, ConfigError> {
        let index = match &options.plugins {
            Some(plugins) => CommandIndex::build(plugins)?,
            None => CommandIndex::default(),
        };
        Ok(Self::with_index(index, options.list_text))
    }

    pub fn with_index(index: CommandIndex, list_text: Option<String>) -> Self {
        let list_text = list_text.unwrap_or_else(|| DEFAULT_LIST_TEXT.to_string());
        Self {
            index,
            renderer: Renderer::new(list_text),
        }
    }

    pub fn commands(&self) -> &CommandIndex {
        &self.index
    }

    pub fn list_text(&self) -> &str {
        self.renderer.list_text()
    }

    /// Handle one `command.help` event.
    ///
    /// Either emits exactly one `command.<name>.help` event or enqueues
    /// exactly one list reply.
    pub fn handle_help_command(
        &self,
        event: &CommandEvent,
        queue: &mut dyn EventQueue,
        emitter: &dyn EventEmitter,
    ) {
        let topic = event.custom_params().first();
        let _span =
            spans::help_request(event.nick(), event.primary_target(), topic.map(String::as_str))
                .entered();

        match topic {
            Some(topic) => {
                let event_name = help_event_name(&topic.to_ascii_lowercase());
                debug!(event = %event_name, "Forwarding help request");
                emitter.emit(&event_name, event, queue);
            }
            None => self.renderer.list_commands(&self.index, event, queue),
        }
    }
}

impl Plugin for HelpRouter {
    fn subscribed_events(&self) -> SubscribedEvents {
        SubscribedEvents::from([(HELP_EVENT.to_string(), HELP_HANDLER.to_string())])
    }

    fn attach(self: Arc<Self>, bus: &mut EventBus) {
        bus.on(HELP_EVENT, move |emitter, event, queue| {
            self.handle_help_command(event, queue, emitter);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MessageCommand;
    use crate::plugin::{PluginEntry, StaticPlugin};
    use crate::queue::{BufferedQueue, QueuedMessage};
    use std::cell::RefCell;

    /// Records emissions instead of dispatching them.
    #[derive(Default)]
    struct RecordingEmitter {
        emitted: RefCell<Vec<(String, CommandEvent)>>,
    }

    impl EventEmitter for RecordingEmitter {
        fn emit(&self, event_name: &str, event: &CommandEvent, _queue: &mut dyn EventQueue) {
            self.emitted
                .borrow_mut()
                .push((event_name.to_string(), event.clone()));
        }
    }

    fn plugins() -> PluginSet {
        PluginSet::List(vec![
            PluginEntry::plugin(
                StaticPlugin::new("foo")
                    .subscribe("command.foo", "handleFoo")
                    .subscribe("command.foo.help", "handleFooHelp"),
            ),
            PluginEntry::plugin(
                StaticPlugin::new("bar")
                    .subscribe("command.bar", "handleBar")
                    .subscribe("command.bar.help", "handleBarHelp"),
            ),
        ])
    }

    fn help_event(target: &str, params: &[&str]) -> CommandEvent {
        CommandEvent::new(MessageCommand::Privmsg, "user", vec![target.to_string()], "bot")
            .unwrap()
            .with_custom_command("help")
            .with_custom_params(params.iter().copied())
    }

    #[test]
    fn test_param_emits_lowercased_help_event() {
        let router = HelpRouter::new(HelpOptions::default()).unwrap();
        let emitter = RecordingEmitter::default();
        let mut queue = BufferedQueue::new();
        let event = help_event("#channel", &["Foo", "extra"]);

        router.handle_help_command(&event, &mut queue, &emitter);

        let emitted = emitter.emitted.borrow();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].0, "command.foo.help");
        assert_eq!(emitted[0].1, event);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_no_params_lists_commands() {
        let router = HelpRouter::new(HelpOptions {
            plugins: Some(plugins()),
            list_text: None,
        })
        .unwrap();
        let emitter = RecordingEmitter::default();

        let cases = [
            ("#channel", "#channel", "user: Available commands: bar foo"),
            ("bot", "user", "Available commands: bar foo"),
        ];
        for (request_target, response_target, text) in cases {
            let mut queue = BufferedQueue::new();
            router.handle_help_command(&help_event(request_target, &[]), &mut queue, &emitter);
            assert_eq!(
                queue.messages(),
                [QueuedMessage::new(MessageCommand::Privmsg, response_target, text)]
            );
        }
        assert!(emitter.emitted.borrow().is_empty());
    }

    #[test]
    fn test_custom_list_text() {
        let router = HelpRouter::new(HelpOptions {
            plugins: Some(plugins()),
            list_text: Some("Commands: ".to_string()),
        })
        .unwrap();
        let emitter = RecordingEmitter::default();

        let cases = [
            ("#channel", "#channel", "user: Commands: bar foo"),
            ("bot", "user", "Commands: bar foo"),
        ];
        for (request_target, response_target, text) in cases {
            let mut queue = BufferedQueue::new();
            router.handle_help_command(&help_event(request_target, &[]), &mut queue, &emitter);
            assert_eq!(
                queue.messages(),
                [QueuedMessage::new(MessageCommand::Privmsg, response_target, text)]
            );
        }
    }

    #[test]
    fn test_invalid_configuration() {
        let cases = [
            (PluginSet::Scalar("string".to_string()), "plugins_non_array"),
            (
                PluginSet::List(vec![PluginEntry::foreign("table")]),
                "plugins_non_plugin",
            ),
            (
                PluginSet::List(vec![
                    PluginEntry::plugin(StaticPlugin::new("ok")),
                    PluginEntry::foreign("table"),
                ]),
                "plugins_non_plugin",
            ),
        ];
        for (plugins, code) in cases {
            let err = HelpRouter::new(HelpOptions {
                plugins: Some(plugins),
                list_text: None,
            })
            .unwrap_err();
            assert_eq!(err.error_code(), code);
        }
    }

    #[test]
    fn test_default_router_lists_nothing() {
        let router = HelpRouter::default();
        let mut queue = BufferedQueue::new();
        router.handle_help_command(&help_event("bot", &[]), &mut queue, &RecordingEmitter::default());
        assert_eq!(queue.messages()[0].text, "Available commands: ");
    }

    #[test]
    fn test_subscribed_events() {
        let events = HelpRouter::default().subscribed_events();
        assert_eq!(events.get(HELP_EVENT).map(String::as_str), Some(HELP_HANDLER));
    }
}

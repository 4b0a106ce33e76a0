//! Reply rendering: target selection, addressing and outbound dispatch.

use crate::event::{CommandEvent, MessageCommand};
use crate::index::CommandIndex;
use crate::queue::EventQueue;
use tracing::debug;

/// Default text preceding the command list.
pub const DEFAULT_LIST_TEXT: &str = "Available commands: ";

/// Send `text` through the queue operation matching `command`.
pub fn dispatch(queue: &mut dyn EventQueue, command: MessageCommand, target: &str, text: &str) {
    match command {
        MessageCommand::Privmsg => queue.irc_privmsg(target, text),
        MessageCommand::Notice => queue.irc_notice(target, text),
    }
}

/// Pick where a reply to `event` goes and how it is addressed.
///
/// Private messages are answered to the sender with no address; channel
/// messages are answered in the channel as `"<nick>: "`.
pub fn reply_target(event: &CommandEvent) -> (&str, String) {
    if event.is_private() {
        (event.nick(), String::new())
    } else {
        (event.primary_target(), format!("{}: ", event.nick()))
    }
}

/// Reply to `event` with `text`, using the same protocol command it came in
/// with.
pub fn reply(event: &CommandEvent, queue: &mut dyn EventQueue, text: &str) {
    let (target, address) = reply_target(event);
    let message = format!("{address}{text}");
    dispatch(queue, event.command(), target, &message);
}

/// Formats the command list reply.
#[derive(Debug, Clone)]
pub struct Renderer {
    list_text: String,
}

impl Renderer {
    pub fn new(list_text: impl Into<String>) -> Self {
        Self {
            list_text: list_text.into(),
        }
    }

    pub fn list_text(&self) -> &str {
        &self.list_text
    }

    /// List text followed by the commands joined with single spaces.
    pub fn body(&self, index: &CommandIndex) -> String {
        format!("{}{}", self.list_text, index.commands().join(" "))
    }

    /// Enqueue exactly one message listing every indexed command.
    pub fn list_commands(
        &self,
        index: &CommandIndex,
        event: &CommandEvent,
        queue: &mut dyn EventQueue,
    ) {
        debug!(
            nick = %event.nick(),
            target = %event.primary_target(),
            count = index.len(),
            "Listing available commands"
        );
        reply(event, queue, &self.body(index));
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_TEXT)
    }
}

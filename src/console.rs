//! Line-oriented console host for trying the responder without a network.
//!
//! Each input line is `<nick> <target> <text>`. Text that starts with the
//! command prefix becomes a [`CommandEvent`] and is emitted on the bus as
//! `command.<name>`, the way a command plugin would.

use crate::bus::{EventBus, EventEmitter};
use crate::error::EventError;
use crate::event::{CommandEvent, MessageCommand};
use crate::queue::{BufferedQueue, QueuedMessage};

/// Settings for parsing console lines.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    pub command_prefix: String,
    pub nickname: String,
}

/// Parse one console line.
///
/// Returns `Ok(None)` for lines that are not bot commands.
pub fn parse_line(
    line: &str,
    options: &ConsoleOptions,
) -> Result<Option<(String, CommandEvent)>, EventError> {
    let mut parts = line.trim().splitn(3, char::is_whitespace);
    let (Some(nick), Some(target)) = (parts.next(), parts.next()) else {
        return Ok(None);
    };
    let text = parts.next().unwrap_or_default().trim_start();

    let Some(command_text) = text.strip_prefix(options.command_prefix.as_str()) else {
        return Ok(None);
    };
    let mut words = command_text.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let name = name.to_ascii_lowercase();

    let event = CommandEvent::new(
        MessageCommand::Privmsg,
        nick,
        target
            .split(',')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        options.nickname.as_str(),
    )?
    .with_custom_command(name.as_str())
    .with_custom_params(words);

    Ok(Some((format!("command.{name}"), event)))
}

/// Run one console line through the bus and collect the replies.
pub fn process_line(
    bus: &EventBus,
    line: &str,
    options: &ConsoleOptions,
) -> Result<Vec<QueuedMessage>, EventError> {
    let mut queue = BufferedQueue::new();
    if let Some((event_name, event)) = parse_line(line, options)? {
        bus.emit(&event_name, &event, &mut queue);
    }
    Ok(queue.drain())
}

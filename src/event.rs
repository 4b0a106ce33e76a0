//! Command events delivered to the help responder.

use crate::error::EventError;
use std::fmt;
use std::str::FromStr;

/// Protocol commands a command event can originate from.
///
/// Closed set: every variant has an outbound queue operation, so a reply can
/// always be sent back with the same command it arrived with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCommand {
    Privmsg,
    Notice,
}

impl MessageCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Privmsg => "PRIVMSG",
            Self::Notice => "NOTICE",
        }
    }
}

impl fmt::Display for MessageCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageCommand {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("PRIVMSG") {
            Ok(Self::Privmsg)
        } else if s.eq_ignore_ascii_case("NOTICE") {
            Ok(Self::Notice)
        } else {
            Err(EventError::UnsupportedCommand(s.to_string()))
        }
    }
}

/// A bot command parsed out of a channel or private message.
///
/// `targets` is never empty; the first entry is the primary target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEvent {
    command: MessageCommand,
    nick: String,
    targets: Vec<String>,
    connection_nick: String,
    custom_command: String,
    custom_params: Vec<String>,
}

impl CommandEvent {
    /// Create an event for a message from `nick` to `targets`, received on a
    /// connection whose own nickname is `connection_nick`.
    pub fn new(
        command: MessageCommand,
        nick: impl Into<String>,
        targets: Vec<String>,
        connection_nick: impl Into<String>,
    ) -> Result<Self, EventError> {
        if targets.is_empty() {
            return Err(EventError::NoTarget);
        }
        Ok(Self {
            command,
            nick: nick.into(),
            targets,
            connection_nick: connection_nick.into(),
            custom_command: String::new(),
            custom_params: Vec::new(),
        })
    }

    /// Set the bot command name (e.g. `help`).
    pub fn with_custom_command(mut self, name: impl Into<String>) -> Self {
        self.custom_command = name.into();
        self
    }

    /// Set the parameters following the bot command.
    pub fn with_custom_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn command(&self) -> MessageCommand {
        self.command
    }

    /// Nickname of the user who sent the command.
    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// First entry of [`targets`](Self::targets).
    pub fn primary_target(&self) -> &str {
        // Non-empty by construction.
        self.targets.first().map(String::as_str).unwrap_or_default()
    }

    /// The bot's own nickname on the receiving connection.
    pub fn connection_nick(&self) -> &str {
        &self.connection_nick
    }

    pub fn custom_command(&self) -> &str {
        &self.custom_command
    }

    pub fn custom_params(&self) -> &[String] {
        &self.custom_params
    }

    /// Whether the message was sent directly to the bot rather than to a
    /// shared channel.
    pub fn is_private(&self) -> bool {
        self.primary_target() == self.connection_nick
    }
}

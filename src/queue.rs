//! Outbound message queue contract.
//!
//! The host owns the real queue; the responder only ever calls one of the
//! typed operations below. [`BufferedQueue`] captures messages in order for
//! the console harness and tests.

use crate::event::MessageCommand;
use std::fmt;

/// Outbound operations the responder may use.
pub trait EventQueue {
    fn irc_privmsg(&mut self, target: &str, text: &str);
    fn irc_notice(&mut self, target: &str, text: &str);
}

/// A message recorded by [`BufferedQueue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedMessage {
    pub command: MessageCommand,
    pub target: String,
    pub text: String,
}

impl QueuedMessage {
    pub fn new(command: MessageCommand, target: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            command,
            target: target.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for QueuedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} :{}", self.command, self.target, self.text)
    }
}

/// Queue that buffers messages instead of sending them.
#[derive(Debug, Default)]
pub struct BufferedQueue {
    messages: Vec<QueuedMessage>,
}

impl BufferedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[QueuedMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Take all buffered messages, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<QueuedMessage> {
        std::mem::take(&mut self.messages)
    }
}

impl EventQueue for BufferedQueue {
    fn irc_privmsg(&mut self, target: &str, text: &str) {
        self.messages
            .push(QueuedMessage::new(MessageCommand::Privmsg, target, text));
    }

    fn irc_notice(&mut self, target: &str, text: &str) {
        self.messages
            .push(QueuedMessage::new(MessageCommand::Notice, target, text));
    }
}

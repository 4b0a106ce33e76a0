//! Named event emission.
//!
//! The responder only needs [`EventEmitter`]; the host decides what an
//! emission does. [`EventBus`] is a minimal in-process host: listeners are
//! registered per event name and run synchronously in registration order.

use crate::event::CommandEvent;
use crate::queue::EventQueue;
use std::collections::HashMap;
use tracing::trace;

/// Emits a named event with an `(event, queue)` payload.
pub trait EventEmitter {
    fn emit(&self, event_name: &str, event: &CommandEvent, queue: &mut dyn EventQueue);
}

/// A listener receives the emitter it was invoked from so it can emit
/// follow-up events.
pub type Listener =
    Box<dyn Fn(&dyn EventEmitter, &CommandEvent, &mut dyn EventQueue) + Send + Sync>;

/// Synchronous event bus keyed by event name.
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<String, Vec<Listener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `listener` to `event_name`.
    pub fn on<F>(&mut self, event_name: impl Into<String>, listener: F)
    where
        F: Fn(&dyn EventEmitter, &CommandEvent, &mut dyn EventQueue) + Send + Sync + 'static,
    {
        self.listeners
            .entry(event_name.into())
            .or_default()
            .push(Box::new(listener));
    }

    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners.get(event_name).map_or(0, Vec::len)
    }
}

impl EventEmitter for EventBus {
    fn emit(&self, event_name: &str, event: &CommandEvent, queue: &mut dyn EventQueue) {
        let Some(listeners) = self.listeners.get(event_name) else {
            trace!(event = %event_name, "No listeners for event");
            return;
        };
        trace!(event = %event_name, listeners = listeners.len(), "Emitting event");
        for listener in listeners {
            listener(self, event, queue);
        }
    }
}

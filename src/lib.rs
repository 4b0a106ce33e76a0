//! slirc-commandhelp - command help responder for Straylight IRC bots.
//!
//! Plugins advertise help for a command by subscribing to
//! `command.<name>.help`. The [`HelpRouter`] answers `help` by listing every
//! advertised command, and `help <name>` by forwarding the request to the
//! plugin that advertised it.

pub mod bus;
pub mod config;
pub mod console;
pub mod error;
pub mod event;
pub mod index;
pub mod natsort;
pub mod plugin;
pub mod queue;
pub mod render;
pub mod router;
pub mod telemetry;

pub use bus::{EventBus, EventEmitter};
pub use config::Config;
pub use error::{ConfigError, EventError, LoadError};
pub use event::{CommandEvent, MessageCommand};
pub use index::CommandIndex;
pub use plugin::{Plugin, PluginEntry, PluginSet, StaticPlugin, SubscribedEvents};
pub use queue::{BufferedQueue, EventQueue, QueuedMessage};
pub use render::Renderer;
pub use router::{HelpOptions, HelpRouter};

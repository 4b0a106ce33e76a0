//! Tracing setup and span constructors.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber, honouring `RUST_LOG` (default `info`).
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Standardized span constructors for help handling.
pub mod spans {
    use tracing::{Span, debug_span};

    /// Create a span for one help request.
    pub fn help_request(nick: &str, target: &str, topic: Option<&str>) -> Span {
        if let Some(topic) = topic {
            debug_span!("help", nick = %nick, target = %target, topic = %topic)
        } else {
            debug_span!("help", nick = %nick, target = %target)
        }
    }
}

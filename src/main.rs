//! helpbot - console host for the command help responder.
//!
//! Reads `<nick> <target> <text>` lines from stdin and prints the replies
//! the bot would send.

use slirc_commandhelp::console::{self, ConsoleOptions};
use slirc_commandhelp::{Config, EventBus, HelpRouter, Plugin};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    slirc_commandhelp::telemetry::init();

    let config_path = std::env::args().nth(1);
    let config = match &config_path {
        Some(path) => Config::load(path).map_err(|e| {
            error!(path = %path, error = %e, code = e.error_code(), "Failed to load config");
            e
        })?,
        None => Config::default(),
    };

    let plugins = match config.plugin_set() {
        Some(set) => set.validate().map_err(|e| {
            error!(error = %e, code = e.error_code(), "Invalid plugin configuration");
            e
        })?,
        None => Vec::new(),
    };

    let router = HelpRouter::with_index(
        slirc_commandhelp::CommandIndex::from_plugins(&plugins),
        config.help.list_text.clone(),
    );
    info!(
        nickname = %config.help.nickname,
        plugins = plugins.len(),
        commands = router.commands().len(),
        "Starting helpbot"
    );

    let mut bus = EventBus::new();
    for plugin in plugins {
        plugin.attach(&mut bus);
    }
    Arc::new(router).attach(&mut bus);

    let options = ConsoleOptions {
        command_prefix: config.help.command_prefix.clone(),
        nickname: config.help.nickname.clone(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        match console::process_line(&bus, &line, &options) {
            Ok(replies) => {
                for reply in replies {
                    writeln!(stdout, "{reply}")?;
                }
            }
            Err(e) => warn!(line = %line, error = %e, code = e.error_code(), "Ignoring line"),
        }
    }

    Ok(())
}

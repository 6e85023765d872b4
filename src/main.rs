//! ipa - upload iOS builds over FTP and SFTP
//!
//! Usage: ipa <COMMAND>
//!
//! Commands:
//!   distribute:ftp   Distribute an .ipa file over FTP
//!   distribute:sftp  Distribute an .ipa file over SFTP

mod commands;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ipa_ship::presentation::Cli;
use ipa_ship::Config;

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, warnings) = Config::load_or_default_with_warnings(Some(&cwd));
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    let command = cli.command.name();
    let (args, pinned) = cli.command.distribute();
    let result =
        commands::distribute::cmd_distribute(command, args, pinned, &config, &warnings, &cwd, &ui);

    if let Err(err) = result {
        ui::error::print_error(&err, command, ui.json, ui.color, ui.unicode);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - `distribute:*` subcommands free `-h` for `--host`; help is `--help` only

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::Protocol;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ipa - upload iOS builds to FTP and SFTP servers
#[derive(Parser, Debug)]
#[command(name = "ipa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Distribute an .ipa file over FTP
    #[command(name = "distribute:ftp", disable_help_flag = true)]
    DistributeFtp(DistributeArgs),

    /// Distribute an .ipa file over SFTP
    #[command(name = "distribute:sftp", disable_help_flag = true)]
    DistributeSftp(DistributeArgs),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::DistributeFtp(_) => "distribute:ftp",
            Commands::DistributeSftp(_) => "distribute:sftp",
        }
    }

    /// Arguments plus the protocol the subcommand pins, if any
    pub fn distribute(&self) -> (&DistributeArgs, Option<Protocol>) {
        match self {
            Commands::DistributeFtp(args) => (args, None),
            Commands::DistributeSftp(args) => (args, Some(Protocol::Sftp)),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct DistributeArgs {
    /// .ipa file for the build
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// zipped .dsym package for the build
    #[arg(short = 'd', long = "dsym", value_name = "FILE")]
    pub dsym: Option<PathBuf>,

    /// FTP host (host or host:port)
    #[arg(short = 'h', long, value_name = "HOST")]
    pub host: Option<String>,

    /// FTP user
    #[arg(short = 'u', long, value_name = "USER")]
    pub user: Option<String>,

    /// FTP password
    #[arg(short = 'p', long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// FTP path, may contain {CFBundle...} placeholders
    #[arg(short = 'P', long, value_name = "PATH")]
    pub path: Option<String>,

    /// FTP protocol
    #[arg(long, value_enum, value_name = "PROTOCOL")]
    pub protocol: Option<Protocol>,

    /// Create directories on FTP if they don't already exist
    #[arg(long, overrides_with = "no_mkdir")]
    pub mkdir: bool,

    /// Do not create missing directories
    #[arg(long = "no-mkdir", overrides_with = "mkdir")]
    pub no_mkdir: bool,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,
}

impl DistributeArgs {
    /// Explicit `--mkdir` / `--no-mkdir`, the last one given wins
    pub fn mkdir(&self) -> Option<bool> {
        if self.no_mkdir {
            Some(false)
        } else if self.mkdir {
            Some(true)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_distribute_ftp_short_flags() {
        let cli = parse(&[
            "ipa",
            "distribute:ftp",
            "-f",
            "app.ipa",
            "-d",
            "app.dSYM.zip",
            "-h",
            "ftp.example.com",
            "-u",
            "ci",
            "-p",
            "secret",
            "-P",
            "/releases/{CFBundleVersion}",
        ]);

        let (args, pinned) = cli.command.distribute();
        assert_eq!(pinned, None);
        assert_eq!(args.file, Some(PathBuf::from("app.ipa")));
        assert_eq!(args.dsym, Some(PathBuf::from("app.dSYM.zip")));
        assert_eq!(args.host.as_deref(), Some("ftp.example.com"));
        assert_eq!(args.user.as_deref(), Some("ci"));
        assert_eq!(args.password.as_deref(), Some("secret"));
        assert_eq!(args.path.as_deref(), Some("/releases/{CFBundleVersion}"));
        assert_eq!(args.mkdir(), None);
    }

    #[test]
    fn test_distribute_sftp_pins_protocol() {
        let cli = parse(&["ipa", "distribute:sftp", "--host", "example.com"]);
        let (_, pinned) = cli.command.distribute();
        assert_eq!(pinned, Some(Protocol::Sftp));
    }

    #[test]
    fn test_protocol_flag() {
        let cli = parse(&["ipa", "distribute:ftp", "--protocol", "sftp"]);
        let (args, _) = cli.command.distribute();
        assert_eq!(args.protocol, Some(Protocol::Sftp));
    }

    #[test]
    fn test_mkdir_flags_last_wins() {
        let cli = parse(&["ipa", "distribute:ftp", "--no-mkdir"]);
        assert_eq!(cli.command.distribute().0.mkdir(), Some(false));

        let cli = parse(&["ipa", "distribute:ftp", "--no-mkdir", "--mkdir"]);
        assert_eq!(cli.command.distribute().0.mkdir(), Some(true));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["ipa", "distribute:ftp", "--json", "-vv", "--color", "never"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["ipa"]).is_err());
    }
}

//! `distribute:ftp` / `distribute:sftp` entry point

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::info;

use ipa_ship::config::{Config, ConfigWarning, ENV_PREFIX};
use ipa_ship::presentation::{create_uploader, DistributeArgs};
use ipa_ship::{Credentials, HostAddress, Protocol, UploadRequest};

use super::prompts::{
    determine_dsym, determine_file, determine_password, determine_value, Prompter,
};
use crate::ui::blocks::warning::render_warning;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent, WarningEvent};
use crate::ui::views::upload::{
    failure_message, render_upload_failure, render_upload_header, render_upload_success,
    SUCCESS_MESSAGE,
};

pub const MISSING_PACKAGE: &str = "Missing or unspecified .ipa file";
pub const MISSING_DSYM: &str = "Specified dSYM.zip file doesn't exist";
pub const NO_DSYM_FOUND: &str = "No dSYM.zip file found, uploading the .ipa only";
pub const MISSING_HOST: &str = "Missing FTP host";
pub const MISSING_USER: &str = "Missing FTP user";
pub const MISSING_PASSWORD: &str = "Missing FTP password";

/// Everything needed to run one upload
#[derive(Debug)]
struct Invocation {
    protocol: Protocol,
    credentials: Credentials,
    request: UploadRequest,
}

/// Distribute command entry point
///
/// Missing inputs are errors (non-zero exit). A failed upload is reported
/// and still returns `Ok`.
pub fn cmd_distribute(
    command: &str,
    args: &DistributeArgs,
    pinned: Option<Protocol>,
    config: &Config,
    config_warnings: &[ConfigWarning],
    cwd: &Path,
    ui: &UiContext,
) -> Result<()> {
    for w in config_warnings {
        warn(ui, command, &format_config_warning(w))?;
    }

    let invocation = resolve(command, args, pinned, config, cwd, ui)?;
    let Invocation {
        protocol,
        credentials,
        request,
    } = invocation;
    let host = credentials.host.to_string();

    if ui.json {
        let start = StartEvent::new(
            command,
            protocol.as_str(),
            &host,
            request.package_path().display().to_string(),
        )
        .with_dsym(request.symbol_archive_path().map(|p| p.display().to_string()));
        emit_event(&start)?;
    } else {
        print!(
            "{}",
            render_upload_header(
                protocol,
                &host,
                request.package_path(),
                request.symbol_archive_path(),
                request.destination().as_str(),
                ui.color,
                ui.unicode,
            )
        );
    }

    info!(protocol = %protocol, host = %host, "starting upload");
    let uploader = create_uploader(protocol, credentials);
    match uploader.upload(&request) {
        Ok(report) => {
            if ui.json {
                emit_event(&CompleteEvent::success(command, SUCCESS_MESSAGE, &report))?;
            } else {
                print!("{}", render_upload_success(&report, ui.color, ui.unicode));
            }
        }
        Err(err) => {
            if ui.json {
                emit_event(&CompleteEvent::error(command, failure_message(&err)))?;
            } else {
                eprint!("{}", render_upload_failure(&err, ui.color, ui.unicode));
            }
        }
    }
    Ok(())
}

fn resolve(
    command: &str,
    args: &DistributeArgs,
    pinned: Option<Protocol>,
    config: &Config,
    cwd: &Path,
    ui: &UiContext,
) -> Result<Invocation> {
    let prompter = Prompter::new(ui);
    let defaults = &config.distribute;

    let package = determine_file(args.file.as_deref(), cwd, &prompter)?
        .map(|p| absolutize(cwd, p))
        .filter(|p| p.is_file());
    let Some(package) = package else {
        bail!(MISSING_PACKAGE);
    };

    let dsym = match determine_dsym(args.dsym.as_deref(), cwd, &prompter)? {
        Some(p) => {
            let p = absolutize(cwd, p);
            if p.is_file() {
                Some(p)
            } else {
                warn(ui, command, MISSING_DSYM)?;
                None
            }
        }
        None => {
            warn(ui, command, NO_DSYM_FOUND)?;
            None
        }
    };

    let host = determine_value(args.host.clone(), defaults.host.clone(), &prompter, "FTP Host")?;
    let Some(host) = host else {
        bail!(MISSING_HOST);
    };
    let host = HostAddress::parse(&host)?;

    let user = determine_value(args.user.clone(), defaults.user.clone(), &prompter, "Username")?;
    let Some(user) = user else {
        bail!(MISSING_USER);
    };

    let env_password = std::env::var(format!("{}PASSWORD", ENV_PREFIX)).ok();
    let password = determine_password(args.password.clone(), env_password, &prompter)?;
    let Some(password) = password else {
        bail!(MISSING_PASSWORD);
    };

    let protocol = pinned
        .or(args.protocol)
        .or(defaults.protocol)
        .unwrap_or_default();
    let path = args
        .path
        .clone()
        .or_else(|| defaults.path.clone())
        .unwrap_or_default();
    let mkdir = args.mkdir().unwrap_or(defaults.mkdir);

    let request = UploadRequest::new(package)
        .with_symbol_archive(dsym)
        .with_destination(path)
        .with_create_directories(mkdir);

    Ok(Invocation {
        protocol,
        credentials: Credentials::new(host, user, password),
        request,
    })
}

fn absolutize(cwd: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

fn warn(ui: &UiContext, command: &str, message: &str) -> Result<()> {
    if ui.json {
        emit_event(&WarningEvent::new(command, message))?;
    } else {
        eprint!("{}", render_warning(message, ui.color, ui.unicode));
    }
    Ok(())
}

fn format_config_warning(w: &ConfigWarning) -> String {
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };
    match &w.suggestion {
        Some(s) => format!(
            "Unknown config key '{}' at {} (did you mean '{}'?)",
            w.key, location, s
        ),
        None => format!("Unknown config key '{}' at {}", w.key, location),
    }
}

//! JSON event types for `--json` output.
//!
//! One object per line on stdout, always with an `event` field.

use serde::Serialize;

use ipa_ship::UploadReport;

/// Upload is about to start
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub protocol: &'static str,
    pub host: &'a str,
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dsym: Option<String>,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, protocol: &'static str, host: &'a str, package: String) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            protocol,
            host,
            package,
            dsym: None,
        }
    }

    pub fn with_dsym(mut self, dsym: Option<String>) -> Self {
        self.dsym = dsym;
        self
    }
}

/// Non-fatal problem (missing dSYM, config warnings)
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadedFileJson {
    pub local: String,
    pub remote: String,
    pub bytes: u64,
}

/// Upload finished, successfully or not
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_dir: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directories: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<UploadedFileJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bytes: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str, message: impl Into<String>, report: &UploadReport) -> Self {
        Self {
            event: "complete",
            command,
            status: "success",
            message: message.into(),
            remote_dir: Some(report.remote_dir.to_string()),
            directories: report.directories.clone(),
            files: report
                .uploaded
                .iter()
                .map(|f| UploadedFileJson {
                    local: f.local.display().to_string(),
                    remote: f.remote.clone(),
                    bytes: f.bytes,
                })
                .collect(),
            total_bytes: Some(report.total_bytes()),
        }
    }

    pub fn error(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "complete",
            command,
            status: "error",
            message: message.into(),
            remote_dir: None,
            directories: Vec::new(),
            files: Vec::new(),
            total_bytes: None,
        }
    }
}

/// The command could not run (missing input, bad config)
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

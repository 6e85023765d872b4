use std::path::Path;

use ipa_ship::domain::ports::UploadError;
use ipa_ship::{Protocol, UploadReport};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const SUCCESS_MESSAGE: &str = "Build successfully uploaded to FTP";
pub const FAILURE_PREFIX: &str = "Error while uploading to FTP";

pub fn render_upload_header(
    protocol: Protocol,
    host: &str,
    package: &Path,
    symbol_archive: Option<&Path>,
    path: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Upload, format!("Distribute ({})", protocol));
    header.add("Host", host);
    header.add("Package", package.display().to_string());
    if let Some(dsym) = symbol_archive {
        header.add("dSYM", dsym.display().to_string());
    }
    if !path.is_empty() {
        header.add("Path", path);
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_upload_success(
    report: &UploadReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(SUCCESS_MESSAGE)
            .bold()
            .render(supports_color)
    );
    for file in &report.uploaded {
        out.push_str(&format!(
            "  {} {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            file.remote,
            ColoredText::dim(format!("({})", format_bytes_compact(file.bytes)))
                .render(supports_color)
        ));
    }
    out
}

pub fn render_upload_failure(
    err: &UploadError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(failure_message(err)).render(supports_color)
    )
}

pub fn failure_message(err: &UploadError) -> String {
    format!("{}: {}", FAILURE_PREFIX, err)
}

pub fn format_bytes_compact(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        return format!("{} B", bytes);
    }
    if b < MB {
        return format!("{:.1} KB", b / KB);
    }
    if b < GB {
        return format!("{:.1} MB", b / MB);
    }
    format!("{:.1} GB", b / GB)
}

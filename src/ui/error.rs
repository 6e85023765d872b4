use ipa_ship::ShipError;

use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let mut out = format!(
        "{} {}\n",
        icon,
        ColoredText::error(err.to_string()).render(supports_color)
    );

    if let Some(hint) = err.downcast_ref::<ShipError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(format!("Fix: {}", hint)).render(supports_color)
        ));
    }
    out
}

fn fix_hint(err: &ShipError) -> Option<String> {
    match err {
        ShipError::InvalidConfig { file, .. } => {
            Some(format!("correct the TOML syntax in {}", file.display()))
        }
        ShipError::InvalidHost { .. } => Some("use host, host:port or [ipv6]:port".to_string()),
        ShipError::UnknownProtocol(_) => Some("use --protocol ftp or --protocol sftp".to_string()),
        ShipError::Io(_) => None,
    }
}

pub fn print_error(
    err: &anyhow::Error,
    command: &str,
    json: bool,
    supports_color: bool,
    supports_unicode: bool,
) {
    if json {
        let _ = emit_event(&ErrorEvent::new(command, err.to_string()));
        return;
    }
    eprint!("{}", format_error(err, supports_color, supports_unicode));
}

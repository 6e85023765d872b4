//! NDJSON output for `--json`.
//!
//! ```ignore
//! use crate::ui::json::{emit_event, events::WarningEvent};
//!
//! emit_event(&WarningEvent::new("distribute:ftp", "no dSYM found"))?;
//! ```

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use events::*;
    use ipa_ship::{Protocol, RemoteDir, UploadReport};

    #[test]
    fn start_event_is_one_json_line() {
        let mut buffer = Vec::new();
        let event = StartEvent::new("distribute:ftp", "ftp", "example.com", "App.ipa".into());

        write_typed_event(&mut buffer, &event).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));
        assert_eq!(output.lines().count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["event"], "start");
        assert_eq!(parsed["protocol"], "ftp");
        assert!(parsed.get("dsym").is_none());
    }

    #[test]
    fn error_completion_omits_report_fields() {
        let mut buffer = Vec::new();
        write_typed_event(&mut buffer, &CompleteEvent::error("distribute:ftp", "boom")).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(String::from_utf8(buffer).unwrap().trim()).unwrap();
        assert_eq!(parsed["status"], "error");
        assert!(parsed.get("files").is_none());
        assert!(parsed.get("remote_dir").is_none());
    }

    #[test]
    fn success_completion_carries_totals() {
        let report = UploadReport::new(Protocol::Sftp, "h", RemoteDir::new("/r"));
        let mut buffer = Vec::new();
        write_typed_event(
            &mut buffer,
            &CompleteEvent::success("distribute:sftp", "ok", &report),
        )
        .unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(String::from_utf8(buffer).unwrap().trim()).unwrap();
        assert_eq!(parsed["status"], "success");
        assert_eq!(parsed["remote_dir"], "/r");
        assert_eq!(parsed["total_bytes"], 0);
    }
}

//! JSON output utilities for CLI commands.
//!
//! With `--json` every command writes NDJSON (one JSON object per line) to
//! stdout, using the typed events from [`events`].

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
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use events::*;

    #[test]
    fn write_typed_event_writes_valid_json() {
        let mut buffer = Vec::new();
        let event = StartEvent::new("test");

        write_typed_event(&mut buffer, &event).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["event"], "start");
        assert_eq!(parsed["command"], "test");
    }

    #[test]
    fn write_typed_event_writes_ndjson_format() {
        let mut buffer = Vec::new();

        write_typed_event(&mut buffer, &StartEvent::new("write")).unwrap();
        write_typed_event(&mut buffer, &WriteEvent::accepted(12.0, 12.0)).unwrap();
        write_typed_event(&mut buffer, &CompleteEvent::success("write")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        for line in lines {
            assert!(serde_json::from_str::<serde_json::Value>(line).is_ok());
        }
    }
}

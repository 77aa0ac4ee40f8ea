use anyhow::{Context, Result};

use super::Session;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ConfigEvent, StartEvent};
use crate::ui::output::skip_reason;

pub fn cmd_config(session: &Session) -> Result<()> {
    let source = session.source.as_ref().map(|p| p.display().to_string());

    if session.json {
        let warnings = session
            .warnings
            .iter()
            .map(|w| format!("unknown key '{}' in {}", w.key, w.file.display()))
            .chain(
                session
                    .skipped
                    .iter()
                    .map(|s| format!("ignored {}: {}", s.file.display(), skip_reason(&s.error))),
            )
            .collect();
        emit_event(&StartEvent::new("config"))?;
        emit_event(&ConfigEvent::new(&session.config, source, warnings))?;
        emit_event(&CompleteEvent::success("config"))?;
        return Ok(());
    }

    match source {
        Some(path) => println!("# loaded from {}", path),
        None => println!("# built-in defaults"),
    }
    let rendered = session
        .config
        .to_toml()
        .context("failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}

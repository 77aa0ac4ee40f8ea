use std::io::{self, Write};

use circle_lab::config::SkippedConfig;
use circle_lab::{ConfigWarning, LabError, Verbosity};

use crate::ui::log::Logger;
use crate::ui::terminal::detect_capabilities;

fn warning_icon(unicode: bool) -> &'static str {
    if unicode {
        "⚠"
    } else {
        "!"
    }
}

/// Unknown-key warnings, suppressed at `verbosity = "quiet"`
pub fn print_config_warnings(log: &Logger, warnings: &[ConfigWarning]) {
    if !log.enabled(Verbosity::Normal) {
        return;
    }
    let unicode = detect_capabilities().supports_unicode;
    let mut err = io::stderr().lock();
    let _ = write_config_warnings(&mut err, warnings, unicode);
}

pub fn print_skipped_configs(log: &Logger, skipped: &[SkippedConfig]) {
    let unicode = detect_capabilities().supports_unicode;
    for s in skipped {
        log.info(skipped_line(s, unicode));
    }
}

pub(crate) fn skipped_line(skipped: &SkippedConfig, unicode: bool) -> String {
    format!(
        "{} Ignoring config {}: {}",
        warning_icon(unicode),
        skipped.file.display(),
        skip_reason(&skipped.error)
    )
}

/// Error text without the file name, which callers already print
pub(crate) fn skip_reason(err: &LabError) -> String {
    match err {
        LabError::InvalidConfig { message, .. } => message.trim_end().to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn write_config_warnings(
    out: &mut impl Write,
    warnings: &[ConfigWarning],
    unicode: bool,
) -> io::Result<()> {
    let icon = warning_icon(unicode);
    for w in warnings {
        if let Some(line) = w.line {
            writeln!(
                out,
                "{} Unknown config key '{}' in {}:{}",
                icon,
                w.key,
                w.file.display(),
                line
            )?;
        } else {
            writeln!(
                out,
                "{} Unknown config key '{}' in {}",
                icon,
                w.key,
                w.file.display()
            )?;
        }

        if let Some(suggestion) = &w.suggestion {
            writeln!(out, "   Did you mean '{}'?", suggestion)?;
        }
    }
    Ok(())
}

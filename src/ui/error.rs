use circle_lab::{HiddenValue, LabError, ValidationError};

use crate::ui::terminal::detect_capabilities;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Stable machine-readable code for an error, used in JSON error events
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<ValidationError>().is_some() {
        return "VALIDATION";
    }
    match err.downcast_ref::<LabError>() {
        Some(LabError::Validation(_)) => "VALIDATION",
        Some(LabError::InvalidConfig { .. }) => "INVALID_CONFIG",
        Some(LabError::ConfigNotFound { .. }) => "CONFIG_NOT_FOUND",
        Some(LabError::Io(_)) => "IO",
        None => "ERROR",
    }
}

/// Suggested fix for an error, if there is one
pub fn error_help(err: &anyhow::Error) -> Option<String> {
    let validation = err.downcast_ref::<ValidationError>().or_else(|| {
        match err.downcast_ref::<LabError>() {
            Some(LabError::Validation(v)) => Some(v),
            _ => None,
        }
    });
    if validation.is_some() {
        return Some(format!("value must be at least {}", HiddenValue::MINIMUM));
    }

    match err.downcast_ref::<LabError>() {
        Some(LabError::InvalidConfig { .. }) => {
            Some("Fix the TOML syntax or value types and try again.".to_string())
        }
        Some(LabError::ConfigNotFound { .. }) => {
            Some("Check the --config path, or omit it to use the default lookup.".to_string())
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    format_error_with(err, caps.supports_color)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool) -> String {
    let tag = if supports_color {
        format!("{RED}[ERROR]{RESET}")
    } else {
        "[ERROR]".to_string()
    };

    let mut out = format!("{} {}\n", tag, err);
    if let Some(help) = error_help(err) {
        out.push_str(&format!("  Fix: {}\n", help));
    }
    out
}

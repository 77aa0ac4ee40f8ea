//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

use circle_lab::serde_float::serialize_f64;
use circle_lab::{Circle, Config, ContainerSnapshot};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
        }
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// One attempted write to a container's hidden value.
#[derive(Debug, Clone, Serialize)]
pub struct WriteEvent {
    pub event: &'static str,
    #[serde(serialize_with = "serialize_f64")]
    pub value: f64,
    pub accepted: bool,
    /// Hidden value after the attempt
    #[serde(serialize_with = "serialize_f64")]
    pub hidden_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WriteEvent {
    pub fn accepted(value: f64, hidden_value: f64) -> Self {
        Self {
            event: "write",
            value,
            accepted: true,
            hidden_value,
            error: None,
        }
    }

    pub fn rejected(value: f64, hidden_value: f64, error: impl Into<String>) -> Self {
        Self {
            event: "write",
            value,
            accepted: false,
            hidden_value,
            error: Some(error.into()),
        }
    }
}

/// Container state plus its description.
#[derive(Debug, Clone, Serialize)]
pub struct DescribeEvent {
    pub event: &'static str,
    #[serde(flatten)]
    pub container: ContainerSnapshot,
    pub description: String,
}

impl DescribeEvent {
    pub fn new(container: ContainerSnapshot, description: impl Into<String>) -> Self {
        Self {
            event: "describe",
            container,
            description: description.into(),
        }
    }
}

/// A built circle and its draw output.
#[derive(Debug, Clone, Serialize)]
pub struct CircleEvent {
    pub event: &'static str,
    #[serde(flatten)]
    pub circle: Circle,
    pub draw: String,
}

impl CircleEvent {
    pub fn new(circle: Circle) -> Self {
        Self {
            event: "circle",
            draw: circle.draw(),
            circle,
        }
    }
}

/// Effective configuration and where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigEvent<'a> {
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub config: &'a Config,
    pub warnings: Vec<String>,
}

impl<'a> ConfigEvent<'a> {
    pub fn new(config: &'a Config, source: Option<String>, warnings: Vec<String>) -> Self {
        Self {
            event: "config",
            source,
            config,
            warnings,
        }
    }
}

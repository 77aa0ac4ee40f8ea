use anyhow::{Context, Result};

use circle_lab::{ValidatedContainer, ValidationError};

use super::Session;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DescribeEvent, StartEvent, WriteEvent};

/// Outcome of applying a batch of values to one container
#[derive(Debug)]
pub struct WriteReport {
    pub container: ValidatedContainer,
    pub attempts: Vec<WriteAttempt>,
}

#[derive(Debug)]
pub struct WriteAttempt {
    pub value: f64,
    /// Hidden value after the attempt
    pub hidden_value: f64,
    pub error: Option<ValidationError>,
}

impl WriteReport {
    pub fn rejected(&self) -> impl Iterator<Item = &WriteAttempt> {
        self.attempts.iter().filter(|a| a.error.is_some())
    }
}

/// Apply `values` in order; a rejected value leaves the container as it was.
pub fn apply_writes(mut container: ValidatedContainer, values: &[f64]) -> WriteReport {
    let mut attempts = Vec::with_capacity(values.len());
    for &value in values {
        let error = container.write(value).err();
        attempts.push(WriteAttempt {
            value,
            hidden_value: container.read(),
            error,
        });
    }
    WriteReport {
        container,
        attempts,
    }
}

pub fn cmd_write(session: &Session, values: &[f64], radius: Option<f64>) -> Result<()> {
    let container = ValidatedContainer::create(session.radius(radius));
    session.log.debug(format!(
        "applying {} value(s) to container with radius {}",
        values.len(),
        container.radius
    ));

    if session.json {
        emit_event(&StartEvent::new("write"))?;
    }

    let report = apply_writes(container, values);

    for attempt in &report.attempts {
        match &attempt.error {
            None => {
                if session.json {
                    emit_event(&WriteEvent::accepted(attempt.value, attempt.hidden_value))?;
                } else {
                    println!("accepted {} -> hidden value {}", attempt.value, attempt.hidden_value);
                }
            }
            Some(err) => {
                if session.json {
                    emit_event(&WriteEvent::rejected(
                        attempt.value,
                        attempt.hidden_value,
                        err.reason.clone(),
                    ))?;
                } else {
                    println!(
                        "rejected {}: {} -> hidden value {}",
                        attempt.value, err.reason, attempt.hidden_value
                    );
                }
            }
        }
    }

    let container = &report.container;
    if session.json {
        emit_event(&DescribeEvent::new(container.snapshot(), container.describe()))?;
    } else {
        println!("{}", container.describe());
    }

    let rejected = report.rejected().count();
    if let Some(first) = report.rejected().find_map(|a| a.error.clone()) {
        return Err(first)
            .with_context(|| format!("{} of {} writes rejected", rejected, values.len()));
    }

    if session.json {
        emit_event(&CompleteEvent::success("write"))?;
    }
    Ok(())
}

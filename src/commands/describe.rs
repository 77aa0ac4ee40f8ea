use anyhow::Result;

use circle_lab::ValidatedContainer;

use super::Session;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DescribeEvent, StartEvent};

pub fn cmd_describe(session: &Session, radius: Option<f64>) -> Result<()> {
    let container = ValidatedContainer::create(session.radius(radius));
    session.log.verbose(format!("created container with radius {}", container.radius));

    if session.json {
        emit_event(&StartEvent::new("describe"))?;
        emit_event(&DescribeEvent::new(container.snapshot(), container.describe()))?;
        emit_event(&CompleteEvent::success("describe"))?;
    } else {
        println!("{}", container.describe());
    }

    Ok(())
}

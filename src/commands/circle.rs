use anyhow::Result;

use circle_lab::{create_circle, Circle, Location};

use super::Session;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CircleEvent, CompleteEvent, StartEvent};

/// Pick the construction path the flags ask for
pub fn build_circle(radius: f64, literal: bool, at: Option<(f64, f64)>) -> Circle {
    let circle = if literal {
        Circle::literal()
    } else {
        create_circle(radius)
    };

    match at {
        Some((x, y)) => circle.with_location(Location::new(x, y)),
        None => circle,
    }
}

pub fn cmd_circle(
    session: &Session,
    radius: Option<f64>,
    literal: bool,
    at: Option<(f64, f64)>,
) -> Result<()> {
    let circle = build_circle(session.radius(radius), literal, at);
    session.log.debug(format!(
        "built circle via {}",
        if literal { "literal" } else { "factory" }
    ));

    if session.json {
        emit_event(&StartEvent::new("circle"))?;
        emit_event(&CircleEvent::new(circle))?;
        emit_event(&CompleteEvent::success("circle"))?;
        return Ok(());
    }

    println!("{}", circle.draw());
    match circle.location {
        Some(location) => println!("radius {} at {}", circle.radius, location),
        None => println!("radius {}", circle.radius),
    }
    Ok(())
}

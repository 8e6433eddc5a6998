//! Stages command - List the review stages

use std::path::Path;

use crate::domain::STAGES;
use crate::errors::Result;
use crate::schemas::OutputFormat;

use super::{to_pretty_json, CommandContext};

/// List the review stages
pub fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let ctx = CommandContext::load(cwd)?;
    println!("{}", render(ctx.output(json))?);
    Ok(())
}

pub(crate) fn render(output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Json => to_pretty_json(&STAGES),
        OutputFormat::Text => Ok(STAGES
            .iter()
            .map(|s| format!("{}. {:<20} {}", s.number, s.label, s.description))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

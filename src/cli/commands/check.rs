//! Check command - Test whether a session may move to a stage

use std::path::Path;

use serde::Serialize;

use crate::domain::WorkflowController;
use crate::errors::{NavigationError, Result};
use crate::schemas::OutputFormat;

use super::{to_pretty_json, CommandContext};

/// Outcome of a navigation check
#[derive(Debug, Serialize)]
pub(crate) struct CheckReport {
    pub from_stage: u8,
    pub to_stage: u8,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Sync a controller to the session and attempt to move it to `stage`.
///
/// A rejected move is printed and then returned as an error so the process
/// exits non-zero.
pub fn run(cwd: Option<&Path>, session: &str, stage: u8, json: bool) -> Result<()> {
    let ctx = CommandContext::load(cwd)?;
    let mut controller = ctx.controller_for(session)?;
    let (report, outcome) = check(&mut controller, stage);
    println!("{}", render(&report, ctx.output(json))?);
    outcome.map_err(Into::into)
}

pub(crate) fn check(
    controller: &mut WorkflowController,
    stage: u8,
) -> (CheckReport, std::result::Result<(), NavigationError>) {
    let from_stage = controller.current_stage();
    let outcome = controller.go_to(stage);
    let report = CheckReport {
        from_stage,
        to_stage: stage,
        allowed: outcome.is_ok(),
        code: outcome.as_ref().err().map(NavigationError::code),
        reason: outcome.as_ref().err().map(ToString::to_string),
    };
    (report, outcome)
}

pub(crate) fn render(report: &CheckReport, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Json => to_pretty_json(report),
        OutputFormat::Text => Ok(match &report.reason {
            None => format!("Stage {} -> {}: allowed", report.from_stage, report.to_stage),
            Some(reason) => format!(
                "Stage {} -> {}: rejected ({})",
                report.from_stage, report.to_stage, reason
            ),
        }),
    }
}

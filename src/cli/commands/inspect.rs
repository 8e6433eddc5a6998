//! Inspect command - Show where a session stands

use std::path::Path;

use crate::domain::{StepState, WorkflowController};
use crate::errors::Result;
use crate::schemas::{OutputFormat, SessionCode};

use super::{to_pretty_json, CommandContext};

/// Show the current stage, reachability and blocking guards of a session
pub fn run(cwd: Option<&Path>, session: &str, json: bool) -> Result<()> {
    let ctx = CommandContext::load(cwd)?;
    let controller = ctx.controller_for(session)?;
    println!("{}", render(&controller, ctx.output(json))?);
    Ok(())
}

fn marker(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "[x]",
        StepState::Current => "[>]",
        StepState::Available => "[ ]",
        StepState::Locked => "[-]",
    }
}

pub(crate) fn render(controller: &WorkflowController, output: OutputFormat) -> Result<String> {
    let summary = controller.summary();
    if output == OutputFormat::Json {
        return to_pretty_json(&summary);
    }

    let mut lines = Vec::new();
    if let Some(code) = summary.session_code.as_deref() {
        match SessionCode::parse(code) {
            Ok(parsed) => lines.push(format!("Session: {} (created {})", code, parsed.date)),
            Err(_) => lines.push(format!("Session: {}", code)),
        }
    }
    if let Some(status) = summary.status {
        lines.push(format!("Status: {}", status));
    }
    lines.push(format!(
        "Stage {}: {} - {}",
        summary.current_stage, summary.current_label, summary.current_description
    ));
    lines.push(format!("Reachable up to stage {}", summary.max_reachable_stage));
    lines.push(String::new());
    for step in &summary.steps {
        lines.push(format!("{} {}. {}", marker(step.state), step.stage.number, step.stage.label));
    }
    if !summary.blocking.is_empty() {
        lines.push(String::new());
        lines.push("Blocking:".to_string());
        for message in &summary.blocking {
            lines.push(format!("  - {}", message));
        }
    }
    Ok(lines.join("\n"))
}

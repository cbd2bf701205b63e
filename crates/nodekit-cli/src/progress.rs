//! Terminal rendering of setup progress.

use std::io;

use serde_json::{Map, Value, json};
use tracing::debug;

use nodekit_core::application::{ProgressEvent, ProgressReporter};
use nodekit_core::domain::SetupAnswers;

use crate::cli::OutputFormat;
use crate::output::OutputManager;

/// [`ProgressReporter`] that writes through the [`OutputManager`].
///
/// Human and plain formats print one line per event (several for the
/// summary and the package plan); the JSON format prints one object per
/// event.
pub struct TerminalReporter {
    output: OutputManager,
}

impl TerminalReporter {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }

    fn render(&self, event: &ProgressEvent) -> io::Result<()> {
        let out = &self.output;
        match event {
            ProgressEvent::Step {
                index,
                total,
                title,
            } => out.header(&format!("\n[{index}/{total}] {title}")),
            ProgressEvent::Summary(answers) => {
                out.header("\nSetup summary")?;
                for line in summary_lines(answers) {
                    out.print(&format!("  {line}"))?;
                }
                Ok(())
            }
            ProgressEvent::PackagePlan { manager, groups } => {
                out.header(&format!("\nPackages to install with {manager}"))?;
                for group in groups {
                    out.print(&format!("  {}:", group.group.label()))?;
                    for package in &group.packages {
                        out.detail(&format!("    \u{2022} {package}"))?;
                    }
                }
                Ok(())
            }
            ProgressEvent::Installing { command } => out.info(&format!("Running {command}")),
            ProgressEvent::Installed { count } => {
                out.success(&format!("Installed {count} packages"))
            }
            ProgressEvent::FileWritten { path, overwritten } => {
                if *overwritten {
                    out.warning(&format!("{} already existed and was overwritten", path.display()))
                } else {
                    out.success(&format!("Created {}", path.display()))
                }
            }
            ProgressEvent::FileUpdated { path, change } => {
                out.success(&format!("Updated {}: {change}", path.display()))
            }
            ProgressEvent::HookWritten {
                name,
                description,
                overwritten,
            } => {
                if *overwritten {
                    out.warning(&format!("{name} hook already existed and was replaced"))
                } else {
                    out.success(&format!("{name} hook: {description}"))
                }
            }
            ProgressEvent::Skipped { path, reason } => {
                out.warning(&format!("Skipped {}: {reason}", path.display()))
            }
            ProgressEvent::Info(message) => out.info(message),
            ProgressEvent::Warning(message) => out.warning(message),
            ProgressEvent::Declined => out.info("Installation declined, nothing was changed"),
            ProgressEvent::Cancelled => out.info("Setup cancelled"),
            ProgressEvent::Completed => out.success("Setup complete"),
        }
    }
}

impl ProgressReporter for TerminalReporter {
    fn report(&self, event: ProgressEvent) {
        let result = if self.output.format() == OutputFormat::Json {
            self.output.json(&event_json(&event))
        } else {
            self.render(&event)
        };
        if let Err(e) = result {
            debug!(error = %e, "failed to write progress");
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// The answer lines shown before the package plan.
///
/// Tailwind and Storybook only apply to React-family projects.
fn summary_lines(answers: &SetupAnswers) -> Vec<String> {
    let mut lines = vec![format!("Framework: {}", answers.framework().label())];
    if answers.framework().is_react_family() {
        lines.push(format!("Tailwind CSS: {}", yes_no(answers.use_tailwind())));
        lines.push(format!("Storybook: {}", yes_no(answers.use_storybook())));
    }
    lines.push(format!(
        "TypeScript alias: {}",
        yes_no(answers.use_typescript_alias())
    ));
    lines.push(format!(".gitignore: {}", yes_no(answers.use_gitignore())));
    lines
}

/// `{"event": "summary"}` followed by the serialized answers.
fn summary_json(answers: &SetupAnswers) -> Value {
    let mut object = Map::new();
    object.insert("event".into(), Value::String("summary".into()));
    match serde_json::to_value(answers) {
        Ok(Value::Object(fields)) => object.extend(fields),
        Ok(_) => {}
        Err(e) => debug!(error = %e, "could not encode setup answers"),
    }
    Value::Object(object)
}

fn event_json(event: &ProgressEvent) -> Value {
    match event {
        ProgressEvent::Step {
            index,
            total,
            title,
        } => json!({ "event": "step", "index": index, "total": total, "title": title }),
        ProgressEvent::Summary(answers) => summary_json(answers),
        ProgressEvent::PackagePlan { manager, groups } => json!({
            "event": "package_plan",
            "manager": manager,
            "groups": groups
                .iter()
                .map(|g| json!({ "group": g.group.label(), "packages": g.packages }))
                .collect::<Vec<_>>(),
        }),
        ProgressEvent::Installing { command } => {
            json!({ "event": "installing", "command": command })
        }
        ProgressEvent::Installed { count } => json!({ "event": "installed", "count": count }),
        ProgressEvent::FileWritten { path, overwritten } => json!({
            "event": "file_written",
            "path": path.display().to_string(),
            "overwritten": overwritten,
        }),
        ProgressEvent::FileUpdated { path, change } => json!({
            "event": "file_updated",
            "path": path.display().to_string(),
            "change": change,
        }),
        ProgressEvent::HookWritten {
            name,
            description,
            overwritten,
        } => json!({
            "event": "hook_written",
            "name": name,
            "description": description,
            "overwritten": overwritten,
        }),
        ProgressEvent::Skipped { path, reason } => json!({
            "event": "skipped",
            "path": path.display().to_string(),
            "reason": reason,
        }),
        ProgressEvent::Info(message) => json!({ "event": "info", "message": message }),
        ProgressEvent::Warning(message) => json!({ "event": "warning", "message": message }),
        ProgressEvent::Declined => json!({ "event": "declined" }),
        ProgressEvent::Cancelled => json!({ "event": "cancelled" }),
        ProgressEvent::Completed => json!({ "event": "completed" }),
    }
}

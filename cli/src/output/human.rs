//! Human-readable terminal renderer.

use shipa_types::Section;

use crate::domain::ApplyReport;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("shipa-action {version}");
    }

    /// Summarize an apply run. Per-section lines were already printed by
    /// the progress reporter.
    pub fn render_apply(&self, report: &ApplyReport) {
        if report.sections.is_empty() {
            self.ctx.info("Nothing to apply");
            return;
        }
        let changed = report.changed();
        let unchanged = report.sections.len() - changed;
        self.ctx.info(&format!(
            "{} applied, {}",
            plural(changed, "section"),
            if unchanged == 0 {
                "none unchanged".to_string()
            } else {
                format!("{unchanged} unchanged")
            }
        ));
    }

    /// List the sections a manifest contains.
    pub fn render_validation(&self, sections: &[Section]) {
        self.ctx.header("Manifest is valid");
        for section in sections {
            self.ctx.success(section.key());
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

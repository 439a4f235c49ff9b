//! Pure reconciliation decisions and the report of what an apply run did.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use shipa_types::Section;

/// Frameworks in `desired` that `observed` does not already have.
///
/// Keeps the order of `desired` and drops duplicates, so appending the
/// result to `observed` never repeats a name.
#[must_use]
pub fn framework_delta<'a>(observed: &[&str], desired: &[&'a str]) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = observed.iter().copied().collect();
    desired
        .iter()
        .copied()
        .filter(|name| seen.insert(*name))
        .collect()
}

/// What happened to one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The resource did not exist and was created.
    Created,
    /// The resource existed and these frameworks were attached to it.
    Updated { added: Vec<String> },
    /// Always-applied section, sent unconditionally.
    Applied,
    /// The resource already existed; nothing was sent.
    Unchanged,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created => f.write_str("created"),
            Outcome::Updated { added } => write!(f, "updated (+{})", added.join(", ")),
            Outcome::Applied => f.write_str("applied"),
            Outcome::Unchanged => f.write_str("unchanged"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionResult {
    pub section: Section,
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Sections applied by one run, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub sections: Vec<SectionResult>,
}

impl ApplyReport {
    pub fn record(&mut self, section: Section, name: impl Into<String>, outcome: Outcome) {
        self.sections.push(SectionResult {
            section,
            name: name.into(),
            outcome,
        });
    }

    #[must_use]
    pub fn outcome(&self, section: Section) -> Option<&Outcome> {
        self.sections
            .iter()
            .find(|r| r.section == section)
            .map(|r| &r.outcome)
    }

    /// Number of sections that caused a write.
    #[must_use]
    pub fn changed(&self) -> usize {
        self.sections
            .iter()
            .filter(|r| r.outcome != Outcome::Unchanged)
            .count()
    }
}

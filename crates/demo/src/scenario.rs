//! The scripted roster walkthrough
//!
//! Builds a team of three, then exercises add, add_all, remove, filtering,
//! stepping an iterator and clear. Each step records the members it observed.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use roster_domain::{Character, CharacterRef, CharacterType, DomainError, Team};

use crate::config::OutputFormat;

/// A member as shown in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CharacterType,
}

impl From<&CharacterRef> for MemberSummary {
    fn from(member: &CharacterRef) -> Self {
        let character = member.borrow();
        Self {
            name: character.name().to_string(),
            kind: character.kind(),
        }
    }
}

/// One step of the walkthrough
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioStep {
    pub title: &'static str,
    pub members: Vec<MemberSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub steps: Vec<ScenarioStep>,
}

impl ScenarioReport {
    fn record<'a>(&mut self, title: &'static str, members: impl IntoIterator<Item = &'a CharacterRef>) {
        let members: Vec<MemberSummary> = members.into_iter().map(MemberSummary::from).collect();
        tracing::info!(step = title, count = members.len(), "Scenario step");
        self.steps.push(ScenarioStep { title, members });
    }

    /// Render the report in the configured format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("serializing scenario report")
            }
            OutputFormat::Text => {
                let mut out = String::new();
                for step in &self.steps {
                    writeln!(out, "\n{}", step.title)?;
                    if step.members.is_empty() {
                        writeln!(out, "  (empty)")?;
                    }
                    for member in &step.members {
                        writeln!(out, "  {} {}", member.name, member.kind)?;
                    }
                }
                Ok(out)
            }
        }
    }
}

/// Run the walkthrough against a fresh team.
pub fn run_scenario() -> Result<ScenarioReport, DomainError> {
    let mut report = ScenarioReport::default();
    let mut team = Team::new();

    let reece = CharacterRef::new(Character::create("Reece", "Bowman")?);
    let liam = CharacterRef::new(Character::create("Liam", "Swordsman")?);
    let noah = CharacterRef::new(Character::create("Noah", "Magician")?);

    team.add(&reece)?;
    report.record("Add one character with add()", team.members());

    team.add_all([&liam, &noah]);
    report.record("Add two characters with add_all()", &team.to_vec());

    team.remove(&liam)?;
    report.record("Remove the second character with remove()", &team.to_vec());

    let magicians: Vec<CharacterRef> = team
        .iter()
        .filter(|member| member.kind() == CharacterType::Magician)
        .collect();
    report.record("Filter members by type", &magicians);

    let stepped: Vec<CharacterRef> = team.iter().collect();
    report.record("Step through the team with an iterator", &stepped);

    team.clear();
    report.record("Clear the team with clear()", &team.to_vec());

    Ok(report)
}

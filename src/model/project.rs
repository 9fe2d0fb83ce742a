// Project record and its status
//
// A project moves between two columns on the board. The status name doubles
// as the column key: it drives element ids ("active-projects"), list headings
// ("ACTIVE PROJECTS") and the headless `move` command.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which column a project lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    /// All statuses in board order (left to right)
    pub fn all() -> &'static [ProjectStatus] {
        &[ProjectStatus::Active, ProjectStatus::Finished]
    }

    /// Lowercase key used in element ids and commands
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "finished" => Ok(ProjectStatus::Finished),
            other => Err(anyhow::anyhow!(
                "Unknown status '{}' (expected active or finished)",
                other
            )),
        }
    }
}

/// A single project on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Opaque id, generated by the store
    pub id: String,
    pub title: String,
    pub description: String,
    /// Number of people assigned
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// "1 person" / "N persons"
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }
}

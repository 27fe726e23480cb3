//! Projects and the groups listing several projects together.

use serde::Serialize;

use crate::domain::types::NonEmptyString;

/// Named set of projects whose tasks are listed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectGroup {
    pub name: NonEmptyString,
    pub members: Vec<NonEmptyString>,
}

impl ProjectGroup {
    pub fn new(name: NonEmptyString) -> Self {
        Self {
            name,
            members: Vec::new(),
        }
    }

    /// Adds `project` unless it is already a member.
    pub fn add_member(&mut self, project: NonEmptyString) {
        if !self.members.contains(&project) {
            self.members.push(project);
        }
    }

    pub fn member_names(&self) -> Vec<String> {
        self.members
            .iter()
            .map(|member| member.as_str().to_string())
            .collect()
    }
}

/// Project or project group a page is rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub name: String,
    pub is_group: bool,
}

impl ProjectRef {
    pub fn project(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_group: false,
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_group: true,
        }
    }

    /// Path prefix of the pages rendered for this project or group.
    pub fn path(&self) -> String {
        if self.is_group {
            format!("/projectgroup/{}", self.name)
        } else {
            format!("/project/{}", self.name)
        }
    }
}

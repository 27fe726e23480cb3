use serde::{Deserialize, Serialize};

use crate::domain::types::{
    NonEmptyString, PageType, Priority, TaskId, TaskStatus, TypeConstraintError,
};

/// Task shown in the task lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: NonEmptyString,
    pub project: NonEmptyString,
    pub status: TaskStatus,
    /// Whether the owning story is a bug rather than a feature.
    pub is_bug: bool,
    /// Priority of the owning story.
    pub priority: Priority,
}

impl Task {
    /// Builds a task from raw values, validating each field.
    pub fn try_new(
        id: i32,
        title: impl Into<String>,
        project: impl Into<String>,
        status: TaskStatus,
        is_bug: bool,
        priority: u8,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: TaskId::new(id)?,
            title: NonEmptyString::new(title)?,
            project: NonEmptyString::new(project)?,
            status,
            is_bug,
            priority: Priority::new(priority)?,
        })
    }

    /// Whether the task belongs to the given list.
    pub fn is_listed_in(&self, page_type: PageType) -> bool {
        match page_type {
            PageType::FeatureTasks => !self.is_bug && self.status.is_active(),
            PageType::BugTasks => self.is_bug && self.status.is_active(),
            PageType::BugTriage => self.is_bug && self.priority == Priority::UNDEFINED,
        }
    }
}

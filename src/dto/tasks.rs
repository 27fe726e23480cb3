use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::task::Task;
use crate::domain::types::PageType;
use crate::pagination::Paginated;

/// Raw pagination parameters read from the task list query string.
#[derive(Debug, Default, Deserialize)]
pub struct TaskListParams {
    pub page_size: Option<i64>,
    pub page_number: Option<i64>,
}

/// Task as rendered in a table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: i32,
    pub title: String,
    pub project: String,
    pub status_label: &'static str,
    pub priority: u8,
    pub priority_label: &'static str,
    /// CSS modifier of the priority badge.
    pub badge_class: &'static str,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.get(),
            title: task.title.as_str().to_string(),
            project: task.project.as_str().to_string(),
            status_label: task.status.label(),
            priority: task.priority.get(),
            priority_label: task.priority.label(),
            badge_class: task.priority.badge_class(),
        }
    }
}

/// Data required to render a task list page.
#[derive(Debug, Serialize)]
pub struct TaskListPageData {
    pub title: &'static str,
    pub page_type: PageType,
    /// Project or group name.
    pub name: String,
    pub is_group: bool,
    /// Path prefix of the project or group pages.
    pub path: String,
    pub is_bug: bool,
    /// Number of bugs waiting for triage in the listed projects.
    pub bug_triage_count: usize,
    pub tasks: Paginated<TaskRow>,
    /// Arrow names keyed by sorted column.
    pub arrows: BTreeMap<&'static str, &'static str>,
}

/// Link to one of the task lists of a project or group.
#[derive(Debug, Serialize)]
pub struct TaskListLink {
    pub title: &'static str,
    pub url: String,
}

/// Data required to render a project or group dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardPageData {
    pub name: String,
    pub is_group: bool,
    /// Projects covered by the dashboard.
    pub members: Vec<String>,
    pub bug_triage_count: usize,
    pub lists: Vec<TaskListLink>,
}

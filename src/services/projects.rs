//! Resolves projects and groups and builds their dashboards.

use crate::domain::project::ProjectRef;
use crate::domain::types::PageType;
use crate::dto::tasks::{DashboardPageData, TaskListLink};
use crate::repository::{ProjectReader, TaskReader};
use crate::services::{ServiceError, ServiceResult};

/// Names of the projects whose tasks are shown for `project`.
///
/// A group expands to its members; a plain project stands for itself.
pub fn retrieve_projects<R>(repo: &R, project: &ProjectRef) -> ServiceResult<Vec<String>>
where
    R: ProjectReader + ?Sized,
{
    if !project.is_group {
        return Ok(vec![project.name.clone()]);
    }

    match repo.get_project_group(&project.name) {
        Ok(Some(group)) => Ok(group.member_names()),
        Ok(None) => Err(ServiceError::NotFound(format!(
            "project group {}",
            project.name
        ))),
        Err(err) => {
            log::error!("Failed to get project group {}: {err}", project.name);
            Err(err.into())
        }
    }
}

/// Loads the dashboard of a project or group.
pub fn load_dashboard<R>(repo: &R, project: &ProjectRef) -> ServiceResult<DashboardPageData>
where
    R: TaskReader + ProjectReader + ?Sized,
{
    let members = retrieve_projects(repo, project)?;
    let bug_triage_count = repo
        .count_tasks(&members, PageType::BugTriage)
        .map_err(|err| {
            log::error!("Failed to count bugs needing triage: {err}");
            err
        })?;

    let path = project.path();
    let lists = PageType::ALL
        .into_iter()
        .map(|page_type| TaskListLink {
            title: page_type.title(),
            url: format!("{path}/{page_type}"),
        })
        .collect();

    Ok(DashboardPageData {
        name: project.name.clone(),
        is_group: project.is_group,
        members,
        bug_triage_count,
        lists,
    })
}

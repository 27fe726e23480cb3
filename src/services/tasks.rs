//! Services backing the paginated task lists.

use crate::domain::project::ProjectRef;
use crate::domain::types::{PageSize, PageType, page_number};
use crate::dto::tasks::{TaskListPageData, TaskListParams, TaskRow};
use crate::pagination::{Paginated, page_count};
use crate::repository::{OrderReader, ProjectReader, TaskListQuery, TaskReader};
use crate::services::ServiceResult;
use crate::services::projects::retrieve_projects;

/// Loads one page of a project's or group's task list, sorted by the
/// visitor's ordering.
///
/// A page number past the last page is moved back to the last page.
/// `base_url` is the path the pagination links point back to.
pub fn load_task_list<R, O>(
    repo: &R,
    orders: &O,
    project: &ProjectRef,
    page_type: PageType,
    params: TaskListParams,
    base_url: &str,
) -> ServiceResult<TaskListPageData>
where
    R: TaskReader + ProjectReader + ?Sized,
    O: OrderReader + ?Sized,
{
    let page_size = match params.page_size {
        Some(value) => PageSize::new(value)?,
        None => PageSize::default(),
    };
    let mut page_number = page_number(params.page_number.unwrap_or(0))?;

    let projects = retrieve_projects(repo, project)?;

    let ordering = orders
        .get_order_book()
        .map_err(|err| {
            log::error!("Failed to load ordering: {err}");
            err
        })?
        .ordering(page_type);
    let arrows = ordering.arrows();

    let query = TaskListQuery::new(projects.clone(), page_type).ordering(ordering);
    let list = |page_number: usize| {
        let query = match page_size.limit() {
            Some(limit) => query.clone().paginate(page_number, limit),
            None => query.clone(),
        };
        repo.list_tasks(query).map_err(|err| {
            log::error!("Failed to list {page_type} tasks of {}: {err}", project.name);
            err
        })
    };

    let (total, mut tasks) = list(page_number)?;
    let pages = page_count(total, page_size);

    let last_page = pages.saturating_sub(1);
    if page_number > last_page {
        log::debug!("Page {page_number} is past the last page {last_page}");
        page_number = last_page;
        if pages > 0 {
            tasks = list(page_number)?.1;
        }
    }

    let bug_triage_count = if page_type == PageType::BugTriage {
        total
    } else {
        repo.count_tasks(&projects, PageType::BugTriage)?
    };

    let rows = tasks.iter().map(TaskRow::from).collect();

    Ok(TaskListPageData {
        title: page_type.title(),
        page_type,
        name: project.name.clone(),
        is_group: project.is_group,
        path: project.path(),
        is_bug: page_type.is_bug(),
        bug_triage_count,
        tasks: Paginated::new(rows, base_url, page_size, page_number, pages),
        arrows,
    })
}

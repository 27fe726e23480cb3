//! Task store kept in memory, loaded once at startup.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::project::ProjectGroup;
use crate::domain::task::Task;
use crate::domain::types::PageType;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ProjectReader, TaskListQuery, TaskReader};

#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<Vec<Task>>,
    groups: Arc<BTreeMap<String, ProjectGroup>>,
}

/// One `group,project` row of the group membership CSV.
#[cfg(feature = "server")]
#[derive(Debug, serde::Deserialize)]
struct GroupMembership {
    group: crate::domain::types::NonEmptyString,
    project: crate::domain::types::NonEmptyString,
}

impl InMemoryTaskRepository {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(tasks),
            groups: Arc::default(),
        }
    }

    pub fn with_groups(mut self, groups: impl IntoIterator<Item = ProjectGroup>) -> Self {
        self.groups = Arc::new(
            groups
                .into_iter()
                .map(|group| (group.name.as_str().to_string(), group))
                .collect(),
        );
        self
    }

    /// Reads tasks from CSV with the header
    /// `id,title,project,status,is_bug,priority`.
    #[cfg(feature = "server")]
    pub fn from_csv<R: std::io::Read>(reader: R) -> RepositoryResult<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let tasks = rdr
            .deserialize::<Task>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(tasks))
    }

    #[cfg(feature = "server")]
    pub fn from_csv_path(path: impl AsRef<std::path::Path>) -> RepositoryResult<Self> {
        let mut rdr = csv::Reader::from_path(path)?;
        let tasks = rdr
            .deserialize::<Task>()
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("Loaded {} tasks", tasks.len());
        Ok(Self::new(tasks))
    }

    /// Reads project groups from CSV with the header `group,project`, one
    /// row per member.
    #[cfg(feature = "server")]
    pub fn with_groups_csv<R: std::io::Read>(self, reader: R) -> RepositoryResult<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let rows = rdr
            .deserialize::<GroupMembership>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.with_groups(collect_groups(rows)))
    }

    #[cfg(feature = "server")]
    pub fn with_groups_csv_path(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> RepositoryResult<Self> {
        let mut rdr = csv::Reader::from_path(path)?;
        let rows = rdr
            .deserialize::<GroupMembership>()
            .collect::<Result<Vec<_>, _>>()?;
        let groups = collect_groups(rows);
        log::info!("Loaded {} project groups", groups.len());
        Ok(self.with_groups(groups))
    }

    fn matching<'a>(
        &'a self,
        projects: &'a [String],
        page_type: PageType,
    ) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |task| {
            projects.iter().any(|p| p == task.project.as_str()) && task.is_listed_in(page_type)
        })
    }
}

#[cfg(feature = "server")]
fn collect_groups(rows: Vec<GroupMembership>) -> Vec<ProjectGroup> {
    let mut groups: BTreeMap<String, ProjectGroup> = BTreeMap::new();
    for row in rows {
        groups
            .entry(row.group.as_str().to_string())
            .or_insert_with(|| ProjectGroup::new(row.group.clone()))
            .add_member(row.project);
    }
    groups.into_values().collect()
}

impl TaskReader for InMemoryTaskRepository {
    fn list_tasks(&self, query: TaskListQuery) -> RepositoryResult<(usize, Vec<Task>)> {
        let mut tasks: Vec<Task> = self
            .matching(&query.projects, query.page_type)
            .cloned()
            .collect();
        let total = tasks.len();

        query.ordering.sort(&mut tasks);

        let tasks = match query.pagination {
            Some(pagination) => tasks
                .into_iter()
                .skip(pagination.page_number.saturating_mul(pagination.page_size))
                .take(pagination.page_size)
                .collect(),
            None => tasks,
        };

        Ok((total, tasks))
    }

    fn count_tasks(&self, projects: &[String], page_type: PageType) -> RepositoryResult<usize> {
        Ok(self.matching(projects, page_type).count())
    }
}

impl ProjectReader for InMemoryTaskRepository {
    fn get_project_group(&self, name: &str) -> RepositoryResult<Option<ProjectGroup>> {
        Ok(self.groups.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordering::PageOrdering;
    use crate::domain::types::{NonEmptyString, OrderDirection, OrderField, TaskStatus};

    fn repo() -> InMemoryTaskRepository {
        InMemoryTaskRepository::new(
            (1..=7)
                .map(|id| {
                    Task::try_new(
                        id,
                        format!("Task {id}"),
                        "nova",
                        TaskStatus::Todo,
                        true,
                        (id % 5) as u8,
                    )
                    .unwrap()
                })
                .chain([Task::try_new(8, "Other", "swift", TaskStatus::Todo, true, 2).unwrap()])
                .collect(),
        )
    }

    fn nova() -> Vec<String> {
        vec!["nova".to_string()]
    }

    #[test]
    fn list_filters_by_project_and_page_type() {
        let (total, tasks) = repo()
            .list_tasks(TaskListQuery::new(["nova"], PageType::BugTasks))
            .unwrap();
        assert_eq!(total, 7);
        assert!(tasks.iter().all(|t| t.project.as_str() == "nova"));

        let (total, _) = repo()
            .list_tasks(TaskListQuery::new(["nova"], PageType::FeatureTasks))
            .unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn list_covers_every_requested_project() {
        let (total, tasks) = repo()
            .list_tasks(TaskListQuery::new(["nova", "swift"], PageType::BugTasks))
            .unwrap();
        assert_eq!(total, 8);
        assert!(tasks.iter().any(|t| t.project.as_str() == "swift"));

        let (total, _) = repo()
            .list_tasks(TaskListQuery::new(Vec::<String>::new(), PageType::BugTasks))
            .unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn list_sorts_then_slices_the_page() {
        let query = TaskListQuery::new(["nova"], PageType::BugTasks)
            .ordering(PageOrdering::new(vec![(OrderField::Id, OrderDirection::Asc)]))
            .paginate(1, 3);
        let (total, tasks) = repo().list_tasks(query).unwrap();
        assert_eq!(total, 7);
        let ids: Vec<i32> = tasks.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![4, 5, 6]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let query = TaskListQuery::new(["nova"], PageType::BugTasks).paginate(5, 3);
        let (total, tasks) = repo().list_tasks(query).unwrap();
        assert_eq!(total, 7);
        assert!(tasks.is_empty());
    }

    #[test]
    fn count_matches_triage_list() {
        // only id 5 has priority 0
        assert_eq!(repo().count_tasks(&nova(), PageType::BugTriage).unwrap(), 1);
    }

    #[test]
    fn groups_are_looked_up_by_name() {
        let mut group = ProjectGroup::new(NonEmptyString::new("core").unwrap());
        group.add_member(NonEmptyString::new("nova").unwrap());
        let repo = repo().with_groups([group.clone()]);

        assert_eq!(repo.get_project_group("core").unwrap(), Some(group));
        assert_eq!(repo.get_project_group("nova").unwrap(), None);
    }

    #[cfg(feature = "server")]
    #[test]
    fn csv_rows_become_tasks() {
        let data = "id,title,project,status,is_bug,priority\n\
                    1,Fix login,nova,T,true,3\n\
                    2,Add API,nova,R,false,1\n";
        let repo = InMemoryTaskRepository::from_csv(data.as_bytes()).unwrap();
        assert_eq!(repo.count_tasks(&nova(), PageType::BugTasks).unwrap(), 1);
        assert_eq!(repo.count_tasks(&nova(), PageType::FeatureTasks).unwrap(), 1);
    }

    #[cfg(feature = "server")]
    #[test]
    fn csv_with_invalid_priority_is_rejected() {
        let data = "id,title,project,status,is_bug,priority\n1,Fix,nova,T,true,9\n";
        assert!(InMemoryTaskRepository::from_csv(data.as_bytes()).is_err());
    }

    #[cfg(feature = "server")]
    #[test]
    fn csv_path_loads_tasks() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,title,project,status,is_bug,priority").unwrap();
        writeln!(file, "1,Fix login,nova,T,true,0").unwrap();

        let repo = InMemoryTaskRepository::from_csv_path(file.path()).unwrap();
        assert_eq!(repo.count_tasks(&nova(), PageType::BugTriage).unwrap(), 1);
    }

    #[cfg(feature = "server")]
    #[test]
    fn group_csv_rows_are_merged_per_group() {
        let data = "group,project\ncore,nova\ncore,swift\nstorage,swift\ncore,nova\n";
        let repo = repo().with_groups_csv(data.as_bytes()).unwrap();

        let core = repo.get_project_group("core").unwrap().unwrap();
        assert_eq!(core.member_names(), vec!["nova", "swift"]);
        let storage = repo.get_project_group("storage").unwrap().unwrap();
        assert_eq!(storage.member_names(), vec!["swift"]);
    }

    #[cfg(feature = "server")]
    #[test]
    fn group_csv_with_blank_project_is_rejected() {
        let data = "group,project\ncore, \n";
        assert!(repo().with_groups_csv(data.as_bytes()).is_err());
    }
}

use crate::{
    domain::{
        ordering::{OrderBook, PageOrdering},
        project::ProjectGroup,
        task::Task,
        types::PageType,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;
#[cfg(feature = "server")]
pub mod session;

pub use memory::InMemoryTaskRepository;
#[cfg(feature = "server")]
pub use session::SessionOrderStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index.
    pub page_number: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone)]
pub struct TaskListQuery {
    /// Projects whose tasks are listed.
    pub projects: Vec<String>,
    pub page_type: PageType,
    pub ordering: PageOrdering,
    pub pagination: Option<Pagination>,
}

impl TaskListQuery {
    pub fn new(
        projects: impl IntoIterator<Item = impl Into<String>>,
        page_type: PageType,
    ) -> Self {
        Self {
            projects: projects.into_iter().map(Into::into).collect(),
            page_type,
            ordering: PageOrdering::default(),
            pagination: None,
        }
    }

    pub fn ordering(mut self, ordering: PageOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn paginate(mut self, page_number: usize, page_size: usize) -> Self {
        self.pagination = Some(Pagination {
            page_number,
            page_size,
        });
        self
    }
}

pub trait TaskReader {
    /// Returns the total number of matching tasks and the requested page.
    fn list_tasks(&self, query: TaskListQuery) -> RepositoryResult<(usize, Vec<Task>)>;
    fn count_tasks(&self, projects: &[String], page_type: PageType) -> RepositoryResult<usize>;
}

pub trait ProjectReader {
    fn get_project_group(&self, name: &str) -> RepositoryResult<Option<ProjectGroup>>;
}

pub trait OrderReader {
    fn get_order_book(&self) -> RepositoryResult<OrderBook>;
}

pub trait OrderWriter {
    fn save_order_book(&self, book: &OrderBook) -> RepositoryResult<()>;
}

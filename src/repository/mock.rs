//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::ordering::OrderBook;
use crate::domain::project::ProjectGroup;
use crate::domain::task::Task;
use crate::domain::types::PageType;
use crate::repository::errors::RepositoryResult;
use crate::repository::{OrderReader, OrderWriter, ProjectReader, TaskListQuery, TaskReader};

mock! {
    pub Repository {}

    impl TaskReader for Repository {
        fn list_tasks(&self, query: TaskListQuery) -> RepositoryResult<(usize, Vec<Task>)>;
        fn count_tasks(&self, projects: &[String], page_type: PageType) -> RepositoryResult<usize>;
    }

    impl ProjectReader for Repository {
        fn get_project_group(&self, name: &str) -> RepositoryResult<Option<ProjectGroup>>;
    }

    impl OrderReader for Repository {
        fn get_order_book(&self) -> RepositoryResult<OrderBook>;
    }

    impl OrderWriter for Repository {
        fn save_order_book(&self, book: &OrderBook) -> RepositoryResult<()>;
    }
}

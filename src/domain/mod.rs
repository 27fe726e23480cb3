//! Domain types shared by the task list service layer.

pub mod ordering;
pub mod project;
pub mod task;
pub mod types;

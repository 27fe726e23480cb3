pub mod ordering;
pub mod tasks;

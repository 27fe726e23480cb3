//! Per-list column ordering toggled by clicking sortable table headers.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::task::Task;
use crate::domain::types::{OrderDirection, OrderField, PageType};

/// Ordered list of columns a task list is sorted by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PageOrdering {
    fields: Vec<(OrderField, OrderDirection)>,
}

impl Default for PageOrdering {
    /// Highest priority first.
    fn default() -> Self {
        Self {
            fields: vec![(OrderField::Priority, OrderDirection::Desc)],
        }
    }
}

impl PageOrdering {
    pub fn new(fields: Vec<(OrderField, OrderDirection)>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[(OrderField, OrderDirection)] {
        &self.fields
    }

    pub fn direction(&self, field: OrderField) -> Option<OrderDirection> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, direction)| *direction)
    }

    /// Flips the direction of `field`, starting from descending.
    ///
    /// Without `multi_field` every other column is dropped so the list is
    /// sorted by `field` alone. With it, an already sorted column keeps its
    /// position and a new one is appended.
    pub fn toggle(&mut self, field: OrderField, multi_field: bool) -> OrderDirection {
        let direction = self
            .direction(field)
            .map_or(OrderDirection::Desc, OrderDirection::toggled);

        if !multi_field {
            self.fields.clear();
        }
        match self.fields.iter().position(|(f, _)| *f == field) {
            Some(index) => self.fields[index].1 = direction,
            None => self.fields.push((field, direction)),
        }

        direction
    }

    /// Arrow names keyed by column, rendered next to sorted headers.
    pub fn arrows(&self) -> BTreeMap<&'static str, &'static str> {
        self.fields
            .iter()
            .map(|(field, direction)| (field.key(), direction.arrow()))
            .collect()
    }

    /// Compares two tasks column by column, falling back to the task id.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        self.fields
            .iter()
            .map(|(field, direction)| {
                let ordering = match field {
                    OrderField::Id => a.id.cmp(&b.id),
                    OrderField::Title => a.title.cmp(&b.title),
                    OrderField::Project => a.project.cmp(&b.project),
                    OrderField::Status => a.status.cmp(&b.status),
                    OrderField::Priority => a.priority.cmp(&b.priority),
                };
                match direction {
                    OrderDirection::Asc => ordering,
                    OrderDirection::Desc => ordering.reverse(),
                }
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.id.cmp(&b.id))
    }

    pub fn sort(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}

/// Orderings of every task list for one visitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct OrderBook {
    pages: BTreeMap<PageType, PageOrdering>,
}

impl OrderBook {
    /// Stored ordering for the list, or the default one.
    pub fn ordering(&self, page_type: PageType) -> PageOrdering {
        self.pages.get(&page_type).cloned().unwrap_or_default()
    }

    pub fn set_ordering(&mut self, page_type: PageType, ordering: PageOrdering) {
        self.pages.insert(page_type, ordering);
    }

    /// Toggles `field` on the list and returns the updated ordering.
    pub fn toggle(
        &mut self,
        page_type: PageType,
        field: OrderField,
        multi_field: bool,
    ) -> &PageOrdering {
        let ordering = self.pages.entry(page_type).or_default();
        ordering.toggle(field, multi_field);
        ordering
    }
}

//! Sort-order request sent when a sortable column header is clicked.

use serde::Serialize;

use crate::domain::types::{OrderField, PageType};

/// Endpoint receiving [`OrderRequest`] bodies.
pub const SET_ORDER_PATH: &str = "/project/setorder/";

/// Form body of a sort-order change for one task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub page_type: PageType,
    pub order_field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_multi_field: Option<bool>,
}

impl OrderRequest {
    /// The page type is passed in by the caller rather than read from
    /// shared state.
    pub fn new(page_type: PageType, order_field: impl Into<String>) -> Self {
        Self {
            page_type,
            order_field: order_field.into(),
            is_multi_field: None,
        }
    }

    pub fn multi_field(mut self) -> Self {
        self.is_multi_field = Some(true);
        self
    }

    pub fn for_field(page_type: PageType, field: OrderField) -> Self {
        Self::new(page_type, field.key())
    }

    /// URL-encoded body for a `POST` to [`SET_ORDER_PATH`].
    pub fn to_form_body(&self) -> Result<String, serde_html_form::ser::Error> {
        serde_html_form::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_body_carries_page_type_and_field() {
        let request = OrderRequest::for_field(PageType::BugTasks, OrderField::Priority);
        assert_eq!(
            request.to_form_body().unwrap(),
            "page_type=bugtasks&order_field=priority"
        );
    }

    #[test]
    fn form_body_escapes_field_and_flags_multi_field() {
        let request = OrderRequest::new(PageType::FeatureTasks, "a b&c").multi_field();
        assert_eq!(
            request.to_form_body().unwrap(),
            "page_type=featuretasks&order_field=a+b%26c&is_multi_field=true"
        );
    }
}

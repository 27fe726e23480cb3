//! Form posted when a sortable column header is clicked.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{OrderField, PageType};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Raw sort-order change for one task list.
pub struct SetOrderForm {
    #[validate(length(min = 1))]
    pub page_type: String,
    #[validate(length(min = 1))]
    pub order_field: String,
    /// Any non-empty value keeps the other sorted columns.
    #[serde(default)]
    pub is_multi_field: Option<String>,
}

/// Validated sort-order change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetOrderPayload {
    pub page_type: PageType,
    pub field: OrderField,
    pub multi_field: bool,
}

impl TryFrom<SetOrderForm> for SetOrderPayload {
    type Error = FormError;

    fn try_from(form: SetOrderForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let page_type = form
            .page_type
            .parse()
            .map_err(|_| FormError::InvalidPageType)?;
        let field = form
            .order_field
            .parse()
            .map_err(|_| FormError::InvalidOrderField)?;
        let multi_field = form
            .is_multi_field
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty() && value != "false");

        Ok(Self {
            page_type,
            field,
            multi_field,
        })
    }
}

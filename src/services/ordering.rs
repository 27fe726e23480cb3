//! Services coordinating column sort-order changes.

use crate::domain::ordering::PageOrdering;
use crate::forms::ordering::{SetOrderForm, SetOrderPayload};
use crate::repository::{OrderReader, OrderWriter};
use crate::services::ServiceResult;

/// Toggles the posted column on its task list and persists the order book.
pub fn set_order<S>(store: &S, form: SetOrderForm) -> ServiceResult<PageOrdering>
where
    S: OrderReader + OrderWriter + ?Sized,
{
    let payload = SetOrderPayload::try_from(form).map_err(|err| {
        log::error!("Failed to validate order form: {err}");
        err
    })?;

    let mut book = store.get_order_book()?;
    let ordering = book
        .toggle(payload.page_type, payload.field, payload.multi_field)
        .clone();

    store.save_order_book(&book).map_err(|err| {
        log::error!("Failed to save ordering: {err}");
        err
    })?;

    Ok(ordering)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::ordering::OrderBook;
    use crate::domain::types::{OrderDirection, OrderField, PageType};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn form(order_field: &str) -> SetOrderForm {
        SetOrderForm {
            page_type: "bugtasks".to_string(),
            order_field: order_field.to_string(),
            is_multi_field: None,
        }
    }

    #[test]
    fn toggles_and_saves_the_order_book() {
        let mut repo = MockRepository::new();
        repo.expect_get_order_book()
            .times(1)
            .returning(|| Ok(OrderBook::default()));
        repo.expect_save_order_book()
            .withf(|book| {
                book.ordering(PageType::BugTasks).fields()
                    == [(OrderField::Status, OrderDirection::Desc)]
                    && book.ordering(PageType::FeatureTasks) == PageOrdering::default()
            })
            .times(1)
            .returning(|_| Ok(()));

        let ordering = set_order(&repo, form("status")).expect("should set order");

        assert_eq!(
            ordering.fields(),
            &[(OrderField::Status, OrderDirection::Desc)]
        );
    }

    #[test]
    fn invalid_form_is_not_saved() {
        let mut repo = MockRepository::new();
        repo.expect_get_order_book().times(0);
        repo.expect_save_order_book().times(0);

        let result = set_order(&repo, form("story__priority"));

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn storage_failure_is_reported() {
        let mut repo = MockRepository::new();
        repo.expect_get_order_book()
            .returning(|| Ok(OrderBook::default()));
        repo.expect_save_order_book()
            .returning(|_| Err(RepositoryError::StorageError("full".to_string())));

        let result = set_order(&repo, form("title"));

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}

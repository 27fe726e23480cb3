//! Order book stored in the visitor's cookie session.

use actix_session::Session;

use crate::domain::ordering::OrderBook;
use crate::repository::errors::RepositoryResult;
use crate::repository::{OrderReader, OrderWriter};

/// Session key holding the serialized [`OrderBook`].
pub const ORDER_BOOK_KEY: &str = "order_dict";

pub struct SessionOrderStore {
    session: Session,
}

impl SessionOrderStore {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl OrderReader for SessionOrderStore {
    fn get_order_book(&self) -> RepositoryResult<OrderBook> {
        Ok(self
            .session
            .get::<OrderBook>(ORDER_BOOK_KEY)?
            .unwrap_or_default())
    }
}

impl OrderWriter for SessionOrderStore {
    fn save_order_book(&self, book: &OrderBook) -> RepositoryResult<()> {
        self.session.insert(ORDER_BOOK_KEY, book)?;
        Ok(())
    }
}

//! Maps UI element events to the action the browser glue should perform.
//!
//! Handlers are registered per element key. A handler reads what it needs
//! from the event attributes and answers with a [`UiAction`]; the browser
//! layer carries the action out (navigation or a form `POST`).

use std::collections::{BTreeMap, HashMap};

use crate::domain::types::{OrderField, PageType};
use crate::dto::ordering::OrderRequest;
use crate::pagination::build_page_url;

/// Key of the page-size dropdown entries.
pub const PAGE_SIZE_ELEMENT: &str = "page-size";
/// Key of the sortable column header links.
pub const SORTABLE_COLUMN_ELEMENT: &str = "sortable-column";

/// Attribute holding the selected page size.
pub const DATA_VALUE: &str = "data-value";
/// Attribute holding the column key of a sortable header.
pub const DATA_ORDER_KEY: &str = "data-order-key";

/// Click on an element of the rendered page.
#[derive(Debug, Clone, Default)]
pub struct ElementEvent {
    /// Key the handler was registered under.
    pub element: String,
    /// `data-*` attributes of the clicked element and its relevant parents.
    pub attributes: BTreeMap<String, String>,
    /// Current document location.
    pub location: String,
}

impl ElementEvent {
    pub fn new(element: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            attributes: BTreeMap::new(),
            location: location.into(),
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// What the browser should do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Full page load of the URL.
    Navigate(String),
    /// Send the ordering change, then reload the page.
    SetOrder(OrderRequest),
}

pub type Handler = Box<dyn Fn(&ElementEvent) -> Option<UiAction> + Send + Sync>;

/// Handlers keyed by element.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Handler>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher wired with the task list handlers for `page_type`.
    pub fn for_task_list(page_type: PageType) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(PAGE_SIZE_ELEMENT, page_size_handler());
        dispatcher.register(SORTABLE_COLUMN_ELEMENT, sort_column_handler(page_type));
        dispatcher
    }

    /// Registers `handler` for `element`, replacing any previous one.
    pub fn register(&mut self, element: impl Into<String>, handler: Handler) {
        self.handlers.insert(element.into(), handler);
    }

    pub fn is_registered(&self, element: &str) -> bool {
        self.handlers.contains_key(element)
    }

    pub fn dispatch(&self, event: &ElementEvent) -> Option<UiAction> {
        let Some(handler) = self.handlers.get(&event.element) else {
            log::debug!("No handler registered for element {}", event.element);
            return None;
        };
        handler(event)
    }
}

/// Reloads the current location on the first page with the selected size.
pub fn page_size_handler() -> Handler {
    Box::new(|event: &ElementEvent| -> Option<UiAction> {
        let page_size = event.get(DATA_VALUE)?;
        Some(UiAction::Navigate(build_page_url(
            &event.location,
            page_size,
            0,
        )))
    })
}

/// Requests an ordering change of the clicked column on `page_type`.
///
/// Headers with a column key the server cannot sort by are ignored.
pub fn sort_column_handler(page_type: PageType) -> Handler {
    Box::new(move |event: &ElementEvent| -> Option<UiAction> {
        let order_key = event.get(DATA_ORDER_KEY)?;
        let field = match order_key.parse::<OrderField>() {
            Ok(field) => field,
            Err(err) => {
                log::debug!("Ignoring sort request: {err}");
                return None;
            }
        };
        Some(UiAction::SetOrder(OrderRequest::for_field(page_type, field)))
    })
}

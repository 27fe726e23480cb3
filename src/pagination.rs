//! Pagination URLs and page links for the task lists.
//!
//! The URL helpers are fail-open: they write whatever page size and number
//! they are given into the query string and leave validation to the endpoint
//! that parses it.

use std::fmt::Display;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::domain::types::{PAGE_SIZE_ALL, PageSize};

/// Number of page links rendered on each side of the current page.
pub const WINDOW_RADIUS: usize = 3;

/// Page sizes offered by the page-size dropdown.
pub const PAGE_SIZE_OPTIONS: [PageSize; 5] = [
    PageSize::Limited(15),
    PageSize::Limited(30),
    PageSize::Limited(50),
    PageSize::Limited(100),
    PageSize::All,
];

/// Drops the query string, if any, from `url`.
pub fn strip_query(url: &str) -> &str {
    match url.find('?') {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Builds the navigation URL for a page of `url`.
pub fn build_page_url(url: &str, page_size: impl Display, page_number: impl Display) -> String {
    format!(
        "{}?page_size={page_size}&page_number={page_number}",
        strip_query(url)
    )
}

/// Human readable page-size label used by the dropdown.
pub fn format_page_size_label(value: impl Display) -> String {
    let value = value.to_string();
    if value == PAGE_SIZE_ALL.to_string() {
        "All tasks".to_string()
    } else {
        format!("{value} tasks per page")
    }
}

/// Total number of pages needed for `total_items`.
pub fn page_count(total_items: usize, page_size: PageSize) -> usize {
    match page_size {
        PageSize::All => usize::from(total_items > 0),
        PageSize::Limited(size) => total_items.div_ceil(size.max(1)),
    }
}

/// Current page and the amount of pages around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub total_pages: usize,
    pub current_page: usize,
}

impl PageWindow {
    pub fn new(total_pages: usize, current_page: usize) -> Self {
        Self {
            total_pages,
            current_page,
        }
    }

    /// Index of the last page. Zero when there are no pages at all.
    pub fn last_page(&self) -> usize {
        self.total_pages.saturating_sub(1)
    }

    /// Page indices shown as links around the current page.
    ///
    /// An empty result set still yields index 0.
    pub fn visible_range(&self) -> RangeInclusive<usize> {
        let start = self.current_page.saturating_sub(WINDOW_RADIUS);
        let end = self
            .last_page()
            .min(self.current_page.saturating_add(WINDOW_RADIUS));
        start..=end
    }
}

/// One rendered page link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub page_number: usize,
    pub url: String,
    pub label: String,
    pub id: String,
    pub is_current: bool,
}

/// Page links around the current page plus the first/last shortcuts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub first: PageLink,
    pub links: Vec<PageLink>,
    pub last: PageLink,
}

impl PageLinks {
    pub fn page_numbers(&self) -> Vec<usize> {
        self.links.iter().map(|link| link.page_number).collect()
    }
}

/// Builds the links for `current_page` out of `total_pages`.
pub fn build_page_links(
    total_pages: usize,
    current_page: usize,
    page_size: impl Display,
    base_url: &str,
) -> PageLinks {
    let window = PageWindow::new(total_pages, current_page);

    let links = window
        .visible_range()
        .map(|i| PageLink {
            page_number: i,
            url: build_page_url(base_url, &page_size, i),
            label: (i + 1).to_string(),
            id: format!("page-link-{i}"),
            is_current: i == current_page,
        })
        .collect();

    let boundary = |page_number: usize, id: &str, label: &str| PageLink {
        page_number,
        url: build_page_url(base_url, &page_size, page_number),
        label: label.to_string(),
        id: id.to_string(),
        is_current: false,
    };

    PageLinks {
        first: boundary(0, "first-page-link", "First"),
        links,
        last: boundary(window.last_page(), "last-page-link", "Last"),
    }
}

/// Entry of the page-size dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSizeOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Dropdown entries with the current size marked as selected.
pub fn page_size_options(current: PageSize) -> Vec<PageSizeOption> {
    PAGE_SIZE_OPTIONS
        .iter()
        .map(|size| PageSizeOption {
            value: size.to_string(),
            label: format_page_size_label(size),
            selected: *size == current,
        })
        .collect()
}

/// Page of items together with everything needed to render its controls.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub links: PageLinks,
    pub page_size: String,
    pub page_size_label: String,
    pub page_size_options: Vec<PageSizeOption>,
    pub page_number: usize,
    pub page_count: usize,
}

impl<T> Paginated<T> {
    pub fn new(
        items: Vec<T>,
        base_url: &str,
        page_size: PageSize,
        page_number: usize,
        page_count: usize,
    ) -> Self {
        Self {
            items,
            links: build_page_links(page_count, page_number, page_size, base_url),
            page_size: page_size.to_string(),
            page_size_label: format_page_size_label(page_size),
            page_size_options: page_size_options(page_size),
            page_number,
            page_count,
        }
    }
}

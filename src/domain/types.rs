//! Strongly-typed value objects used by the task list and pagination layers.
//!
//! These wrappers enforce basic invariants (positive identifiers, known page
//! types, bounded priorities) so that once a value reaches the domain layer it
//! can be treated as trusted. The pagination URL helpers deliberately do not
//! require them and accept anything that implements `Display`.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire value meaning "show all items".
pub const PAGE_SIZE_ALL: i64 = -1;

/// Page size used when the request does not carry one.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Page size is neither positive nor the `-1` sentinel.
    #[error("invalid page size: {0}")]
    InvalidPageSize(i64),
    /// Page number is negative.
    #[error("invalid page number: {0}")]
    InvalidPageNumber(i64),
    /// Page type is not one of the known task lists.
    #[error("unknown page type: {0}")]
    UnknownPageType(String),
    /// Column key is not sortable.
    #[error("unknown order field: {0}")]
    UnknownOrderField(String),
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Unique identifier for a task.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i32", into = "i32")]
pub struct TaskId(i32);

impl TaskId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for TaskId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for i32 {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

/// Number of items shown per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum PageSize {
    /// No limit, every item on a single page.
    All,
    /// At most this many items per page. Always at least one.
    Limited(usize),
}

impl PageSize {
    /// Validates a raw page size received from a query string.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        match value {
            PAGE_SIZE_ALL => Ok(Self::All),
            v if v > 0 => usize::try_from(v)
                .map(Self::Limited)
                .map_err(|_| TypeConstraintError::InvalidPageSize(value)),
            _ => Err(TypeConstraintError::InvalidPageSize(value)),
        }
    }

    /// Returns the per-page limit, or `None` when every item is shown.
    pub fn limit(self) -> Option<usize> {
        match self {
            Self::All => None,
            Self::Limited(size) => Some(size),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::Limited(DEFAULT_PAGE_SIZE)
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{PAGE_SIZE_ALL}"),
            Self::Limited(size) => write!(f, "{size}"),
        }
    }
}

impl TryFrom<i64> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for i64 {
    fn from(value: PageSize) -> Self {
        match value {
            PageSize::All => PAGE_SIZE_ALL,
            PageSize::Limited(size) => i64::try_from(size).unwrap_or(i64::MAX),
        }
    }
}

/// Validates a raw zero-based page number received from a query string.
pub fn page_number(value: i64) -> Result<usize, TypeConstraintError> {
    usize::try_from(value).map_err(|_| TypeConstraintError::InvalidPageNumber(value))
}

/// Task list a request is rendering. Each list keeps its own ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    FeatureTasks,
    BugTasks,
    BugTriage,
}

impl PageType {
    pub const ALL: [PageType; 3] = [Self::FeatureTasks, Self::BugTasks, Self::BugTriage];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FeatureTasks => "featuretasks",
            Self::BugTasks => "bugtasks",
            Self::BugTriage => "bugtriage",
        }
    }

    /// Heading shown above the task table.
    pub const fn title(self) -> &'static str {
        match self {
            Self::FeatureTasks => "Active feature tasks",
            Self::BugTasks => "Active bug tasks",
            Self::BugTriage => "Bugs needing triage",
        }
    }

    pub const fn is_bug(self) -> bool {
        !matches!(self, Self::FeatureTasks)
    }
}

impl Display for PageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "featuretasks" => Ok(Self::FeatureTasks),
            "bugtasks" => Ok(Self::BugTasks),
            "bugtriage" => Ok(Self::BugTriage),
            other => Err(TypeConstraintError::UnknownPageType(other.to_string())),
        }
    }
}

/// Sortable column of the task table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderField {
    Id,
    Title,
    Project,
    Status,
    Priority,
}

impl OrderField {
    pub const ALL: [OrderField; 5] = [
        Self::Id,
        Self::Title,
        Self::Project,
        Self::Status,
        Self::Priority,
    ];

    /// Key used in `data-order-key` attributes and ordering requests.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Project => "project",
            Self::Status => "status",
            Self::Priority => "priority",
        }
    }
}

impl Display for OrderField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OrderField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| TypeConstraintError::UnknownOrderField(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Icon suffix rendered next to a sorted column header.
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "up",
            Self::Desc => "down",
        }
    }
}

/// Progress of a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "T")]
    Todo,
    #[serde(rename = "R")]
    Review,
    #[serde(rename = "L")]
    Landed,
}

impl TaskStatus {
    /// Whether the task still needs work.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Todo | Self::Review)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Review => "In review",
            Self::Landed => "Landed",
        }
    }
}

/// Story priority from 0 (undefined) to 4 (critical).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

const BADGE_CLASSES: [&str; 5] = [
    "",
    " badge-info",
    " badge-success",
    " badge-warning",
    " badge-important",
];

impl Priority {
    pub const UNDEFINED: Priority = Priority(0);
    pub const MAX: u8 = 4;

    pub fn new(value: u8) -> Result<Self, TypeConstraintError> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidValue(format!(
                "priority {value} is out of range"
            )))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "Undefined",
            1 => "Low",
            2 => "Medium",
            3 => "High",
            _ => "Critical",
        }
    }

    /// CSS modifier for the priority badge.
    pub fn badge_class(self) -> &'static str {
        BADGE_CLASSES[usize::from(self.0.min(Self::MAX))]
    }
}

impl TryFrom<u8> for Priority {
    type Error = TypeConstraintError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(value: Priority) -> Self {
        value.0
    }
}

/// Trimmed, non-empty string used for titles and project names.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(TypeConstraintError::EmptyString)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

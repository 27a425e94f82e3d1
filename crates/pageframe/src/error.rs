#![forbid(unsafe_code)]

//! Errors for strict paginator construction.

use std::fmt;

/// Rejected paginator input, reported by [`Paginator::try_new`].
///
/// [`Paginator::try_new`]: crate::Paginator::try_new
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorError {
    /// The total item count was negative.
    NegativeItemsCount { items_count: i64 },
    /// Items per page must be at least 1.
    ItemsOnPageNotPositive { items_on_page: i64 },
    /// Frame length must be at least 2.
    FrameLengthTooShort { frame_length: i64 },
    /// The requested page does not exist.
    ActivePageOutOfRange { active_page: i64, total_pages: u64 },
}

impl fmt::Display for PaginatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeItemsCount { items_count } => {
                write!(f, "items count must not be negative, got {items_count}")
            }
            Self::ItemsOnPageNotPositive { items_on_page } => {
                write!(f, "items on page must be at least 1, got {items_on_page}")
            }
            Self::FrameLengthTooShort { frame_length } => {
                write!(f, "frame length must be at least 2, got {frame_length}")
            }
            Self::ActivePageOutOfRange {
                active_page,
                total_pages,
            } => write!(
                f,
                "active page {active_page} is out of range [1, {}]",
                (*total_pages).max(1)
            ),
        }
    }
}

impl std::error::Error for PaginatorError {}

/// Standard result type for pageframe APIs.
pub type Result<T> = std::result::Result<T, PaginatorError>;

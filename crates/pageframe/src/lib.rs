#![forbid(unsafe_code)]

//! Pagination frame calculator.
//!
//! Given an active page, a total item count, a page size, and a frame length,
//! [`Paginator`] works out the visible window of page links, the previous and
//! next scroller pages, and renders them through a caller-supplied formatter.
//!
//! ```
//! use pageframe::{Page, PageKind, Paginator};
//!
//! let html = Paginator::new(15, 120, 8, 10)
//!     .with_formatter(|p: &Page| match (p.kind(), p.is_sentinel()) {
//!         (PageKind::Previous, true) => "<li class=\"disabled\">&laquo;</li>".into(),
//!         (PageKind::Previous, false) => format!("<li><a href=\"?p={}\">&laquo;</a></li>", p.number()),
//!         (PageKind::Next, true) => "<li class=\"disabled\">&raquo;</li>".into(),
//!         (PageKind::Next, false) => format!("<li><a href=\"?p={}\">&raquo;</a></li>", p.number()),
//!         (PageKind::Middle, _) if p.is_active() => format!("<li class=\"active\">{}</li>", p.number()),
//!         (PageKind::Middle, _) => format!("<li><a href=\"?p={0}\">{0}</a></li>", p.number()),
//!     })
//!     .render();
//! assert!(html.starts_with("<li><a href=\"?p=14\">&laquo;</a></li>"));
//! assert!(html.ends_with("<li class=\"disabled\">&raquo;</li>"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod paginator;
pub mod summary;

pub use config::{ClampPolicy, ConfigError, PaginatorConfig, PaginatorConfigParse};
pub use error::{PaginatorError, Result};
pub use page::{Page, PageFormatter, PageKind};
pub use paginator::{MIN_FRAME_LENGTH, Paginator};
pub use summary::{Summary, SummaryMode};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};

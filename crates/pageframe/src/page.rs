#![forbid(unsafe_code)]

//! Page descriptors and the shared formatter hook.

use std::fmt;
use std::sync::Arc;

/// Formatter shared by every descriptor of a paginator.
///
/// Receives sentinel neighbors (`number() == 0`) too, so it can emit
/// disabled markup for a missing previous or next page.
pub type PageFormatter = Arc<dyn Fn(&Page) -> String + Send + Sync>;

/// Role of a descriptor within the paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PageKind {
    /// Scroller pointing one page back.
    Previous,
    /// Entry of the visible frame.
    Middle,
    /// Scroller pointing one page forward.
    Next,
}

/// One navigable page, or a scroller neighbor.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Page {
    index: u64,
    number: u64,
    is_active: bool,
    kind: PageKind,
    #[cfg_attr(feature = "serde", serde(skip))]
    formatter: Option<PageFormatter>,
}

impl Page {
    pub(crate) fn new(number: u64, index: u64, is_active: bool, kind: PageKind) -> Self {
        Self {
            index,
            number,
            is_active,
            kind,
            formatter: None,
        }
    }

    /// A "no such page" placeholder of the given kind.
    #[must_use]
    pub fn sentinel(kind: PageKind) -> Self {
        Self::new(0, 0, false, kind)
    }

    /// Zero-based offset of the first item this descriptor points at.
    #[must_use]
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// 1-based page number, `0` for a sentinel.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub const fn kind(&self) -> PageKind {
        self.kind
    }

    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.number == 0
    }

    /// The attached formatter, if any.
    #[must_use]
    pub fn formatter(&self) -> Option<&PageFormatter> {
        self.formatter.as_ref()
    }

    pub(crate) fn set_formatter(&mut self, formatter: Option<PageFormatter>) {
        self.formatter = formatter;
    }

    pub(crate) fn with_formatter(mut self, formatter: Option<PageFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Render this descriptor.
    ///
    /// Uses the attached formatter verbatim when present. Otherwise yields the
    /// page number, or an empty string for a sentinel.
    #[must_use]
    pub fn format(&self) -> String {
        match &self.formatter {
            Some(formatter) => formatter(self),
            None if self.number > 0 => self.number.to_string(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("index", &self.index)
            .field("number", &self.number)
            .field("is_active", &self.is_active)
            .field("kind", &self.kind)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

/// Formatters compare by identity.
impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.number == other.number
            && self.is_active == other.is_active
            && self.kind == other.kind
            && match (&self.formatter, &other.formatter) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl Eq for Page {}

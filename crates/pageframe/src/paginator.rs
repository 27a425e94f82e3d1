#![forbid(unsafe_code)]

//! Frame window and neighbor calculation.
//!
//! A [`Paginator`] is built once from four raw integers. The permissive
//! constructor [`Paginator::new`] clamps every degenerate input into a valid
//! configuration; [`Paginator::try_new`] rejects them instead.
//!
//! ```
//! use pageframe::{Page, Paginator};
//!
//! let rendered = Paginator::new(11, 150, 3, 5)
//!     .with_formatter(|p: &Page| format!("{},", p.number()))
//!     .render();
//! assert_eq!(rendered, "10,9,10,11,12,13,12,");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::{PaginatorError, Result};
use crate::page::{Page, PageFormatter, PageKind};

/// Smallest frame the paginator will lay out.
pub const MIN_FRAME_LENGTH: u64 = 2;

/// Pagination metadata for one active page.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Paginator {
    active_page: u64,
    items_count: u64,
    items_on_page: u64,
    frame_length: u64,
    total_pages: u64,
    previous: Option<Page>,
    next: Option<Page>,
    pages: Vec<Page>,
    #[cfg_attr(feature = "serde", serde(skip))]
    formatter: Option<FormatterSlot>,
}

/// Identity-compared holder so `Paginator` can derive `PartialEq`.
#[derive(Clone)]
struct FormatterSlot(PageFormatter);

impl PartialEq for FormatterSlot {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for FormatterSlot {}

/// Inputs after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Normalized {
    active_page: u64,
    items_count: u64,
    items_on_page: u64,
    frame_length: u64,
    total_pages: u64,
}

impl Normalized {
    fn clamp(active_page: i64, items_count: i64, items_on_page: i64, frame_length: i64) -> Self {
        let items_on_page = clamp_min(items_on_page, 1, "items_on_page");
        let items_count = clamp_min(items_count, 0, "items_count");
        let total_pages = total_pages(items_count, items_on_page);

        let active_page = match u64::try_from(active_page) {
            Ok(page) if (1..=total_pages).contains(&page) => page,
            _ => {
                if active_page != 1 {
                    crate::debug!(
                        field = "active_page",
                        requested = active_page,
                        applied = 1u64,
                        total_pages,
                        "clamped paginator input"
                    );
                }
                1
            }
        };

        let frame_length = clamp_min(frame_length, MIN_FRAME_LENGTH as i64, "frame_length");

        Self {
            active_page,
            items_count,
            items_on_page,
            frame_length,
            total_pages,
        }
    }

    fn validate(
        active_page: i64,
        items_count: i64,
        items_on_page: i64,
        frame_length: i64,
    ) -> Result<Self> {
        if items_count < 0 {
            return Err(PaginatorError::NegativeItemsCount { items_count });
        }
        if items_on_page < 1 {
            return Err(PaginatorError::ItemsOnPageNotPositive { items_on_page });
        }
        if frame_length < MIN_FRAME_LENGTH as i64 {
            return Err(PaginatorError::FrameLengthTooShort { frame_length });
        }

        let normalized = Self::clamp(active_page, items_count, items_on_page, frame_length);
        // With zero items page 1 is still the only page a caller can ask for.
        let accepted = active_page >= 1 && (active_page as u64) <= normalized.total_pages.max(1);
        if !accepted {
            crate::warn!(
                active_page,
                total_pages = normalized.total_pages,
                "rejected paginator input"
            );
            return Err(PaginatorError::ActivePageOutOfRange {
                active_page,
                total_pages: normalized.total_pages,
            });
        }
        Ok(normalized)
    }
}

/// Clamp `value` up to `min` and convert; logs when the input changed.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn clamp_min(value: i64, min: i64, field: &'static str) -> u64 {
    if value < min {
        crate::debug!(
            field,
            requested = value,
            applied = min,
            "clamped paginator input"
        );
        min as u64
    } else {
        value as u64
    }
}

/// `ceil(items_count / items_on_page)`; `items_on_page` must be non-zero.
fn total_pages(items_count: u64, items_on_page: u64) -> u64 {
    items_count.div_ceil(items_on_page)
}

/// First page number of the visible frame.
fn frame_start(active_page: u64, total_pages: u64, frame_length: u64) -> u64 {
    let left_half = frame_length / 2;
    let right_half = frame_length - left_half;

    if active_page <= left_half + 1 {
        return 1;
    }

    let start = active_page - left_half;
    // Near the end the window slides left so it does not run past the last page.
    if active_page + right_half > total_pages {
        let shift = active_page + right_half - total_pages - 1;
        return start.saturating_sub(shift).max(1);
    }
    start
}

impl Paginator {
    /// Build a paginator, clamping invalid input.
    ///
    /// - `items_on_page < 1` becomes 1.
    /// - `items_count < 0` becomes 0.
    /// - `active_page` outside `[1, total_pages]` becomes 1.
    /// - `frame_length < 2` becomes 2.
    #[must_use]
    pub fn new(active_page: i64, items_count: i64, items_on_page: i64, frame_length: i64) -> Self {
        let span = crate::debug_span!(
            "paginator_new",
            active_page,
            items_count,
            items_on_page,
            frame_length
        );
        let _guard = span.enter();

        Self::build(Normalized::clamp(
            active_page,
            items_count,
            items_on_page,
            frame_length,
        ))
    }

    /// Build a paginator, rejecting invalid input instead of clamping it.
    ///
    /// Accepted input yields exactly what [`Paginator::new`] would.
    pub fn try_new(
        active_page: i64,
        items_count: i64,
        items_on_page: i64,
        frame_length: i64,
    ) -> Result<Self> {
        let span = crate::debug_span!(
            "paginator_try_new",
            active_page,
            items_count,
            items_on_page,
            frame_length
        );
        let _guard = span.enter();

        Normalized::validate(active_page, items_count, items_on_page, frame_length).map(Self::build)
    }

    fn build(input: Normalized) -> Self {
        let Normalized {
            active_page,
            items_count,
            items_on_page,
            frame_length,
            total_pages,
        } = input;

        let start = frame_start(active_page, total_pages, frame_length);
        let len = frame_length.min(total_pages);
        crate::trace!(
            frame_start = start,
            frame_len = len,
            active_page,
            total_pages,
            "computed frame window"
        );

        let pages = (start..start.saturating_add(len))
            .map(|number| {
                Page::new(
                    number,
                    (number - 1).saturating_mul(items_on_page),
                    number == active_page,
                    PageKind::Middle,
                )
            })
            .collect();

        // Neighbor indices are `number * items_on_page`, one page past the
        // frame formula; callers depend on these offsets.
        let previous = (active_page > 1).then(|| {
            let number = active_page - 1;
            Page::new(
                number,
                number.saturating_mul(items_on_page),
                false,
                PageKind::Previous,
            )
        });
        let next = (active_page < total_pages).then(|| {
            let number = active_page + 1;
            Page::new(
                number,
                number.saturating_mul(items_on_page),
                false,
                PageKind::Next,
            )
        });

        Self {
            active_page,
            items_count,
            items_on_page,
            frame_length,
            total_pages,
            previous,
            next,
            pages,
            formatter: None,
        }
    }

    /// Attach one shared formatter to every descriptor, in place.
    ///
    /// Returns `&mut Self` for chaining:
    ///
    /// ```
    /// use std::sync::Arc;
    /// use pageframe::{Page, Paginator};
    ///
    /// let mut pager = Paginator::new(8, 15, 2, 3);
    /// let out = pager
    ///     .set_formatter(Arc::new(|p: &Page| format!("{},", p.number())))
    ///     .render();
    /// assert_eq!(out, "7,6,7,8,0,");
    /// ```
    pub fn set_formatter(&mut self, formatter: PageFormatter) -> &mut Self {
        let shared = Some(formatter.clone());
        if let Some(previous) = self.previous.as_mut() {
            previous.set_formatter(shared.clone());
        }
        for page in &mut self.pages {
            page.set_formatter(shared.clone());
        }
        if let Some(next) = self.next.as_mut() {
            next.set_formatter(shared);
        }
        self.formatter = Some(FormatterSlot(formatter));
        self
    }

    /// Consuming variant of [`Paginator::set_formatter`] taking a closure.
    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Page) -> String + Send + Sync + 'static,
    {
        self.set_formatter(Arc::new(formatter));
        self
    }

    /// Active page after clamping.
    #[must_use]
    pub const fn active_page(&self) -> u64 {
        self.active_page
    }

    #[must_use]
    pub const fn items_count(&self) -> u64 {
        self.items_count
    }

    #[must_use]
    pub const fn items_on_page(&self) -> u64 {
        self.items_on_page
    }

    /// Requested frame length after clamping.
    #[must_use]
    pub const fn frame_length(&self) -> u64 {
        self.frame_length
    }

    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Middle descriptors of the visible frame, in page order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    #[must_use]
    pub fn previous(&self) -> Option<&Page> {
        self.previous.as_ref()
    }

    #[must_use]
    pub fn next(&self) -> Option<&Page> {
        self.next.as_ref()
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// The middle descriptor flagged active, if the frame holds it.
    #[must_use]
    pub fn active(&self) -> Option<&Page> {
        self.pages.iter().find(|page| page.is_active())
    }

    #[must_use]
    pub fn formatter(&self) -> Option<&PageFormatter> {
        self.formatter.as_ref().map(|slot| &slot.0)
    }

    /// Previous neighbor, or a formatter-carrying sentinel when absent.
    #[must_use]
    pub fn previous_or_sentinel(&self) -> Page {
        self.previous.clone().unwrap_or_else(|| self.sentinel(PageKind::Previous))
    }

    /// Next neighbor, or a formatter-carrying sentinel when absent.
    #[must_use]
    pub fn next_or_sentinel(&self) -> Page {
        self.next.clone().unwrap_or_else(|| self.sentinel(PageKind::Next))
    }

    fn sentinel(&self, kind: PageKind) -> Page {
        Page::sentinel(kind).with_formatter(self.formatter().cloned())
    }

    /// Previous, every middle page, then next, in render order.
    ///
    /// Missing neighbors appear as sentinels.
    pub fn iter(&self) -> impl Iterator<Item = Page> + '_ {
        std::iter::once(self.previous_or_sentinel())
            .chain(self.pages.iter().cloned())
            .chain(std::iter::once(self.next_or_sentinel()))
    }

    /// Concatenate every formatted descriptor without separators.
    #[must_use]
    pub fn render(&self) -> String {
        let span = crate::debug_span!("paginator_render", pages = self.pages.len());
        let _guard = span.enter();

        let mut out = self.previous_or_sentinel().format();
        for page in &self.pages {
            out.push_str(&page.format());
        }
        out.push_str(&self.next_or_sentinel().format());
        out
    }

    /// Index of the first item on the active page.
    ///
    /// Looks up the frame by position `active_page - 1`, not by the active
    /// flag, so it only matches the active page while the frame starts at 1.
    /// Returns 0 when that position is outside the frame.
    #[must_use]
    pub fn start_index(&self) -> u64 {
        usize::try_from(self.active_page - 1)
            .ok()
            .and_then(|position| self.pages.get(position))
            .map_or(0, Page::index)
    }
}

impl fmt::Display for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("active_page", &self.active_page)
            .field("items_count", &self.items_count)
            .field("items_on_page", &self.items_on_page)
            .field("frame_length", &self.frame_length)
            .field("total_pages", &self.total_pages)
            .field("previous", &self.previous)
            .field("next", &self.next)
            .field("pages", &self.pages)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

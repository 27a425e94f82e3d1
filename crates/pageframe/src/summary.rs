#![forbid(unsafe_code)]

//! Plain-text page indicators.

use unicode_width::UnicodeWidthStr;

use crate::paginator::Paginator;

/// Display mode for a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    /// Render as "Page X/Y".
    Page,
    /// Render as "X/Y".
    Compact,
    /// Render one symbol per page (e.g. "..*..").
    Dots,
}

/// One-line "where am I" indicator for a paginator.
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    current_page: u64,
    total_pages: u64,
    mode: SummaryMode,
    active_symbol: &'a str,
    inactive_symbol: &'a str,
}

impl Default for Summary<'_> {
    fn default() -> Self {
        Self {
            current_page: 0,
            total_pages: 0,
            mode: SummaryMode::Compact,
            active_symbol: "*",
            inactive_symbol: ".",
        }
    }
}

impl<'a> Summary<'a> {
    /// Summary of a paginator's active page.
    pub fn new(paginator: &Paginator) -> Self {
        Self::with_pages(paginator.active_page(), paginator.total_pages())
    }

    /// Summary for explicit page counts.
    pub fn with_pages(current_page: u64, total_pages: u64) -> Self {
        Self {
            current_page,
            total_pages,
            ..Self::default()
        }
    }

    /// Set the display mode.
    pub fn mode(mut self, mode: SummaryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the symbols used for dot mode.
    pub fn dots_symbols(mut self, active: &'a str, inactive: &'a str) -> Self {
        self.active_symbol = active;
        self.inactive_symbol = inactive;
        self
    }

    fn normalized_pages(&self) -> (u64, u64) {
        let total = self.total_pages;
        if total == 0 {
            return (0, 0);
        }
        (self.current_page.clamp(1, total), total)
    }

    fn format_compact(&self) -> String {
        let (current, total) = self.normalized_pages();
        format!("{current}/{total}")
    }

    fn format_page(&self) -> String {
        let (current, total) = self.normalized_pages();
        format!("Page {current}/{total}")
    }

    fn format_dots(&self, max_width: usize) -> Option<String> {
        let (current, total) = self.normalized_pages();
        if total == 0 {
            return None;
        }

        let symbol_width = self.active_symbol.width().max(self.inactive_symbol.width());
        if symbol_width == 0 {
            return None;
        }

        let max_dots = max_width / symbol_width;
        let total = usize::try_from(total).ok().filter(|&t| t <= max_dots)?;

        let out: String = (1..=total)
            .map(|idx| {
                if idx as u64 == current {
                    self.active_symbol
                } else {
                    self.inactive_symbol
                }
            })
            .collect();

        (out.width() <= max_width).then_some(out)
    }

    /// Render within `max_width` display columns.
    ///
    /// Dot mode falls back to compact when the dots do not fit.
    pub fn format_for_width(&self, max_width: usize) -> String {
        if max_width == 0 {
            return String::new();
        }

        match self.mode {
            SummaryMode::Page => self.format_page(),
            SummaryMode::Compact => self.format_compact(),
            SummaryMode::Dots => self
                .format_dots(max_width)
                .unwrap_or_else(|| self.format_compact()),
        }
    }
}

impl Paginator {
    /// Text indicator for this paginator in the given mode.
    pub fn summary(&self, mode: SummaryMode, max_width: usize) -> String {
        Summary::new(self).mode(mode).format_for_width(max_width)
    }
}

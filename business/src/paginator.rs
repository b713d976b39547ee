//! Page arithmetic for the paginator bar.

use std::ops::RangeInclusive;

/// Page links shown at once.
pub const PAGE_LINK_SIZE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// 1-based.
    pub page: u32,
    pub rows: u32,
    pub total_records: u64,
}

impl Paginator {
    pub fn new(page: u32, rows: u32, total_records: u64) -> Self {
        Self {
            page: page.max(1),
            rows,
            total_records,
        }
    }

    /// Zero-based index of the first row on this page.
    pub fn first(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.rows)
    }

    pub fn page_count(&self) -> u32 {
        if self.rows == 0 {
            return 1;
        }
        let pages = self.total_records.div_ceil(u64::from(self.rows));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// One-based number of the last row on this page, 0 when there are none.
    pub fn last_row(&self) -> u64 {
        (self.first() + u64::from(self.rows)).min(self.total_records)
    }

    /// The "Showing x to y of z entries" line.
    pub fn report(&self) -> String {
        let first = if self.total_records == 0 {
            0
        } else {
            self.first() + 1
        };
        format!(
            "Showing {first} to {} of {} entries",
            self.last_row(),
            self.total_records
        )
    }

    /// 1-based page numbers to render as links, keeping the current page centered
    /// until the window hits either end.
    pub fn page_links(&self) -> RangeInclusive<u32> {
        let count = self.page_count();
        let visible = PAGE_LINK_SIZE.min(count);
        let current = self.page.clamp(1, count) - 1;

        let mut start = current.saturating_sub(visible / 2);
        let end = (start + visible - 1).min(count - 1);
        let shortfall = PAGE_LINK_SIZE.saturating_sub(end - start + 1);
        start = start.saturating_sub(shortfall);

        (start + 1)..=(end + 1)
    }
}

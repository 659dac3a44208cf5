use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

use crate::constants::{DEFAULT_PAGE_LENGTH, PAGE_LENGTH_CHOICES};
use crate::error::{TeamError, TeamResult};
use crate::page::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLength {
    Rows(usize),
    All,
}

impl fmt::Display for PageLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLength::Rows(n) => write!(f, "{}", n),
            PageLength::All => write!(f, "All"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationOptions {
    pub page_length: PageLength,
    pub length_menu: Vec<PageLength>,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        let mut length_menu: Vec<PageLength> =
            PAGE_LENGTH_CHOICES.iter().map(|&n| PageLength::Rows(n)).collect();
        length_menu.push(PageLength::All);

        Self {
            page_length: PageLength::Rows(DEFAULT_PAGE_LENGTH),
            length_menu,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Paging and sorting state of an enhanced table.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedView {
    options: PaginationOptions,
    page_length: PageLength,
    page: usize,
    sort: Option<(usize, SortOrder)>,
}

impl PagedView {
    pub fn new(options: PaginationOptions) -> Self {
        Self {
            page_length: options.page_length,
            options,
            page: 0,
            sort: None,
        }
    }

    pub fn page_length(&self) -> PageLength {
        self.page_length
    }

    pub fn length_menu(&self) -> &[PageLength] {
        &self.options.length_menu
    }

    /// Zero-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn sort(&self) -> Option<(usize, SortOrder)> {
        self.sort
    }

    pub fn page_count(&self, total: usize) -> usize {
        match self.page_length {
            PageLength::Rows(n) if n > 0 && total > 0 => total.div_ceil(n),
            _ => 1,
        }
    }

    pub fn set_page_length(&mut self, length: PageLength) -> TeamResult<()> {
        if !self.options.length_menu.contains(&length) {
            return Err(TeamError::InvalidInput(format!(
                "Page length {} is not one of the offered choices",
                length
            )));
        }
        self.page_length = length;
        self.page = 0;
        Ok(())
    }

    /// Move to the next entry of the length menu, wrapping around.
    pub fn cycle_page_length(&mut self) -> PageLength {
        let menu = &self.options.length_menu;
        if let Some(next) = menu
            .iter()
            .position(|&length| length == self.page_length)
            .map(|i| menu[(i + 1) % menu.len()])
            .or_else(|| menu.first().copied())
        {
            self.page_length = next;
            self.page = 0;
        }
        self.page_length
    }

    pub fn next_page(&mut self, total: usize) -> bool {
        if self.page + 1 < self.page_count(total) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn first_page(&mut self) {
        self.page = 0;
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Sort by `column`; sorting the same column again flips the order.
    pub fn sort_by(&mut self, column: usize) {
        self.sort = match self.sort {
            Some((current, SortOrder::Ascending)) if current == column => {
                Some((column, SortOrder::Descending))
            }
            _ => Some((column, SortOrder::Ascending)),
        };
        self.page = 0;
    }

    /// Range of display positions on the current page.
    pub fn page_range(&self, total: usize) -> Range<usize> {
        match self.page_length {
            PageLength::All => 0..total,
            PageLength::Rows(n) => {
                let page = self.page.min(self.page_count(total) - 1);
                let start = (page * n).min(total);
                start..(start + n).min(total)
            }
        }
    }

    /// Row indices in display order, across all pages.
    pub fn ordered_indices(&self, rows: &[Row]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..rows.len()).collect();
        if let Some((column, order)) = self.sort {
            indices.sort_by(|&a, &b| {
                let ordering = compare_cells(cell(&rows[a], column), cell(&rows[b], column));
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }
        indices
    }

    pub fn visible_indices(&self, rows: &[Row]) -> Vec<usize> {
        let ordered = self.ordered_indices(rows);
        ordered[self.page_range(rows.len())].to_vec()
    }

    /// e.g. "Showing 11 to 20 of 42 entries"
    pub fn summary(&self, total: usize) -> String {
        let range = self.page_range(total);
        if range.is_empty() {
            return "Showing 0 to 0 of 0 entries".to_string();
        }
        format!("Showing {} to {} of {} entries", range.start + 1, range.end, total)
    }
}

fn cell(row: &Row, column: usize) -> &str {
    row.cells.get(column).map(String::as_str).unwrap_or("")
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

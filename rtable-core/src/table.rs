use serde::Serialize;

use crate::columns::{ColumnHeader, TableRow};
use crate::config::TableConfig;
use crate::error::TableError;
use crate::pagination::Paginator;

/// Row tap forwarded to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowClick {
    /// Position of the row within the visible page
    pub row_in_page: usize,
    /// Position of the row within the whole collection
    pub row_index: usize,
    pub page_index: usize,
}

pub type RowClickHandler = Box<dyn FnMut(RowClick)>;

/// "Page X of Y" footer text, one-based
///
/// `current` never exceeds `total`, even when the full-dataset overflow mode has moved
/// the cursor one page past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageIndicator {
    pub current: usize,
    pub total: usize,
}

impl std::fmt::Display for PageIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}

/// Everything a renderer needs to draw the visible page
#[derive(Debug)]
pub struct PageSnapshot<'a, T> {
    pub headers: &'a [ColumnHeader],
    pub rows: &'a [T],
    /// Collection index of `rows[0]`
    pub first_row_index: usize,
    pub page_index: usize,
    pub indicator: PageIndicator,
    pub can_prev: bool,
    pub can_next: bool,
}

#[derive(Debug)]
pub enum TableState<'a, T> {
    /// Nothing to show, the "no data" message is displayed instead of rows
    Empty,
    Page(PageSnapshot<'a, T>),
}

impl<'a, T> TableState<'a, T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, TableState::Empty)
    }

    pub fn page(&self) -> Option<&PageSnapshot<'a, T>> {
        match self {
            TableState::Empty => None,
            TableState::Page(snapshot) => Some(snapshot),
        }
    }
}

/// Headless table widget: header metadata, paged rows and footer navigation state
///
/// A new [`Paginator`] is built on every `configure` call and replaced wholesale on
/// the next one. An empty collection never builds a paginator and leaves the table
/// in [`TableState::Empty`].
pub struct TableView<T> {
    config: TableConfig,
    headers: Vec<ColumnHeader>,
    pagination: Option<Paginator<T>>,
    on_row_clicked: Option<RowClickHandler>,
}

impl<T> TableView<T> {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            headers: Vec::new(),
            pagination: None,
            on_row_clicked: None,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn headers(&self) -> &[ColumnHeader] {
        &self.headers
    }

    pub fn configure(&mut self, headers: Vec<ColumnHeader>, items: Vec<T>, initial_page: usize) {
        self.on_row_clicked = None;
        self.install(headers, items, initial_page);
    }

    pub fn configure_with_click<F>(
        &mut self,
        headers: Vec<ColumnHeader>,
        items: Vec<T>,
        initial_page: usize,
        on_row_clicked: F,
    ) where
        F: FnMut(RowClick) + 'static,
    {
        self.on_row_clicked = Some(Box::new(on_row_clicked));
        self.install(headers, items, initial_page);
    }

    fn install(&mut self, headers: Vec<ColumnHeader>, items: Vec<T>, initial_page: usize) {
        self.headers = headers;
        if items.is_empty() {
            log::debug!("Configured with no rows, showing empty state");
            self.pagination = None;
            return;
        }

        // A remembered page may not exist any more if the collection shrank
        let last_page = crate::pagination::total_pages(items.len(), self.config.rows_per_page) - 1;
        if initial_page > last_page {
            log::debug!("Remembered page {initial_page} is past the last page {last_page}");
        }
        let paginator = Paginator::new(items, self.config.rows_per_page, initial_page.min(last_page))
            .with_overflow(self.config.overflow);
        log::debug!(
            "Configured {} rows over {} pages, starting on page {}",
            paginator.len(),
            paginator.total_pages(),
            paginator.page_index()
        );
        self.pagination = Some(paginator);
    }

    /// Drops the collection and shows the empty state
    pub fn clear(&mut self) {
        self.pagination = None;
    }

    pub fn is_empty(&self) -> bool {
        self.pagination.is_none()
    }

    /// Current page index, to persist across a restore
    pub fn page_index(&self) -> Option<usize> {
        self.pagination.as_ref().map(Paginator::page_index)
    }

    pub fn snapshot(&self) -> TableState<'_, T> {
        let Some(pagination) = &self.pagination else {
            return TableState::Empty;
        };

        let window = pagination.window();
        TableState::Page(PageSnapshot {
            headers: &self.headers,
            rows: pagination.current_page(),
            first_row_index: window.start,
            page_index: pagination.page_index(),
            indicator: PageIndicator {
                current: pagination
                    .effective_page_index()
                    .saturating_add(1)
                    .min(pagination.total_pages()),
                total: pagination.total_pages(),
            },
            can_prev: pagination.can_retreat(),
            can_next: pagination.can_advance(),
        })
    }

    pub fn next_page(&mut self) -> TableState<'_, T> {
        if let Some(pagination) = self.pagination.as_mut() {
            pagination.advance();
        }
        self.snapshot()
    }

    pub fn prev_page(&mut self) -> TableState<'_, T> {
        if let Some(pagination) = self.pagination.as_mut() {
            pagination.retreat();
        }
        self.snapshot()
    }

    /// Forwards a tap on a visible row to the click handler
    ///
    /// Returns false when there is no handler or the row is not on the visible page.
    pub fn click_row(&mut self, row_in_page: usize) -> bool {
        let (Some(pagination), Some(handler)) =
            (self.pagination.as_ref(), self.on_row_clicked.as_mut())
        else {
            return false;
        };

        let window = pagination.window();
        if row_in_page >= window.len() {
            log::debug!("Ignoring click on row {row_in_page}, page has {} rows", window.len());
            return false;
        }

        handler(RowClick {
            row_in_page,
            row_index: window.start + row_in_page,
            page_index: pagination.page_index(),
        });
        true
    }
}

impl<T: TableRow> TableView<T> {
    /// Cell text for every visible row, in header order
    pub fn visible_cells(&self) -> Result<Vec<Vec<String>>, TableError> {
        match &self.pagination {
            Some(pagination) => pagination
                .current_page()
                .iter()
                .map(|row| row.cells(&self.headers))
                .collect(),
            None => Ok(Vec::new()),
        }
    }
}

impl<T> Default for TableView<T> {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

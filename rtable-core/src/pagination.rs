use std::ops::Range;

use serde::{Deserialize, Serialize};

/// What the current page resolves to once the cursor sits past the last page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Show the last valid page; advancing stops on the last page
    #[default]
    ClampToLastPage,
    /// Compatibility mode: advancing only stops once the page start has reached the
    /// end of the data. A page starting exactly at the end is empty, and one starting
    /// beyond it shows every item
    FullDataset,
}

/// Number of pages needed to show `total_items`, never less than one
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1)).max(1)
}

/// Item range resolved for the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    /// True when the cursor did not map onto an in-range page start
    pub clamped: bool,
}

impl PageWindow {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Pagination over an item count, for callers that keep the items themselves
#[derive(Debug, Clone)]
pub struct PageCursor {
    total_items: usize,
    items_per_page: usize,
    page_index: usize,
    overflow: OverflowPolicy,
}

impl PageCursor {
    pub fn new(total_items: usize, items_per_page: usize, page_index: usize) -> Self {
        if items_per_page == 0 {
            log::warn!("items_per_page of 0 is not a valid page size, using 1");
        }
        Self {
            total_items,
            items_per_page: items_per_page.max(1),
            page_index,
            overflow: OverflowPolicy::default(),
        }
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Raw cursor, as set at construction and moved by navigation
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    pub fn last_page_index(&self) -> usize {
        self.total_pages() - 1
    }

    /// Index of the page actually shown by [`PageCursor::window`]
    pub fn effective_page_index(&self) -> usize {
        match self.overflow {
            OverflowPolicy::ClampToLastPage => self.page_index.min(self.last_page_index()),
            OverflowPolicy::FullDataset => self.page_index,
        }
    }

    fn page_start(&self) -> usize {
        self.page_index.saturating_mul(self.items_per_page)
    }

    pub fn can_go_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        match self.overflow {
            OverflowPolicy::ClampToLastPage => self.page_index < self.last_page_index(),
            OverflowPolicy::FullDataset => self.page_start() < self.total_items,
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.can_go_prev() {
            self.page_index -= 1;
            log::debug!("moved back to page {}", self.page_index);
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        if self.can_go_next() {
            self.page_index += 1;
            log::debug!("moved forward to page {}", self.page_index);
            true
        } else {
            false
        }
    }

    pub fn window(&self) -> PageWindow {
        if self.total_items == 0 {
            return PageWindow {
                start: 0,
                end: 0,
                clamped: self.page_index != 0,
            };
        }

        let start = self.page_start();
        if start < self.total_items {
            return PageWindow {
                start,
                end: start
                    .saturating_add(self.items_per_page)
                    .min(self.total_items),
                clamped: false,
            };
        }

        log::debug!(
            "page {} starts past {} items, applying {:?}",
            self.page_index,
            self.total_items,
            self.overflow
        );
        match self.overflow {
            OverflowPolicy::ClampToLastPage => {
                let start = self.last_page_index() * self.items_per_page;
                PageWindow {
                    start,
                    end: start
                        .saturating_add(self.items_per_page)
                        .min(self.total_items),
                    clamped: true,
                }
            }
            // A page starting exactly at the end is an empty page, not the whole collection
            OverflowPolicy::FullDataset if start == self.total_items => PageWindow {
                start,
                end: start,
                clamped: true,
            },
            OverflowPolicy::FullDataset => PageWindow {
                start: 0,
                end: self.total_items,
                clamped: true,
            },
        }
    }
}

/// Generic pagination over an owned collection
///
/// The collection is fixed for the lifetime of the paginator; reconfiguring a table
/// means building a new one. No operation fails: a cursor outside the data resolves
/// according to the [`OverflowPolicy`].
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    cursor: PageCursor,
}

impl<T> Paginator<T> {
    pub fn new(items: Vec<T>, items_per_page: usize, initial_page_index: usize) -> Self {
        let cursor = PageCursor::new(items.len(), items_per_page, initial_page_index);
        Self { items, cursor }
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.cursor = self.cursor.with_overflow(overflow);
        self
    }

    pub fn current_page(&self) -> &[T] {
        &self.items[self.cursor.window().range()]
    }

    pub fn advance(&mut self) -> &[T] {
        self.cursor.next_page();
        self.current_page()
    }

    pub fn retreat(&mut self) -> &[T] {
        self.cursor.prev_page();
        self.current_page()
    }

    pub fn page_index(&self) -> usize {
        self.cursor.page_index()
    }

    pub fn effective_page_index(&self) -> usize {
        self.cursor.effective_page_index()
    }

    pub fn window(&self) -> PageWindow {
        self.cursor.window()
    }

    pub fn total_pages(&self) -> usize {
        self.cursor.total_pages()
    }

    pub fn items_per_page(&self) -> usize {
        self.cursor.items_per_page()
    }

    pub fn can_advance(&self) -> bool {
        self.cursor.can_go_next()
    }

    pub fn can_retreat(&self) -> bool {
        self.cursor.can_go_prev()
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(7, 3), 3);
        // Zero page size is treated as one item per page
        assert_eq!(total_pages(4, 0), 4);
    }

    #[test]
    fn test_zero_page_size_is_coerced() {
        let paginator = Paginator::new(vec![1, 2, 3], 0, 0);
        assert_eq!(paginator.items_per_page(), 1);
        assert_eq!(paginator.current_page(), &[1]);
        assert_eq!(paginator.total_pages(), 3);
    }

    #[test]
    fn test_empty_dataset_never_panics() {
        let mut paginator: Paginator<u8> = Paginator::new(Vec::new(), 5, 0);
        assert!(paginator.current_page().is_empty());
        assert!(paginator.advance().is_empty());
        assert!(paginator.retreat().is_empty());
        assert_eq!(paginator.page_index(), 0);
        assert!(!paginator.window().clamped);

        let stale: Paginator<u8> = Paginator::new(Vec::new(), 5, 3);
        assert!(stale.current_page().is_empty());
        assert!(stale.window().clamped);
    }

    #[test]
    fn test_initial_page_resume() {
        let paginator = Paginator::new((0..25).collect::<Vec<_>>(), 10, 1);
        assert_eq!(paginator.page_index(), 1);
        assert_eq!(paginator.current_page(), (10..20).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_out_of_range_cursor_clamps_to_last_page() {
        let paginator = Paginator::new((0..7).collect::<Vec<_>>(), 3, 10);
        assert_eq!(paginator.current_page(), &[6]);
        assert_eq!(paginator.page_index(), 10);
        assert_eq!(paginator.effective_page_index(), 2);
        assert_eq!(
            paginator.window(),
            PageWindow {
                start: 6,
                end: 7,
                clamped: true
            }
        );
    }

    #[test]
    fn test_out_of_range_cursor_full_dataset_mode() {
        let paginator = Paginator::new((0..7).collect::<Vec<_>>(), 3, 10)
            .with_overflow(OverflowPolicy::FullDataset);
        assert_eq!(paginator.current_page().len(), 7);
        assert_eq!(paginator.effective_page_index(), 10);
        assert!(paginator.window().clamped);
    }

    #[test]
    fn test_huge_cursor_does_not_overflow() {
        let paginator = Paginator::new(vec!['a', 'b', 'c'], 2, usize::MAX);
        assert_eq!(paginator.current_page(), &['c']);
        assert!(!paginator.can_advance());

        let cursor = PageCursor::new(3, 2, usize::MAX).with_overflow(OverflowPolicy::FullDataset);
        assert!(!cursor.can_go_next());
        assert_eq!(cursor.window().range(), 0..3);
    }

    #[test]
    fn test_huge_page_size_does_not_overflow() {
        let cursor = PageCursor::new(usize::MAX, usize::MAX - 1, 5);
        assert_eq!(
            cursor.window(),
            PageWindow {
                start: usize::MAX - 1,
                end: usize::MAX,
                clamped: true
            }
        );
    }

    #[test]
    fn test_cursor_navigation_flags() {
        let mut cursor = PageCursor::new(25, 10, 0);
        assert!(!cursor.can_go_prev());
        assert!(cursor.can_go_next());

        assert!(cursor.next_page());
        assert!(cursor.next_page());
        assert!(!cursor.next_page());
        assert_eq!(cursor.page_index(), 2);
        assert_eq!(cursor.window().range(), 20..25);

        assert!(cursor.prev_page());
        assert!(cursor.prev_page());
        assert!(!cursor.prev_page());
        assert_eq!(cursor.page_index(), 0);
    }

    #[test]
    fn test_overflow_policy_serde_names() {
        let policy: OverflowPolicy = serde_json::from_str("\"full_dataset\"").unwrap();
        assert_eq!(policy, OverflowPolicy::FullDataset);
        assert_eq!(
            serde_json::to_string(&OverflowPolicy::ClampToLastPage).unwrap(),
            "\"clamp_to_last_page\""
        );
    }
}

//! Page slicing and the pagination bar.

use serde::Serialize;
use std::ops::Range;

use crate::constants::PAGINATION_WINDOW;

/// Number of pages needed for `len` items; zero items means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of 1-based `page`, clamped to `len`.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// The items on 1-based `page`.
pub fn page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

/// One element of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PageLink {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// Pagination bar state: page links plus previous/next availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationBar {
    pub links: Vec<PageLink>,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Bar for `current` of `total` pages, or `None` when there is only one page.
///
/// Shows up to [`PAGINATION_WINDOW`] consecutive pages around the current one,
/// plus links to the first and last page with an ellipsis for any gap.
pub fn pagination_bar(current: usize, total: usize) -> Option<PaginationBar> {
    if total <= 1 {
        return None;
    }
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(PAGINATION_WINDOW / 2).max(1);
    let end = (start + PAGINATION_WINDOW - 1).min(total);
    if end + 1 - start < PAGINATION_WINDOW {
        start = (end + 1).saturating_sub(PAGINATION_WINDOW).max(1);
    }

    let mut links = Vec::with_capacity(PAGINATION_WINDOW + 4);
    if start > 1 {
        links.push(PageLink::Page {
            number: 1,
            current: false,
        });
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    links.extend((start..=end).map(|number| PageLink::Page {
        number,
        current: number == current,
    }));
    if end < total {
        if end + 1 < total {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page {
            number: total,
            current: false,
        });
    }

    Some(PaginationBar {
        links,
        has_prev: current > 1,
        has_next: current < total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(bar: &PaginationBar) -> String {
        bar.links
            .iter()
            .map(|link| match link {
                PageLink::Page {
                    number,
                    current: true,
                } => format!("[{number}]"),
                PageLink::Page { number, .. } => number.to_string(),
                PageLink::Ellipsis => "...".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_page_slices() {
        let items: Vec<usize> = (0..30).collect();
        assert_eq!(page(&items, 1, 12), &items[0..12]);
        assert_eq!(page(&items, 3, 12), &items[24..30]);
        assert!(page(&items, 4, 12).is_empty());
        assert!(page(&items, usize::MAX, 12).is_empty());
    }

    #[test]
    fn test_pages_cover_every_item_once() {
        for len in [0, 1, 11, 12, 13, 100, 803] {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(len, 12);
            let joined: Vec<usize> =
                (1..=pages).flat_map(|p| page(&items, p, 12).iter().copied()).collect();
            assert_eq!(joined, items, "len {len}");
        }
    }

    #[test]
    fn test_single_page_has_no_bar() {
        assert!(pagination_bar(1, 1).is_none());
        assert!(pagination_bar(1, 0).is_none());
    }

    #[test]
    fn test_bar_windows() {
        assert_eq!(render(&pagination_bar(1, 3).unwrap()), "[1] 2 3");
        assert_eq!(render(&pagination_bar(1, 10).unwrap()), "[1] 2 3 4 5 ... 10");
        assert_eq!(render(&pagination_bar(5, 10).unwrap()), "1 ... 3 4 [5] 6 7 ... 10");
        assert_eq!(render(&pagination_bar(4, 10).unwrap()), "1 2 3 [4] 5 6 ... 10");
        assert_eq!(render(&pagination_bar(10, 10).unwrap()), "1 ... 6 7 8 9 [10]");
        assert_eq!(render(&pagination_bar(7, 7).unwrap()), "1 ... 3 4 5 6 [7]");
    }

    #[test]
    fn test_prev_next_flags() {
        let first = pagination_bar(1, 4).unwrap();
        assert!(!first.has_prev);
        assert!(first.has_next);

        let last = pagination_bar(4, 4).unwrap();
        assert!(last.has_prev);
        assert!(!last.has_next);
    }
}

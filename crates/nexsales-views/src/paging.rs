//! Offset/limit slicing of derived lists.

use nexsales_core::repository::{PaginatedResult, Pagination};

/// Cut one page out of `items`. An offset past the end yields an empty
/// page; `total` always reports the full length.
pub fn paginate<T: Clone>(items: &[T], page: &Pagination) -> PaginatedResult<T> {
    let total = items.len();
    let start = usize::try_from(page.offset).unwrap_or(usize::MAX).min(total);
    let len = usize::try_from(page.limit).unwrap_or(usize::MAX);
    let end = start.saturating_add(len).min(total);

    PaginatedResult {
        items: items[start..end].to_vec(),
        total: total as u64,
        offset: page.offset,
        limit: page.limit,
    }
}

/// Number of pages needed for `total` items, at least one.
pub fn page_count(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 1;
    }
    total.div_ceil(limit).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page() {
        let items: Vec<u32> = (0..120).collect();
        let page = paginate(&items, &Pagination { offset: 50, limit: 50 });
        assert_eq!(page.items.first(), Some(&50));
        assert_eq!(page.items.len(), 50);
        assert_eq!(page.total, 120);
    }

    #[test]
    fn last_page_is_short() {
        let items: Vec<u32> = (0..120).collect();
        let page = paginate(&items, &Pagination { offset: 100, limit: 50 });
        assert_eq!(page.items, (100..120).collect::<Vec<_>>());
    }

    #[test]
    fn offset_past_end_is_empty() {
        let items = vec!["a", "b"];
        let page = paginate(&items, &Pagination { offset: 10, limit: 5 });
        assert!(page.items.is_empty());
        assert_eq!(page.total, 2);
    }

    #[test]
    fn page_counts() {
        assert_eq!(page_count(0, 50), 1);
        assert_eq!(page_count(50, 50), 1);
        assert_eq!(page_count(5000, 50), 100);
        assert_eq!(page_count(5001, 50), 101);
        assert_eq!(page_count(7, 0), 1);
    }
}

/// The default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a longer list, with navigation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The items visible on this page.
    pub visible: &'a [T],
    /// Whether an earlier page exists.
    pub has_prev: bool,
    /// Whether a later page exists.
    pub has_next: bool,
}

impl<T> Page<'_, T> {
    const EMPTY: Self = Self {
        visible: &[],
        has_prev: false,
        has_next: false,
    };
}

/// Slices one page out of `items`.
///
/// Pages are 0-indexed. An out-of-range page (or a zero page size) yields an
/// empty slice with both navigation flags false.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    if page_size == 0 {
        return Page::EMPTY;
    }

    match page.checked_mul(page_size) {
        Some(start) if start < items.len() => {
            let end = items.len().min(start + page_size);
            Page {
                visible: &items[start..end],
                has_prev: page > 0,
                has_next: end < items.len(),
            }
        }
        _ => Page::EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page_of_fifteen_items() {
        let data = items(15);
        let page = paginate(&data, 0, 10);
        assert_eq!(page.visible.len(), 10);
        assert!(!page.has_prev);
        assert!(page.has_next);
    }

    #[test]
    fn last_partial_page_of_fifteen_items() {
        let data = items(15);
        let page = paginate(&data, 1, 10);
        assert_eq!(page.visible, &[10, 11, 12, 13, 14]);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let data = items(20);
        let page = paginate(&data, 1, 10);
        assert_eq!(page.visible.len(), 10);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test_case(2; "first page past the end")]
    #[test_case(100; "far past the end")]
    fn out_of_range_page_is_empty_with_flags_false(page: usize) {
        let data = items(15);
        let result = paginate(&data, page, 10);
        assert!(result.visible.is_empty());
        assert!(!result.has_prev);
        assert!(!result.has_next);
    }

    #[test]
    fn empty_input_yields_empty_page() {
        let data: Vec<usize> = Vec::new();
        let page = paginate(&data, 0, 10);
        assert!(page.visible.is_empty());
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn zero_page_size_yields_empty_page() {
        let data = items(5);
        let page = paginate(&data, 0, 0);
        assert!(page.visible.is_empty());
    }

    #[test]
    fn overflowing_page_index_is_out_of_range() {
        let data = items(5);
        let page = paginate(&data, usize::MAX, 10);
        assert!(page.visible.is_empty());
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }
}

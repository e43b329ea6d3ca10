// src/pipeline/paginate.rs

//! Fixed-size page windows over a sequence.

/// One page of a sequence plus the total page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Number of pages needed for `len` items. Zero items means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Slice out page `page_number` (1-based).
///
/// A page size below 1 is treated as 1. Page 0 and pages past the end are
/// empty.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);

    if page_number == 0 || page_number > total_pages {
        return Page {
            items: &[],
            total_pages,
        };
    }

    let start = (page_number - 1) * page_size;
    let end = start.saturating_add(page_size).min(items.len());
    Page {
        items: &items[start..end],
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 100), 0);
        assert_eq!(total_pages(1, 100), 1);
        assert_eq!(total_pages(100, 100), 1);
        assert_eq!(total_pages(101, 100), 2);
        assert_eq!(total_pages(250, 100), 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<usize> = (0..250).collect();
        let page = paginate(&items, 100, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 50);
        assert_eq!(page.items[0], 200);
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let items: Vec<usize> = (0..250).collect();
        let page = paginate(&items, 100, 4);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);

        assert!(paginate(&items, 100, usize::MAX).items.is_empty());
        assert!(paginate(&items, 100, 0).items.is_empty());
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let items = [1, 2, 3];
        let page = paginate(&items, 0, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &[2]);
    }

    #[test]
    fn test_empty_input_has_no_pages() {
        let items: [u8; 0] = [];
        let page = paginate(&items, 100, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_pages_partition_input() {
        let items: Vec<usize> = (0..97).collect();
        for page_size in [1, 7, 10, 96, 97, 200] {
            let total = total_pages(items.len(), page_size);
            let joined: Vec<usize> = (1..=total)
                .flat_map(|n| paginate(&items, page_size, n).items.iter().copied())
                .collect();
            assert_eq!(joined, items, "page_size {page_size}");
        }
    }
}

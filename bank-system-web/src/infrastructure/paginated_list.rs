//! Page slicing and navigation metadata for listings
//!
//! Page indexes coming from requests are never rejected: anything below 1
//! becomes 1 and anything past the last page becomes the last page.

use serde::Serialize;

pub use bank_system_api::config::DEFAULT_SURROUNDING_PAGES_COUNT;

/// One page of items plus what a view needs to render page links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginatedList<T> {
    items: Vec<T>,
    current_page: usize,
    total_pages: usize,
    surrounding_pages: Vec<usize>,
}

impl<T> PaginatedList<T> {
    fn new(items: Vec<T>, current_page: usize, total_pages: usize, surrounding_pages_count: usize) -> Self {
        let surrounding_pages = surrounding_window(current_page, total_pages, surrounding_pages_count);
        Self {
            items,
            current_page,
            total_pages,
            surrounding_pages,
        }
    }

    /// Wrap a page that storage already sliced
    ///
    /// `total_count` is the number of matching records across all pages, not
    /// the length of `items`. `items` is trusted to be the requested page and
    /// is only truncated to `items_per_page`.
    ///
    /// # Panics
    /// If `items_per_page` is 0.
    pub fn from_fetched_page(
        mut items: Vec<T>,
        total_count: usize,
        page_index: i64,
        items_per_page: usize,
        surrounding_pages_count: usize,
    ) -> Self {
        let total_pages = page_count(total_count, items_per_page);
        let current_page = clamp_page(page_index, total_pages);
        items.truncate(items_per_page);
        Self::new(items, current_page, total_pages, surrounding_pages_count)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based index of the page being shown
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// 0 when there is nothing to show
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Ascending page numbers to link around the current page, current page included
    pub fn surrounding_pages(&self) -> &[usize] {
        &self.surrounding_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl<'a, T> IntoIterator for &'a PaginatedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Slice `items` down to the page `page_index`
///
/// # Panics
/// If `items_per_page` is 0.
///
/// # Example
/// ```
/// use bank_system_web::infrastructure::paginate;
///
/// let page = paginate(1..=45, 3, 20, 3);
/// assert_eq!(page.items(), &[41, 42, 43, 44, 45]);
/// assert_eq!(page.total_pages(), 3);
/// assert_eq!(page.surrounding_pages(), &[1, 2, 3]);
/// ```
pub fn paginate<I>(
    items: I,
    page_index: i64,
    items_per_page: usize,
    surrounding_pages_count: usize,
) -> PaginatedList<I::Item>
where
    I: IntoIterator,
{
    let items: Vec<I::Item> = items.into_iter().collect();
    let total_pages = page_count(items.len(), items_per_page);
    let current_page = clamp_page(page_index, total_pages);

    let skip = (current_page - 1).saturating_mul(items_per_page);
    let visible = items.into_iter().skip(skip).take(items_per_page).collect();

    PaginatedList::new(visible, current_page, total_pages, surrounding_pages_count)
}

/// Pagination as a method on any collection
pub trait ToPaginatedList: IntoIterator + Sized {
    fn to_paginated_list(self, page_index: i64, items_per_page: usize) -> PaginatedList<Self::Item> {
        paginate(self, page_index, items_per_page, DEFAULT_SURROUNDING_PAGES_COUNT)
    }

    fn to_paginated_list_with_surrounding(
        self,
        page_index: i64,
        items_per_page: usize,
        surrounding_pages_count: usize,
    ) -> PaginatedList<Self::Item> {
        paginate(self, page_index, items_per_page, surrounding_pages_count)
    }
}

impl<I: IntoIterator> ToPaginatedList for I {}

/// Number of pages needed for `total_count` items; panics on a zero page size
pub(crate) fn page_count(total_count: usize, items_per_page: usize) -> usize {
    assert!(items_per_page >= 1, "items_per_page must be at least 1");
    total_count.div_ceil(items_per_page)
}

fn clamp_page(page_index: i64, total_pages: usize) -> usize {
    if total_pages == 0 {
        return 1;
    }
    let requested = usize::try_from(page_index.max(1)).unwrap_or(usize::MAX);
    requested.min(total_pages)
}

fn surrounding_window(current_page: usize, total_pages: usize, count: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let first = current_page.saturating_sub(count).max(1);
    let last = current_page.saturating_add(count).min(total_pages);
    (first..=last).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_middle_page() {
        let page = paginate(numbers(45), 2, 20, 3);

        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.current_page(), 2);
        assert_eq!(page.len(), 20);
        assert_eq!(page.items().first(), Some(&21));
        assert_eq!(page.items().last(), Some(&40));
        assert!(page.has_previous_page());
        assert!(page.has_next_page());
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate(numbers(45), 3, 20, 3);

        assert_eq!(page.items(), &[41, 42, 43, 44, 45]);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_partial_division_rounds_up() {
        let page = paginate(numbers(21), 1, 20, 3);
        assert_eq!(page.total_pages(), 2);

        let page = paginate(numbers(40), 1, 20, 3);
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn test_page_below_one_is_first_page() {
        for requested in [0, -1, i64::MIN] {
            let page = paginate(numbers(45), requested, 20, 3);
            assert_eq!(page.current_page(), 1);
            assert_eq!(page.items().first(), Some(&1));
            assert!(!page.has_previous_page());
        }
    }

    #[test]
    fn test_page_past_end_is_last_page() {
        let page = paginate(numbers(40), 999, 20, 3);
        assert_eq!(page.current_page(), 2);
        assert_eq!(page.items().first(), Some(&21));

        let page = paginate(numbers(40), i64::MAX, 20, 3);
        assert_eq!(page.current_page(), 2);
    }

    #[test]
    fn test_empty_collection() {
        let page = paginate(Vec::<usize>::new(), 5, 20, 3);

        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 0);
        assert_eq!(page.current_page(), 1);
        assert!(page.surrounding_pages().is_empty());
        assert!(!page.has_previous_page());
        assert!(!page.has_next_page());
    }

    #[test]
    #[should_panic(expected = "items_per_page must be at least 1")]
    fn test_zero_items_per_page_panics() {
        let _ = paginate(numbers(3), 1, 0, 3);
    }

    #[test]
    fn test_page_sizes_and_counts_hold_for_all_small_inputs() {
        for n in 0..=60 {
            for per_page in 1..=7 {
                let expected_pages = (n + per_page - 1) / per_page;
                for requested in -2..=12i64 {
                    let page = paginate(numbers(n), requested, per_page, 2);
                    assert_eq!(page.total_pages(), expected_pages);
                    assert!(page.len() <= per_page);

                    let current = page.current_page();
                    assert!(current >= 1);
                    if expected_pages >= 1 {
                        assert!(current <= expected_pages);
                    }

                    let skipped = (current - 1) * per_page;
                    let expected_len = per_page.min(n.saturating_sub(skipped));
                    assert_eq!(page.len(), expected_len);
                    assert_eq!(page.items().first().copied(), (expected_len > 0).then_some(skipped + 1));
                }
            }
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let items = numbers(45);
        assert_eq!(paginate(items.clone(), 2, 20, 3), paginate(items, 2, 20, 3));
    }

    #[test]
    fn test_surrounding_window_near_start() {
        let page = paginate(numbers(100), 1, 10, 3);
        assert_eq!(page.total_pages(), 10);
        assert_eq!(page.surrounding_pages(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_surrounding_window_in_middle_and_near_end() {
        let page = paginate(numbers(100), 5, 10, 3);
        assert_eq!(page.surrounding_pages(), &[2, 3, 4, 5, 6, 7, 8]);

        let page = paginate(numbers(100), 9, 10, 3);
        assert_eq!(page.surrounding_pages(), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_surrounding_window_of_zero_is_current_page() {
        let page = paginate(numbers(100), 4, 10, 0);
        assert_eq!(page.surrounding_pages(), &[4]);
    }

    #[test]
    fn test_surrounding_window_larger_than_total() {
        let page = paginate(numbers(25), 2, 10, usize::MAX);
        assert_eq!(page.surrounding_pages(), &[1, 2, 3]);
    }

    #[test]
    fn test_extension_trait_uses_default_window() {
        let page = numbers(200).to_paginated_list(10, 10);
        assert_eq!(page.surrounding_pages(), &[7, 8, 9, 10, 11, 12, 13]);

        let page = numbers(200).to_paginated_list_with_surrounding(10, 10, 1);
        assert_eq!(page.surrounding_pages(), &[9, 10, 11]);
    }

    #[test]
    fn test_from_fetched_page_uses_total_count() {
        let fetched: Vec<usize> = (21..=40).collect();
        let page = PaginatedList::from_fetched_page(fetched.clone(), 45, 2, 20, 3);

        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.current_page(), 2);
        assert_eq!(page.items(), fetched.as_slice());
        assert_eq!(page.surrounding_pages(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_fetched_page_clamps_and_truncates() {
        let page = PaginatedList::from_fetched_page(numbers(25), 45, 7, 20, 3);
        assert_eq!(page.current_page(), 3);
        assert_eq!(page.len(), 20);

        let empty = PaginatedList::from_fetched_page(Vec::<usize>::new(), 0, 0, 20, 3);
        assert_eq!(empty.total_pages(), 0);
        assert_eq!(empty.current_page(), 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_iterates_by_reference() {
        let page = paginate(numbers(5), 1, 3, 3);
        let doubled: Vec<usize> = (&page).into_iter().map(|n| n * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!(page.iter().count(), 3);
        assert_eq!(page.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn test_serializes_navigation_metadata() {
        let page = paginate(numbers(5), 2, 2, 1);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "items": [3, 4],
                "current_page": 2,
                "total_pages": 3,
                "surrounding_pages": [1, 2, 3]
            })
        );
    }
}

use crate::errors::AppError;

/// Pagination metadata for a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// `ceil(total / page_size)`; zero when the page size is not positive.
pub fn total_pages(total: u64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 0;
    }
    ((total as i64) + page_size - 1) / page_size
}

pub fn page_meta(total: u64, page: i64, page_size: i64) -> PageMeta {
    let total_pages = total_pages(total, page_size);
    PageMeta {
        total_pages,
        has_next_page: page < total_pages,
        has_previous_page: page > 1,
    }
}

/// Page numbers start at 1.
pub fn validate_page(page: i64) -> Result<(), AppError> {
    if page < 1 {
        return Err(AppError::Validation(
            "Invalid page number. Page number must be greater than or equal to 1.".to_string(),
        ));
    }
    Ok(())
}

/// Metadata for a bounded listing; pages past the last one are rejected.
/// An empty collection has zero pages, so even page 1 is out of range.
pub fn check_page_bounds(total: u64, page: i64, page_size: i64) -> Result<PageMeta, AppError> {
    let meta = page_meta(total, page, page_size);
    if page > meta.total_pages {
        return Err(AppError::NotFound(
            "Requested page not found. Exceeds the total number of pages.".to_string(),
        ));
    }
    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn zero_or_negative_page_size_means_no_pages() {
        assert_eq!(total_pages(25, 0), 0);
        assert_eq!(total_pages(25, -3), 0);
    }

    #[test]
    fn page_numbers_start_at_one() {
        assert!(validate_page(1).is_ok());
        assert!(matches!(validate_page(0), Err(AppError::Validation(_))));
        assert!(matches!(validate_page(-5), Err(AppError::Validation(_))));
    }

    #[test]
    fn empty_collection_rejects_page_one() {
        // totalPages is 0, so page 1 already exceeds it
        assert!(matches!(check_page_bounds(0, 1, 10), Err(AppError::NotFound(_))));
    }

    #[test]
    fn pages_past_the_last_are_rejected() {
        assert!(check_page_bounds(25, 3, 10).is_ok());
        assert!(matches!(check_page_bounds(25, 4, 10), Err(AppError::NotFound(_))));
    }

    #[test]
    fn boundary_booleans() {
        let first = check_page_bounds(25, 1, 10).unwrap();
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next_page);
        assert!(!first.has_previous_page);

        let middle = check_page_bounds(25, 2, 10).unwrap();
        assert!(middle.has_next_page);
        assert!(middle.has_previous_page);

        let last = check_page_bounds(25, 3, 10).unwrap();
        assert!(!last.has_next_page);
        assert!(last.has_previous_page);
    }

    #[test]
    fn unchecked_meta_never_rejects() {
        // neighbour listing computes metadata without a bounds check: pages
        // past the end just read back empty
        let meta = page_meta(3, 9, 10);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);

        let empty = page_meta(0, 1, 10);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next_page);
        assert!(!empty.has_previous_page);
    }
}

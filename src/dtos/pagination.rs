//! Pagination DTO - Metadati di paginazione

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub limit: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    /// `limit` deve essere positivo (garantito da `PageQuery::limit`)
    pub fn new(current_page: u64, limit: u64, total_count: u64) -> Self {
        let total_pages = total_count.div_ceil(limit.max(1));
        Self {
            current_page,
            total_pages,
            total_count,
            limit,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }
}

/// Offset massimo accettato dal document store (il driver lo invia come i64)
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Numero di documenti da saltare per arrivare a `page`.
/// `None` se l'offset supera [`MAX_SKIP`]: la pagina è sicuramente vuota.
pub fn skip_for(page: u64, limit: u64) -> Option<u64> {
    page.saturating_sub(1)
        .checked_mul(limit)
        .filter(|skip| *skip <= MAX_SKIP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_records_in_pages_of_ten() {
        let first = Pagination::new(1, 10, 25);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next_page);
        assert!(!first.has_prev_page);
        assert_eq!(skip_for(1, 10), Some(0));

        let second = Pagination::new(2, 10, 25);
        assert!(second.has_next_page);
        assert!(second.has_prev_page);
        assert_eq!(skip_for(2, 10), Some(10));

        let third = Pagination::new(3, 10, 25);
        assert!(!third.has_next_page);
        assert!(third.has_prev_page);
        assert_eq!(skip_for(3, 10), Some(20));
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let pagination = Pagination::new(1, 10, 0);
        assert_eq!(pagination.total_pages, 0);
        assert!(!pagination.has_next_page);
        assert!(!pagination.has_prev_page);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        assert_eq!(Pagination::new(1, 10, 30).total_pages, 3);
    }

    #[test]
    fn skip_beyond_store_range_is_none() {
        // 1e18 pagine da 10: l'offset non entra in un i64
        assert_eq!(skip_for(1_000_000_000_000_000_000, 10), None);
        assert_eq!(skip_for(u64::MAX, 10), None);
        assert_eq!(skip_for(MAX_SKIP + 1, 1), Some(MAX_SKIP));
    }
}

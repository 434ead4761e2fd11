//! Paged listing results.

use serde::{Deserialize, Serialize};

use super::Paper;

/// One page of papers from a listing or search call.
///
/// `papers.len() <= per_page` always holds; `has_more` tells the caller
/// whether another forward fetch would return anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult {
    pub papers: Vec<Paper>,
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
    pub has_more: bool,
}

impl PagedResult {
    /// Build a page, computing `has_more` from `page * per_page < total`.
    pub fn new(papers: Vec<Paper>, total: usize, page: u32, per_page: u32) -> Self {
        debug_assert!(papers.len() <= per_page as usize);
        let has_more = (page as usize).saturating_mul(per_page as usize) < total;
        Self {
            papers,
            total,
            page,
            per_page,
            has_more,
        }
    }

    /// Build a single-page result, as returned by search: everything fits
    /// on page 1 and there is never a next page.
    pub fn single_page(papers: Vec<Paper>) -> Self {
        let total = papers.len();
        Self {
            papers,
            total,
            page: 1,
            per_page: total as u32,
            has_more: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Paper;

    fn paper(id: u64) -> Paper {
        Paper::new(id, format!("Paper {}", id), "", "Test Journal", 2023)
    }

    #[test]
    fn test_has_more_from_total() {
        let page = PagedResult::new(vec![paper(1)], 3, 1, 1);
        assert!(page.has_more);

        let last = PagedResult::new(vec![paper(3)], 3, 3, 1);
        assert!(!last.has_more);

        let past_end = PagedResult::new(vec![], 3, 4, 1);
        assert!(!past_end.has_more);
    }

    #[test]
    fn test_single_page() {
        let page = PagedResult::single_page(vec![paper(1), paper(2)]);
        assert_eq!(page.total, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 2);
        assert!(!page.has_more);
    }

    #[test]
    fn test_round_trips_json() {
        let page = PagedResult::new(vec![paper(1)], 3, 1, 10);
        let json = serde_json::to_string(&page).unwrap();
        let back: PagedResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total, 3);
        assert_eq!(back.papers.len(), 1);
        assert!(!back.has_more);
    }
}

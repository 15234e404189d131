//! Page-number pagination for list pages.
//!
//! Page numbers come straight from the query string, so [`PageRequest::parse`] never
//! fails: junk means page 1, and [`paginate`] clamps the number into
//! `1..=num_pages` once the row count is known.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Select};
use serde::Serialize;

use crate::errors::ServiceError;

/// Public list pages (services, trainings).
pub const PAGE_SIZE: u64 = 9;
/// Admin contact inbox.
pub const ADMIN_PAGE_SIZE: u64 = 20;

/// Requested page, 1-based, not yet clamped to the last page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page: page.max(1), per_page: per_page.max(1) }
    }

    /// Missing or non-integer → 1, below 1 → 1. Integers too large for `i64` are
    /// treated as "past the end" and clamp to the last page later.
    pub fn parse(raw: Option<&str>, per_page: u64) -> Self {
        let page = match raw.map(str::trim) {
            None | Some("") => 1,
            Some(s) => match s.parse::<i64>() {
                Ok(n) if n >= 1 => n as u64,
                Ok(_) => 1,
                Err(_) if s.bytes().all(|b| b.is_ascii_digit()) => u64::MAX,
                Err(_) => 1,
            },
        };
        Self::new(page, per_page)
    }
}

/// One page of results plus what a template needs to draw the pager.
#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub num_pages: u64,
    pub per_page: u64,
    pub total: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Clamp `requested` into `1..=num_pages`; an empty result set still has one page.
pub fn clamp_page(requested: u64, num_pages: u64) -> (u64, u64) {
    let num_pages = num_pages.max(1);
    (requested.clamp(1, num_pages), num_pages)
}

pub async fn paginate<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    req: PageRequest,
) -> Result<Page<E::Model>, ServiceError>
where
    E: EntityTrait,
    E::Model: Sync,
{
    let paginator = select.paginate(db, req.per_page);
    let counts = paginator.num_items_and_pages().await.map_err(ServiceError::db)?;
    let (number, num_pages) = clamp_page(req.page, counts.number_of_pages);
    let items = paginator.fetch_page(number - 1).await.map_err(ServiceError::db)?;
    Ok(Page {
        items,
        number,
        num_pages,
        per_page: req.per_page,
        total: counts.number_of_items,
        has_next: number < num_pages,
        has_previous: number > 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_junk_to_first_page() {
        assert_eq!(PageRequest::parse(None, 9).page, 1);
        assert_eq!(PageRequest::parse(Some(""), 9).page, 1);
        assert_eq!(PageRequest::parse(Some("abc"), 9).page, 1);
        assert_eq!(PageRequest::parse(Some("2.5"), 9).page, 1);
        assert_eq!(PageRequest::parse(Some("0"), 9).page, 1);
        assert_eq!(PageRequest::parse(Some("-4"), 9).page, 1);
        assert_eq!(PageRequest::parse(Some(" 3 "), 9).page, 3);
    }

    #[test]
    fn parse_huge_number_means_past_the_end() {
        let req = PageRequest::parse(Some("99999999999999999999999"), 9);
        assert_eq!(req.page, u64::MAX);
        assert_eq!(clamp_page(req.page, 4), (4, 4));
    }

    #[test]
    fn clamp_handles_empty_and_out_of_range() {
        assert_eq!(clamp_page(1, 0), (1, 1));
        assert_eq!(clamp_page(7, 0), (1, 1));
        assert_eq!(clamp_page(7, 3), (3, 3));
        assert_eq!(clamp_page(2, 3), (2, 3));
    }

    #[test]
    fn per_page_never_zero() {
        assert_eq!(PageRequest::new(0, 0), PageRequest { page: 1, per_page: 1 });
    }
}

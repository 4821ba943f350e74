use crate::shared::errors::WalletError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 1000;

/// 검증된 페이지네이션 값
/// Validated page/limit pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// page >= 0, 1 <= limit <= MAX_LIMIT
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Result<Self, WalletError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page < 0 {
            return Err(WalletError::Validation(format!("page must be >= 0: {}", page)));
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(WalletError::Validation(format!(
                "limit must be between 1 and {}: {}",
                MAX_LIMIT, limit
            )));
        }

        Ok(Self { page, limit })
    }

    /// (page - 1) * limit, page 0은 page 1과 동일
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let p = Pagination::new(None, None).unwrap();
        assert_eq!(p, Pagination { page: 1, limit: 10 });
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(Pagination::new(Some(2), Some(10)).unwrap().offset(), 10);
        assert_eq!(Pagination::new(Some(0), Some(10)).unwrap().offset(), 0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Pagination::new(Some(-1), None).is_err());
        assert!(Pagination::new(None, Some(0)).is_err());
        assert!(Pagination::new(None, Some(MAX_LIMIT + 1)).is_err());
    }
}

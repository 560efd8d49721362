//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Page-based pagination, mapped to SQL offset/limit.
///
/// Uses `serde_with` to parse page numbers from query strings as integers;
/// plain `u32` fields do not survive `#[serde(flatten)]` through the query
/// extractor.
#[serde_as]
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and converts to `(offset, limit)`.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 20
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Page size must be between 1 and 100
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(20);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=100).contains(&page_size) {
            return Err("Page size must be between 1 and 100".to_string());
        }

        let offset = ((page - 1) * page_size) as i64;
        let limit = page_size as i64;

        Ok((offset, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams {
            page: None,
            page_size: None,
        };
        assert_eq!(params.validate_and_get_offset_limit(), Ok((0, 20)));
    }

    #[test]
    fn test_offset_calculation() {
        let params = PaginationParams {
            page: Some(3),
            page_size: Some(25),
        };
        assert_eq!(params.validate_and_get_offset_limit(), Ok((50, 25)));
    }

    #[test]
    fn test_rejects_page_zero() {
        let params = PaginationParams {
            page: Some(0),
            page_size: None,
        };
        assert!(params.validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_rejects_oversized_page() {
        let params = PaginationParams {
            page: Some(1),
            page_size: Some(101),
        };
        assert!(params.validate_and_get_offset_limit().is_err());
    }
}

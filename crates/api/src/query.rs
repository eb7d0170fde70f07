//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?page=&per_page=`).
///
/// Values are normalized in the handler: `page` is clamped to at least 1,
/// `per_page` to `1..=100`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PaginationParams {
    pub const DEFAULT_PER_PAGE: i64 = 20;
    pub const MAX_PER_PAGE: i64 = 100;

    /// Resolve to a concrete `(page, per_page)` pair.
    pub fn resolve(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self
            .per_page
            .unwrap_or(Self::DEFAULT_PER_PAGE)
            .clamp(1, Self::MAX_PER_PAGE);
        (page, per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let params = PaginationParams {
            page: None,
            per_page: None,
        };
        assert_eq!(params.resolve(), (1, 20));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let params = PaginationParams {
            page: Some(0),
            per_page: Some(10_000),
        };
        assert_eq!(params.resolve(), (1, 100));

        let params = PaginationParams {
            page: Some(-3),
            per_page: Some(0),
        };
        assert_eq!(params.resolve(), (1, 1));
    }
}

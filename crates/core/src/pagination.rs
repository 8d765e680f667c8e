//! Pagination and sort filtering shared by every list endpoint.
//!
//! Lives in `core` (zero internal deps) so the repository layer can consume
//! validated filters without depending on the HTTP crate.

use serde::Serialize;

use crate::error::{CoreError, FieldErrors};

/// Default page when the client omits `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size when the client omits `page_size`.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum accepted page number.
pub const MAX_PAGE: i64 = 10_000_000;

/// Maximum accepted page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Validated pagination and ordering parameters for a list query.
///
/// `sort` follows the leading-`-` convention: `"-title"` sorts by `title`
/// descending, `"title"` ascending. The per-endpoint `sort_safelist` is the
/// injection guard for the ORDER BY fragment: [`Filters::validate`] must
/// succeed before `sort_column` is interpolated into SQL.
#[derive(Debug, Clone)]
pub struct Filters {
    pub page: i64,
    pub page_size: i64,
    pub sort: String,
    pub sort_safelist: &'static [&'static str],
}

impl Filters {
    /// Check page bounds, page-size bounds, and safelist membership.
    ///
    /// All violations are reported together as a single
    /// [`CoreError::Validation`]; the store is never touched for an invalid
    /// request.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();

        errors.check(self.page >= 1, "page", "must be greater than zero");
        errors.check(self.page <= MAX_PAGE, "page", "must be a maximum of 10 million");
        errors.check(self.page_size >= 1, "page_size", "must be greater than zero");
        errors.check(
            self.page_size <= MAX_PAGE_SIZE,
            "page_size",
            "must be a maximum of 100",
        );
        errors.check(
            self.sort_safelist.contains(&self.sort.as_str()),
            "sort",
            "invalid sort value",
        );

        errors.into_result()
    }

    /// The column name with any leading `-` stripped.
    pub fn sort_column(&self) -> &str {
        self.sort.trim_start_matches('-')
    }

    /// `"DESC"` for a `-`-prefixed sort token, `"ASC"` otherwise.
    pub fn sort_direction(&self) -> &'static str {
        if self.sort.starts_with('-') {
            "DESC"
        } else {
            "ASC"
        }
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

/// Pagination metadata returned alongside every list response.
///
/// All fields are zero when the result set is empty, which keeps the
/// empty-result case representable and distinct from an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    pub current_page: i64,
    pub page_size: i64,
    pub first_page: i64,
    pub last_page: i64,
    pub total_records: i64,
}

impl Metadata {
    /// Derive metadata from a window-function row count and the request's
    /// pagination parameters.
    pub fn calculate(total_records: i64, page: i64, page_size: i64) -> Self {
        if total_records == 0 {
            return Self::default();
        }

        Self {
            current_page: page,
            page_size,
            first_page: 1,
            last_page: (total_records + page_size - 1) / page_size,
            total_records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAFELIST: &[&str] = &["id", "title", "-id", "-title"];

    fn filters(page: i64, page_size: i64, sort: &str) -> Filters {
        Filters {
            page,
            page_size,
            sort: sort.to_string(),
            sort_safelist: SAFELIST,
        }
    }

    #[test]
    fn test_valid_filters_pass() {
        assert!(filters(1, 20, "id").validate().is_ok());
        assert!(filters(3, 100, "-title").validate().is_ok());
    }

    #[test]
    fn test_sort_token_outside_safelist_rejected() {
        let result = filters(1, 20, "password_hash").validate();
        let Err(CoreError::Validation(errors)) = result else {
            panic!("expected a validation error");
        };
        assert_eq!(errors.get("sort"), Some("invalid sort value"));
    }

    #[test]
    fn test_violations_reported_together() {
        let result = filters(0, 500, "nope").validate();
        let Err(CoreError::Validation(errors)) = result else {
            panic!("expected a validation error");
        };
        assert_eq!(errors.get("page"), Some("must be greater than zero"));
        assert_eq!(errors.get("page_size"), Some("must be a maximum of 100"));
        assert_eq!(errors.get("sort"), Some("invalid sort value"));
    }

    #[test]
    fn test_sort_direction_convention() {
        let asc = filters(1, 20, "title");
        assert_eq!(asc.sort_column(), "title");
        assert_eq!(asc.sort_direction(), "ASC");

        let desc = filters(1, 20, "-title");
        assert_eq!(desc.sort_column(), "title");
        assert_eq!(desc.sort_direction(), "DESC");
    }

    #[test]
    fn test_offset_arithmetic() {
        let f = filters(1, 20, "id");
        assert_eq!(f.limit(), 20);
        assert_eq!(f.offset(), 0);

        let f = filters(4, 25, "id");
        assert_eq!(f.limit(), 25);
        assert_eq!(f.offset(), 75);
    }

    #[test]
    fn test_metadata_empty_result_is_all_zero() {
        assert_eq!(Metadata::calculate(0, 3, 20), Metadata::default());
    }

    #[test]
    fn test_metadata_last_page_rounds_up() {
        let metadata = Metadata::calculate(7, 1, 2);
        assert_eq!(metadata.first_page, 1);
        assert_eq!(metadata.last_page, 4);
        assert_eq!(metadata.total_records, 7);

        let exact = Metadata::calculate(40, 2, 20);
        assert_eq!(exact.last_page, 2);
    }
}

//! Request handlers, one module per resource.

use dorama_core::pagination::{Filters, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

use crate::error::AppResult;

pub mod actors;
pub mod doramas;
pub mod genres;
pub mod health;
pub mod tokens;
pub mod users;

/// Assemble and validate list filters from optional query parameters.
///
/// Absent parameters take the documented defaults; the assembled set is
/// validated as a whole so every violation is reported together.
pub(crate) fn build_filters(
    page: Option<i64>,
    page_size: Option<i64>,
    sort: Option<String>,
    default_sort: &str,
    sort_safelist: &'static [&'static str],
) -> AppResult<Filters> {
    let filters = Filters {
        page: page.unwrap_or(DEFAULT_PAGE),
        page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        sort: sort.unwrap_or_else(|| default_sort.to_string()),
        sort_safelist,
    };
    filters.validate()?;
    Ok(filters)
}

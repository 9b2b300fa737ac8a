//! Page-parameter handling for the listing queries. The route boundary
//! rejects malformed pages outright (and redirects to page 0); the storage
//! layer re-clamps on its own instead of trusting the caller.

use crate::error::Error;

pub const BUILDINGS_PER_PAGE: i64 = 5;
pub const APARTMENTS_PER_PAGE: i64 = 5;

/// Boundary check: a missing parameter means page 0; anything that is not
/// the exact decimal rendering of a non-negative integer is invalid.
pub fn parse_page(raw: Option<&str>) -> Result<i64, Error> {
    let raw = raw.unwrap_or("0");
    match raw.parse::<i64>() {
        Ok(page) if page >= 0 && page.to_string() == raw => Ok(page),
        _ => Err(Error::InvalidPage),
    }
}

/// Validated listing offset for a raw page parameter.
pub fn resolve_page(raw: Option<&str>, page_size: i64) -> Result<i64, Error> {
    let page = parse_page(raw)?;
    Ok(offset_for(page, page_size))
}

/// Storage-side clamp: any page below 1 reads as page 0.
pub fn clamp_page(page: i64) -> i64 {
    if page < 1 {
        0
    } else {
        page
    }
}

pub fn offset_for(page: i64, page_size: i64) -> i64 {
    page_size.saturating_mul(page.max(0))
}

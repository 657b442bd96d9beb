/// Fixed number of rows returned by one listing page
pub const PAGE_SIZE: i64 = 50;

/// Translate the raw `page` query value into a row offset.
///
/// Anything that does not parse as an integer, and any page `<= 1`, maps to
/// offset 0. Page `n` otherwise starts at `(n - 1) * PAGE_SIZE`.
pub fn page_offset(page: &str) -> i64 {
    match page.parse::<i64>() {
        Ok(page) if page > 1 => (page - 1).saturating_mul(PAGE_SIZE),
        _ => 0,
    }
}

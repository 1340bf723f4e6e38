//! Category facet: case-sensitive exact match.

/// Whether the course's category satisfies the category facet
pub fn category_allows(category: &str, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => category == wanted,
    }
}

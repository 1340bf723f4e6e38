//! Reference data for the location facets.
//!
//! An explicit mapping from country name to an ordered list of cities,
//! with a defined fallback (empty slice) for unknown countries. Lookups
//! never assume the key exists.

/// Countries offered by the country facet, in display order
pub const COUNTRIES: [&str; 5] = ["Ukraine", "Poland", "Bulgaria", "Kazakhstan", "Kyrgyzstan"];

/// Cities available in a country, in display order.
///
/// Returns an empty slice for a country not in [`COUNTRIES`]; callers can
/// treat "unknown country" and "country with no cities" the same way.
pub fn cities_in(country: &str) -> &'static [&'static str] {
    match country {
        "Ukraine" => &["Kyiv", "Kropyvnytskyi", "Lviv", "Kharkiv", "Odesa", "Dnipro"],
        "Poland" => &["Warsaw", "Krakow", "Gdansk"],
        "Bulgaria" => &["Sofia", "Plovdiv", "Varna"],
        "Kazakhstan" => &["Almaty", "Astana", "Shymkent"],
        "Kyrgyzstan" => &["Bishkek", "Osh", "Jalal-Abad"],
        _ => &[],
    }
}

//! Rating facet: inclusive minimum rating.

/// Whether the course's rating meets the minimum rating facet.
///
/// The bound is inclusive: a course rated exactly at the minimum passes.
pub fn rating_allows(rating: f32, min_rating: Option<f32>) -> bool {
    match min_rating {
        None => true,
        Some(min) => rating >= min,
    }
}

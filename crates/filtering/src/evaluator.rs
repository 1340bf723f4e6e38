//! The filter evaluator: does one course satisfy the current state?

use crate::facets;
use crate::state::FilterState;
use catalog::Course;

/// Decide whether `course` satisfies every set facet in `state`.
///
/// ## Semantics
/// All facets are AND-combined, checked in this order (short-circuiting
/// on the first failure, which is not observable):
/// 1. delivery kind against the type facet
/// 2. country (restricts `Local` courses only; `Online` passes vacuously)
/// 3. city (same rule as country)
/// 4. rating against the inclusive minimum
/// 5. category, case-sensitive exact match
/// 6. price against the closed `[min, max]` interval
///
/// An unset facet never rejects. With an empty state every course
/// matches. Pure and side-effect free; safe to call concurrently.
pub fn matches(course: &Course, state: &FilterState) -> bool {
    facets::kind_allows(&course.location, state.course_type)
        && facets::country_allows(&course.location, state.country.as_deref())
        && facets::city_allows(&course.location, state.city.as_deref())
        && facets::rating_allows(course.rating, state.min_rating)
        && facets::category_allows(&course.category, state.category.as_deref())
        && facets::price_allows(course.price, state.price_range)
}

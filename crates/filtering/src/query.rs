//! Catalog query: apply the evaluator across a whole catalog.

use crate::evaluator::matches;
use crate::state::FilterState;
use catalog::Course;

/// Return the courses that satisfy `state`, in their original order.
///
/// Stable filter: no re-sorting, no mutation of the input, and identical
/// inputs always produce identical output. Applying the same state to its
/// own result is a no-op (idempotent).
pub fn filter_catalog(courses: &[Course], state: &FilterState) -> Vec<Course> {
    tracing::debug!("Filtering catalog (input count: {})", courses.len());
    let visible: Vec<Course> = courses
        .iter()
        .filter(|course| matches(course, state))
        .cloned()
        .collect();
    tracing::debug!("Filter applied (output count: {})", visible.len());
    visible
}

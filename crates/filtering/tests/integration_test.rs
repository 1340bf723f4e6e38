//! Integration tests for the filtering engine.
//!
//! These tests drive the engine the way a browsing session would: build up
//! a state one facet at a time, then query the catalog and check the
//! visible result set.

use catalog::{sample_catalog, Course, CourseId, LocationKind};
use filtering::{filter_catalog, matches, Facet, FilterState, PriceRange};

fn visible_ids(state: &FilterState) -> Vec<CourseId> {
    filter_catalog(&sample_catalog(), state)
        .iter()
        .map(|c| c.id)
        .collect()
}

#[test]
fn test_empty_state_shows_whole_catalog_in_order() {
    assert_eq!(visible_ids(&FilterState::new()), vec![1, 2]);
}

#[test]
fn test_local_ukraine_shows_only_the_barbering_course() {
    let state = FilterState::new()
        .set(Facet::CourseType(Some(LocationKind::Local)))
        .set(Facet::Country(Some("Ukraine".to_string())));

    assert_eq!(visible_ids(&state), vec![2]);
}

#[test]
fn test_high_minimum_rating_narrows_to_the_top_course() {
    let state = FilterState::new().set(Facet::MinRating(Some(4.85)));
    assert_eq!(visible_ids(&state), vec![2]);
}

#[test]
fn test_cheap_price_bracket_matches_nothing() {
    let state = FilterState::new().set(Facet::PriceRange(Some(PriceRange::new(0.0, 100.0))));
    assert_eq!(visible_ids(&state), Vec::<CourseId>::new());
}

#[test]
fn test_category_facet_on_its_own() {
    let state = FilterState::new().set(Facet::Category(Some("Technology".to_string())));
    assert_eq!(visible_ids(&state), vec![1]);
}

#[test]
fn test_country_facet_alone_keeps_online_courses_visible() {
    // The country facet only restricts local courses; the online bootcamp
    // stays visible alongside the matching local course
    let state = FilterState::new().set(Facet::Country(Some("Ukraine".to_string())));
    assert_eq!(visible_ids(&state), vec![1, 2]);
}

#[test]
fn test_switching_type_back_to_online_drops_stale_place_facets() {
    // A session that narrows to local Ukraine and then flips the type
    // facet must not keep filtering by the stale country
    let state = FilterState::new()
        .set(Facet::CourseType(Some(LocationKind::Local)))
        .set(Facet::Country(Some("Ukraine".to_string())))
        .set(Facet::City(Some("Kropyvnytskyi".to_string())))
        .set(Facet::CourseType(Some(LocationKind::Online)));

    assert_eq!(state.country, None);
    assert_eq!(state.city, None);
    assert_eq!(visible_ids(&state), vec![1]);
}

#[test]
fn test_changing_country_drops_stale_city() {
    let state = FilterState::new()
        .set(Facet::CourseType(Some(LocationKind::Local)))
        .set(Facet::Country(Some("Ukraine".to_string())))
        .set(Facet::City(Some("Kropyvnytskyi".to_string())))
        .set(Facet::Country(Some("Poland".to_string())));

    assert_eq!(state.city, None);
    assert_eq!(visible_ids(&state), Vec::<CourseId>::new());
}

#[test]
fn test_reset_to_empty_state_restores_full_catalog() {
    // No terminal states: after any narrowing the session can start over
    let narrowed = FilterState::new()
        .set(Facet::CourseType(Some(LocationKind::Local)))
        .set(Facet::MinRating(Some(4.85)));
    assert_eq!(visible_ids(&narrowed), vec![2]);

    assert_eq!(visible_ids(&FilterState::new()), vec![1, 2]);
}

#[test]
fn test_filter_catalog_is_idempotent_for_every_single_facet() {
    let catalog = sample_catalog();
    let states = [
        FilterState::new(),
        FilterState::new().set(Facet::CourseType(Some(LocationKind::Online))),
        FilterState::new().set(Facet::Country(Some("Ukraine".to_string()))),
        FilterState::new().set(Facet::MinRating(Some(4.85))),
        FilterState::new().set(Facet::Category(Some("Beauty".to_string()))),
        FilterState::new().set(Facet::PriceRange(Some(PriceRange::new(0.0, 100.0)))),
    ];

    for state in states {
        let once = filter_catalog(&catalog, &state);
        let twice = filter_catalog(&once, &state);
        assert_eq!(once, twice, "state {state:?} should be idempotent");
    }
}

#[test]
fn test_every_visible_course_individually_matches() {
    let catalog = sample_catalog();
    let state = FilterState::new().set(Facet::MinRating(Some(4.0)));

    let visible = filter_catalog(&catalog, &state);
    assert!(visible.iter().all(|course| matches(course, &state)));

    let hidden: Vec<&Course> = catalog
        .iter()
        .filter(|c| !visible.contains(c))
        .collect();
    assert!(hidden.iter().all(|course| !matches(course, &state)));
}

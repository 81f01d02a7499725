use std::collections::HashSet;

use super::*;
use crate::state::stepper::StepperState;

// =============================================================
// Listings
// =============================================================

#[test]
fn listing_ids_are_unique() {
    let pets: HashSet<_> = listings::PETS.iter().map(|p| p.id).collect();
    let events: HashSet<_> = listings::EVENTS.iter().map(|e| e.id).collect();
    let services: HashSet<_> = listings::SERVICES.iter().map(|s| s.id).collect();
    assert_eq!(pets.len(), listings::PETS.len());
    assert_eq!(events.len(), listings::EVENTS.len());
    assert_eq!(services.len(), listings::SERVICES.len());
}

#[test]
fn featured_pets_are_a_prefix_of_the_adoption_list() {
    let featured = listings::featured_pets();
    assert_eq!(featured.len(), 4);
    assert_eq!(featured, &listings::PETS[..4]);
}

#[test]
fn service_ratings_are_within_five_stars() {
    assert!(listings::SERVICES.iter().all(|s| s.rating > 0.0 && s.rating <= 5.0));
}

// =============================================================
// Step tables
// =============================================================

#[test]
fn onboarding_has_five_steps_with_four_features_each() {
    assert_eq!(onboarding::ONBOARDING_STEPS.len(), 5);
    let stepper = StepperState::new(onboarding::ONBOARDING_STEPS.len());
    assert_eq!(stepper.len(), 5);
    assert!(onboarding::ONBOARDING_STEPS.iter().all(|s| s.features.iter().all(|f| !f.is_empty())));
}

#[test]
fn tutorial_has_four_steps_with_tips() {
    assert_eq!(onboarding::TUTORIAL_STEPS.len(), 4);
    assert!(onboarding::TUTORIAL_STEPS.iter().all(|s| !s.tips.is_empty()));
}

// =============================================================
// Share categories
// =============================================================

#[test]
fn default_category_exists() {
    assert!(share::CATEGORIES.iter().any(|c| c.id == share::DEFAULT_CATEGORY));
}

// =============================================================
// Landing content
// =============================================================

#[test]
fn quick_actions_point_at_routed_pages() {
    let routed = ["/share", "/community", "/events", "/adoption"];
    assert!(landing::QUICK_ACTIONS.iter().all(|a| routed.contains(&a.href)));
}

#[test]
fn hero_stats_are_first_three() {
    let labels: Vec<_> = landing::hero_stats().iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["Pet Parents", "Pets Reunited", "Weekly Events"]);
}

#[test]
fn nav_active_matching_ignores_trailing_slash() {
    assert!(landing::is_active("/events", "/events"));
    assert!(landing::is_active("/events", "/events/"));
    assert!(!landing::is_active("/events", "/services"));
    assert!(!landing::is_active("/events", "/"));
}

#[test]
fn community_posts_have_authors() {
    assert!(community::POSTS.iter().all(|p| !p.author.name.is_empty()));
    assert_eq!(community::PROFILE.posts, 24);
}

//! Wizard State Integration Tests
//!
//! End-to-end scenarios for the story creation wizard: step navigation
//! guards, per-step validation messages, per-field feedback, and the
//! derived `can_proceed` gate.

use rstest::rstest;
use storyweave::core::wizard::{FieldUpdate, WizardState, WizardStep};

fn filled_step_one() -> WizardState {
    let mut state = WizardState::new();
    state.title = "My Great Story".to_string();
    state.story_description = "A long enough description here".to_string();
    state.duration = "5min".to_string();
    state.selected_genres = vec!["drama".to_string(), "comedy".to_string()];
    state
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_incomplete_story_details_block_advancement() {
    let mut state = WizardState::new();
    state.title = "Ok".to_string();
    state.story_description = "short".to_string();

    assert!(!state.can_proceed());
    assert!(!state.validate_current_step());
    assert_eq!(state.errors.title, "Title must be at least 4 characters");
    assert_eq!(state.errors.duration, "Please select duration");
    assert_eq!(state.errors.genres, "Select 1-3 genres");

    state.next_step();
    assert_eq!(state.current_step, WizardStep::StoryDetails);
}

#[test]
fn test_complete_story_details_advance() {
    let mut state = filled_step_one();

    assert!(state.can_proceed());
    assert!(state.validate_current_step());
    assert!(state.errors.is_clear());

    state.next_step();
    assert_eq!(state.current_step, WizardStep::ImageStyles);
}

#[test]
fn test_image_styles_per_field_feedback() {
    let mut state = filled_step_one();
    state.next_step();
    assert_eq!(state.current_step, WizardStep::ImageStyles);

    assert!(!state.can_proceed());
    state.validate_current_step();
    assert_eq!(state.errors.image_styles, "Please select at least one style");

    state.set_field(FieldUpdate::ImageStyles(vec!["watercolor".to_string()]));
    assert!(state.errors.image_styles.is_empty());
    assert!(state.can_proceed());
}

#[test]
fn test_preview_gate_then_review() {
    let mut state = WizardState::new();
    state.current_step = WizardStep::Preview;

    assert!(!state.can_proceed());
    state.set_field(FieldUpdate::PreviewReady(true));
    assert!(state.can_proceed());

    state.next_step();
    assert_eq!(state.current_step, WizardStep::Review);
}

#[test]
fn test_full_walkthrough() {
    let mut state = filled_step_one();

    state.next_step();
    state.set_field(FieldUpdate::ImageStyles(vec!["ink".to_string()]));
    state.next_step();
    state.set_field(FieldUpdate::SelectedVoice("narrator-1".to_string()));
    state.next_step();
    state.set_field(FieldUpdate::PreviewReady(true));
    state.next_step();

    assert_eq!(state.current_step, WizardStep::Review);
    assert_eq!(state.progress_percent(), 100);

    // Review is terminal: no validation rules, no further advancement
    assert!(!state.can_proceed());
    assert!(state.current_step_errors().is_empty());
    state.next_step();
    assert_eq!(state.current_step, WizardStep::Review);

    // Backward navigation needs no validation
    state.previous_step();
    assert_eq!(state.current_step, WizardStep::Preview);
}

// ============================================================================
// Navigation Guards
// ============================================================================

#[rstest]
#[case(WizardStep::StoryDetails)]
#[case(WizardStep::ImageStyles)]
#[case(WizardStep::Voice)]
#[case(WizardStep::Preview)]
#[case(WizardStep::Review)]
fn test_next_step_noop_when_step_incomplete(#[case] step: WizardStep) {
    let mut state = WizardState::new();
    state.current_step = step;

    state.next_step();
    assert_eq!(state.current_step, step);
}

#[rstest]
#[case(WizardStep::Preview)]
#[case(WizardStep::Voice)]
fn test_previous_step_only_checks_lower_bound(#[case] step: WizardStep) {
    // No fields filled at all; going back must still work
    let mut state = WizardState::new();
    state.current_step = step;

    state.previous_step();
    assert_eq!(Some(state.current_step), step.previous());
}

#[test]
fn test_previous_step_noop_at_first_step() {
    let mut state = WizardState::new();
    state.previous_step();
    assert_eq!(state.current_step, WizardStep::StoryDetails);
}

// ============================================================================
// Error Map Discipline
// ============================================================================

#[test]
fn test_set_field_leaves_other_entries_untouched() {
    let mut state = WizardState::new();
    state.validate_current_step();
    let before = state.errors.clone();

    state.set_field(FieldUpdate::Duration("10min".to_string()));

    assert!(state.errors.duration.is_empty());
    assert_eq!(state.errors.title, before.title);
    assert_eq!(state.errors.story_description, before.story_description);
    assert_eq!(state.errors.genres, before.genres);
    assert_eq!(state.errors.image_styles, before.image_styles);
    assert_eq!(state.errors.voice, before.voice);
}

#[test]
fn test_stale_entries_persist_until_step_revisited() {
    let mut state = WizardState::new();
    state.validate_current_step();
    assert_eq!(state.errors.genres, "Select 1-3 genres");

    // Jump ahead without revalidating; step 1 entries stay as written
    state.current_step = WizardStep::Voice;
    assert_eq!(state.errors.genres, "Select 1-3 genres");

    // Revalidating the now-active step clears everything else
    state.validate_current_step();
    assert!(state.errors.genres.is_empty());
    assert_eq!(state.errors.voice, "Please select a voice");
}

#[test]
fn test_state_snapshot_key_names() {
    let state = WizardState::new();
    let snapshot = serde_json::to_value(&state).unwrap();

    assert!(snapshot.get("storyDescription").is_some());
    assert!(snapshot.get("selectedGenres").is_some());
    assert!(snapshot.get("isSubmitting").is_some());
    assert_eq!(snapshot["currentStep"], "story_details");
    assert!(snapshot["errors"].get("imageStyles").is_some());
}

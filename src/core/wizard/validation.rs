//! Per-Step Validation Rules
//!
//! Declares, in one place, which fields each wizard step validates and the
//! message shown when a field's constraint is violated. Each rule is a pure
//! function of the form state, so rules are independently testable and the
//! operations in [`super::state`] stay free of scattered branching.

use super::state::WizardState;
use super::types::{FieldKey, WizardStep};

/// A single validation rule: the field it reports under and a predicate
/// returning the violation message, or `None` when the field is valid.
pub(crate) type FieldRule = (FieldKey, fn(&WizardState) -> Option<&'static str>);

/// The fields validated at each step, in display order.
///
/// The preview and review steps have no per-field rules; the preview gate
/// (`preview_ready`) is a whole-step condition checked by
/// [`WizardState::can_proceed`].
pub(crate) fn step_rules(step: WizardStep) -> &'static [FieldRule] {
    match step {
        WizardStep::StoryDetails => &[
            (FieldKey::Title, title_rule),
            (FieldKey::StoryDescription, description_rule),
            (FieldKey::Duration, duration_rule),
            (FieldKey::Genres, genres_rule),
        ],
        WizardStep::ImageStyles => &[(FieldKey::ImageStyles, image_styles_rule)],
        WizardStep::Voice => &[(FieldKey::Voice, voice_rule)],
        WizardStep::Preview | WizardStep::Review => &[],
    }
}

fn title_rule(state: &WizardState) -> Option<&'static str> {
    // Characters, not bytes: multi-byte input must not loosen the minimum
    (state.title.trim().chars().count() < 4).then_some("Title must be at least 4 characters")
}

fn description_rule(state: &WizardState) -> Option<&'static str> {
    (state.story_description.trim().chars().count() < 20)
        .then_some("Minimum 20 characters required")
}

fn duration_rule(state: &WizardState) -> Option<&'static str> {
    state.duration.is_empty().then_some("Please select duration")
}

fn genres_rule(state: &WizardState) -> Option<&'static str> {
    if state.selected_genres.is_empty() {
        Some("Select 1-3 genres")
    } else if state.selected_genres.len() > 3 {
        Some("Maximum 3 genres allowed")
    } else {
        None
    }
}

fn image_styles_rule(state: &WizardState) -> Option<&'static str> {
    state
        .image_styles
        .is_empty()
        .then_some("Please select at least one style")
}

fn voice_rule(state: &WizardState) -> Option<&'static str> {
    state.selected_voice.is_empty().then_some("Please select a voice")
}

//! Wizard Form State
//!
//! The single stateful component of the wizard: field storage, derived
//! validity, and the mutation operations the rendering layer drives.
//!
//! One [`WizardState`] is constructed per wizard session and passed
//! explicitly to whoever needs it; there is no ambient global. Every
//! operation is total and synchronous: invalid attempts (advancing while a
//! step is incomplete, going back from the first step) are silent no-ops,
//! and callers inspect [`WizardState::can_proceed`] and the error map to
//! learn why.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{FieldErrors, FieldKey, FieldUpdate, WizardStep};
use super::validation::step_rules;

/// Form state for one story creation wizard session.
///
/// Fields are public for the rendering layer to read; mutation goes through
/// the operations below so error bookkeeping stays consistent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    /// Story title (step 1, trimmed length >= 4)
    pub title: String,
    /// Story description (step 1, trimmed length >= 20)
    pub story_description: String,
    /// Target duration choice (step 1, non-empty)
    pub duration: String,
    /// Chosen genres, in selection order (step 1, 1-3 entries).
    /// Duplicates are not prevented at this layer.
    pub selected_genres: Vec<String>,
    /// Chosen visual styles (step 2, at least one)
    pub image_styles: Vec<String>,
    /// Chosen narration voice (step 3, non-empty)
    pub selected_voice: String,
    /// Whether the generated preview has been confirmed (step 4 gate)
    pub preview_ready: bool,
    /// The active wizard step
    pub current_step: WizardStep,
    /// True while a submission is in flight. Set and cleared by the
    /// external submission collaborator; never touched by this state.
    pub is_submitting: bool,
    /// Per-field validation messages, empty string when a field is valid
    pub errors: FieldErrors,
}

impl WizardState {
    /// Create a fresh session at step 1 with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all entered data and return to step 1
    pub fn reset(&mut self) {
        debug!("resetting wizard state");
        *self = Self::new();
    }

    /// Whether the active step's required conditions all hold.
    ///
    /// Gates forward navigation. The review step always returns false: no
    /// further advancement is defined past it.
    pub fn can_proceed(&self) -> bool {
        match self.current_step {
            WizardStep::Preview => self.preview_ready,
            WizardStep::Review => false,
            step => step_rules(step).iter().all(|(_, rule)| rule(self).is_none()),
        }
    }

    /// Validation messages for the active step only, in display order.
    ///
    /// Each field the step validates maps to its violation message, or the
    /// empty string when valid. The preview and review steps yield an empty
    /// mapping: they have no per-field messages.
    pub fn current_step_errors(&self) -> IndexMap<FieldKey, String> {
        step_rules(self.current_step)
            .iter()
            .map(|(key, rule)| (*key, rule(self).unwrap_or_default().to_string()))
            .collect()
    }

    /// Revalidate the active step, rewriting the whole error map.
    ///
    /// Clears every entry, then merges in [`Self::current_step_errors`], so
    /// entries outside the active step end up cleared rather than stale.
    /// Returns whether the step is valid. Idempotent while fields are
    /// unchanged.
    pub fn validate_current_step(&mut self) -> bool {
        debug!(step = self.current_step.number(), "validating step");
        self.reset_errors();
        let current = self.current_step_errors();
        for (key, message) in &current {
            self.errors.set(*key, message.clone());
        }
        let valid = current.values().all(|message| message.is_empty());
        debug!(step = self.current_step.number(), valid, "step validation result");
        valid
    }

    /// Write one field and refresh that field's error entry.
    ///
    /// Only the entry for the written field is touched, giving immediate
    /// per-keystroke feedback without a full [`Self::validate_current_step`].
    /// If the field is not validated by the active step its entry is
    /// cleared; all other entries keep their prior values.
    pub fn set_field(&mut self, update: FieldUpdate) {
        let key = update.key();
        match update {
            FieldUpdate::Title(value) => self.title = value,
            FieldUpdate::StoryDescription(value) => self.story_description = value,
            FieldUpdate::Duration(value) => self.duration = value,
            FieldUpdate::SelectedGenres(value) => self.selected_genres = value,
            FieldUpdate::ImageStyles(value) => self.image_styles = value,
            FieldUpdate::SelectedVoice(value) => self.selected_voice = value,
            FieldUpdate::PreviewReady(value) => self.preview_ready = value,
        }

        if let Some(key) = key {
            let message = self
                .current_step_errors()
                .swap_remove(&key)
                .unwrap_or_default();
            debug!(field = key.as_str(), error = %message, "field updated");
            self.errors.set(key, message);
        }
    }

    /// Advance one step if the active step validates and a next step exists.
    /// Otherwise a silent no-op.
    pub fn next_step(&mut self) {
        match self.current_step.next() {
            Some(next) if self.can_proceed() => {
                debug!(from = self.current_step.number(), to = next.number(), "advancing step");
                self.current_step = next;
            }
            _ => {
                debug!(
                    step = self.current_step.number(),
                    can_proceed = self.can_proceed(),
                    "cannot advance"
                );
            }
        }
    }

    /// Go back one step. No validation required; a no-op at step 1.
    pub fn previous_step(&mut self) {
        if let Some(previous) = self.current_step.previous() {
            debug!(from = self.current_step.number(), to = previous.number(), "moving back");
            self.current_step = previous;
        }
    }

    /// Set every error entry to the empty string
    pub fn reset_errors(&mut self) {
        self.errors.clear_all();
    }

    /// Position in the flow as 0-100, for progress display
    pub fn progress_percent(&self) -> u8 {
        let last = WizardStep::all().len() - 1;
        ((self.current_step.index() as f32 / last as f32) * 100.0) as u8
    }
}

// ============================================================================
// Tests
// ============================================================================

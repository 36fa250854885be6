//! Wizard Domain Types
//!
//! Defines the core domain types for the story creation wizard:
//! - [`WizardStep`]: The five steps of the wizard flow
//! - [`FieldKey`]: Closed set of validatable field identifiers
//! - [`FieldUpdate`]: Typed write variants for each writable field
//! - [`FieldErrors`]: Per-field validation messages with fixed keys
//! - [`WizardError`]: Error types for wizard operations
//!
//! # Architecture
//!
//! The wizard uses a state machine pattern where each step collects specific
//! data and transitions forward or backward through the wizard flow. The
//! writable field set is a closed enum, so the set of fields is fixed at
//! compile time and writing an unknown field is simply unrepresentable.
//!
//! # Serialization
//!
//! All types implement `Serialize` and `Deserialize` so the rendering layer
//! can snapshot state over IPC. Field keys serialize with camelCase names
//! (`storyDescription`, `imageStyles`, ...).

use serde::{Deserialize, Serialize};

// ============================================================================
// WizardStep
// ============================================================================

/// A step in the story creation wizard flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Title, description, duration, and genres
    #[default]
    StoryDetails,
    /// Visual style selection
    ImageStyles,
    /// Narration voice selection
    Voice,
    /// Generated preview confirmation
    Preview,
    /// Final review before submission
    Review,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::StoryDetails => "Story Details",
            WizardStep::ImageStyles => "Image Styles",
            WizardStep::Voice => "Voice",
            WizardStep::Preview => "Preview",
            WizardStep::Review => "Review",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::StoryDetails => "Title, description, duration, and genres",
            WizardStep::ImageStyles => "Visual styles for generated scenes",
            WizardStep::Voice => "Narration voice",
            WizardStep::Preview => "Confirm the generated preview",
            WizardStep::Review => "Review and submit",
        }
    }

    /// One-based step number, as shown to the user (1-5)
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::StoryDetails => 1,
            WizardStep::ImageStyles => 2,
            WizardStep::Voice => 3,
            WizardStep::Preview => 4,
            WizardStep::Review => 5,
        }
    }

    /// Zero-based position in the flow
    pub fn index(&self) -> usize {
        self.number() as usize - 1
    }

    pub fn all() -> Vec<Self> {
        vec![
            WizardStep::StoryDetails,
            WizardStep::ImageStyles,
            WizardStep::Voice,
            WizardStep::Preview,
            WizardStep::Review,
        ]
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::StoryDetails => Some(WizardStep::ImageStyles),
            WizardStep::ImageStyles => Some(WizardStep::Voice),
            WizardStep::Voice => Some(WizardStep::Preview),
            WizardStep::Preview => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::StoryDetails => None,
            WizardStep::ImageStyles => Some(WizardStep::StoryDetails),
            WizardStep::Voice => Some(WizardStep::ImageStyles),
            WizardStep::Preview => Some(WizardStep::Voice),
            WizardStep::Review => Some(WizardStep::Preview),
        }
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = WizardError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(WizardStep::StoryDetails),
            2 => Ok(WizardStep::ImageStyles),
            3 => Ok(WizardStep::Voice),
            4 => Ok(WizardStep::Preview),
            5 => Ok(WizardStep::Review),
            other => Err(WizardError::InvalidStep(other)),
        }
    }
}

// ============================================================================
// Field Identity
// ============================================================================

/// Identifier for a validatable form field.
///
/// These are the fixed keys of [`FieldErrors`]; `preview_ready` has no
/// validation message and therefore no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Title,
    StoryDescription,
    Duration,
    Genres,
    ImageStyles,
    Voice,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::StoryDescription => "storyDescription",
            FieldKey::Duration => "duration",
            FieldKey::Genres => "genres",
            FieldKey::ImageStyles => "imageStyles",
            FieldKey::Voice => "voice",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            FieldKey::Title,
            FieldKey::StoryDescription,
            FieldKey::Duration,
            FieldKey::Genres,
            FieldKey::ImageStyles,
            FieldKey::Voice,
        ]
    }
}

/// A typed write to a single wizard field.
///
/// One variant per writable field, so the writable surface is closed: there
/// is no way to address a field the state does not have.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    Title(String),
    StoryDescription(String),
    Duration(String),
    SelectedGenres(Vec<String>),
    ImageStyles(Vec<String>),
    SelectedVoice(String),
    PreviewReady(bool),
}

impl FieldUpdate {
    /// The error-map key this field reports under, if it has one.
    ///
    /// `PreviewReady` validates as a whole-step condition rather than a
    /// per-field message, so it carries no key.
    pub fn key(&self) -> Option<FieldKey> {
        match self {
            FieldUpdate::Title(_) => Some(FieldKey::Title),
            FieldUpdate::StoryDescription(_) => Some(FieldKey::StoryDescription),
            FieldUpdate::Duration(_) => Some(FieldKey::Duration),
            FieldUpdate::SelectedGenres(_) => Some(FieldKey::Genres),
            FieldUpdate::ImageStyles(_) => Some(FieldKey::ImageStyles),
            FieldUpdate::SelectedVoice(_) => Some(FieldKey::Voice),
            FieldUpdate::PreviewReady(_) => None,
        }
    }
}

// ============================================================================
// FieldErrors
// ============================================================================

/// Per-field validation messages with a fixed key set.
///
/// An empty string means the field has no active error. Entries only ever
/// reflect validation computed for the step that was active when they were
/// written; other steps' entries stay stale or empty until revisited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub title: String,
    pub story_description: String,
    pub duration: String,
    pub genres: String,
    pub image_styles: String,
    pub voice: String,
}

impl FieldErrors {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Title => &self.title,
            FieldKey::StoryDescription => &self.story_description,
            FieldKey::Duration => &self.duration,
            FieldKey::Genres => &self.genres,
            FieldKey::ImageStyles => &self.image_styles,
            FieldKey::Voice => &self.voice,
        }
    }

    pub fn set(&mut self, key: FieldKey, message: String) {
        match key {
            FieldKey::Title => self.title = message,
            FieldKey::StoryDescription => self.story_description = message,
            FieldKey::Duration => self.duration = message,
            FieldKey::Genres => self.genres = message,
            FieldKey::ImageStyles => self.image_styles = message,
            FieldKey::Voice => self.voice = message,
        }
    }

    /// Set every entry to the empty string
    pub fn clear_all(&mut self) {
        for key in FieldKey::all() {
            self.set(key, String::new());
        }
    }

    /// True if no entry holds a message
    pub fn is_clear(&self) -> bool {
        FieldKey::all().iter().all(|key| self.get(*key).is_empty())
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during wizard operations.
///
/// Validation failures are not errors here; they surface as messages in
/// [`FieldErrors`]. This covers genuinely invalid inputs from outside the
/// type system, such as a raw step number from the rendering layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WizardError {
    #[error("Invalid step number: {0} (expected 1-5)")]
    InvalidStep(u8),
}

// ============================================================================
// Tests
// ============================================================================

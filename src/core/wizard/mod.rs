//! Wizard State Machine for Story Creation
//!
//! Manages the story creation wizard form: field storage, per-step
//! validation, and guarded navigation.
//!
//! # Overview
//!
//! The wizard guides users through story creation in discrete steps:
//! 1. Story Details - Title, description, duration, genres
//! 2. Image Styles - Visual style selection
//! 3. Voice - Narration voice selection
//! 4. Preview - Generated preview confirmation
//! 5. Review - Final review before submission
//!
//! # Design Principles
//!
//! - **Guarded**: Forward navigation requires the active step to validate
//! - **Progressive**: Users can move backward freely, preserving data
//! - **Total**: Every operation succeeds; invalid attempts are silent no-ops
//!   surfaced through [`WizardState::can_proceed`] and the error map
//! - **Closed**: The writable field set is a closed enum, so unknown field
//!   writes are unrepresentable

mod state;
mod types;
mod validation;

pub use state::*;
pub use types::*;

/// Storyweave - Story Creation Wizard Core
///
/// Core library providing form state, per-step validation, and guarded
/// navigation for the story creation wizard. A rendering layer reads the
/// state and drives it through the mutation operations.

pub mod core;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

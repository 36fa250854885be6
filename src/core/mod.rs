
pub mod wizard;

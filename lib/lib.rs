/// Pig domain types and rules engine.
pub mod pig;

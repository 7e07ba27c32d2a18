//! Binary insertion sort trace engine
//!
//! The engine is a pure function from an integer array to an ordered list of
//! immutable [`Step`]s:
//!
//! ```text
//! input array → generate() → [Init, Search.., Shift.., Insert, .., Complete]
//! ```
//!
//! - [`step`] — the step record and its kinds
//! - [`generator`] — the sort itself plus input adapters
//! - [`narration`] — structured, renderable step descriptions
//! - [`listing`] — the pseudocode that `Step::code_line` indexes into
//! - [`errors`] — [`TraceError`] for malformed input

pub mod errors;
pub mod generator;
pub mod listing;
pub mod narration;
pub mod step;

pub use errors::TraceError;
pub use generator::{generate, parse_input, values_from_floats};
pub use narration::Narration;
pub use step::{SearchRange, Step, StepKind};

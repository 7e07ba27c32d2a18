//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over the current playback state.
//!
//! # Pane Modules
//!
//! - [`array`]: Bar chart of the current snapshot, coloured by index role
//! - [`source`]: Pseudocode listing with the current line highlighted
//! - [`narration`]: Step descriptions up to the cursor
//! - [`status`]: Status bar with keybindings, speed and playback state

pub mod array;
pub mod narration;
pub mod source;
pub mod status;

// Re-export render functions for convenience
pub use array::{bar_role, render_array_pane, BarRole};
pub use narration::render_narration_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};

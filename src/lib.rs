//! # Introduction
//!
//! bisortty precomputes every state of a binary insertion sort over a small
//! integer array and lets you scrub through the result in a terminal UI built
//! with [ratatui](https://docs.rs/ratatui), while a pseudocode pane highlights
//! the line being "executed".
//!
//! ## Pipeline
//!
//! ```text
//! Array → Trace Generator → Trace (Vec<Step>) → Playback Controller → TUI
//! ```
//!
//! 1. [`trace`] — the pure generator: one immutable [`trace::Step`] per
//!    comparison, range narrowing, shift and insertion.
//! 2. [`snapshot`] — [`snapshot::Trace`], the owned read-only step history,
//!    and [`snapshot::TraceStats`].
//! 3. [`playback`] — [`playback::PlaybackController`], a cursor/play/speed
//!    state machine driven by an external [`playback::Scheduler`].
//! 4. [`config`] — array sampling and playback settings.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```rust
//! use bisortty::snapshot::Trace;
//! use bisortty::trace::StepKind;
//!
//! let trace = Trace::generate(&[5, 3, 8, 1]);
//! assert_eq!(trace.get(0).map(|s| s.kind), Some(StepKind::Init));
//! assert_eq!(trace.sorted(), Some(&[1, 3, 5, 8][..]));
//! ```

pub mod config;
pub mod playback;
pub mod snapshot;
pub mod trace;
pub mod ui;

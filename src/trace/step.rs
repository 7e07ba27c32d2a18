//! The step record emitted by the trace generator

use super::narration::Narration;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Which phase of the algorithm produced a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Init,
    Search,
    Shift,
    Insert,
    Complete,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Init => "Init",
            StepKind::Search => "Search",
            StepKind::Shift => "Shift",
            StepKind::Insert => "Insert",
            StepKind::Complete => "Complete",
        }
    }
}

/// Inclusive binary search bounds over the sorted prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchRange {
    pub low: usize,
    pub high: usize,
}

impl SearchRange {
    pub fn new(low: usize, high: usize) -> Self {
        SearchRange { low, high }
    }

    /// Number of candidate slots still inside the range
    pub fn width(&self) -> usize {
        self.high + 1 - self.low
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.low && index <= self.high
    }
}

/// One observable moment of the sort.
///
/// `array` is a full copy of the working array at this moment; no step shares
/// storage with another. The meaning of `working_indices` depends on `kind`:
///
/// - `Search`: `[low, mid, high]` while probing, `[pos]` once resolved, empty
///   for the step that opens the search
/// - `Shift`: `[destination, source]`
/// - `Insert`: `[pos]`
/// - `Complete`: every index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub array: Vec<i64>,
    pub kind: StepKind,
    pub working_indices: Vec<usize>,
    pub target_index: Option<usize>,
    pub search_range: Option<SearchRange>,
    pub narration: Narration,
    pub code_line: Option<usize>,
}

static PLACEHOLDER: Step = Step::placeholder();

impl Step {
    /// Neutral step shown when no trace has been generated
    pub const fn placeholder() -> Self {
        Step {
            array: Vec::new(),
            kind: StepKind::Init,
            working_indices: Vec::new(),
            target_index: None,
            search_range: None,
            narration: Narration::Empty,
            code_line: None,
        }
    }

    /// Shared reference to the placeholder
    pub fn placeholder_ref() -> &'static Step {
        &PLACEHOLDER
    }

    /// English rendering of the narration
    pub fn description(&self) -> String {
        self.narration.to_string()
    }

    /// Mid index of a probe step
    pub fn mid_index(&self) -> Option<usize> {
        match (self.kind, self.working_indices.as_slice()) {
            (StepKind::Search, [_, mid, _]) => Some(*mid),
            _ => None,
        }
    }

    /// Resolved insertion position of a search step that closes the search
    pub fn resolved_position(&self) -> Option<usize> {
        match (self.kind, self.search_range, self.working_indices.as_slice()) {
            (StepKind::Search, None, [pos]) => Some(*pos),
            _ => None,
        }
    }

    /// Whether this step is a binary search probe
    pub fn is_probe(&self) -> bool {
        self.mid_index().is_some()
    }

    /// Estimate the memory usage of this step in bytes
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Step>()
            + self.array.len() * std::mem::size_of::<i64>()
            + self.working_indices.len() * std::mem::size_of::<usize>()
    }
}

// Hand-written so the JSON carries the rendered `description` next to the
// structured narration
impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Step", 8)?;
        state.serialize_field("array", &self.array)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("working_indices", &self.working_indices)?;
        state.serialize_field("target_index", &self.target_index)?;
        state.serialize_field("search_range", &self.search_range)?;
        state.serialize_field("description", &self.description())?;
        state.serialize_field("narration", &self.narration)?;
        state.serialize_field("code_line", &self.code_line)?;
        state.end()
    }
}

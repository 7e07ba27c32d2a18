// Step history for scrubbing through a sort

use crate::trace::{self, Step, StepKind};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// A fully generated trace and the input it was generated from.
///
/// The steps are owned here and only handed out by shared reference, so a
/// consumer can seek to any index without being able to alter history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Trace {
    input: Vec<i64>,
    steps: Vec<Step>,
}

impl Trace {
    /// A trace with no steps, used before the first generation
    pub fn empty() -> Self {
        Trace::default()
    }

    /// Run the generator over `initial`
    pub fn generate(initial: &[i64]) -> Self {
        Trace {
            input: initial.to_vec(),
            steps: trace::generate(initial),
        }
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// All steps in execution order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The array the trace was generated from
    pub fn input(&self) -> &[i64] {
        &self.input
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step, if any
    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    /// The final step's array, i.e. the sorted output
    pub fn sorted(&self) -> Option<&[i64]> {
        self.steps.last().map(|s| s.array.as_slice())
    }

    /// Estimate the memory usage of this trace in bytes
    pub fn estimated_size(&self) -> usize {
        self.steps.iter().map(Step::estimated_size).sum::<usize>()
            + self.input.len() * std::mem::size_of::<i64>()
    }

    /// Summarize the trace
    pub fn stats(&self) -> TraceStats {
        TraceStats::from_steps(&self.steps)
    }
}

/// Per-trace counters, keyed by outer index where it matters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceStats {
    pub total_steps: usize,
    pub comparisons: usize,
    pub shifts: usize,
    pub inserts: usize,
    /// Shift steps emitted for each outer index `i`
    pub shifts_by_target: FxHashMap<usize, usize>,
    /// Resolved insertion position for each outer index `i`
    pub positions_by_target: FxHashMap<usize, usize>,
}

impl TraceStats {
    pub fn from_steps(steps: &[Step]) -> Self {
        let mut stats = TraceStats {
            total_steps: steps.len(),
            ..TraceStats::default()
        };

        for step in steps {
            match step.kind {
                StepKind::Search => {
                    if step.is_probe() {
                        stats.comparisons += 1;
                    } else if let (Some(target), Some(pos)) =
                        (step.target_index, step.resolved_position())
                    {
                        stats.positions_by_target.insert(target, pos);
                    }
                }
                StepKind::Shift => {
                    stats.shifts += 1;
                    if let Some(target) = step.target_index {
                        *stats.shifts_by_target.entry(target).or_insert(0) += 1;
                    }
                }
                StepKind::Insert => stats.inserts += 1,
                StepKind::Init | StepKind::Complete => {}
            }
        }

        stats
    }

    /// Shift steps recorded for outer index `target`
    pub fn shifts_for(&self, target: usize) -> usize {
        self.shifts_by_target.get(&target).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trace() {
        let trace = Trace::empty();
        assert!(trace.is_empty());
        assert_eq!(trace.last_index(), None);
        assert_eq!(trace.sorted(), None);
        assert_eq!(trace.stats(), TraceStats::default());
    }

    #[test]
    fn test_stats_for_reverse_input() {
        let trace = Trace::generate(&[3, 2, 1]);
        let stats = trace.stats();

        assert_eq!(trace.sorted(), Some(&[1, 2, 3][..]));
        assert_eq!(stats.inserts, 2);
        // i=1 shifts once, i=2 shifts twice
        assert_eq!(stats.shifts_for(1), 1);
        assert_eq!(stats.shifts_for(2), 2);
        assert_eq!(stats.shifts, 3);
        assert_eq!(stats.positions_by_target.get(&1), Some(&0));
        assert_eq!(stats.positions_by_target.get(&2), Some(&0));
    }

    #[test]
    fn test_trace_keeps_input() {
        let trace = Trace::generate(&[4, 1]);
        assert_eq!(trace.input(), &[4, 1]);
        assert!(trace.estimated_size() > 0);
    }
}

//! Trace generation for binary insertion sort
//!
//! [`generate`] runs the whole sort once over a private copy of the input and
//! records a [`Step`] for every comparison, range narrowing, shift and
//! insertion. The result is fully materialized so any step can be displayed
//! without replaying the ones before it.
//!
//! Equal values take the `high = mid - 1` branch, so the search finds the
//! leftmost slot among equal values and each element is inserted ahead of the
//! equal elements already in the sorted prefix.

use super::errors::TraceError;
use super::listing::{
    LINE_COMPLETE, LINE_INSERT, LINE_PROBE, LINE_RESOLVED, LINE_SEARCH_START, LINE_SHIFT,
    LINE_START,
};
use super::narration::Narration;
use super::step::{SearchRange, Step, StepKind};

/// Accumulates steps, snapshotting the working array for each one
struct Recorder {
    steps: Vec<Step>,
}

impl Recorder {
    fn new(n: usize) -> Self {
        Recorder {
            steps: Vec::with_capacity(2 + n * 4),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn record(
        &mut self,
        arr: &[i64],
        kind: StepKind,
        working_indices: Vec<usize>,
        target_index: Option<usize>,
        search_range: Option<SearchRange>,
        narration: Narration,
        code_line: usize,
    ) {
        self.steps.push(Step {
            array: arr.to_vec(),
            kind,
            working_indices,
            target_index,
            search_range,
            narration,
            code_line: Some(code_line),
        });
    }
}

/// Generate the full step trace for `initial`.
///
/// Total over every finite input, including the empty slice: the first step is
/// always `Init` and the last is always `Complete`. The caller's slice is never
/// retained.
pub fn generate(initial: &[i64]) -> Vec<Step> {
    let mut arr = initial.to_vec();
    let n = arr.len();
    let mut rec = Recorder::new(n);

    rec.record(
        &arr,
        StepKind::Init,
        Vec::new(),
        None,
        None,
        Narration::Start { len: n },
        LINE_START,
    );

    for i in 1..n {
        let val = arr[i];

        rec.record(
            &arr,
            StepKind::Search,
            Vec::new(),
            Some(i),
            Some(SearchRange::new(0, i - 1)),
            Narration::SearchStart {
                target: i,
                value: val,
                low: 0,
                high: i - 1,
            },
            LINE_SEARCH_START,
        );

        // `high` goes to -1 when the value belongs at the front
        let mut low: isize = 0;
        let mut high: isize = i as isize - 1;

        while low <= high {
            let mid = (low + high) / 2;
            let (lo, md, hi) = (low as usize, mid as usize, high as usize);
            let mid_value = arr[md];
            let go_right = mid_value < val;

            rec.record(
                &arr,
                StepKind::Search,
                vec![lo, md, hi],
                Some(i),
                Some(SearchRange::new(lo, hi)),
                Narration::Probe {
                    target: i,
                    value: val,
                    low: lo,
                    mid: md,
                    high: hi,
                    mid_value,
                    go_right,
                },
                LINE_PROBE,
            );

            if go_right {
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }

        let pos = low as usize;

        rec.record(
            &arr,
            StepKind::Search,
            vec![pos],
            Some(i),
            None,
            Narration::Resolved {
                target: i,
                value: val,
                pos,
            },
            LINE_RESOLVED,
        );

        for j in (pos + 1..=i).rev() {
            // snapshot is taken before the move
            rec.record(
                &arr,
                StepKind::Shift,
                vec![j, j - 1],
                Some(i),
                None,
                Narration::Shift {
                    value: arr[j - 1],
                    from: j - 1,
                    to: j,
                    pos,
                },
                LINE_SHIFT,
            );
            arr[j] = arr[j - 1];
        }

        arr[pos] = val;
        rec.record(
            &arr,
            StepKind::Insert,
            vec![pos],
            Some(i),
            None,
            Narration::Insert {
                target: i,
                value: val,
                pos,
            },
            LINE_INSERT,
        );
    }

    rec.record(
        &arr,
        StepKind::Complete,
        (0..n).collect(),
        None,
        None,
        Narration::Complete { len: n },
        LINE_COMPLETE,
    );

    rec.steps
}

/// Parse a comma or whitespace separated list of integers.
///
/// Any token that is not an `i64` rejects the whole input.
pub fn parse_input(text: &str) -> Result<Vec<i64>, TraceError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|e| {
                TraceError::invalid(position, format!("'{}' is not an integer ({})", token, e))
            })
        })
        .collect()
}

/// Convert floating point values into the integer input the generator takes.
///
/// NaN, infinities and values with a fractional part are rejected.
pub fn values_from_floats(values: &[f64]) -> Result<Vec<i64>, TraceError> {
    values
        .iter()
        .enumerate()
        .map(|(position, &v)| {
            if !v.is_finite() {
                return Err(TraceError::invalid(position, format!("{} is not finite", v)));
            }
            if v.fract() != 0.0 {
                return Err(TraceError::invalid(position, format!("{} is not an integer", v)));
            }
            if v < i64::MIN as f64 || v >= i64::MAX as f64 {
                return Err(TraceError::invalid(position, format!("{} is out of range", v)));
            }
            Ok(v as i64)
        })
        .collect()
}

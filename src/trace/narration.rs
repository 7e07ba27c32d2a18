//! Structured step narration
//!
//! A [`Narration`] carries every value a presentation layer needs to describe a
//! step in any language. The [`fmt::Display`] impl is the built-in English
//! rendering used by the TUI and the `--dump` output.

use serde::Serialize;
use std::fmt;

/// What happened at a step, with the data needed to describe it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Narration {
    /// Trace start; nothing has been touched yet
    Start { len: usize },

    /// Binary search begins over the sorted prefix `[low, high]`
    SearchStart {
        target: usize,
        value: i64,
        low: usize,
        high: usize,
    },

    /// `arr[mid]` compared against the held value
    Probe {
        target: usize,
        value: i64,
        low: usize,
        mid: usize,
        high: usize,
        mid_value: i64,
        /// `true` when `arr[mid] < value`, i.e. the search continues right
        go_right: bool,
    },

    /// Search finished; `pos` is where the value belongs
    Resolved {
        target: usize,
        value: i64,
        pos: usize,
    },

    /// `arr[from]` is copied one slot right into `to` to open a gap at `pos`
    Shift {
        value: i64,
        from: usize,
        to: usize,
        pos: usize,
    },

    /// The held value is written into its position
    Insert {
        target: usize,
        value: i64,
        pos: usize,
    },

    /// Sorting is finished
    Complete { len: usize },

    /// Stand-in for "no trace yet"
    Empty,
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narration::Start { len } => {
                write!(f, "Starting binary insertion sort on {} element(s)", len)
            }
            Narration::SearchStart {
                target,
                value,
                low,
                high,
            } => write!(
                f,
                "Searching for the insertion position of {} (index {}) within sorted range [{}, {}]",
                value, target, low, high
            ),
            Narration::Probe {
                value,
                low,
                mid,
                high,
                mid_value,
                go_right,
                ..
            } => {
                if *go_right {
                    write!(
                        f,
                        "Range [{}, {}]: midpoint arr[{}] = {} < {}, narrowing to the right half",
                        low, high, mid, mid_value, value
                    )
                } else {
                    write!(
                        f,
                        "Range [{}, {}]: midpoint arr[{}] = {} >= {}, narrowing to the left half",
                        low, high, mid, mid_value, value
                    )
                }
            }
            Narration::Resolved { value, pos, .. } => {
                write!(f, "Insertion position for {} resolved to {}", value, pos)
            }
            Narration::Shift {
                value,
                from,
                to,
                pos,
            } => write!(
                f,
                "Shifting {} from index {} to {} to make room at {}",
                value, from, to, pos
            ),
            Narration::Insert { value, pos, .. } => {
                write!(f, "Inserting {} at index {}", value, pos)
            }
            Narration::Complete { len } => {
                write!(f, "Sequence fully ordered ({} element(s))", len)
            }
            Narration::Empty => write!(f, "No trace loaded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_direction_wording() {
        let right = Narration::Probe {
            target: 3,
            value: 7,
            low: 0,
            mid: 1,
            high: 2,
            mid_value: 4,
            go_right: true,
        };
        let left = Narration::Probe {
            target: 3,
            value: 7,
            low: 0,
            mid: 1,
            high: 2,
            mid_value: 7,
            go_right: false,
        };

        assert!(right.to_string().contains("right half"));
        assert!(left.to_string().contains("7 >= 7"));
        assert!(left.to_string().contains("left half"));
    }

    #[test]
    fn test_shift_mentions_gap() {
        let text = Narration::Shift {
            value: 5,
            from: 0,
            to: 1,
            pos: 0,
        }
        .to_string();
        assert_eq!(text, "Shifting 5 from index 0 to 1 to make room at 0");
    }
}

//! Reference pseudocode listing for the source pane
//!
//! [`CODE_LISTING`] is static data: every [`Step`](super::Step) points into it
//! through `code_line`, a 0-based index. The constants below name the lines the
//! generator emits so the mapping lives next to the text it refers to.

/// Pseudocode of binary insertion sort, one entry per displayed line
pub const CODE_LISTING: &[&str] = &[
    "procedure binary_insertion_sort(arr)",
    "  for i <- 1 to n - 1 do",
    "    val <- arr[i]",
    "    low <- 0; high <- i - 1",
    "    while low <= high do",
    "      mid <- floor((low + high) / 2)",
    "      if arr[mid] < val then low <- mid + 1",
    "      else high <- mid - 1",
    "    pos <- low",
    "    for j <- i down to pos + 1 do",
    "      arr[j] <- arr[j - 1]",
    "    arr[pos] <- val",
    "  return arr",
];

pub const LINE_START: usize = 0;
pub const LINE_SEARCH_START: usize = 3;
pub const LINE_PROBE: usize = 6;
pub const LINE_RESOLVED: usize = 8;
pub const LINE_SHIFT: usize = 10;
pub const LINE_INSERT: usize = 11;
pub const LINE_COMPLETE: usize = 12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_lines_are_in_range() {
        for line in [
            LINE_START,
            LINE_SEARCH_START,
            LINE_PROBE,
            LINE_RESOLVED,
            LINE_SHIFT,
            LINE_INSERT,
            LINE_COMPLETE,
        ] {
            assert!(line < CODE_LISTING.len(), "line {} outside listing", line);
        }
    }

    #[test]
    fn test_named_lines_match_text() {
        assert!(CODE_LISTING[LINE_PROBE].contains("arr[mid] < val"));
        assert!(CODE_LISTING[LINE_SHIFT].contains("arr[j] <- arr[j - 1]"));
        assert!(CODE_LISTING[LINE_INSERT].contains("arr[pos] <- val"));
    }
}

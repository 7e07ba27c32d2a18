//! Pseudocode pane rendering with syntax highlighting
//!
//! This module renders the reference listing of binary insertion sort and
//! highlights the line the current step points at.
//!
//! # Features
//!
//! - Highlighting for pseudocode keywords, numbers, comparison and assignment
//! - Current line highlighting with arrow indicator
//! - Scroll state that keeps the current line at a fixed visual row
//! - Line numbering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for the pseudocode listing
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // `<-` is assignment; render it as one token
        if c == '<' && chars.get(i + 1) == Some(&'-') {
            flush_word(&mut spans, &mut current_word, false);
            spans.push(Span::styled(
                "<-",
                Style::default().fg(DEFAULT_THEME.operator),
            ));
            i += 2;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' {
            flush_word(&mut spans, &mut current_word, c == '(');

            let style = match c {
                '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                '<' | '>' | '=' | '+' | '-' | '/' => Style::default().fg(DEFAULT_THEME.operator),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, false);

    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'_>>, word: &mut String, is_function: bool) {
    if word.is_empty() {
        return;
    }
    let style = get_keyword_style(word, is_function);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn get_keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "procedure" | "for" | "to" | "down" | "do" | "while" | "if" | "then" | "else"
        | "return" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "floor" => Style::default().fg(DEFAULT_THEME.function),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ => {
            if is_function {
                Style::default().fg(DEFAULT_THEME.function)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            }
        }
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Render the pseudocode pane.
///
/// `current_line` is 0-based; `None` highlights nothing.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[&str],
    current_line: Option<usize>,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Pseudocode ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Initialize target_line_row to center if not set
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep current line at target visual row
    if let Some(line_idx) = current_line.filter(|&l| l < total_lines) {
        scroll_state.offset = line_idx.saturating_sub(target_row);

        if total_lines > visible_height {
            scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
        } else {
            scroll_state.offset = 0;
        }
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let is_current = current_line == Some(idx);
            let marker = if is_current { "▶" } else { " " };
            let line_num_str = format!("{}{:3} ", marker, idx + 1);

            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_source_code(line);
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line<'_>) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_assignment_is_single_token() {
        let line = highlight_source_code("pos <- low");
        assert_eq!(texts(&line), vec!["pos", " ", "<-", " ", "low"]);
    }

    #[test]
    fn test_keywords_are_bold() {
        let line = highlight_source_code("while low <= high do");
        assert!(line.spans[0]
            .style
            .add_modifier
            .contains(Modifier::BOLD));
        assert_eq!(line.spans[0].content, "while");
    }
}

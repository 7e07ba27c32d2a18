//! Array pane rendering
//!
//! Draws the current step's array snapshot as a bar chart. Each bar is
//! coloured by the role its index plays in the step (held element, search
//! bounds, midpoint, shift pair, inserted slot).

use crate::trace::{Step, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// What an index is doing in the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Idle,
    SortedPrefix,
    InRange,
    Bound,
    Mid,
    Target,
    Resolved,
    ShiftDestination,
    ShiftSource,
    Inserted,
    Done,
}

impl BarRole {
    fn color(self) -> Color {
        match self {
            BarRole::Idle => DEFAULT_THEME.bar_idle,
            BarRole::SortedPrefix => DEFAULT_THEME.bar_sorted,
            BarRole::InRange => DEFAULT_THEME.bar_range,
            BarRole::Bound => DEFAULT_THEME.primary,
            BarRole::Mid => DEFAULT_THEME.function,
            BarRole::Target => DEFAULT_THEME.secondary,
            BarRole::Resolved | BarRole::Inserted | BarRole::Done => DEFAULT_THEME.success,
            BarRole::ShiftDestination => DEFAULT_THEME.error,
            BarRole::ShiftSource => DEFAULT_THEME.secondary,
        }
    }
}

/// Classify `index` within `step`
pub fn bar_role(step: &Step, index: usize) -> BarRole {
    let target = step.target_index;
    let base = match target {
        Some(t) if index < t => BarRole::SortedPrefix,
        _ => BarRole::Idle,
    };

    match step.kind {
        StepKind::Init => BarRole::Idle,
        StepKind::Complete => BarRole::Done,
        StepKind::Insert => {
            if step.working_indices.first() == Some(&index) {
                BarRole::Inserted
            } else if target.is_some_and(|t| index <= t) {
                BarRole::SortedPrefix
            } else {
                BarRole::Idle
            }
        }
        StepKind::Shift => match step.working_indices.as_slice() {
            [dest, _] if *dest == index => BarRole::ShiftDestination,
            [_, src] if *src == index => BarRole::ShiftSource,
            _ => base,
        },
        StepKind::Search => {
            if let Some(mid) = step.mid_index() {
                if mid == index {
                    return BarRole::Mid;
                }
            }
            if let Some(pos) = step.resolved_position() {
                if pos == index {
                    return BarRole::Resolved;
                }
            }
            if target == Some(index) {
                return BarRole::Target;
            }
            match step.search_range {
                Some(range) if index == range.low || index == range.high => {
                    if step.is_probe() {
                        BarRole::Bound
                    } else {
                        BarRole::InRange
                    }
                }
                Some(range) if range.contains(index) => BarRole::InRange,
                _ => base,
            }
        }
    }
}

/// Tallest bar, in chart units; the chart rescales to the pane height
const BAR_SCALE: u64 = 100;

/// Bar height for `value` in a snapshot spanning `min..=max`.
///
/// Heights fall in `1..=BAR_SCALE + 1`, so negative values and the full `i64`
/// range both draw without overflow.
pub fn bar_height(value: i64, min: i64, max: i64) -> u64 {
    let span = max.abs_diff(min);
    if span == 0 {
        return 1;
    }
    let offset = value.abs_diff(min) as u128;
    1 + (offset * BAR_SCALE as u128 / span as u128) as u64
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, step: &Step) {
    let title = format!(" Array · {} ", step.kind.label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if step.array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let n = step.array.len() as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_gap = if inner_width >= n * 3 { 1 } else { 0 };
    let bar_width = (inner_width.saturating_sub(bar_gap * n.saturating_sub(1)) / n).max(1);

    let min = step.array.iter().copied().min().unwrap_or(0);
    let max = step.array.iter().copied().max().unwrap_or(0);
    let bars: Vec<Bar> = step
        .array
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_role(step, index).color();
            Bar::default()
                .value(bar_height(value, min, max))
                .text_value(value.to_string())
                .label(Line::from(index.to_string()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .bg(color)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap);

    frame.render_widget(chart, area);
}

//! Narration log pane rendering

use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the narration for every step up to and including `cursor`
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    cursor: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if steps.is_empty() {
        let paragraph = Paragraph::new("(no trace)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let shown = &steps[..=cursor.min(steps.len() - 1)];

    let all_items: Vec<ListItem> = shown
        .iter()
        .enumerate()
        .map(|(idx, step)| {
            let is_current = idx == cursor;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let text_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:4} ", idx + 1), num_style),
                Span::styled(step.description(), text_style),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

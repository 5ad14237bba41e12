//! Stack pane rendering
//!
//! Lists the stack top to bottom. Values that correspond to printable
//! characters get a character annotation, since most Wierd stacks hold
//! character codes on their way in or out of the channels.

use crate::machine::stack::Stack;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn describe(value: i64) -> String {
    match u32::try_from(value).ok().and_then(char::from_u32) {
        Some(ch) if (' '..='~').contains(&ch) => format!("{:>8}  '{}'", value, ch),
        _ => format!("{:>8}", value),
    }
}

/// Render the stack pane, top of the stack first.
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    stack: &Stack,
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
        .title(format!(" Stack ({}) ", stack.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if stack.is_empty() {
        let paragraph = Paragraph::new("(stack empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = stack
        .iter_top_down()
        .enumerate()
        .map(|(pos, value)| {
            let style = if pos == 0 {
                Style::default()
                    .fg(DEFAULT_THEME.stack_top)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(describe(value)).style(style)
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

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

//! Input pane rendering
//!
//! Shows the characters queued for the IN instruction, oldest first. While
//! input-entry mode is active the pane border lights up and a block cursor
//! marks where the next typed character will land.

use crate::interpreter::channels::InputQueue;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Control characters would garble the pane; show them symbolically.
fn visible(ch: char) -> char {
    match ch {
        '\n' => '⏎',
        '\t' => '⇥',
        c if c.is_control() => '·',
        c => c,
    }
}

/// Render the pending-input pane.
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    input: &InputQueue,
    input_mode: bool,
    is_focused: bool,
) {
    let border_style = if input_mode {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    } else if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = if input_mode {
        " Input (typing, Esc to finish) "
    } else {
        " Input "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let mut spans: Vec<Span> = Vec::new();
    if input.is_empty() && !input_mode {
        spans.push(Span::styled(
            "(no pending input, press i to type)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    } else {
        let text: String = input.chars().map(visible).collect();
        spans.push(Span::styled(
            text,
            Style::default().fg(DEFAULT_THEME.input_text),
        ));
        if input_mode {
            spans.push(Span::styled(
                " ",
                Style::default().bg(DEFAULT_THEME.secondary).fg(Color::Black),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

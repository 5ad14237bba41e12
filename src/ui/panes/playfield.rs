//! Playfield pane rendering
//!
//! Draws the occupied region of the grid as a character matrix with the
//! heading's cell highlighted. The viewport follows the cursor; when the
//! pane is focused the arrow keys pan it, and any step snaps it back to
//! following.
//!
//! On a blank cell the cursor is drawn as a direction arrow so sparks and
//! conditional turns stay legible even where there is nothing under the
//! cursor.

use crate::machine::grid::{Grid, BLANK};
use crate::machine::heading::Heading;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Pan offset relative to the cursor-centered viewport.
#[derive(Debug, Default)]
pub struct PlayfieldScrollState {
    pub pan_x: i64,
    pub pan_y: i64,
}

impl PlayfieldScrollState {
    /// Snap back to following the cursor.
    pub fn reset(&mut self) {
        self.pan_x = 0;
        self.pan_y = 0;
    }
}

/// Render the playfield pane.
pub fn render_playfield_pane(
    frame: &mut Frame,
    area: Rect,
    grid: &Grid,
    heading: &Heading,
    is_focused: bool,
    scroll: &PlayfieldScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let (cursor_x, cursor_y) = heading.position();
    let (dx, dy) = heading.direction();
    let title = format!(
        " Playfield  ip ({}, {})  dir ({}, {}) {} ",
        cursor_x,
        cursor_y,
        dx,
        dy,
        heading.arrow()
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let width = area.width.saturating_sub(2).max(1) as i64;
    let height = area.height.saturating_sub(2).max(1) as i64;

    // Center the viewport on the cursor, then apply the manual pan.
    let left = cursor_x - width / 2 + scroll.pan_x;
    let top = cursor_y - height / 2 + scroll.pan_y;

    let cursor_style = Style::default()
        .bg(DEFAULT_THEME.cursor_bg)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);
    let cell_style = Style::default().fg(DEFAULT_THEME.cell);

    let mut lines: Vec<Line> = Vec::with_capacity(height as usize);
    for y in top..top + height {
        let mut spans: Vec<Span> = Vec::with_capacity(width as usize);
        for x in left..left + width {
            let ch = grid.get(x, y);
            if (x, y) == (cursor_x, cursor_y) {
                let shown = if ch == BLANK { heading.arrow() } else { ch };
                spans.push(Span::styled(shown.to_string(), cursor_style));
            } else if ch == BLANK {
                spans.push(Span::raw(" "));
            } else {
                spans.push(Span::styled(ch.to_string(), cell_style));
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

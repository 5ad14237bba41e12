use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color,     // Status bar background
    pub cursor_bg: Color,  // Playfield cursor cell
    pub cell: Color,       // Occupied playfield cells
    pub stack_top: Color,  // Top-of-stack entry
    pub input_text: Color, // Pending input characters
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    bar_bg: Color::Rgb(50, 50, 70),
    cursor_bg: Color::Rgb(80, 255, 80), // The classic light-green cursor
    cell: Color::Rgb(205, 214, 244),
    stack_top: Color::Rgb(245, 194, 231), // Pink
    input_text: Color::Rgb(148, 226, 213), // Cyan/teal
};

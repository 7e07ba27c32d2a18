use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Search bounds, status badge
    pub secondary: Color, // Held value, shift source
    pub comment: Color,
    pub success: Color, // Resolved and inserted slots
    pub error: Color,   // Shift destination
    pub keyword: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color, // `floor` and the midpoint bar
    pub operator: Color,
    pub bar_idle: Color,
    pub bar_sorted: Color, // Sorted prefix during the outer loop
    pub bar_range: Color,  // Inside the live search range
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),
    number: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    function: Color::Rgb(249, 226, 175),
    operator: Color::Rgb(148, 226, 213),
    bar_idle: Color::Rgb(88, 91, 112),
    bar_sorted: Color::Rgb(116, 150, 200),
    bar_range: Color::Rgb(180, 190, 254),
};

use ratatui::style::Color;

/// Color palette shared by all panes.
///
/// The application ships several palettes; `t` cycles through them at runtime
/// and `--theme` picks the starting one by name.
pub struct Theme {
    pub name: &'static str,
    pub fg: Color,
    pub primary: Color,
    pub secondary: Color,
    pub comment: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub cursor_bg: Color,   // Row under the list cursor
    pub selected_fg: Color, // Card whose detail pane is open
    pub label: Color,       // Field labels in the detail pane
}

pub const THEMES: &[Theme] = &[
    Theme {
        name: "midnight",
        fg: Color::Rgb(205, 214, 244),
        primary: Color::Rgb(137, 180, 250),
        secondary: Color::Rgb(250, 179, 135),
        comment: Color::Rgb(108, 112, 134),
        border_focused: Color::Rgb(249, 226, 175),
        border_normal: Color::Rgb(108, 112, 134),
        cursor_bg: Color::Rgb(50, 50, 70),
        selected_fg: Color::Rgb(166, 227, 161),
        label: Color::Rgb(148, 226, 213),
    },
    Theme {
        name: "paper",
        fg: Color::Rgb(60, 56, 54),
        primary: Color::Rgb(7, 102, 120),
        secondary: Color::Rgb(175, 58, 3),
        comment: Color::Rgb(146, 131, 116),
        border_focused: Color::Rgb(175, 58, 3),
        border_normal: Color::Rgb(146, 131, 116),
        cursor_bg: Color::Rgb(235, 219, 178),
        selected_fg: Color::Rgb(121, 116, 14),
        label: Color::Rgb(7, 102, 120),
    },
    Theme {
        name: "ocean",
        fg: Color::Rgb(192, 202, 245),
        primary: Color::Rgb(125, 207, 255),
        secondary: Color::Rgb(255, 158, 100),
        comment: Color::Rgb(86, 95, 137),
        border_focused: Color::Rgb(125, 207, 255),
        border_normal: Color::Rgb(86, 95, 137),
        cursor_bg: Color::Rgb(41, 46, 66),
        selected_fg: Color::Rgb(158, 206, 106),
        label: Color::Rgb(187, 154, 247),
    },
    Theme {
        name: "ember",
        fg: Color::Rgb(235, 219, 178),
        primary: Color::Rgb(250, 189, 47),
        secondary: Color::Rgb(254, 128, 25),
        comment: Color::Rgb(124, 111, 100),
        border_focused: Color::Rgb(254, 128, 25),
        border_normal: Color::Rgb(124, 111, 100),
        cursor_bg: Color::Rgb(60, 48, 42),
        selected_fg: Color::Rgb(184, 187, 38),
        label: Color::Rgb(142, 192, 124),
    },
    Theme {
        name: "fern",
        fg: Color::Rgb(211, 198, 170),
        primary: Color::Rgb(167, 192, 128),
        secondary: Color::Rgb(230, 126, 128),
        comment: Color::Rgb(122, 132, 120),
        border_focused: Color::Rgb(167, 192, 128),
        border_normal: Color::Rgb(122, 132, 120),
        cursor_bg: Color::Rgb(47, 56, 62),
        selected_fg: Color::Rgb(219, 188, 127),
        label: Color::Rgb(131, 192, 146),
    },
];

/// Look up a theme index by name (as given to `--theme`).
pub fn theme_index(name: &str) -> Option<usize> {
    THEMES.iter().position(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_are_unique() {
        for (i, a) in THEMES.iter().enumerate() {
            for b in &THEMES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn theme_lookup_by_name() {
        assert_eq!(theme_index("midnight"), Some(0));
        assert!(theme_index("no-such-theme").is_none());
    }
}

//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    detail_open: bool,
    theme: &Theme,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: theme name and status message
    let left_spans = vec![
        Span::styled(
            format!(" {} ", theme.name),
            Style::default()
                .bg(theme.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default().bg(theme.cursor_bg).fg(theme.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(theme.cursor_bg).fg(theme.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(theme.cursor_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(theme.comment).fg(Color::Black);
    let desc_style = Style::default().bg(theme.cursor_bg).fg(theme.fg);
    let sep_style = Style::default().bg(theme.cursor_bg).fg(theme.comment);

    let mut right_spans = vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" move ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵/⎵ ", key_style),
        Span::styled(" toggle ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" t ", key_style),
        Span::styled(" theme ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    if detail_open {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " OPEN ",
            Style::default()
                .bg(theme.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(theme.cursor_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

//! Detail pane rendering
//!
//! The detail pane exists only while the current selection resolves to a
//! person in the roster; the caller decides whether to allocate space for it.
//! A selection that points at no known person renders nothing, the same as no
//! selection at all.

use crate::roster::Person;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the detail view for the resolved person.
pub fn render_detail_pane(frame: &mut Frame, area: Rect, person: &Person, theme: &Theme) {
    let block = Block::default()
        .title(format!(" {} ", person.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let label_style = Style::default()
        .fg(theme.label)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(theme.fg);

    let lines = vec![
        Line::from(vec![
            Span::styled("Name: ", label_style),
            Span::styled(person.name.clone(), value_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Field: ", label_style),
            Span::styled(person.field.clone(), value_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Achievement: ", label_style),
            Span::styled(person.achievement.clone(), value_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Image: ", label_style),
            Span::styled(
                person.image_url.clone(),
                Style::default()
                    .fg(theme.comment)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

//! Card list pane rendering

use crate::roster::Roster;
use crate::selection::SelectionToggle;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the card list: one entry per person, in roster order.
///
/// The row under the cursor gets a background highlight; the card whose
/// detail pane is open gets a marker and the selected color.  The list is
/// windowed so the cursor row stays visible when the roster is taller than
/// the pane.
pub fn render_cards_pane(
    frame: &mut Frame,
    area: Rect,
    roster: &Roster,
    selection: &SelectionToggle,
    cursor: usize,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" People ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(theme.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if roster.is_empty() {
        let paragraph = Paragraph::new("(empty roster)")
            .block(block)
            .style(Style::default().fg(theme.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    let all_items: Vec<ListItem> = roster
        .people()
        .iter()
        .enumerate()
        .map(|(i, person)| {
            let is_selected = selection.is_selected(person.id);
            let marker = if is_selected { "▸ " } else { "  " };

            let mut style = Style::default().fg(if is_selected {
                theme.selected_fg
            } else {
                theme.fg
            });
            if is_selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            if i == cursor {
                style = style.bg(theme.cursor_bg);
            }

            let line = Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(theme.comment)),
                Span::raw(marker),
                Span::styled(person.name.clone(), style),
            ]);
            ListItem::new(line).style(if i == cursor {
                Style::default().bg(theme.cursor_bg)
            } else {
                Style::default()
            })
        })
        .collect();

    // Window the list so the cursor row is always on screen
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    let scroll_offset = if total_items > visible_height {
        cursor.saturating_sub(visible_height - 1).min(total_items - visible_height)
    } else {
        0
    };

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

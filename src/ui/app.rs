//! Main TUI application state and logic

use crate::roster::{Person, Roster};
use crate::selection::SelectionToggle;
use crate::ui::theme::{THEMES, Theme};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// The person roster (read-only for the whole session)
    roster: Roster,

    /// The selection toggle controller; the only mutable domain state
    selection: SelectionToggle,

    /// List cursor: which card the next Enter/Space acts on.
    /// Navigation state only, independent of the selection.
    cursor: usize,

    /// Index into [`THEMES`]
    theme_index: usize,

    /// Whether the app should quit
    should_quit: bool,

    /// Status message to display
    status_message: String,
}

impl App {
    /// Create a new app over the given roster, starting with nothing selected.
    pub fn new(roster: Roster, theme_index: usize) -> Self {
        App {
            roster,
            selection: SelectionToggle::new(),
            cursor: 0,
            theme_index: theme_index.min(THEMES.len().saturating_sub(1)),
            should_quit: false,
            status_message: String::from("Ready"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn theme(&self) -> &'static Theme {
        &THEMES[self.theme_index]
    }

    /// The person the current selection resolves to, if any.
    ///
    /// A selection holding an id with no roster match resolves to `None` and
    /// the UI behaves exactly as if nothing were selected.
    fn selected_person(&self) -> Option<&Person> {
        self.selection.selected().and_then(|id| self.roster.get(id))
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Card list (plus detail pane when open) above, status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let theme = self.theme();
        let detail_person = self.selected_person();

        if let Some(person) = detail_person {
            // Detail pane open: cards on the left, detail on the right
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(pane_area);

            super::panes::render_cards_pane(
                frame,
                columns[0],
                &self.roster,
                &self.selection,
                self.cursor,
                theme,
            );
            super::panes::render_detail_pane(frame, columns[1], person, theme);
        } else {
            // Nothing selected (or the selection resolves to no one):
            // the card list takes the full width and no detail is drawn
            super::panes::render_cards_pane(
                frame,
                pane_area,
                &self.roster,
                &self.selection,
                self.cursor,
                theme,
            );
        }

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            detail_person.is_some(),
            theme,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.roster.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_at(self.cursor);
            }
            // Number keys toggle the Nth card directly
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10).unwrap() as usize - 1;
                if index < self.roster.len() {
                    self.cursor = index;
                    self.toggle_at(index);
                } else {
                    self.status_message = format!("No card {}", index + 1);
                }
            }
            KeyCode::Esc => {
                // Close an open detail pane; routed through the same toggle
                // so the controller stays the single mutator
                if let Some(id) = self.selection.selected() {
                    self.selection.toggle(id);
                    self.status_message = String::from("Closed");
                }
            }
            KeyCode::Char('t') => {
                self.theme_index = (self.theme_index + 1) % THEMES.len();
                self.status_message = format!("Theme: {}", self.theme().name);
            }
            _ => {}
        }
    }

    /// Toggle selection for the card at `index` in roster order.
    fn toggle_at(&mut self, index: usize) {
        let Some(person) = self.roster.people().get(index) else {
            return;
        };
        let name = person.name.clone();
        match self.selection.toggle(person.id) {
            Some(_) => self.status_message = name,
            None => self.status_message = String::from("Closed"),
        }
    }

    /// The current selection, for callers that only need the id.
    pub fn selection(&self) -> &SelectionToggle {
        &self.selection
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

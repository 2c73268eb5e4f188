// Render tests against an in-memory backend: the detail pane must appear and
// disappear with the toggle, and never appear for a selection that does not
// resolve.

use luminary::roster::{Person, PersonId, Roster};
use luminary::selection::SelectionToggle;
use luminary::ui::panes::{render_cards_pane, render_detail_pane};
use luminary::ui::theme::THEMES;
use luminary::ui::App;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn detail_pane_follows_the_toggle() {
    let mut app = App::new(Roster::builtin(), 0);
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).expect("test terminal");

    // Nothing selected: card list only, no detail labels anywhere
    terminal.draw(|f| app.render(f)).expect("draw");
    let text = buffer_text(&terminal);
    assert!(text.contains("People"));
    assert!(text.contains("Marie Curie"));
    assert!(!text.contains("Achievement:"));

    // Toggle the first card open
    press(&mut app, KeyCode::Char('1'));
    terminal.draw(|f| app.render(f)).expect("draw");
    let text = buffer_text(&terminal);
    assert!(text.contains("Achievement:"));
    assert!(text.contains("Physics & Chemistry"));

    // Toggle it closed again
    press(&mut app, KeyCode::Char('1'));
    terminal.draw(|f| app.render(f)).expect("draw");
    let text = buffer_text(&terminal);
    assert!(!text.contains("Achievement:"));
}

#[test]
fn switching_cards_swaps_the_detail() {
    let mut app = App::new(Roster::builtin(), 0);
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).expect("test terminal");

    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('2'));
    terminal.draw(|f| app.render(f)).expect("draw");
    let text = buffer_text(&terminal);

    // Darwin's detail, not Curie's
    assert!(text.contains("Biology"));
    assert!(!text.contains("Physics & Chemistry"));
}

#[test]
fn detail_pane_shows_all_person_fields() {
    let person = Person {
        id: PersonId(1),
        name: "Curie".to_string(),
        field: "Physics".to_string(),
        achievement: "Radioactivity".to_string(),
        image_url: "https://example.com/curie.jpg".to_string(),
    };

    let backend = TestBackend::new(80, 20);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|f| render_detail_pane(f, f.area(), &person, &THEMES[0]))
        .expect("draw");

    let text = buffer_text(&terminal);
    assert!(text.contains("Name:"));
    assert!(text.contains("Field:"));
    assert!(text.contains("Physics"));
    assert!(text.contains("Radioactivity"));
    // The image reference is passed through verbatim, never fetched
    assert!(text.contains("https://example.com/curie.jpg"));
}

#[test]
fn cards_pane_marks_the_selected_entry() {
    let roster = Roster::builtin();
    let mut selection = SelectionToggle::new();
    selection.toggle(PersonId(2));

    let backend = TestBackend::new(40, 12);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|f| render_cards_pane(f, f.area(), &roster, &selection, 0, &THEMES[0]))
        .expect("draw");

    let text = buffer_text(&terminal);
    assert!(text.contains("▸"));
}

#[test]
fn empty_roster_renders_a_placeholder_list() {
    let roster = Roster::new(Vec::new()).expect("empty roster is valid");
    let selection = SelectionToggle::new();

    let backend = TestBackend::new(40, 10);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|f| render_cards_pane(f, f.area(), &roster, &selection, 0, &THEMES[0]))
        .expect("draw");

    let text = buffer_text(&terminal);
    assert!(text.contains("(empty roster)"));
}

// Luminary: a terminal person-card browser

mod roster;
mod selection;
mod ui;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use roster::Roster;
use ui::App;
use ui::theme;

fn usage(program_name: &str) {
    eprintln!("Usage: {} [roster.json] [--theme <name>]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  roster.json     JSON array of person records; omit to use the builtin roster");
    eprintln!("  --theme <name>  Starting color theme; one of:");
    for t in theme::THEMES {
        eprintln!("                    {}", t.name);
    }
    eprintln!();
    eprintln!("Keys: ↑/↓ move, Enter/Space toggle detail, 1-9 toggle by number,");
    eprintln!("      Esc close, t cycle theme, q quit");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("luminary");

    let mut roster_path: Option<String> = None;
    let mut theme_index = 0usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                usage(program_name);
                return Ok(());
            }
            "--theme" => {
                let Some(name) = args.get(i + 1) else {
                    eprintln!("Error: --theme requires a name");
                    eprintln!();
                    usage(program_name);
                    std::process::exit(1);
                };
                match theme::theme_index(name) {
                    Some(index) => theme_index = index,
                    None => {
                        eprintln!("Error: Unknown theme '{}'", name);
                        eprintln!();
                        usage(program_name);
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", arg);
                eprintln!();
                usage(program_name);
                std::process::exit(1);
            }
            path => {
                roster_path = Some(path.to_string());
                i += 1;
            }
        }
    }

    // Load the roster before touching the terminal so errors print cleanly
    let roster = match roster_path {
        Some(path) => {
            if !Path::new(&path).exists() {
                eprintln!("Error: File '{}' not found", path);
                std::process::exit(1);
            }
            let source = fs::read_to_string(&path)?;
            match Roster::from_json(&source) {
                Ok(roster) => {
                    eprintln!("Loaded {} people from {}", roster.len(), path);
                    roster
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => Roster::builtin(),
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(roster, theme_index);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

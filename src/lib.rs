//! # Introduction
//!
//! Luminary displays a roster of notable people as a list of
//! keyboard-activated cards in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).  Activating a card toggles a detail
//! pane for that person: once to open, again to close, with at most one
//! detail pane open at a time.
//!
//! ## Data flow
//!
//! ```text
//! Roster → card list → key event → SelectionToggle::toggle → detail pane
//! ```
//!
//! 1. [`roster`] — the static, read-only person records and id lookup.
//! 2. [`selection`] — the single-selection toggle state machine; the only
//!    mutable domain state in the program.
//! 3. [`ui`] — ratatui-based TUI; derives everything it draws from the
//!    roster and the current selection.
//!
//! The renderer resolves the selected id against the roster every frame; an
//! id with no match draws nothing, so a stale or unknown selection degrades
//! silently instead of failing.

pub mod roster;
pub mod selection;
pub mod ui;

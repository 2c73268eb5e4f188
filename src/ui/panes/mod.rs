//! TUI pane rendering modules
//!
//! Stateless render functions for each visible pane.  Every pane is a pure
//! function of application state: the card list and detail pane are derived
//! from the roster and the current selection each frame, never the other way
//! around.
//!
//! - [`cards`]: the card list, one keyboard-activated entry per person
//! - [`detail`]: the detail view for the resolved selection
//! - [`status`]: status bar with keybindings and state indicators

pub mod cards;
pub mod detail;
pub mod status;

// Re-export render functions for convenience
pub use cards::render_cards_pane;
pub use detail::render_detail_pane;
pub use status::render_status_bar;

//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, list cursor
//! - **[`panes`]** — stateless render functions for each visible pane (card
//!   list, detail, status bar)
//! - **[`theme`]** — color palettes; the visual variants are configuration,
//!   not separate renderers
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Roster`] and call [`App::run`] to start the event loop.
//!
//! [`Roster`]: crate::roster::Roster
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

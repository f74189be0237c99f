//! Terminal user interface
//!
//! - `list` - expandable list widget over a node tree
//! - `terminal` - capability detection, key mapping, crossterm surface
//! - `theme` - colors and icons
//! - `app` - the two-pane browser

pub mod app;
pub mod list;
pub mod terminal;
pub mod theme;

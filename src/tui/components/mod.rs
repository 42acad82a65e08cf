//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing address and status text
//! - `ConnectPanel`: Disconnected landing view
//! - `InitPanel`: One-time initialization prompt
//! - `GifGrid`: Renderer over the fetched snapshot
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: Single-line link entry
//! - `GifGridState`: Selection and scroll state for the grid
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props" (function parameters), not by
//! directly accessing global state. This makes dependencies explicit and
//! components testable - every component here renders under
//! `ratatui::backend::TestBackend` in its own test module.

pub mod connect_panel;
pub mod gif_grid;
pub mod init_panel;
pub mod input_box;
pub mod title_bar;

pub use connect_panel::ConnectPanel;
pub use gif_grid::{GifGrid, GifGridState};
pub use init_panel::InitPanel;
pub use input_box::{InputBox, InputEvent};
pub use title_bar::TitleBar;

//! TUI components for quizdeck
//!
//! This crate provides the terminal user interface for quizdeck,
//! including state management, keybindings, event handling, and the
//! screen implementations for the quiz flow.

pub mod app;
pub mod config;
pub mod tui;
pub mod ui;

pub use app::{Action, AppState, Screen, UiState};
pub use config::{KeyBinding, KeyBindings, KeyContext};
pub use tui::{Event, EventHandler, Tui};
pub use ui::components::{quiz_list_hints, HelpOverlay, ListSelector, ListSelectorExt, StatusBar};
pub use ui::screens::{QuestionScreen, QuizListScreen, RevealScreen, SummaryScreen};
pub use ui::{Layout, Theme};

//! Global keyboard shortcuts.
//!
//! Semantic shortcut variants dispatched by `AppState::handle_shortcut`;
//! the embedding surface is responsible for translating raw key events
//! and for reporting whether a text input currently has focus.

/// Application-level keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Right arrow — advance one result page.
    NextPage,
    /// Left arrow — retreat one result page.
    PrevPage,
    /// Escape — dismiss the open detail view.
    CloseDetail,
}

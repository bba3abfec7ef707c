//! Built-in key bindings for the menu.
//!
//! These are the defaults that apply when no entry of the configured hotkey
//! table claims a key press:
//!
//! - **Previous**: `←/↑`
//! - **Next**: `→/↓`
//! - **Commit**: `enter`
//! - **Cancel**: `esc`
//!
//! Arrow keys deliberately belong to selection rather than to the search
//! field; the search field keeps its control-key cursor movement (ctrl+b,
//! ctrl+f, home, end).

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for menu selection, commit, and cancel.
#[derive(Debug, Clone)]
pub struct MenuKeyMap {
    /// Move the highlight towards the start of the list.
    pub previous: key::Binding,
    /// Move the highlight towards the end of the list.
    pub next: key::Binding,
    /// Commit the highlighted option.
    pub commit: key::Binding,
    /// Close the menu without committing.
    pub cancel: key::Binding,
}

impl Default for MenuKeyMap {
    fn default() -> Self {
        Self {
            previous: key::Binding::new(vec![KeyCode::Left, KeyCode::Up])
                .with_help("←/↑", "previous"),
            next: key::Binding::new(vec![KeyCode::Right, KeyCode::Down])
                .with_help("→/↓", "next"),
            commit: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "commit"),
            cancel: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
        }
    }
}

impl key::KeyMap for MenuKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.previous, &self.next, &self.commit, &self.cancel]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.previous, &self.next],
            vec![&self.commit, &self.cancel],
        ]
    }
}

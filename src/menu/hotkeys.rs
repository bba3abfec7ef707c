//! User-configurable hotkey table.
//!
//! Hosts hand the menu an ordered list of [`Hotkey`] entries, consulted on
//! every key press before the built-in defaults. An entry matches when its
//! key is the wildcard (`None`) or equals the pressed key, and the active
//! modifier set equals the entry's modifier set exactly. When one or more
//! entries match, every matching action is applied in table order and the
//! key press is consumed: the built-in defaults and the search field never
//! see it. An empty table leaves the defaults in charge.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Selection movement triggered by a hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Move the highlight towards the end of the list.
    SelectNext,
    /// Move the highlight towards the start of the list.
    SelectPrevious,
    /// Jump to the first visible label.
    SelectFirst,
    /// Jump to the last visible label.
    SelectLast,
}

/// One entry of the hotkey table.
///
/// # Examples
///
/// Vim-flavored navigation on ctrl+j / ctrl+k:
///
/// ```rust
/// use passmenu_widgets::menu::{Hotkey, HotkeyAction};
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let table = vec![
///     Hotkey::new(HotkeyAction::SelectNext, KeyCode::Char('j'))
///         .with_modifiers(KeyModifiers::CONTROL),
///     Hotkey::new(HotkeyAction::SelectPrevious, KeyCode::Char('k'))
///         .with_modifiers(KeyModifiers::CONTROL),
/// ];
/// assert_eq!(table[0].action, HotkeyAction::SelectNext);
/// ```
#[derive(Debug, Clone)]
pub struct Hotkey {
    /// The selection movement to apply.
    pub action: HotkeyAction,
    /// The key to match, or `None` to match any key.
    pub key: Option<KeyCode>,
    /// Modifiers that must be held, exactly.
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    /// Creates an entry matching `key` pressed without modifiers.
    pub fn new(action: HotkeyAction, key: KeyCode) -> Self {
        Self {
            action,
            key: Some(key),
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Creates a wildcard entry matching any key pressed with exactly
    /// `modifiers` held.
    pub fn wildcard(action: HotkeyAction, modifiers: KeyModifiers) -> Self {
        Self {
            action,
            key: None,
            modifiers,
        }
    }

    /// Sets the required modifier set.
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Reports whether the entry claims this key press.
    ///
    /// The key must equal the entry's key unless the entry is a wildcard,
    /// and the modifier sets must be equal. A hotkey on plain `j` does not
    /// fire for ctrl+j, and vice versa.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        let key_matches = match self.key {
            Some(code) => code == msg.key,
            None => true,
        };
        key_matches && self.modifiers == msg.modifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key, modifiers }
    }

    #[test]
    fn test_plain_key_match() {
        let hotkey = Hotkey::new(HotkeyAction::SelectNext, KeyCode::Char('j'));
        assert!(hotkey.matches(&press(KeyCode::Char('j'), KeyModifiers::NONE)));
        assert!(!hotkey.matches(&press(KeyCode::Char('k'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_modifiers_must_match_exactly() {
        let ctrl_j = Hotkey::new(HotkeyAction::SelectNext, KeyCode::Char('j'))
            .with_modifiers(KeyModifiers::CONTROL);
        assert!(ctrl_j.matches(&press(KeyCode::Char('j'), KeyModifiers::CONTROL)));
        assert!(!ctrl_j.matches(&press(KeyCode::Char('j'), KeyModifiers::NONE)));
        assert!(!ctrl_j.matches(&press(
            KeyCode::Char('j'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        )));

        let plain_j = Hotkey::new(HotkeyAction::SelectNext, KeyCode::Char('j'));
        assert!(!plain_j.matches(&press(KeyCode::Char('j'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_wildcard_matches_any_key_with_its_modifiers() {
        let any_alt = Hotkey::wildcard(HotkeyAction::SelectLast, KeyModifiers::ALT);
        assert!(any_alt.matches(&press(KeyCode::Char('x'), KeyModifiers::ALT)));
        assert!(any_alt.matches(&press(KeyCode::Tab, KeyModifiers::ALT)));
        assert!(!any_alt.matches(&press(KeyCode::Char('x'), KeyModifiers::NONE)));
    }
}

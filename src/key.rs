//! Type-safe key bindings for menu components.
//!
//! This module provides the key binding system used throughout the crate. A
//! [`Binding`] groups one or more key presses under a single action together
//! with the help text shown for it, and the [`KeyMap`] trait exposes a
//! component's bindings to help rendering.
//!
//! A key press is matched exactly: the pressed key must equal the binding's
//! key AND the active modifier set must equal the binding's modifier set.
//! `ctrl+n` therefore never matches a plain `n`, and vice versa.
//!
//! # Examples
//!
//! ```rust
//! use passmenu_widgets::key::{self, Binding};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! // Plain keys
//! let next = Binding::new(vec![KeyCode::Down, KeyCode::Right])
//!     .with_help("→/↓", "next");
//!
//! // Keys with modifiers, via tuples or parse strings
//! let commit = Binding::new(vec![(KeyCode::Char('j'), KeyModifiers::CONTROL)]);
//! let cancel = key::new_binding(vec![
//!     key::with_keys_str(&["esc", "ctrl+g"]),
//!     key::with_help("esc", "cancel"),
//! ]);
//!
//! assert!(next.enabled());
//! assert_eq!(cancel.help().key, "esc");
//! # let _ = commit;
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the exact modifier set held with it.
///
/// Conversions exist from a bare [`KeyCode`] (no modifiers) and from a
/// `(KeyCode, KeyModifiers)` tuple, so binding constructors accept both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// The modifier set that must be active, compared for equality.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help metadata for a binding: the key label and a short description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Display label for the key(s), e.g. `"↑/k"`.
    pub key: String,
    /// Short description of the action, e.g. `"up"`.
    pub desc: String,
}

/// A key binding: the key presses that trigger an action, plus help text.
///
/// Disabled bindings never match and are skipped by help rendering.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key presses.
    ///
    /// Accepts anything convertible to [`KeyPress`], so bare key codes and
    /// `(code, modifiers)` tuples can be mixed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use passmenu_widgets::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let b = Binding::new(vec![KeyCode::Enter]);
    /// let c = Binding::new(vec![(KeyCode::Char('u'), KeyModifiers::CONTROL)]);
    /// # let _ = (b, c);
    /// ```
    pub fn new<P: Into<KeyPress>>(keys: Vec<P>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description (builder).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Disables the binding (builder). Disabled bindings never match.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Enables or disables the binding in place.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns the binding's help metadata.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the key presses this binding reacts to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Reports whether a key message triggers this binding.
    ///
    /// The pressed key and the active modifier set must both equal one of the
    /// binding's key presses. Disabled bindings never match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use passmenu_widgets::key::Binding;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let up = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
    /// assert!(up.matches(&KeyMsg { key: KeyCode::Up, modifiers: KeyModifiers::NONE }));
    /// assert!(!up.matches(&KeyMsg { key: KeyCode::Up, modifiers: KeyModifiers::CONTROL }));
    /// ```
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.disabled {
            return false;
        }
        self.keys
            .iter()
            .any(|p| p.code == msg.key && p.mods == msg.modifiers)
    }
}

/// A functional option for [`new_binding`].
///
/// Produced by [`with_keys`], [`with_keys_str`], [`with_help`] and
/// [`with_disabled`], mirroring the option-list constructor style of the
/// original bubbles library.
pub struct BindingOpt(Box<dyn FnOnce(&mut Binding)>);

/// Creates a binding from a list of options.
///
/// # Examples
///
/// ```rust
/// use passmenu_widgets::key;
///
/// let b = key::new_binding(vec![
///     key::with_keys_str(&["pgup", "ctrl+b"]),
///     key::with_help("pgup", "page up"),
/// ]);
/// assert!(b.enabled());
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        (opt.0)(&mut binding);
    }
    binding
}

/// Option: sets the binding's key presses.
pub fn with_keys<P: Into<KeyPress> + 'static>(keys: Vec<P>) -> BindingOpt {
    BindingOpt(Box::new(move |b| {
        b.keys = keys.into_iter().map(Into::into).collect();
    }))
}

/// Option: sets the binding's key presses from parse strings.
///
/// Each string is either a named key (`"enter"`, `"esc"`, `"up"`, `"pgdown"`,
/// ...), a single character, or a `+`-separated combination with modifier
/// prefixes `ctrl`, `alt` and `shift` (`"ctrl+j"`, `"ctrl+shift+p"`).
/// Unparseable strings are ignored.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let presses: Vec<KeyPress> = keys.iter().filter_map(|s| parse_key(s)).collect();
    BindingOpt(Box::new(move |b| {
        b.keys = presses;
    }))
}

/// Option: sets the binding's help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    BindingOpt(Box::new(move |b| {
        b.help = help;
    }))
}

/// Option: creates the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt(Box::new(|b| {
        b.disabled = true;
    }))
}

/// Reports whether a key message triggers a specific binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether a key message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Parses a single key description such as `"ctrl+j"` or `"enter"`.
fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    for part in s.split('+') {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => mods |= KeyModifiers::CONTROL,
            "alt" => mods |= KeyModifiers::ALT,
            "shift" => mods |= KeyModifiers::SHIFT,
            name => code = parse_key_name(name, part),
        }
    }

    code.map(|code| KeyPress { code, mods })
}

fn parse_key_name(lower: &str, original: &str) -> Option<KeyCode> {
    let code = match lower {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pgdn" | "pagedown" => KeyCode::PageDown,
        _ => {
            let mut chars = original.chars();
            let first = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(first)
        }
    };
    Some(code)
}

/// A trait for exposing a component's key bindings to help rendering.
///
/// `short_help` returns the handful of bindings worth showing in a one-line
/// hint bar; `full_help` groups every binding into columns for hosts that
/// dedicate more room to help.
pub trait KeyMap {
    /// Returns the bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Returns all bindings, grouped into columns, for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_msg(key: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key, modifiers }
    }

    #[test]
    fn test_plain_key_matches() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(b.matches(&key_msg(KeyCode::Up, KeyModifiers::NONE)));
        assert!(b.matches(&key_msg(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!b.matches(&key_msg(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn test_modifiers_compared_exactly() {
        let b = Binding::new(vec![(KeyCode::Char('j'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&key_msg(KeyCode::Char('j'), KeyModifiers::CONTROL)));
        // A plain 'j' must not trigger the ctrl binding, and ctrl+alt+j
        // carries more modifiers than the binding asks for.
        assert!(!b.matches(&key_msg(KeyCode::Char('j'), KeyModifiers::NONE)));
        assert!(!b.matches(&key_msg(
            KeyCode::Char('j'),
            KeyModifiers::CONTROL | KeyModifiers::ALT
        )));
    }

    #[test]
    fn test_disabled_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]);
        b.set_enabled(false);
        assert!(!b.enabled());
        assert!(!b.matches(&key_msg(KeyCode::Enter, KeyModifiers::NONE)));

        b.set_enabled(true);
        assert!(b.matches(&key_msg(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_empty_binding_is_not_enabled() {
        let b = Binding::default();
        assert!(!b.enabled());
    }

    #[test]
    fn test_new_binding_applies_options_in_order() {
        let b = new_binding(vec![
            with_keys_str(&["ctrl+j", "down"]),
            with_help("ctrl+j", "next"),
        ]);
        assert_eq!(b.keys().len(), 2);
        assert_eq!(b.help().key, "ctrl+j");
        assert_eq!(b.help().desc, "next");
        assert!(b.matches(&key_msg(KeyCode::Char('j'), KeyModifiers::CONTROL)));
        assert!(b.matches(&key_msg(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key("enter"), Some(KeyPress::from(KeyCode::Enter)));
        assert_eq!(parse_key("pgdown"), Some(KeyPress::from(KeyCode::PageDown)));
        assert_eq!(
            parse_key("ctrl+shift+p"),
            Some(KeyPress::from((
                KeyCode::Char('p'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            )))
        );
        // Uppercase characters keep their case.
        assert_eq!(parse_key("G"), Some(KeyPress::from(KeyCode::Char('G'))));
        assert_eq!(parse_key("nonsense"), None);
    }

    #[test]
    fn test_matches_helpers() {
        let a = Binding::new(vec![KeyCode::Char('a')]);
        let b = Binding::new(vec![KeyCode::Char('b')]);
        let msg = key_msg(KeyCode::Char('b'), KeyModifiers::NONE);
        assert!(matches(&msg, &[&a, &b]));
        assert!(matches_binding(&msg, &b));
        assert!(!matches_binding(&msg, &a));
    }
}

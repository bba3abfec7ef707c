#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/passmenu-widgets/")]

//! # passmenu-widgets
//!
//! A dmenu-style selection menu for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs): a popup window of
//! option labels plus a search field, made for picking one entry out of a
//! password store, a command list, or any other ordered set of strings.
//!
//! ## Overview
//!
//! The crate is organized around one central component, the [`menu`], and the
//! smaller pieces it is assembled from. Everything follows the Elm
//! Architecture of bubbletea-rs: models mutate synchronously inside
//! `update()`, and anything asynchronous, including the menu's own
//! notifications, travels as a command that feeds a message back into the
//! program loop.
//!
//! - **Windowed option list**: the menu lays a fixed pool of label slots over
//!   the option list and scrolls by rebinding slots, so a ten-thousand-entry
//!   store renders as cheaply as a ten-entry one.
//! - **Two-phase selection**: the highlight moves between labels inside the
//!   window and holds still at the edge while the content scrolls underneath,
//!   the way dmenu and rofi behave.
//! - **Search-first input**: every key the menu does not claim lands in the
//!   search field, and each query change runs a filtering delegate that
//!   replaces the option list.
//! - **Configurable hotkeys**: a hotkey table resolved before the built-in
//!   defaults, with wildcard entries for modifier-only bindings.
//! - **Focus pinning**: the popup answers every focus loss with a
//!   re-activation until a commit or cancel closes it.
//!
//! ## Components
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`menu`] | The dmenu-style selector itself |
//! | [`search`] | Single-line query field embedded in the menu |
//! | [`caret`] | Blinking caret used by the search field |
//! | [`filter`] | Delegate hooks and the built-in fuzzy filter |
//! | [`help`] | Key binding help line |
//! | [`key`] | Type-safe key bindings |
//! | [`window`] | Popup placement and focus lifecycle |
//!
//! ## Quick Start
//!
//! Add passmenu-widgets to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! passmenu-widgets = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```
//!
//! For convenience, import the prelude:
//!
//! ```rust
//! use passmenu_widgets::prelude::*;
//! ```
//!
//! ## Embedding the menu
//!
//! Hosts own the menu as a field, forward every message to it, and watch for
//! its notifications with the polling helpers:
//!
//! ```rust
//! use passmenu_widgets::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct Picker {
//!     menu: Menu,
//!     chosen: Option<String>,
//! }
//!
//! impl Model for Picker {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let delegate = FuzzyDelegate::new(vec![
//!             "bank/checking".to_string(),
//!             "mail/work".to_string(),
//!         ]);
//!         let menu = Menu::new(
//!             ScreenRect::new(4, 2, 48, 10),
//!             MenuStyles::default(),
//!             Orientation::Vertical,
//!             delegate,
//!         );
//!         (Self { menu, chosen: None }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         let (done, choice) = self.menu.did_commit(&msg);
//!         if done {
//!             self.chosen = Some(choice);
//!             return Some(bubbletea_rs::quit());
//!         }
//!         if self.menu.was_cancelled(&msg) {
//!             return Some(bubbletea_rs::quit());
//!         }
//!         self.menu.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.menu.view()
//!     }
//! }
//! ```
//!
//! ## Key Bindings
//!
//! Components use the type-safe key binding system from the [`key`] module:
//!
//! ```rust
//! use passmenu_widgets::key::{Binding, KeyMap};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let confirm = Binding::new(vec![KeyCode::Enter])
//!     .with_help("enter", "Confirm selection");
//!
//! let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+s", "Save file");
//!
//! struct MyKeyMap {
//!     confirm: Binding,
//!     save: Binding,
//! }
//!
//! impl KeyMap for MyKeyMap {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.confirm, &self.save]
//!     }
//!
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![
//!             vec![&self.confirm],
//!             vec![&self.save],
//!         ]
//!     }
//! }
//! ```

pub mod caret;
pub mod filter;
pub mod help;
pub mod key;
pub mod menu;
pub mod search;
pub mod window;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// Focused components receive keyboard input and show an active caret;
/// blurred ones ignore input. The menu implements this by delegating to its
/// embedded search field, so focusing the menu focuses the query line.
///
/// When implementing this trait:
/// - `focus()` should set the focused state and may return a command for
///   initialization (e.g. starting a caret blink timer)
/// - `blur()` should unset the focused state and stop focus-driven timers
/// - `focused()` should report the current state consistently
///
/// # Examples
///
/// ```rust
/// use passmenu_widgets::prelude::*;
///
/// let mut field = search_new();
/// assert!(!field.focused());
///
/// let _cmd = field.focus();
/// assert!(field.focused());
///
/// field.blur();
/// assert!(!field.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// Returns an optional command for the bubbletea runtime, typically the
    /// caret blink timer start.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use caret::{blink, new as caret_new, Mode as CaretMode, Model as Caret};
pub use filter::{FuzzyDelegate, MenuDelegate};
pub use help::Model as HelpModel;
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use menu::{
    CancelledMsg, CommitMsg, Hotkey, HotkeyAction, LabelSlot, MenuKeyMap, MenuStyles,
    Model as Menu, MouseMsg, SelectionChangedMsg,
};
pub use search::{
    default_key_map as search_default_key_map, new as search_new, paste,
    KeyMap as SearchKeyMap, Model as SearchField, PasteErrMsg, PasteMsg,
};
pub use window::{
    activate, ActivateMsg, FocusGainedMsg, FocusLostMsg, Lifecycle, Orientation, ScreenRect,
};

/// Prelude module for convenient imports.
///
/// Re-exports the types and functions most hosts need, so a single
/// `use passmenu_widgets::prelude::*;` covers constructing the menu,
/// wiring its delegate, and handling its notifications.
///
/// # Examples
///
/// ```rust
/// use passmenu_widgets::prelude::*;
///
/// let delegate = FuzzyDelegate::new(vec!["bank/checking".to_string()]);
/// let menu = Menu::new(
///     ScreenRect::new(0, 0, 40, 10),
///     MenuStyles::default(),
///     Orientation::Vertical,
///     delegate,
/// );
/// assert_eq!(menu.options().len(), 1);
/// ```
pub mod prelude {
    pub use crate::caret::{blink, new as caret_new, Model as Caret};
    pub use crate::filter::{FuzzyDelegate, MenuDelegate};
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys, Binding,
        Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::menu::{
        CancelledMsg, CommitMsg, Hotkey, HotkeyAction, LabelSlot, MenuKeyMap, MenuStyles,
        Model as Menu, MouseMsg, SelectionChangedMsg,
    };
    pub use crate::search::{
        default_key_map as search_default_key_map, new as search_new, paste,
        KeyMap as SearchKeyMap, Model as SearchField, PasteErrMsg, PasteMsg,
    };
    pub use crate::window::{
        activate, ActivateMsg, FocusGainedMsg, FocusLostMsg, Lifecycle, Orientation, ScreenRect,
    };
    pub use crate::Component;
}

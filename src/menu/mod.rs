//! Popup menu for picking one entry out of an ordered list of options.
//!
//! This is the crate's centerpiece: a dmenu-style selector made of a search
//! field and a window of option labels, driven entirely through the Elm loop
//! of `bubbletea-rs`. The host forwards every message to
//! [`Model::update`]; the menu mutates synchronously and answers with
//! commands that feed notification messages ([`SelectionChangedMsg`],
//! [`CommitMsg`], [`CancelledMsg`]) back into the host's loop.
//!
//! ## Architecture
//!
//! - **Option list**: a plain `Vec<String>` replaced wholesale through
//!   [`Model::replace_options`]; the menu never edits it in place.
//! - **Label pool**: a fixed number of [`LabelSlot`]s computed at layout time
//!   by floor-dividing the window extent by the label extent. Scrolling
//!   rebinds the slots instead of recreating labels.
//! - **Selection**: one highlighted slot with a two-phase movement policy:
//!   inside the window the highlight moves between slots, at the edge the
//!   content scrolls underneath the fixed highlight.
//! - **Input**: key presses pass through the configured hotkey table first,
//!   then the built-in defaults (arrows, enter, esc), and anything unclaimed
//!   lands in the search field. A changed search text runs the delegate hook
//!   and replaces the option list with its result.
//! - **Lifecycle**: the window resolves its placement on the first window
//!   size message, then pins keyboard focus to the search field until commit
//!   or cancel flags it as closing.
//!
//! ## Wiring into a host
//!
//! Hosts embed the model, forward messages, and watch for notifications with
//! the polling helpers:
//!
//! ```rust,ignore
//! fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!     let (done, choice) = self.menu.did_commit(&msg);
//!     if done {
//!         self.chosen = Some(choice);
//!         return Some(bubbletea_rs::quit());
//!     }
//!     if self.menu.was_cancelled(&msg) {
//!         return Some(bubbletea_rs::quit());
//!     }
//!     self.menu.update(msg)
//! }
//! ```

/// User-configurable hotkey table consulted before the built-in defaults.
///
/// See [`Hotkey`] for the matching rules: wildcard-or-equal key, exact
/// modifier set, every matching entry applied in table order.
pub mod hotkeys;

/// Built-in key bindings: arrows for selection, enter to commit, esc to
/// cancel.
pub mod keys;

/// The fixed label pool and its layout math.
pub mod slots;

/// Lipgloss styles and the label extents used for slot layout.
pub mod style;

mod model;
mod rendering;
mod selection;


/// The menu model: option list, label pool, selection, search field, and
/// window lifecycle in one component.
pub use model::Model;

/// Hotkey table types.
pub use hotkeys::{Hotkey, HotkeyAction};

/// Built-in key binding set.
pub use keys::MenuKeyMap;

/// One reusable label of the window.
pub use slots::LabelSlot;

/// Visual configuration.
pub use style::MenuStyles;

use crate::filter::FuzzyDelegate;
use crate::window::{self, Orientation, ScreenRect};
use crate::{key, Component};
use bubbletea_rs::{batch, tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Notification that the highlighted option changed.
///
/// Carries the newly highlighted text. Emitted for slot movement, for
/// scrolls that shift new content under the fixed highlight, and for the
/// re-selection after an option list replacement.
#[derive(Debug, Clone)]
pub struct SelectionChangedMsg(pub String);

/// Notification that the highlighted option was committed.
///
/// The host reads the choice through
/// [`Model::committed_selection`] or the [`Model::did_commit`] helper.
#[derive(Debug)]
pub struct CommitMsg;

/// Notification that the menu was closed without a commit.
#[derive(Debug)]
pub struct CancelledMsg;

/// Mouse input for the menu.
///
/// Hosts that enable mouse capture forward crossterm mouse events through
/// this wrapper, mirroring the fields of `crossterm::event::MouseEvent`.
///
/// Coordinates are absolute terminal cells. Hit-testing resolves them
/// against the window placement, so the host must draw [`Model::view`] with
/// its top-left cell at the placement origin, the way the bundled demos do.
#[derive(Debug, Clone, Copy)]
pub struct MouseMsg {
    /// What happened (press, release, scroll, ...).
    pub kind: MouseEventKind,
    /// Terminal column of the event.
    pub column: u16,
    /// Terminal row of the event.
    pub row: u16,
    /// Modifier keys held during the event.
    pub modifiers: KeyModifiers,
}

impl From<MouseEvent> for MouseMsg {
    fn from(event: MouseEvent) -> Self {
        Self {
            kind: event.kind,
            column: event.column,
            row: event.row,
            modifiers: event.modifiers,
        }
    }
}

/// A command that emits [`CommitMsg`] on the next tick.
pub(super) fn commit_notification() -> Cmd {
    tick(Duration::from_nanos(1), |_| Box::new(CommitMsg) as Msg)
}

/// A command that emits [`CancelledMsg`] on the next tick.
pub(super) fn cancel_notification() -> Cmd {
    tick(Duration::from_nanos(1), |_| Box::new(CancelledMsg) as Msg)
}

/// Combines two optional commands into one, batching when both are present.
fn merge_cmds(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
    match (first, second) {
        (Some(first), Some(second)) => Some(batch(vec![first, second])),
        (first, None) => first,
        (None, second) => second,
    }
}

impl Model {
    /// Reports whether `msg` is the commit notification, along with the
    /// committed choice.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let (done, choice) = menu.did_commit(&msg);
    /// if done {
    ///     println!("picked {choice}");
    /// }
    /// ```
    pub fn did_commit(&self, msg: &Msg) -> (bool, String) {
        if msg.downcast_ref::<CommitMsg>().is_some() {
            if let Some(choice) = self.committed_selection() {
                return (true, choice.to_string());
            }
        }
        (false, String::new())
    }

    /// Reports whether `msg` is the cancellation notification.
    pub fn was_cancelled(&self, msg: &Msg) -> bool {
        msg.downcast_ref::<CancelledMsg>().is_some()
    }

    /// Returns the newly highlighted text if `msg` is a selection change.
    pub fn selection_change<'a>(&self, msg: &'a Msg) -> Option<&'a str> {
        msg.downcast_ref::<SelectionChangedMsg>()
            .map(|change| change.0.as_str())
    }

    fn apply_action(&mut self, action: HotkeyAction) -> Option<Cmd> {
        match action {
            HotkeyAction::SelectNext => self.select_next(),
            HotkeyAction::SelectPrevious => self.select_previous(),
            HotkeyAction::SelectFirst => self.select_first(),
            HotkeyAction::SelectLast => self.select_last(),
        }
    }

    fn on_mouse(&mut self, mouse: &MouseMsg) -> Option<Cmd> {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.select_previous(),
            MouseEventKind::ScrollDown => self.select_next(),
            MouseEventKind::Down(MouseButton::Left) => {
                // Every click hands keyboard focus back to the search field.
                let refocus = if self.search.focused() {
                    None
                } else {
                    self.search.focus()
                };
                match self.slot_at(mouse.column, mouse.row) {
                    Some(index) if self.selected == Some(index) => self.commit(),
                    Some(index) => merge_cmds(self.select_slot(index), refocus),
                    None => refocus,
                }
            }
            _ => None,
        }
    }

    /// Forwards `msg` to the search field and reacts to query changes.
    ///
    /// When the forwarded message changed the search text, the delegate's
    /// `on_search_changed` hook runs and its result replaces the option
    /// list.
    fn forward_to_search(&mut self, msg: &Msg) -> Option<Cmd> {
        let before = self.search.value();
        let cmd = self.search.update(msg);
        if self.search.value() != before {
            let options = self.delegate.on_search_changed(&self.search.value());
            return self.replace_options(options);
        }
        cmd
    }
}

impl key::KeyMap for Model {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.keymap.previous,
            &self.keymap.next,
            &self.keymap.commit,
            &self.keymap.cancel,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.keymap.previous, &self.keymap.next],
            vec![&self.keymap.commit, &self.keymap.cancel],
        ]
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.search.focus()
    }

    fn blur(&mut self) {
        self.search.blur();
    }

    fn focused(&self) -> bool {
        self.search.focused()
    }
}

impl BubbleTeaModel for Model {
    /// Creates a hidden vertical menu with an empty fuzzy delegate.
    ///
    /// Hosts normally construct the menu themselves via [`Model::new`]; this
    /// default exists for running the menu as a standalone program.
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new(
            ScreenRect::new(0, 0, 60, 12),
            MenuStyles::default(),
            Orientation::Vertical,
            FuzzyDelegate::new(vec![]),
        );
        (model, None)
    }

    /// Dispatches one message.
    ///
    /// Window size messages resolve the placement and lay out the label
    /// pool; the first one batches an activation alongside the initial
    /// selection notification so the search field takes focus as soon as
    /// the window exists. Activation and focus-gain
    /// refocus the search field unless the menu is closing; focus loss
    /// triggers a re-activation under the same condition, pinning the menu
    /// as an always-focused popup.
    ///
    /// Key presses resolve against the hotkey table first (every matching
    /// entry applied in table order, defaults and search suppressed), then
    /// against the built-in defaults: ←/↑ previous, →/↓ next, enter commit,
    /// esc cancel. Unclaimed messages fall through to the search field.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        // Window size first: nothing is on screen before the placement
        // resolves.
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::WindowSizeMsg>() {
            let first_layout = !self.lifecycle.visible();
            self.lifecycle
                .resolve(size_msg.width as u16, size_msg.height as u16);
            let cmd = self.relayout();
            if first_layout {
                return merge_cmds(cmd, Some(window::activate()));
            }
            return cmd;
        }

        if msg.downcast_ref::<window::ActivateMsg>().is_some()
            || msg.downcast_ref::<window::FocusGainedMsg>().is_some()
        {
            if self.lifecycle.should_refocus() {
                return self.search.focus();
            }
            return None;
        }

        if msg.downcast_ref::<window::FocusLostMsg>().is_some() {
            return self.lifecycle.on_focus_lost();
        }

        // The commit notification doubles as the delegate's cue when the
        // host loops it back through here.
        if msg.downcast_ref::<CommitMsg>().is_some() {
            if let Some(choice) = self.committed.clone() {
                return self.delegate.on_commit(&choice);
            }
            return None;
        }

        if let Some(mouse_msg) = msg.downcast_ref::<MouseMsg>() {
            let mouse_msg = *mouse_msg;
            return self.on_mouse(&mouse_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let actions: Vec<HotkeyAction> = self
                .hotkeys
                .iter()
                .filter(|hotkey| hotkey.matches(key_msg))
                .map(|hotkey| hotkey.action)
                .collect();
            if !actions.is_empty() {
                let mut cmds: Vec<Cmd> = Vec::new();
                for action in actions {
                    if let Some(applied) = self.apply_action(action) {
                        cmds.push(applied);
                    }
                }
                return match cmds.len() {
                    0 => None,
                    1 => cmds.pop(),
                    _ => Some(batch(cmds)),
                };
            }

            if self.keymap.previous.matches(key_msg) {
                return self.select_previous();
            } else if self.keymap.next.matches(key_msg) {
                return self.select_next();
            } else if self.keymap.commit.matches(key_msg) {
                return self.commit();
            } else if self.keymap.cancel.matches(key_msg) {
                return self.cancel();
            }
        }

        // Everything else, unclaimed keys, caret blinks, and paste results
        // included, belongs to the search field.
        self.forward_to_search(&msg)
    }

    /// Renders the window inside the chrome style, or nothing while it is
    /// hidden.
    fn view(&self) -> String {
        if !self.lifecycle.visible() {
            return String::new();
        }
        let body = match self.orientation {
            Orientation::Vertical => self.view_vertical(),
            Orientation::Horizontal => self.view_horizontal(),
        };
        let body = if self.show_help {
            let help_line = self.styles.help.clone().render(&self.help.view(self));
            format!("{}\n{}", body, help_line)
        } else {
            body
        };
        self.styles.window.clone().render(&body)
    }
}

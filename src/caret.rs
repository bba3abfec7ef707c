//! Blinking caret for the search field.
//!
//! The caret is a sub-component embedded in [`crate::search::Model`]; it never
//! runs as a standalone program. The owning model forwards messages to
//! [`Model::update`] and splices [`Model::view`] into its own output at the
//! edit position.
//!
//! Blinking is driven by timer messages. Each caret carries a unique id and a
//! monotonically increasing tag so that a stale timer, fired after the caret
//! was blurred and refocused, is ignored instead of toggling visibility out of
//! phase.
//!
//! # Examples
//!
//! ```rust
//! use passmenu_widgets::caret;
//!
//! let mut c = caret::new();
//! let _cmd = c.focus(); // schedules the first blink
//! c.set_glyph("a");
//! assert!(!c.view().is_empty());
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Each caret gets its own id so blink messages cannot cross wires when
// several search fields are alive at once.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Message that asks a focused caret to start its blink cycle.
#[derive(Debug, Clone)]
pub struct InitialBlinkMsg;

/// Message that toggles caret visibility for one blink phase.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Id of the caret this message is addressed to.
    pub id: usize,
    /// Tag the caret expected when the timer was scheduled.
    pub tag: usize,
}

/// Caret display behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Toggle visibility on a timer.
    #[default]
    Blink,
    /// Always visible.
    Static,
    /// Never visible.
    Hide,
}

/// The caret model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between visibility toggles in [`Mode::Blink`].
    pub blink_speed: Duration,
    /// Style applied while the caret block is shown.
    pub style: Style,
    /// Style applied to the glyph while the caret block is off.
    pub text_style: Style,

    glyph: String,
    id: usize,
    focus: bool,
    off: bool,
    blink_tag: usize,
    mode: Mode,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            glyph: " ".to_string(),
            id: next_id(),
            focus: false,
            off: true,
            blink_tag: 0,
            mode: Mode::Blink,
        }
    }
}

impl Model {
    /// Creates a caret with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles blink messages. Returns the command scheduling the next
    /// toggle, if any.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if msg.downcast_ref::<InitialBlinkMsg>().is_some() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            return self.blink_cmd();
        }

        if let Some(blink) = msg.downcast_ref::<BlinkMsg>() {
            if self.mode != Mode::Blink || !self.focus {
                return None;
            }
            // Stale timer from before a blur/refocus cycle.
            if blink.id != self.id || blink.tag != self.blink_tag {
                return None;
            }

            self.off = !self.off;
            return self.blink_cmd();
        }

        None
    }

    /// Returns the caret's mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Sets the caret's mode, returning the command that restarts blinking
    /// when switching to [`Mode::Blink`].
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.off = mode == Mode::Hide || !self.focus;
        if mode == Mode::Blink {
            return Some(blink());
        }
        None
    }

    fn blink_cmd(&mut self) -> Option<Cmd> {
        if self.mode != Mode::Blink {
            return None;
        }

        self.blink_tag += 1;
        let tag = self.blink_tag;
        let id = self.id;
        let speed = self.blink_speed;

        Some(tick(speed, move |_| Box::new(BlinkMsg { id, tag }) as Msg))
    }

    /// Focuses the caret. In blink mode this schedules the first toggle.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.off = self.mode == Mode::Hide;
        if self.mode == Mode::Blink {
            return self.blink_cmd();
        }
        None
    }

    /// Blurs the caret, hiding the block until the next focus.
    pub fn blur(&mut self) {
        self.focus = false;
        self.off = true;
    }

    /// Returns whether the caret is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Sets the glyph shown under the caret.
    pub fn set_glyph(&mut self, s: &str) {
        self.glyph = s.to_string();
    }

    /// Renders the caret, or the plain glyph while the block is off.
    pub fn view(&self) -> String {
        if self.mode == Mode::Hide || self.off {
            return self.text_style.clone().inline(true).render(&self.glyph);
        }
        self.style
            .clone()
            .inline(true)
            .reverse(true)
            .render(&self.glyph)
    }
}

/// A command that kicks off caret blinking.
pub fn blink() -> Cmd {
    tick(Duration::from_millis(0), |_| {
        Box::new(InitialBlinkMsg) as Msg
    })
}

/// Creates a caret with default settings. Equivalent to `Model::new()`.
pub fn new() -> Model {
    Model::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_cmd_bumps_tag_each_schedule() {
        let mut c = Model::new();
        c.focus = true;
        c.mode = Mode::Blink;

        let _cmd1 = c.blink_cmd().expect("first blink cmd");
        let first_tag = c.blink_tag;
        let _cmd2 = c.blink_cmd().expect("second blink cmd");

        // Each scheduled toggle invalidates the previous timer's tag, so a
        // late delivery of the first message would be dropped by update().
        assert_ne!(first_tag, c.blink_tag);
    }

    #[test]
    fn test_stale_blink_msg_is_ignored() {
        let mut c = Model::new();
        let _ = c.focus();
        let stale = BlinkMsg {
            id: c.id,
            tag: c.blink_tag + 7,
        };
        let before = c.off;
        let cmd = c.update(&(Box::new(stale) as Msg));
        assert!(cmd.is_none());
        assert_eq!(before, c.off);
    }

    #[test]
    fn test_current_blink_msg_toggles_visibility() {
        let mut c = Model::new();
        let _ = c.focus();
        let current = BlinkMsg {
            id: c.id,
            tag: c.blink_tag,
        };
        let before = c.off;
        let cmd = c.update(&(Box::new(current) as Msg));
        assert!(cmd.is_some());
        assert_ne!(before, c.off);
    }

    #[test]
    fn test_blur_hides_block() {
        let mut c = Model::new();
        let _ = c.focus();
        c.blur();
        assert!(!c.focused());
        assert!(c.off);
    }

    #[test]
    fn test_hidden_mode_renders_plain_glyph() {
        let mut c = Model::new();
        c.set_glyph("x");
        let _ = c.set_mode(Mode::Hide);
        assert_eq!(c.view(), "x");
    }
}

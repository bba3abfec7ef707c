//! Popup window lifecycle: placement, visibility and focus pinning.
//!
//! The menu behaves like a modal popup. It is constructed hidden with a
//! caller-supplied target rectangle; on the first [`bubbletea_rs::WindowSizeMsg`]
//! the rectangle is resolved against the real terminal bounds and the menu
//! becomes visible. From then on the controller keeps keyboard focus pinned:
//! whenever the host reports a focus loss, it answers with a command that
//! re-activates the menu, until a commit or cancel marks the window as
//! closing. The closing flag short-circuits every refocus path so teardown
//! cannot loop back into activation.
//!
//! Terminal focus events arrive at the host through crossterm's
//! `FocusGained`/`FocusLost`; hosts that receive them forward the crate-level
//! [`FocusGainedMsg`]/[`FocusLostMsg`] wrappers into the menu's update.

use bubbletea_rs::{tick, Cmd, Msg};
use std::time::Duration;

/// A rectangle in terminal cells, used both for the caller's requested
/// placement and for the resolved local placement.
///
/// The resolved placement is where the host is expected to draw the menu's
/// view: its top-left cell at `(x, y)`. Mouse hit-testing maps terminal
/// coordinates to labels under that assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    /// Column of the top-left corner.
    pub x: u16,
    /// Row of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl ScreenRect {
    /// Creates a rectangle.
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Layout direction of the option labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// One option per row, dmenu's vertical list.
    #[default]
    Vertical,
    /// Options side by side in a single row, dmenu's classic bar.
    Horizontal,
}

/// Message asking the host to re-activate the menu window.
///
/// Emitted by [`Lifecycle::on_focus_lost`] while the menu is visible and not
/// closing. The menu handles it by refocusing its search field; hosts that
/// manage real OS windows can additionally raise the window.
#[derive(Debug, Clone)]
pub struct ActivateMsg;

/// Host-forwarded wrapper for a terminal focus-gained event.
#[derive(Debug, Clone)]
pub struct FocusGainedMsg;

/// Host-forwarded wrapper for a terminal focus-lost event.
#[derive(Debug, Clone)]
pub struct FocusLostMsg;

/// A command that emits [`ActivateMsg`] on the next tick.
pub fn activate() -> Cmd {
    tick(Duration::from_nanos(1), |_| Box::new(ActivateMsg) as Msg)
}

/// Focus and placement state of the popup.
///
/// # Examples
///
/// ```rust
/// use passmenu_widgets::window::{Lifecycle, ScreenRect};
///
/// let mut lc = Lifecycle::new(ScreenRect::new(10, 2, 40, 8));
/// assert!(!lc.visible());
///
/// let local = lc.resolve(80, 24);
/// assert!(lc.visible());
/// assert_eq!(local.width, 40);
///
/// // Focus losses are answered with a reactivation command...
/// assert!(lc.on_focus_lost().is_some());
///
/// // ...until the window starts closing.
/// lc.begin_close();
/// assert!(lc.on_focus_lost().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Lifecycle {
    target: ScreenRect,
    local: Option<ScreenRect>,
    visible: bool,
    closing: bool,
}

impl Lifecycle {
    /// Creates a hidden controller for the given target rectangle.
    pub fn new(target: ScreenRect) -> Self {
        Self {
            target,
            local: None,
            visible: false,
            closing: false,
        }
    }

    /// Resolves the target rectangle against the terminal bounds and shows
    /// the window. Called on the first window-size message; later calls
    /// re-clamp after a resize.
    ///
    /// The rectangle is clamped so it lies fully inside `0..term_width` by
    /// `0..term_height`, shrinking it when the terminal is smaller than the
    /// request.
    pub fn resolve(&mut self, term_width: u16, term_height: u16) -> ScreenRect {
        let width = self.target.width.min(term_width);
        let height = self.target.height.min(term_height);
        let x = self.target.x.min(term_width.saturating_sub(width));
        let y = self.target.y.min(term_height.saturating_sub(height));
        let local = ScreenRect::new(x, y, width, height);
        self.local = Some(local);
        self.visible = true;
        local
    }

    /// Returns the resolved placement, if the window has been shown.
    pub fn placement(&self) -> Option<ScreenRect> {
        self.local
    }

    /// Returns the caller's requested rectangle.
    pub fn target(&self) -> ScreenRect {
        self.target
    }

    /// Returns whether the window has been shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Returns whether a commit or cancel has started teardown.
    pub fn closing(&self) -> bool {
        self.closing
    }

    /// Marks the window as closing. All later focus handling becomes a no-op.
    pub fn begin_close(&mut self) {
        self.closing = true;
    }

    /// Reports whether an activation should pin focus back onto the search
    /// field. False once closing has begun.
    pub fn should_refocus(&self) -> bool {
        self.visible && !self.closing
    }

    /// Handles a focus loss: while visible and not closing, returns the
    /// command that re-activates the menu. During teardown returns `None`,
    /// which is what breaks the reactivation loop.
    pub fn on_focus_lost(&self) -> Option<Cmd> {
        if self.should_refocus() {
            Some(activate())
        } else {
            None
        }
    }
}

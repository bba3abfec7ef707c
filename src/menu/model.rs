//! Main model struct and state management for the menu.
//!
//! The model owns the full option list, the fixed label pool that windows it,
//! the scroll and selection state, the embedded search field, and the window
//! lifecycle controller. All mutation happens synchronously inside `update`;
//! commands returned from here only emit notification messages back into the
//! host's loop.

use super::hotkeys::Hotkey;
use super::keys::MenuKeyMap;
use super::slots::{self, LabelSlot};
use super::style::MenuStyles;
use crate::filter::MenuDelegate;
use crate::window::{Lifecycle, Orientation, ScreenRect};
use crate::{help, search};
use bubbletea_rs::Cmd;
use unicode_width::UnicodeWidthStr;

/// A popup selector over an ordered list of option strings.
///
/// The menu shows a search field plus a window of option labels, tracks one
/// highlighted label, and resolves key presses through a configurable hotkey
/// table before falling back to built-in defaults and finally to the search
/// field. Committing or cancelling flags the window as closing and notifies
/// the host.
///
/// The option list is replaced wholesale, never edited in place: typing in
/// the search field runs the delegate's `on_search_changed` hook and pushes
/// the returned list through [`replace_options`](Model::replace_options).
///
/// # Examples
///
/// ```
/// use passmenu_widgets::filter::FuzzyDelegate;
/// use passmenu_widgets::menu::{self, MenuStyles};
/// use passmenu_widgets::window::{Orientation, ScreenRect};
///
/// let delegate = FuzzyDelegate::new(vec![
///     "bank/checking".to_string(),
///     "mail/work".to_string(),
/// ]);
/// let menu = menu::Model::new(
///     ScreenRect::new(4, 2, 40, 10),
///     MenuStyles::default(),
///     Orientation::Vertical,
///     delegate,
/// );
/// assert_eq!(menu.options().len(), 2);
/// assert!(menu.committed_selection().is_none());
/// ```
pub struct Model {
    // Options and the window over them
    pub(super) options: Vec<String>,
    pub(super) slots: Vec<LabelSlot>,
    pub(super) scroll_offset: usize,
    /// Index of the highlighted slot, `None` before layout or when empty.
    pub(super) selected: Option<usize>,

    // Configuration
    pub(super) orientation: Orientation,
    pub(super) styles: MenuStyles,
    pub(super) hotkeys: Vec<Hotkey>,
    pub(super) keymap: MenuKeyMap,

    // Collaborators
    pub(super) lifecycle: Lifecycle,
    pub(super) search: search::Model,
    pub(super) delegate: Box<dyn MenuDelegate + Send + Sync>,
    pub(super) help: help::Model,
    pub(super) show_help: bool,

    // Outcome
    pub(super) committed: Option<String>,
}

impl Model {
    /// Creates a menu over `rect` with the given styles and orientation.
    ///
    /// The delegate is queried once with the empty string to produce the
    /// initial option list. The window starts hidden; it becomes visible and
    /// lays out its label slots on the first window size message.
    pub fn new<D>(
        rect: ScreenRect,
        styles: MenuStyles,
        orientation: Orientation,
        delegate: D,
    ) -> Self
    where
        D: MenuDelegate + Send + Sync + 'static,
    {
        let mut delegate = delegate;
        let options = delegate.on_search_changed("");

        let mut search = search::new();
        search.prompt_style = styles.search_prompt.clone();
        search.text_style = styles.search_text.clone();
        search.placeholder_style = styles.placeholder.clone();
        search.caret.style = styles.caret.clone();

        Self {
            options,
            slots: Vec::new(),
            scroll_offset: 0,
            selected: None,
            orientation,
            styles,
            hotkeys: Vec::new(),
            keymap: MenuKeyMap::default(),
            lifecycle: Lifecycle::new(rect),
            search,
            delegate: Box::new(delegate),
            help: help::Model::new(),
            show_help: false,
            committed: None,
        }
    }

    /// Replaces the whole option list and redraws the window from the top.
    ///
    /// The scroll offset resets to zero, the first `slot_count` options are
    /// bound in order, trailing slots are hidden, and the first visible slot
    /// becomes selected. An empty list leaves nothing selected. Passing an
    /// equal list is idempotent.
    ///
    /// Returns the selection-changed command for the newly highlighted
    /// option, or `None` when the list is empty or the window has no slots
    /// yet.
    ///
    /// # Examples
    ///
    /// ```
    /// # use passmenu_widgets::filter::FuzzyDelegate;
    /// # use passmenu_widgets::menu::{self, MenuStyles};
    /// # use passmenu_widgets::window::{Orientation, ScreenRect};
    /// let mut menu = menu::Model::new(
    ///     ScreenRect::new(0, 0, 40, 10),
    ///     MenuStyles::default(),
    ///     Orientation::Vertical,
    ///     FuzzyDelegate::new(vec![]),
    /// );
    /// menu.replace_options(vec!["bank/checking".to_string()]);
    /// assert_eq!(menu.options(), ["bank/checking".to_string()]);
    /// // No slots exist before the first window size message.
    /// assert!(menu.selected_slot().is_none());
    /// ```
    pub fn replace_options(&mut self, options: Vec<String>) -> Option<Cmd> {
        self.options = options;
        self.scroll_offset = 0;
        self.selected = None;
        for slot in &mut self.slots {
            slot.selected = false;
        }
        self.redraw_window();
        self.select_first()
    }

    /// Window extents inside the chrome frame.
    ///
    /// The window style's border, padding, and margin all consume placement
    /// cells; what remains is where the search line and the labels go.
    pub(super) fn interior(&self) -> Option<(u16, u16)> {
        let placement = self.lifecycle.placement()?;
        let frame_cols = self.styles.window.get_horizontal_frame_size().max(0) as u16;
        let frame_rows = self.styles.window.get_vertical_frame_size().max(0) as u16;
        Some((
            placement.width.saturating_sub(frame_cols),
            placement.height.saturating_sub(frame_rows),
        ))
    }

    /// Recomputes the slot layout against the resolved window placement.
    ///
    /// The chrome frame is subtracted from the placement first. Vertical
    /// menus divide the remaining rows below the search line by
    /// `label_height`; horizontal menus divide the columns right of the
    /// search box by `label_width`. The pool is reallocated at the new size
    /// and the window restarts at the top of the option list.
    pub(super) fn relayout(&mut self) -> Option<Cmd> {
        let (width, height) = match self.interior() {
            Some(extents) => extents,
            None => return None,
        };

        let prompt_width = self.search.prompt.width();
        let count = match self.orientation {
            Orientation::Vertical => {
                self.search
                    .set_width((width as usize).saturating_sub(prompt_width));
                let rows = height.saturating_sub(1);
                slots::slot_count(rows, self.styles.label_height as u16)
            }
            Orientation::Horizontal => {
                self.search
                    .set_width(self.styles.search_width.saturating_sub(prompt_width));
                let cols = width.saturating_sub(self.styles.search_width as u16);
                slots::slot_count(cols, self.styles.label_width as u16)
            }
        };

        self.allocate_slots(count);
        self.scroll_offset = 0;
        self.selected = None;
        self.redraw_window();
        self.select_first()
    }

    /// Commits the highlighted option.
    ///
    /// Stores the choice, flags the window as closing, and returns the
    /// commit notification command. With nothing selected (empty list) this
    /// is a silent no-op, as is committing while already closing.
    pub fn commit(&mut self) -> Option<Cmd> {
        if self.lifecycle.closing() {
            return None;
        }
        let choice = match self.selected_text() {
            Some(text) => text.to_string(),
            None => return None,
        };
        self.committed = Some(choice);
        self.lifecycle.begin_close();
        self.search.blur();
        Some(super::commit_notification())
    }

    /// Closes the menu without committing.
    ///
    /// Flags the window as closing, which also stops the lifecycle
    /// controller from re-activating on focus loss, and returns the
    /// cancellation notification command.
    pub fn cancel(&mut self) -> Option<Cmd> {
        if self.lifecycle.closing() {
            return None;
        }
        self.lifecycle.begin_close();
        self.search.blur();
        Some(super::cancel_notification())
    }

    /// Returns the full option list.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns the label pool.
    pub fn slots(&self) -> &[LabelSlot] {
        &self.slots
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns whether the option list is empty.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns the index into the option list of the first bound slot.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Returns the index of the highlighted slot, if any.
    pub fn selected_slot(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the text of the highlighted option, if any.
    pub fn selected_text(&self) -> Option<&str> {
        let index = self.selected?;
        self.slots.get(index)?.content()
    }

    /// Returns the committed choice after a commit, `None` before one and
    /// after a cancellation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use passmenu_widgets::filter::FuzzyDelegate;
    /// # use passmenu_widgets::menu::{self, MenuStyles};
    /// # use passmenu_widgets::window::{Orientation, ScreenRect};
    /// let menu = menu::Model::new(
    ///     ScreenRect::new(0, 0, 40, 10),
    ///     MenuStyles::default(),
    ///     Orientation::Vertical,
    ///     FuzzyDelegate::new(vec!["mail/work".to_string()]),
    /// );
    /// assert!(menu.committed_selection().is_none());
    /// ```
    pub fn committed_selection(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    /// Returns the current search text.
    pub fn search_value(&self) -> String {
        self.search.value()
    }

    /// Sets the placeholder shown while the search field is empty.
    pub fn set_placeholder(&mut self, text: &str) {
        self.search.set_placeholder(text);
    }

    /// Replaces the hotkey table.
    ///
    /// Entries are evaluated in order on every key press; see
    /// [`Hotkey`](super::Hotkey) for the matching rules.
    pub fn set_hotkeys(&mut self, hotkeys: Vec<Hotkey>) {
        self.hotkeys = hotkeys;
    }

    /// Returns the hotkey table.
    pub fn hotkeys(&self) -> &[Hotkey] {
        &self.hotkeys
    }

    /// Shows or hides the help line under the menu.
    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
    }

    /// Returns the menu orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns whether the window has been laid out and is on screen.
    pub fn visible(&self) -> bool {
        self.lifecycle.visible()
    }

    /// Returns whether the window is tearing down after commit or cancel.
    pub fn closing(&self) -> bool {
        self.lifecycle.closing()
    }
}

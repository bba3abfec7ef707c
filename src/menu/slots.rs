//! Fixed label pool backing the option window.
//!
//! A menu never creates one label per option. At layout time it allocates as
//! many [`LabelSlot`]s as fit the window and from then on only rebinds their
//! contents: scrolling and option replacement write new text into the same
//! slots, and slots past the end of a short option list are hidden rather
//! than dropped. The pool is reallocated only when the window itself is laid
//! out again.

use super::Model;

/// One reusable label in the window.
///
/// A slot is `visible` while it carries an option and hidden otherwise; the
/// `selected` flag marks the single highlighted slot. Binding and clearing
/// deliberately leave `selected` alone so that a scroll can move new content
/// underneath a fixed highlight.
#[derive(Debug, Clone, Default)]
pub struct LabelSlot {
    pub(super) content: Option<String>,
    pub(super) visible: bool,
    pub(super) selected: bool,
}

impl LabelSlot {
    pub(super) fn empty() -> Self {
        Self::default()
    }

    /// Returns the bound option text, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns whether the slot currently shows an option.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Returns whether the slot is the highlighted one.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Binds `text` to the slot and shows it. The selection flag is untouched.
    pub(super) fn bind(&mut self, text: &str) {
        self.content = Some(text.to_string());
        self.visible = true;
    }

    /// Hides the slot and drops its content. The selection flag is untouched.
    pub(super) fn clear(&mut self) {
        self.content = None;
        self.visible = false;
    }
}

/// Computes how many whole labels fit the given extent.
///
/// Floor division: a partially clipped trailing label is never created, so
/// the rendered extent shrinks to `slot_count * label_extent`. A viewport
/// smaller than one label yields an empty pool.
pub(super) fn slot_count(viewport_extent: u16, label_extent: u16) -> usize {
    if label_extent == 0 {
        return 0;
    }
    (viewport_extent / label_extent) as usize
}

impl Model {
    /// Replaces the pool with `count` empty slots.
    ///
    /// Called from layout only; everything else reuses the existing slots.
    pub(super) fn allocate_slots(&mut self, count: usize) {
        self.slots = vec![LabelSlot::empty(); count];
    }

    /// Rebinds every slot to the option window starting at `scroll_offset`.
    ///
    /// Neither `scroll_offset` nor the selection is touched: after a scroll
    /// the highlighted slot index stays fixed while its content changes.
    /// Slots past the end of the option list are hidden.
    pub(super) fn redraw_window(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            match self.options.get(self.scroll_offset + i) {
                Some(text) => slot.bind(text),
                None => slot.clear(),
            }
        }
    }
}

//! Selection movement and the edge-scroll policy.
//!
//! Movement is two-phase. A request first checks whether it would cross the
//! scroll boundary at the window edge; if it would, and more options exist in
//! that direction, the window scrolls by one option and the highlight keeps
//! its slot index while the content shifts underneath. Otherwise the
//! highlight moves to the nearest visible slot in that direction, found by an
//! iterative scan that skips hidden slots. Requests with nowhere to go are
//! silent no-ops.

use super::{Model, SelectionChangedMsg};
use bubbletea_rs::{tick, Cmd, Msg};
use std::time::Duration;

/// Distance from the window edge at which movement starts scrolling instead
/// of changing slots. Zero: scrolling begins exactly at the edge.
pub(super) const SCROLL_BOUNDARY: usize = 0;

impl Model {
    /// Selects the first visible label.
    ///
    /// Succeeds whenever at least one slot is visible; returns the
    /// selection-changed command for the newly highlighted option.
    pub fn select_first(&mut self) -> Option<Cmd> {
        let index = self.first_visible()?;
        self.select_slot(index)
    }

    /// Selects the last visible label.
    pub fn select_last(&mut self) -> Option<Cmd> {
        let index = self.last_visible()?;
        self.select_slot(index)
    }

    /// Moves the highlight one option towards the end of the list.
    ///
    /// At the window edge with more options below, the window scrolls by one
    /// and the highlighted slot index stays fixed; otherwise the highlight
    /// moves to the nearest visible slot below. With no option in that
    /// direction this is a silent no-op.
    pub fn select_next(&mut self) -> Option<Cmd> {
        let current = self.selected?;
        let at_boundary = current + 1 + SCROLL_BOUNDARY >= self.slots.len();
        let more_below = self.scroll_offset + self.slots.len() < self.options.len();
        if at_boundary && more_below {
            self.scroll_offset += 1;
            self.redraw_window();
            return self.selection_changed();
        }
        let index = self.next_visible(current)?;
        self.select_slot(index)
    }

    /// Moves the highlight one option towards the start of the list.
    ///
    /// The mirror of [`select_next`](Model::select_next): at the window edge
    /// with options above, the window scrolls back by one and the highlight
    /// keeps its slot; at `scroll_offset == 0` movement is plain slot
    /// movement and stops at the first option.
    pub fn select_previous(&mut self) -> Option<Cmd> {
        let current = self.selected?;
        let at_boundary = current <= SCROLL_BOUNDARY;
        if at_boundary && self.scroll_offset > 0 {
            self.scroll_offset -= 1;
            self.redraw_window();
            return self.selection_changed();
        }
        let index = self.previous_visible(current)?;
        self.select_slot(index)
    }

    /// Highlights the slot at `index`.
    ///
    /// Clears the previous highlight, marks the slot selected, and returns
    /// the selection-changed command. Hidden and out-of-range slots are
    /// refused.
    pub(super) fn select_slot(&mut self, index: usize) -> Option<Cmd> {
        match self.slots.get(index) {
            Some(slot) if slot.visible => {}
            _ => return None,
        }
        for slot in &mut self.slots {
            slot.selected = false;
        }
        self.slots[index].selected = true;
        self.selected = Some(index);
        self.selection_changed()
    }

    /// Command emitting [`SelectionChangedMsg`] with the highlighted text.
    fn selection_changed(&self) -> Option<Cmd> {
        let text = self.selected_text()?.to_string();
        Some(tick(Duration::from_nanos(1), move |_| {
            Box::new(SelectionChangedMsg(text.clone())) as Msg
        }))
    }

    fn first_visible(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.visible)
    }

    fn last_visible(&self) -> Option<usize> {
        self.slots.iter().rposition(|slot| slot.visible)
    }

    fn next_visible(&self, index: usize) -> Option<usize> {
        let mut candidate = index + 1;
        while candidate < self.slots.len() {
            if self.slots[candidate].visible {
                return Some(candidate);
            }
            candidate += 1;
        }
        None
    }

    fn previous_visible(&self, index: usize) -> Option<usize> {
        let mut candidate = index;
        while candidate > 0 {
            candidate -= 1;
            if self.slots[candidate].visible {
                return Some(candidate);
            }
        }
        None
    }
}

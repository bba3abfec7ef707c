//! View rendering and click hit-testing for the menu window.
//!
//! Vertical menus stack the search line on top of one row group per label
//! slot; horizontal menus place the search box and the labels on a single
//! row. Hidden slots render as blank space of the same extent so that the
//! window geometry, and with it click hit-testing, stays stable while the
//! option list shrinks and grows.

use super::slots::LabelSlot;
use super::Model;
use crate::window::Orientation;
use lipgloss_extras::lipgloss;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders the vertical layout: search line, then the label rows.
    pub(super) fn view_vertical(&self) -> String {
        let width = match self.interior() {
            Some((width, _)) => width as usize,
            None => return String::new(),
        };

        let mut lines = vec![self.search.view()];
        if self.options.is_empty() {
            lines.push(self.styles.no_options.clone().render("No matches."));
        } else {
            let label_height = self.styles.label_height.max(1);
            for slot in &self.slots {
                lines.push(self.render_label(slot, width));
                for _ in 1..label_height {
                    lines.push(String::new());
                }
            }
        }
        lines.join("\n")
    }

    /// Renders the horizontal layout: search box and labels on one row.
    pub(super) fn view_horizontal(&self) -> String {
        let label_width = self.styles.label_width.max(1);
        let mut parts = vec![self.search.view()];
        if self.options.is_empty() {
            parts.push(self.styles.no_options.clone().render(" No matches."));
        } else {
            for slot in &self.slots {
                parts.push(self.render_label(slot, label_width));
            }
        }
        parts.concat()
    }

    fn render_label(&self, slot: &LabelSlot, width: usize) -> String {
        match slot.content() {
            Some(text) if slot.selected() => self
                .styles
                .selected_option
                .clone()
                .render(&fit_width(text, width)),
            Some(text) => self.styles.option.clone().render(&fit_width(text, width)),
            None => " ".repeat(width),
        }
    }

    /// Maps a terminal cell to the label slot rendered there.
    ///
    /// Returns `None` for cells outside the window, on the chrome frame, on
    /// the search line or box, and over hidden slots.
    pub(super) fn slot_at(&self, column: u16, row: u16) -> Option<usize> {
        let placement = self.lifecycle.placement()?;
        if column < placement.x || row < placement.y {
            return None;
        }
        let chrome = &self.styles.window;
        let frame_left = (chrome.get_margin_left()
            + chrome.get_border_left_size()
            + chrome.get_padding_left())
        .max(0) as usize;
        let frame_top = (chrome.get_margin_top()
            + chrome.get_border_top_size()
            + chrome.get_padding_top())
        .max(0) as usize;
        let col = ((column - placement.x) as usize).checked_sub(frame_left)?;
        let row = ((row - placement.y) as usize).checked_sub(frame_top)?;
        let (width, height) = self.interior()?;
        if col >= width as usize || row >= height as usize {
            return None;
        }

        let index = match self.orientation {
            Orientation::Vertical => {
                // The top row is the search line.
                if row == 0 {
                    return None;
                }
                (row - 1) / self.styles.label_height.max(1)
            }
            Orientation::Horizontal => {
                if row != 0 {
                    return None;
                }
                let search_cols = lipgloss::width_visible(&self.search.view());
                if col < search_cols {
                    return None;
                }
                (col - search_cols) / self.styles.label_width.max(1)
            }
        };
        match self.slots.get(index) {
            Some(slot) if slot.visible() => Some(index),
            _ => None,
        }
    }
}

/// Truncates `text` to `width` display columns and pads the remainder with
/// spaces. Grapheme clusters are never split; a wide cluster that does not
/// fit is dropped entirely.
fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for cluster in text.graphemes(true) {
        let cluster_width = cluster.width();
        if used + cluster_width > width {
            break;
        }
        out.push_str(cluster);
        used += cluster_width;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_pads_short_text() {
        assert_eq!(fit_width("abc", 5), "abc  ");
        assert_eq!(fit_width("", 3), "   ");
    }

    #[test]
    fn test_fit_width_truncates_long_text() {
        assert_eq!(fit_width("abcdef", 4), "abcd");
    }

    #[test]
    fn test_fit_width_never_splits_wide_clusters() {
        // "世" is two columns wide; it cannot straddle the boundary.
        assert_eq!(fit_width("世界", 3), "世 ");
        assert_eq!(fit_width("a世", 2), "a ");
    }
}

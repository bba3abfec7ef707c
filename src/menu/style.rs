//! Styling for the menu window.
//!
//! `MenuStyles` collects the lipgloss styles for the three visual states of
//! the window (normal option labels, the selected label, and the search box)
//! plus the caret and the window chrome, along with the label extents the
//! slot layout divides by: `label_height` rows per label in vertical
//! orientation and `label_width` columns in horizontal orientation.
//!
//! The chrome style wraps the whole composed window; its frame (border,
//! padding, margin) is subtracted from the placement before the slot count
//! is computed, so a bordered menu holds fewer labels than a bare one of the
//! same placement.
//!
//! Colors default to adaptive light/dark pairs so the menu reads well on both
//! terminal backgrounds.
//!
//! # Examples
//!
//! ```rust
//! use passmenu_widgets::menu::MenuStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = MenuStyles::default();
//! styles.selected_option = Style::new()
//!     .background(Color::from("205"))
//!     .foreground(Color::from("230"));
//! ```

use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;

/// Adaptive gray shared by the de-emphasized elements.
static SUBDUED: Lazy<AdaptiveColor> = Lazy::new(|| AdaptiveColor {
    Light: "#9B9B9B",
    Dark: "#5C5C5C",
});

/// Adaptive near-foreground pair for normal option labels.
static OPTION_TEXT: Lazy<AdaptiveColor> = Lazy::new(|| AdaptiveColor {
    Light: "#1a1a1a",
    Dark: "#dddddd",
});

/// Visual configuration for a menu.
///
/// The style fields feed the renderer; the extent fields feed slot layout.
/// A label occupies `label_height` terminal rows when the menu is vertical
/// and `label_width` columns when it is horizontal, and the number of label
/// slots is the floor of the available extent divided by the label extent.
#[derive(Debug, Clone)]
pub struct MenuStyles {
    /// Style for option labels that are not selected.
    pub option: Style,
    /// Style for the selected option label.
    pub selected_option: Style,
    /// Style for the search prompt.
    pub search_prompt: Style,
    /// Style for the typed search text.
    pub search_text: Style,
    /// Style for the search placeholder text.
    pub placeholder: Style,
    /// Style for the search caret.
    pub caret: Style,
    /// Style for the notice shown when no option matches.
    pub no_options: Style,
    /// Style for the optional help line.
    pub help: Style,
    /// Chrome wrapped around the composed window: border, padding, margin.
    pub window: Style,
    /// Rows occupied by one label in vertical orientation.
    pub label_height: usize,
    /// Columns occupied by one label in horizontal orientation.
    pub label_width: usize,
    /// Columns reserved for the search box in horizontal orientation.
    pub search_width: usize,
}

impl Default for MenuStyles {
    fn default() -> Self {
        Self {
            option: Style::new().foreground(OPTION_TEXT.clone()),
            selected_option: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            search_text: Style::new(),
            placeholder: Style::new().foreground(SUBDUED.clone()),
            caret: Style::new().foreground(Color::from("#EE6FF8")),
            no_options: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help: Style::new().padding(1, 0, 0, 2),
            window: Style::new(),
            label_height: 1,
            label_width: 24,
            search_width: 16,
        }
    }
}

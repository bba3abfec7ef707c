//! Hint bar listing the active key bindings.
//!
//! Renders the bindings a [`crate::key::KeyMap`] exposes, either as a compact
//! single line (`enter commit • esc cancel • ...`) or as aligned columns when
//! `show_all` is set. The menu shows the compact form under the option list;
//! the full form exists for hosts that dedicate more room to it.
//!
//! # Examples
//!
//! ```rust
//! use passmenu_widgets::help;
//! use passmenu_widgets::key::{Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! struct Host {
//!     commit: Binding,
//!     cancel: Binding,
//! }
//!
//! impl KeyMap for Host {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.commit, &self.cancel]
//!     }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.commit], vec![&self.cancel]]
//!     }
//! }
//!
//! let host = Host {
//!     commit: Binding::new(vec![KeyCode::Enter]).with_help("enter", "commit"),
//!     cancel: Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
//! };
//! let bar = help::Model::new();
//! assert!(!bar.view(&host).is_empty());
//! ```

use crate::key::{self, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the hint bar.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the truncation ellipsis.
    pub ellipsis: Style,
    /// Style for key labels in the compact view.
    pub short_key: Style,
    /// Style for descriptions in the compact view.
    pub short_desc: Style,
    /// Style for the separator between compact items.
    pub short_separator: Style,
    /// Style for key labels in the column view.
    pub full_key: Style,
    /// Style for descriptions in the column view.
    pub full_desc: Style,
    /// Style for the separator between columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// The hint bar model.
#[derive(Debug, Clone)]
pub struct Model {
    /// When `true`, renders the multi-column view instead of one line.
    pub show_all: bool,
    /// Maximum width in cells. 0 disables truncation.
    pub width: usize,
    /// Separator between compact items.
    pub short_separator: String,
    /// Separator between columns.
    pub full_separator: String,
    /// Marker appended when content is cut off.
    pub ellipsis: String,
    /// Visual styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a hint bar with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width (builder).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the bar for the given key map, picking the compact or column
    /// layout based on `show_all`.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings as one line, dropping items that do not fit.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        if bindings.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        for kb in bindings {
            if !kb.enabled() {
                continue;
            }

            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let key_part = self.styles.short_key.clone().inline(true).render(&help.key);
            let desc_part = self
                .styles
                .short_desc
                .clone()
                .inline(true)
                .render(&help.desc);
            let item = format!("{}{} {}", sep, key_part, desc_part);

            let item_width = lipgloss::width_visible(&item);
            if let Some(tail) = self.truncation_tail(total_width, item_width) {
                out.push_str(&tail);
                break;
            }

            total_width += item_width;
            out.push_str(&item);
        }
        out
    }

    /// Renders binding groups as aligned columns.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        if groups.is_empty() {
            return String::new();
        }

        let mut columns: Vec<String> = Vec::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        for group in &groups {
            if !should_render_column(group) {
                continue;
            }

            let rows: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    let key_part = self.styles.full_key.clone().inline(true).render(&help.key);
                    let desc_part =
                        self.styles.full_desc.clone().inline(true).render(&help.desc);
                    format!("{} {}", key_part, desc_part)
                })
                .collect();
            let column = rows.join("\n");

            let col_width = lipgloss::width_visible(&column);
            if let Some(tail) = self.truncation_tail(total_width, col_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }

            total_width += col_width;
            columns.push(column);
        }

        let mut parts: Vec<&str> = Vec::new();
        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(col.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    /// Returns `Some(tail)` when an item of `item_width` no longer fits; the
    /// tail is the styled ellipsis, or empty when even that would overflow.
    fn truncation_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width > 0 && total_width + item_width > self.width {
            let tail = format!(
                " {}",
                self.styles
                    .ellipsis
                    .clone()
                    .inline(true)
                    .render(&self.ellipsis)
            );
            if total_width + lipgloss::width_visible(&tail) < self.width {
                return Some(tail);
            }
            return Some(String::new());
        }
        None
    }
}

/// Reports whether a column holds at least one enabled binding.
pub fn should_render_column(bindings: &[&key::Binding]) -> bool {
    bindings.iter().any(|b| b.enabled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Binding;
    use crossterm::event::KeyCode;

    fn plain() -> Model {
        // Undecorated styles keep assertions free of escape codes.
        let style = Style::new();
        Model {
            styles: Styles {
                ellipsis: style.clone(),
                short_key: style.clone(),
                short_desc: style.clone(),
                short_separator: style.clone(),
                full_key: style.clone(),
                full_desc: style.clone(),
                full_separator: style,
            },
            ..Model::default()
        }
    }

    #[test]
    fn test_short_view_joins_with_separator() {
        let commit = Binding::new(vec![KeyCode::Enter]).with_help("enter", "commit");
        let cancel = Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel");
        let out = plain().short_help_view(vec![&commit, &cancel]);
        assert_eq!(out, "enter commit • esc cancel");
    }

    #[test]
    fn test_short_view_skips_disabled() {
        let commit = Binding::new(vec![KeyCode::Enter]).with_help("enter", "commit");
        let hidden = Binding::new(vec![KeyCode::Tab])
            .with_help("tab", "never shown")
            .with_disabled();
        let out = plain().short_help_view(vec![&hidden, &commit]);
        assert_eq!(out, "enter commit");
    }

    #[test]
    fn test_short_view_truncates_with_ellipsis() {
        let a = Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit");
        let b = Binding::new(vec![KeyCode::Char('?')]).with_help("?", "help");
        let out = plain().with_width(10).short_help_view(vec![&a, &b]);
        assert!(out.starts_with("q quit"));
        assert!(out.ends_with("…"));
    }

    #[test]
    fn test_full_view_drops_all_disabled_columns() {
        let on = Binding::new(vec![KeyCode::Enter]).with_help("enter", "commit");
        let off = Binding::new(vec![KeyCode::Tab]).with_disabled();
        let out = plain().full_help_view(vec![vec![&off], vec![&on]]);
        assert!(out.contains("enter commit"));
        assert!(!out.contains("tab"));
    }

    #[test]
    fn test_should_render_column() {
        let on = Binding::new(vec![KeyCode::Enter]);
        let off = Binding::new(vec![KeyCode::Tab]).with_disabled();
        assert!(should_render_column(&[&off, &on]));
        assert!(!should_render_column(&[&off]));
        assert!(!should_render_column(&[]));
    }
}

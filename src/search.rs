//! Single-line search field for narrowing the option list.
//!
//! The search field sits above the menu and feeds its query to the menu's
//! filter. It is a deliberately small line editor: one row, readline-style
//! movement and deletion, optional clipboard paste, and a blinking
//! [`crate::caret`]. Editing operates on grapheme clusters, so a multi
//! codepoint emoji is deleted by a single backspace.
//!
//! # Examples
//!
//! ```rust
//! use passmenu_widgets::search;
//!
//! let mut field = search::new();
//! field.set_placeholder("type to filter");
//! let _cmd = field.focus();
//! field.set_value("bank/");
//! assert_eq!(field.value(), "bank/");
//! assert_eq!(field.position(), 5);
//! ```

use crate::caret;
use crate::key::{new_binding, with_keys_str, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Message carrying clipboard text requested by the paste binding.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Message carrying a clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Key bindings for the search field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move one grapheme right.
    pub char_forward: Binding,
    /// Move one grapheme left.
    pub char_backward: Binding,
    /// Move to the start of the next word.
    pub word_forward: Binding,
    /// Move to the start of the previous word.
    pub word_backward: Binding,
    /// Delete the grapheme before the caret.
    pub delete_char_backward: Binding,
    /// Delete the word before the caret.
    pub delete_word_backward: Binding,
    /// Delete everything before the caret.
    pub delete_before_caret: Binding,
    /// Delete everything after the caret.
    pub delete_after_caret: Binding,
    /// Jump to the start of the line.
    pub line_start: Binding,
    /// Jump to the end of the line.
    pub line_end: Binding,
    /// Paste from the system clipboard.
    pub paste: Binding,
}

/// The default search field bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        char_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        char_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        word_forward: new_binding(vec![with_keys_str(&["alt+right", "alt+f"])]),
        word_backward: new_binding(vec![with_keys_str(&["alt+left", "alt+b"])]),
        delete_char_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_word_backward: new_binding(vec![with_keys_str(&["ctrl+w", "alt+backspace"])]),
        delete_before_caret: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        delete_after_caret: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        paste: new_binding(vec![with_keys_str(&["ctrl+v"])]),
    }
}

/// The search field model.
pub struct Model {
    /// Prompt rendered before the query, `"> "` by default.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the typed query.
    pub text_style: Style,
    /// Text shown while the query is empty.
    pub placeholder: String,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// The embedded caret.
    pub caret: caret::Model,
    /// Visible width in display cells. 0 disables horizontal scrolling.
    pub width: usize,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Clipboard error from the most recent failed paste.
    pub err: Option<String>,

    clusters: Vec<String>,
    pos: usize,
    offset: usize,
    focus: bool,
}

/// Creates a search field with default settings.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        caret: caret::new(),
        width: 0,
        key_map: default_key_map(),
        err: None,
        clusters: Vec::new(),
        pos: 0,
        offset: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Returns the current query.
    pub fn value(&self) -> String {
        self.clusters.concat()
    }

    /// Replaces the query, leaving the caret at the end.
    pub fn set_value(&mut self, s: &str) {
        self.clusters = s.graphemes(true).map(String::from).collect();
        self.pos = self.clusters.len();
        self.clamp_offset();
    }

    /// Clears the query and moves the caret to the start.
    pub fn reset(&mut self) {
        self.clusters.clear();
        self.pos = 0;
        self.offset = 0;
    }

    /// Returns the caret position as a grapheme index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the caret, clamping to the query length.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.clusters.len());
        self.clamp_offset();
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the visible width in display cells. 0 disables scrolling.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.clamp_offset();
    }

    /// Focuses the field and starts the caret blinking.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.caret.focus()
    }

    /// Blurs the field.
    pub fn blur(&mut self) {
        self.focus = false;
        self.caret.blur();
    }

    /// Returns whether the field has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Handles one message. Unfocused fields ignore everything.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.key_map.paste.matches(key_msg) {
                return Some(paste());
            }
            self.handle_editing_keys(key_msg);
            self.handle_char_input(key_msg);
            self.clamp_offset();
        }

        if let Some(pasted) = msg.downcast_ref::<PasteMsg>() {
            self.insert_str(&pasted.0);
            self.clamp_offset();
        }
        if let Some(err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(err.0.clone());
        }

        self.caret.update(msg)
    }

    fn handle_editing_keys(&mut self, key_msg: &KeyMsg) {
        let km = self.key_map.clone();
        if km.char_backward.matches(key_msg) {
            self.pos = self.pos.saturating_sub(1);
        } else if km.char_forward.matches(key_msg) {
            self.pos = (self.pos + 1).min(self.clusters.len());
        } else if km.word_backward.matches(key_msg) {
            self.pos = self.prev_word_boundary();
        } else if km.word_forward.matches(key_msg) {
            self.pos = self.next_word_boundary();
        } else if km.delete_char_backward.matches(key_msg) {
            if self.pos > 0 {
                self.clusters.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if km.delete_word_backward.matches(key_msg) {
            let start = self.prev_word_boundary();
            self.clusters.drain(start..self.pos);
            self.pos = start;
        } else if km.delete_before_caret.matches(key_msg) {
            self.clusters.drain(..self.pos);
            self.pos = 0;
        } else if km.delete_after_caret.matches(key_msg) {
            self.clusters.truncate(self.pos);
        } else if km.line_start.matches(key_msg) {
            self.pos = 0;
        } else if km.line_end.matches(key_msg) {
            self.pos = self.clusters.len();
        }
    }

    fn handle_char_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            // Shift is fine, it is already encoded in the character's case.
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_str(&ch.to_string());
            }
        }
    }

    /// Splices text in at the caret and re-segments, so combining marks
    /// typed after their base merge into one cluster.
    fn insert_str(&mut self, s: &str) {
        let head: String = self.clusters[..self.pos].concat();
        let tail: String = self.clusters[self.pos..].concat();
        let merged = format!("{}{}{}", head, s, tail);
        let new_pos = format!("{}{}", head, s).graphemes(true).count();
        self.clusters = merged.graphemes(true).map(String::from).collect();
        self.pos = new_pos.min(self.clusters.len());
    }

    fn prev_word_boundary(&self) -> usize {
        let mut i = self.pos;
        while i > 0 && is_blank(&self.clusters[i - 1]) {
            i -= 1;
        }
        while i > 0 && !is_blank(&self.clusters[i - 1]) {
            i -= 1;
        }
        i
    }

    fn next_word_boundary(&self) -> usize {
        let mut i = self.pos;
        let n = self.clusters.len();
        while i < n && is_blank(&self.clusters[i]) {
            i += 1;
        }
        while i < n && !is_blank(&self.clusters[i]) {
            i += 1;
        }
        i
    }

    fn clamp_offset(&mut self) {
        if self.width == 0 || self.clusters.len() <= self.width {
            self.offset = 0;
            return;
        }
        if self.pos < self.offset {
            self.offset = self.pos;
        } else if self.pos >= self.offset + self.width {
            // One cell of the window is reserved for the caret itself.
            self.offset = self.pos + 1 - self.width;
        }
    }

    /// Renders the field: prompt, query window and caret, padded to width.
    pub fn view(&self) -> String {
        if self.clusters.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let end = if self.width > 0 {
            (self.offset + self.width).min(self.clusters.len())
        } else {
            self.clusters.len()
        };
        let visible = &self.clusters[self.offset..end];
        let pos = self.pos - self.offset;

        let mut v = String::new();
        v.push_str(&self.text_style.render(&visible[..pos.min(visible.len())].concat()));

        let mut car = self.caret.clone();
        let caret_at_end = pos >= visible.len();
        if caret_at_end {
            car.set_glyph(" ");
            v.push_str(&car.view());
        } else {
            car.set_glyph(&visible[pos]);
            v.push_str(&car.view());
            v.push_str(&self.text_style.render(&visible[pos + 1..].concat()));
        }

        if self.width > 0 {
            let used = visible.concat().width() + usize::from(caret_at_end);
            if used < self.width {
                v.push_str(&self.text_style.render(&" ".repeat(self.width - used)));
            }
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn placeholder_view(&self) -> String {
        let clusters: Vec<&str> = self.placeholder.graphemes(true).collect();
        // The window bounds the placeholder the same way it bounds the query.
        let visible = if self.width > 0 && clusters.len() > self.width {
            &clusters[..self.width]
        } else {
            &clusters[..]
        };

        let mut v = String::new();
        let mut car = self.caret.clone();
        car.set_glyph(visible.first().copied().unwrap_or(" "));
        v.push_str(&car.view());

        if visible.len() > 1 {
            v.push_str(&self.placeholder_style.render(&visible[1..].concat()));
        }

        if self.width > 0 {
            let used = visible.concat().width();
            if used < self.width {
                v.push_str(&self.placeholder_style.render(&" ".repeat(self.width - used)));
            }
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}

/// A command that reads the system clipboard and reports the result as a
/// [`PasteMsg`] or [`PasteErrMsg`].
pub fn paste() -> Cmd {
    use bubbletea_rs::tick;
    use std::time::Duration;
    tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("failed to open clipboard: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("clipboard support not enabled".to_string())) as Msg
        }
    })
}

fn is_blank(cluster: &str) -> bool {
    cluster.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(field: &mut Model, key: KeyCode, modifiers: KeyModifiers) {
        let msg: Msg = Box::new(KeyMsg { key, modifiers });
        let _ = field.update(&msg);
    }

    fn type_str(field: &mut Model, s: &str) {
        for ch in s.chars() {
            press(field, KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_typing_appends_at_caret() {
        let mut f = new();
        let _ = f.focus();
        type_str(&mut f, "email/work");
        assert_eq!(f.value(), "email/work");
        assert_eq!(f.position(), 10);
    }

    #[test]
    fn test_unfocused_field_ignores_input() {
        let mut f = new();
        type_str(&mut f, "abc");
        assert_eq!(f.value(), "");
    }

    #[test]
    fn test_backspace_removes_full_grapheme() {
        let mut f = new();
        let _ = f.focus();
        f.set_value("ab🇩🇪");
        press(&mut f, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(f.value(), "ab");
        press(&mut f, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(f.value(), "a");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut f = new();
        let _ = f.focus();
        f.set_value("acme");
        f.set_position(1);
        type_str(&mut f, "X");
        assert_eq!(f.value(), "aXcme");
        assert_eq!(f.position(), 2);
    }

    #[test]
    fn test_word_deletion() {
        let mut f = new();
        let _ = f.focus();
        f.set_value("two words");
        press(&mut f, KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(f.value(), "two ");
        press(&mut f, KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(f.value(), "");
    }

    #[test]
    fn test_kill_line_both_directions() {
        let mut f = new();
        let _ = f.focus();
        f.set_value("abcdef");
        f.set_position(3);
        press(&mut f, KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(f.value(), "abc");

        f.set_value("abcdef");
        f.set_position(3);
        press(&mut f, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(f.value(), "def");
        assert_eq!(f.position(), 0);
    }

    #[test]
    fn test_word_movement() {
        let mut f = new();
        let _ = f.focus();
        f.set_value("aa bb cc");
        press(&mut f, KeyCode::Left, KeyModifiers::ALT);
        assert_eq!(f.position(), 6);
        press(&mut f, KeyCode::Left, KeyModifiers::ALT);
        assert_eq!(f.position(), 3);
        f.set_position(0);
        press(&mut f, KeyCode::Right, KeyModifiers::ALT);
        assert_eq!(f.position(), 2);
    }

    #[test]
    fn test_offset_follows_caret_within_width() {
        let mut f = new();
        let _ = f.focus();
        f.set_width(4);
        f.set_value("0123456789");
        // Caret at end; window shows the tail.
        assert_eq!(f.offset, 7);
        f.set_position(0);
        assert_eq!(f.offset, 0);
    }

    #[test]
    fn test_paste_msg_inserts_text() {
        let mut f = new();
        let _ = f.focus();
        f.set_value("ab");
        let msg: Msg = Box::new(PasteMsg("XY".to_string()));
        let _ = f.update(&msg);
        assert_eq!(f.value(), "abXY");
    }

    #[test]
    fn test_paste_err_recorded() {
        let mut f = new();
        let _ = f.focus();
        let msg: Msg = Box::new(PasteErrMsg("nope".to_string()));
        let _ = f.update(&msg);
        assert_eq!(f.err.as_deref(), Some("nope"));
    }

    #[test]
    fn test_placeholder_view_used_when_empty() {
        let mut f = new();
        f.set_placeholder("filter...");
        let view = f.view();
        assert!(view.contains("ilter..."));
    }

    #[test]
    fn test_placeholder_clipped_to_field_width() {
        let mut f = new();
        f.set_width(5);
        f.set_placeholder("a very long placeholder");
        let plain = strip_ansi_escapes::strip_str(f.view());
        assert_eq!(plain, "> a ver");
    }
}

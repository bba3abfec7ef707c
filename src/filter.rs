//! Search delegates: mapping typed text to the option list.
//!
//! The menu never filters by itself. Each time the search text changes it
//! asks its [`MenuDelegate`] for a fresh full option list and redraws from
//! scratch. That keeps the menu a pure selection control and lets hosts back
//! it with whatever lookup they have: an in-memory entry list, a filesystem
//! scan, a remote query.
//!
//! [`FuzzyDelegate`] is the bundled implementation for the common case of a
//! fixed entry list, ranking matches with skim-style fuzzy scoring.

use bubbletea_rs::Cmd;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Host-side behavior of a menu: how typed text becomes options, and what
/// happens on commit.
///
/// Implementations replace the subclass hierarchy a retained-mode toolkit
/// would use: one trait object per selector variant.
///
/// # Examples
///
/// ```rust
/// use passmenu_widgets::filter::MenuDelegate;
///
/// /// Picks from a fixed command palette, prefix-matched.
/// struct CommandPalette {
///     commands: Vec<String>,
/// }
///
/// impl MenuDelegate for CommandPalette {
///     fn on_search_changed(&mut self, query: &str) -> Vec<String> {
///         self.commands
///             .iter()
///             .filter(|c| c.starts_with(query))
///             .cloned()
///             .collect()
///     }
/// }
/// ```
pub trait MenuDelegate {
    /// Maps the current search text to the full option list to display.
    ///
    /// Called with the empty string once at startup and again whenever the
    /// query changes. The returned list replaces the previous one wholesale.
    fn on_search_changed(&mut self, query: &str) -> Vec<String>;

    /// Reacts to the user committing `choice`. An optional command is fed
    /// back into the host's update loop.
    fn on_commit(&mut self, _choice: &str) -> Option<Cmd> {
        None
    }
}

/// A delegate over a fixed entry list, ranked by fuzzy match score.
///
/// An empty query yields all entries in their original order. A non-empty
/// query keeps only fuzzy matches, best score first; equal scores keep their
/// original relative order.
///
/// # Examples
///
/// ```rust
/// use passmenu_widgets::filter::{FuzzyDelegate, MenuDelegate};
///
/// let mut delegate = FuzzyDelegate::new(vec![
///     "email/work".to_string(),
///     "email/home".to_string(),
///     "bank/checking".to_string(),
/// ]);
///
/// assert_eq!(delegate.on_search_changed("").len(), 3);
/// assert_eq!(delegate.on_search_changed("bank"), vec!["bank/checking"]);
/// assert!(delegate.on_search_changed("zzz").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FuzzyDelegate {
    entries: Vec<String>,
}

impl FuzzyDelegate {
    /// Creates a delegate over the given entries.
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Replaces the entry list. Takes effect on the next search change.
    pub fn set_entries(&mut self, entries: Vec<String>) {
        self.entries = entries;
    }

    /// Returns the full entry list.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl MenuDelegate for FuzzyDelegate {
    fn on_search_changed(&mut self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return self.entries.clone();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, &String)> = self
            .entries
            .iter()
            .filter_map(|entry| matcher.fuzzy_match(entry, query).map(|score| (score, entry)))
            .collect();
        // Stable sort keeps the original order among equal scores.
        scored.sort_by_key(|(score, _)| std::cmp::Reverse(*score));
        scored.into_iter().map(|(_, entry)| entry.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delegate() -> FuzzyDelegate {
        FuzzyDelegate::new(vec![
            "email/work".to_string(),
            "email/home".to_string(),
            "bank/checking".to_string(),
            "bank/savings".to_string(),
        ])
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let mut d = delegate();
        let all = d.on_search_changed("");
        assert_eq!(all, d.entries());
    }

    #[test]
    fn test_query_narrows_to_matches() {
        let mut d = delegate();
        let hits = d.on_search_changed("bank");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|e| e.starts_with("bank/")));
    }

    #[test]
    fn test_no_match_is_empty() {
        let mut d = delegate();
        assert!(d.on_search_changed("qqq").is_empty());
    }

    #[test]
    fn test_consecutive_match_ranks_above_scattered() {
        let mut d = FuzzyDelegate::new(vec![
            "a-x-b-x-c".to_string(),
            "abc".to_string(),
        ]);
        let hits = d.on_search_changed("abc");
        assert_eq!(hits.first().map(String::as_str), Some("abc"));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_equal_scores_keep_original_order() {
        // Same length, same matched positions: identical scores.
        let mut d = FuzzyDelegate::new(vec![
            "note/aaaa".to_string(),
            "note/bbbb".to_string(),
        ]);
        let hits = d.on_search_changed("note/");
        assert_eq!(hits[0], "note/aaaa");
        assert_eq!(hits[1], "note/bbbb");
    }

    #[test]
    fn test_default_commit_hook_is_silent() {
        let mut d = delegate();
        assert!(d.on_commit("bank/checking").is_none());
    }
}

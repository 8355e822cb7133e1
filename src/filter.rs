// src/filter.rs
//! Novelty filter: the core change-detection step.
//!
//! Results arrive newest-first; everything before the stored cursor's entry
//! is new. A cursor that matches nothing (first run, or the cursor entry
//! fell off the visible result window) means the whole visible set is
//! treated as new — the two cases are deliberately indistinguishable here.

use crate::source::Entry;

/// Returns the new-entry prefix of `results` plus the cursor to persist.
///
/// The scan stops at the first entry whose id equals `cursor`; that entry
/// is not included. The new cursor is the id of the newest entry seen this
/// run, or `None` when nothing is new (the caller must then leave the
/// stored cursor untouched).
pub fn split_new(results: &[Entry], cursor: Option<&str>) -> (Vec<Entry>, Option<String>) {
    let mut new_entries = Vec::new();
    for e in results {
        if Some(e.id.as_str()) == cursor {
            break;
        }
        new_entries.push(e.clone());
    }
    let new_cursor = new_entries.first().map(|e| e.id.clone());
    (new_entries, new_cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> Entry {
        Entry {
            id: id.to_string(),
            title: format!("Question {id}"),
            date: "12 Aug 2026".to_string(),
            link: format!("https://www.oireachtas.ie/q/{id}"),
        }
    }

    #[test]
    fn newest_entry_matching_cursor_is_a_noop() {
        let results = vec![entry("Q103"), entry("Q102"), entry("Q101")];
        let (new_entries, new_cursor) = split_new(&results, Some("Q103"));
        assert!(new_entries.is_empty());
        assert_eq!(new_cursor, None);
    }

    #[test]
    fn absent_cursor_treats_everything_as_new() {
        let results = vec![entry("Q103"), entry("Q102"), entry("Q101")];
        let (new_entries, new_cursor) = split_new(&results, None);
        assert_eq!(new_entries, results);
        assert_eq!(new_cursor.as_deref(), Some("Q103"));
    }

    #[test]
    fn cursor_not_in_window_treats_everything_as_new() {
        let results = vec![entry("Q103"), entry("Q102"), entry("Q101")];
        let (new_entries, new_cursor) = split_new(&results, Some("Q042"));
        assert_eq!(new_entries, results);
        assert_eq!(new_cursor.as_deref(), Some("Q103"));
    }

    #[test]
    fn cursor_mid_window_yields_the_prefix_in_order() {
        let results = vec![entry("Q103"), entry("Q102"), entry("Q101"), entry("Q100")];
        let (new_entries, new_cursor) = split_new(&results, Some("Q101"));
        assert_eq!(new_entries, vec![entry("Q103"), entry("Q102")]);
        assert_eq!(new_cursor.as_deref(), Some("Q103"));
    }

    #[test]
    fn empty_results_yield_nothing_regardless_of_cursor() {
        let (new_entries, new_cursor) = split_new(&[], Some("Q100"));
        assert!(new_entries.is_empty());
        assert_eq!(new_cursor, None);

        let (new_entries, new_cursor) = split_new(&[], None);
        assert!(new_entries.is_empty());
        assert_eq!(new_cursor, None);
    }
}

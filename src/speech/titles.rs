//! Comics list post-processing
//!
//! Turns the raw upstream comics array into the deduplicated, sorted list
//! of titles worth speaking: regular issues only, cut after the issue
//! number, with ampersands rendered speakable.

use crate::schemas::shortboxed::Comic;
use regex::Regex;
use std::sync::LazyLock;

/// Everything up to and including the last issue number.
static ISSUE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*#[0-9]+").expect("issue number pattern"));

/// Produce the spoken title list for a comics array.
///
/// Drops reprints and non-issue entries, cuts variant/cover noise after the
/// issue number, then sorts alphabetically and removes duplicates (variants
/// of one issue collapse to a single spoken title).
pub fn spoken_titles(comics: &[Comic]) -> Vec<String> {
    let mut titles: Vec<String> = comics
        .iter()
        .filter_map(|comic| spoken_title(&comic.title))
        .collect();

    titles.sort();
    titles.dedup();
    titles
}

/// Spoken form of a single catalog title, or None if it is not a regular
/// issue (no issue number, additional printing, postcards).
fn spoken_title(title: &str) -> Option<String> {
    if title.contains(" PTG") || title.contains("POSTCARDS") {
        return None;
    }

    // Cutting after the issue number eliminates variants and special covers
    let issue = ISSUE_NUMBER.find(title)?.as_str();

    // '&' is not valid in SSML
    Some(issue.replace('&', "and"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comic(title: &str) -> Comic {
        serde_json::from_value(serde_json::json!({ "title": title })).unwrap()
    }

    #[test]
    fn test_cuts_after_issue_number() {
        let comics = [comic("SAGA #44 CVR B VARIANT")];
        assert_eq!(spoken_titles(&comics), vec!["SAGA #44"]);
    }

    #[test]
    fn test_greedy_match_keeps_last_issue_number() {
        let comics = [comic("BATMAN #25 2ND CHAPTER #2 OF 8")];
        assert_eq!(spoken_titles(&comics), vec!["BATMAN #25 2ND CHAPTER #2"]);
    }

    #[test]
    fn test_drops_entries_without_issue_number() {
        let comics = [comic("SAGA TP VOL 07"), comic("BATMAN #25")];
        assert_eq!(spoken_titles(&comics), vec!["BATMAN #25"]);
    }

    #[test]
    fn test_drops_additional_printings_and_postcards() {
        let comics = [
            comic("BATMAN #24 2ND PTG"),
            comic("DARK KNIGHT III POSTCARDS #1"),
            comic("SAGA #44"),
        ];
        assert_eq!(spoken_titles(&comics), vec!["SAGA #44"]);
    }

    #[test]
    fn test_replaces_every_ampersand() {
        let comics = [comic("BETTY & VERONICA & FRIENDS #3")];
        assert_eq!(spoken_titles(&comics), vec!["BETTY and VERONICA and FRIENDS #3"]);
    }

    #[test]
    fn test_sorts_and_dedupes_variants() {
        let comics = [
            comic("SAGA #44"),
            comic("BATMAN #25 CVR A"),
            comic("BATMAN #25 CVR B"),
        ];
        assert_eq!(spoken_titles(&comics), vec!["BATMAN #25", "SAGA #44"]);
    }

    #[test]
    fn test_hash_without_digits_is_skipped() {
        let comics = [comic("FCBD SPECIAL # PREVIEW")];
        assert!(spoken_titles(&comics).is_empty());
    }
}

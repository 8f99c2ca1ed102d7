//! Speech output module
//!
//! Canned response texts and the conversions between spoken forms and
//! catalog spellings. Everything produced here ends up inside SSML, so no
//! function in this module may emit a bare ampersand.

pub mod titles;

pub use titles::spoken_titles;

use chrono::NaiveDate;

pub const HELP_MESSAGE: &str = "You can say what comics release this week";
pub const HELP_REPROMPT: &str = "What can I help you with?";
pub const STOP_MESSAGE: &str = "Goodbye!";
pub const SORRY_MESSAGE: &str = "I am Sorry. I can not find what you are looking for.";
pub const NOT_FOUND_MESSAGE: &str = "No titles found.";
pub const INVALID_DATE_MESSAGE: &str = "I am Sorry. I can not search with that date.";

/// Rewrite a spoken publisher or title into its catalog spelling.
///
/// The catalog spells names like Drawn & Quarterly and Betty & Veronica
/// with an ampersand, which speech recognition delivers as "and". Only the
/// first occurrence is rewritten, matching how the names are spoken.
pub fn spoken_to_catalog(spoken: &str) -> String {
    spoken.replacen("and", "&", 1)
}

/// Format the final spoken comic list for a release date.
pub fn comic_list(date: NaiveDate, titles: &[String]) -> String {
    format!("For {}, {}", date.format("%Y-%m-%d"), titles.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spoken_to_catalog() {
        assert_eq!(spoken_to_catalog("drawn and quarterly"), "drawn & quarterly");
        assert_eq!(spoken_to_catalog("betty and veronica"), "betty & veronica");
        assert_eq!(spoken_to_catalog("marvel comics"), "marvel comics");
    }

    #[test]
    fn test_spoken_to_catalog_first_occurrence_only() {
        assert_eq!(
            spoken_to_catalog("cloak and dagger and friends"),
            "cloak & dagger and friends"
        );
    }

    #[test]
    fn test_comic_list_format() {
        let date = chrono::NaiveDate::from_ymd_opt(2017, 6, 14).unwrap();
        let titles = vec!["BATMAN #25".to_string(), "SAGA #44".to_string()];
        assert_eq!(
            comic_list(date, &titles),
            "For 2017-06-14, BATMAN #25, SAGA #44"
        );
    }

    #[test]
    fn test_canned_messages_are_ssml_safe() {
        for message in [
            HELP_MESSAGE,
            HELP_REPROMPT,
            STOP_MESSAGE,
            SORRY_MESSAGE,
            NOT_FOUND_MESSAGE,
            INVALID_DATE_MESSAGE,
        ] {
            assert!(!message.contains('&'), "bare ampersand in {:?}", message);
        }
    }
}

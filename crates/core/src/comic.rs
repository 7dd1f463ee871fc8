//! The internal comic shape served to clients.

use serde::{Deserialize, Serialize};

/// A single published comic.
///
/// Comics are never revised once published, so a value fetched for a given
/// `id` is treated as immutable for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comic {
    pub id: u32,
    pub title: String,
    pub img: String,
    pub alt: String,
    #[serde(default)]
    pub transcript: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub safe_title: String,
}

impl Comic {
    /// Case-sensitive substring match against the title or transcript.
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.transcript.contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comic(title: &str, transcript: &str) -> Comic {
        Comic {
            id: 1,
            title: title.into(),
            img: "https://imgs.xkcd.com/comics/barrel_cropped_(1).jpg".into(),
            alt: "Don't we all.".into(),
            transcript: transcript.into(),
            year: "2006".into(),
            month: "1".into(),
            day: "1".into(),
            safe_title: title.into(),
        }
    }

    #[test]
    fn test_matches_title_or_transcript() {
        let c = comic("Barrel - Part 1", "[[A boy sits in a barrel]]");
        assert!(c.matches("Barrel"));
        assert!(c.matches("boy sits"));
        assert!(!c.matches("Dinosaur"));
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let c = comic("Barrel - Part 1", "");
        assert!(!c.matches("barrel"));
    }

    #[test]
    fn test_serializes_snake_case_fields() {
        let json = serde_json::to_value(comic("Barrel", "")).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["safe_title"], "Barrel");
        assert_eq!(json["transcript"], "");
    }
}

//! Provider payload shape and its normalization into [`Comic`].

use comicache_core::Comic;
use serde::Deserialize;

/// Raw JSON payload as served by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawComic {
    pub num: u32,
    pub title: String,
    pub img: String,
    pub alt: String,
    #[serde(default)]
    pub transcript: Option<String>,
    pub year: String,
    pub month: String,
    pub day: String,
    pub safe_title: String,
}

impl From<RawComic> for Comic {
    fn from(raw: RawComic) -> Self {
        Comic {
            id: raw.num,
            title: raw.title,
            img: raw.img,
            alt: raw.alt,
            transcript: raw.transcript.unwrap_or_default(),
            year: raw.year,
            month: raw.month,
            day: raw.day,
            safe_title: raw.safe_title,
        }
    }
}

/// Map a raw provider payload into the internal comic shape.
pub fn normalize(raw: RawComic) -> Comic {
    Comic::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(transcript: serde_json::Value) -> RawComic {
        let mut json = serde_json::json!({
            "month": "1", "num": 1, "link": "", "year": "2006", "news": "",
            "safe_title": "Barrel - Part 1",
            "alt": "Don't we all.",
            "img": "https://imgs.xkcd.com/comics/barrel_cropped_(1).jpg",
            "title": "Barrel - Part 1", "day": "1"
        });
        json["transcript"] = transcript;
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_normalize_renames_num_to_id() {
        let comic = normalize(raw(serde_json::json!("[[A boy sits in a barrel]]")));
        assert_eq!(comic.id, 1);
        assert_eq!(comic.title, "Barrel - Part 1");
        assert_eq!(comic.safe_title, "Barrel - Part 1");
        assert_eq!(comic.img, "https://imgs.xkcd.com/comics/barrel_cropped_(1).jpg");
        assert_eq!(comic.alt, "Don't we all.");
        assert_eq!((comic.year.as_str(), comic.month.as_str(), comic.day.as_str()), ("2006", "1", "1"));
        assert_eq!(comic.transcript, "[[A boy sits in a barrel]]");
    }

    #[test]
    fn test_normalize_defaults_missing_transcript() {
        let payload = r#"{"num": 2, "title": "Petit Trees", "img": "x.jpg", "alt": "a",
            "year": "2006", "month": "1", "day": "1", "safe_title": "Petit Trees"}"#;
        let comic = normalize(serde_json::from_str(payload).unwrap());
        assert_eq!(comic.transcript, "");
    }

    #[test]
    fn test_normalize_defaults_null_transcript() {
        let comic = normalize(raw(serde_json::Value::Null));
        assert_eq!(comic.transcript, "");
    }

    #[test]
    fn test_missing_required_field_fails_decode() {
        let payload = r#"{"title": "No number", "img": "x.jpg", "alt": "a",
            "year": "2006", "month": "1", "day": "1", "safe_title": "No number"}"#;
        assert!(serde_json::from_str::<RawComic>(payload).is_err());
    }
}

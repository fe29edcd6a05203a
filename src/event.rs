//! The event draft the creation wizard edits and validates.
//!
//! Choice fields (category, mode, currency) are kept as the raw strings
//! the form submitted. An unknown value is a validation issue, not a
//! deserialization failure.

use crate::schedule::ScheduleDraft;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!("Unknown {}: '{}'", stringify!($name), other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum!(
    /// What kind of event this is
    Category {
        Education => "Education",
        Entertainment => "Entertainment",
        Sports => "Sports",
        Networking => "Networking",
    }
);

choice_enum!(
    /// Where attendees take part
    EventMode {
        Online => "Online",
        Offline => "Offline",
        Hybrid => "Hybrid",
    }
);

choice_enum!(
    Currency {
        Inr => "INR",
        Usd => "USD",
        Eur => "EUR",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Basics {
    pub title: String,
    pub category: String,
    pub mode: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Default for Basics {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: Category::Education.to_string(),
            mode: EventMode::Online.to_string(),
            description: String::new(),
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pricing {
    pub currency: String,
    pub price: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            currency: Currency::Inr.to_string(),
            price: 0.0,
        }
    }
}

/// Optional media links; an empty string means "not provided"
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Media {
    pub thumbnail_url: String,
    pub banner_url: String,
    pub video_url: String,
    pub gallery_urls: Vec<String>,
    pub agree: bool,
}

/// Everything the wizard collects, flattened into one camelCase payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventDraft {
    #[serde(flatten)]
    pub basics: Basics,
    #[serde(flatten)]
    pub schedule: ScheduleDraft,
    #[serde(flatten)]
    pub pricing: Pricing,
    #[serde(flatten)]
    pub media: Media,
}

impl EventDraft {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{DayKey, Period};
    use crate::validation::{validate_schedule, Limits};

    #[test]
    fn test_choice_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), *category);
        }
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("usd".parse::<Currency>().is_err());
        assert!("Party".parse::<Category>().is_err());
    }

    #[test]
    fn test_defaults_match_new_event_form() {
        let draft = EventDraft::default();
        assert_eq!(draft.basics.category, "Education");
        assert_eq!(draft.basics.mode, "Online");
        assert_eq!(draft.pricing.currency, "INR");
        assert_eq!(draft.pricing.price, 0.0);
        assert_eq!(draft.schedule.start_date, draft.schedule.end_date);
        assert!(!draft.schedule.same_time_for_all_dates);
        assert!(!draft.media.agree);
    }

    #[test]
    fn test_parse_camel_case_payload() {
        let json = r#"{
            "title": "Rust Meetup",
            "category": "Networking",
            "startDate": "2025-01-01",
            "endDate": "2025-01-02",
            "sameTimeForAllDates": true,
            "defaultPeriods": [{"startTime": "18:00", "endTime": "20:00", "label": "Talks"}],
            "price": 12.5,
            "galleryUrls": ["https://example.com/a.png"]
        }"#;
        let draft = EventDraft::from_json(json).unwrap();
        assert_eq!(draft.basics.title, "Rust Meetup");
        // Missing fields fall back to the form defaults
        assert_eq!(draft.basics.mode, "Online");
        assert!(draft.schedule.same_time_for_all_dates);
        assert_eq!(
            draft.schedule.default_periods,
            vec![Period::new("18:00", "20:00").with_label("Talks")]
        );
        assert_eq!(draft.pricing.price, 12.5);
        assert_eq!(draft.media.gallery_urls.len(), 1);
    }

    #[test]
    fn test_missing_dates_default_to_today() {
        let draft = EventDraft::from_json(r#"{"title":"x"}"#).unwrap();
        let today = DayKey::today().to_string();
        assert_eq!(draft.schedule.start_date, today);
        assert_eq!(draft.schedule.end_date, today);

        // Only the empty per-day map is left to report
        let issues = validate_schedule(&draft.schedule, &Limits::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path.to_string(), "periodsByDate");
    }

    #[test]
    fn test_serialize_is_flat() {
        let value = serde_json::to_value(EventDraft::default()).unwrap();
        assert!(value.get("startDate").is_some());
        assert!(value.get("galleryUrls").is_some());
        assert!(value.get("schedule").is_none());
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A link harvested from the listing page, waiting for its detail fetch
#[derive(Debug, Clone, PartialEq)]
pub struct EventReference {
    pub title: String,
    pub url: String,
    pub scraped_at: NaiveDateTime,
}

/// Fields extracted from one event detail page.
///
/// Every field is always present; absent markup is replaced by a sentinel
/// (see `crate::constants`), never by a missing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDetail {
    pub title: String,
    /// Human-readable date with the leading day of week removed
    pub date: String,
    /// The `datetime` attribute of the date element, untouched
    pub date_raw: String,
    pub start_time: String,
    pub end_time: String,
    pub book_link: String,
    pub book_link_text: String,
    pub description: String,
}

impl EventDetail {
    /// Detail recorded for a page that could not be fetched.
    pub fn failed(error: impl Display) -> Self {
        Self {
            description: format!("Error: {error}"),
            ..Self::default()
        }
    }
}

/// One persisted entry of the output document.
///
/// Field order is the document's key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub url: String,
    #[serde(with = "iso_local")]
    pub scraped_at: NaiveDateTime,
    pub title: String,
    pub date: String,
    #[serde(rename = "date_datetime")]
    pub date_raw: String,
    pub start_time: String,
    pub end_time: String,
    pub book_link: String,
    pub book_link_text: String,
    pub description: String,
}

impl EventRecord {
    /// Keeps url and capture time from the listing; everything else,
    /// title included, comes from the detail page.
    pub fn merge(reference: &EventReference, detail: EventDetail) -> Self {
        Self {
            url: reference.url.clone(),
            scraped_at: reference.scraped_at,
            title: detail.title,
            date: detail.date,
            date_raw: detail.date_raw,
            start_time: detail.start_time,
            end_time: detail.end_time,
            book_link: detail.book_link,
            book_link_text: detail.book_link_text,
            description: detail.description,
        }
    }
}

/// Local wall-clock timestamps without offset, microsecond precision.
mod iso_local {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
    const READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(WRITE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, READ_FORMAT).map_err(serde::de::Error::custom)
    }
}

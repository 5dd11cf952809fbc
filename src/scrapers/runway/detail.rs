use std::sync::Arc;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::instrument;

use super::html::{collapse_whitespace, joined_text, stripped_text};
use crate::app::ports::HttpClientPort;
use crate::constants::{
    BOOK_LINK_SELECTOR, DATE_SELECTOR, DESCRIPTION_SELECTOR, END_TIME_SELECTOR, NO_DATE,
    NO_DESCRIPTION, NO_END_TIME, NO_START_TIME, NO_TITLE, START_TIME_SELECTOR, TITLE_SELECTOR,
};
use crate::error::Result;
use crate::types::EventDetail;

static TITLE: Lazy<Selector> = Lazy::new(|| selector(TITLE_SELECTOR));
static DATE: Lazy<Selector> = Lazy::new(|| selector(DATE_SELECTOR));
static START_TIME: Lazy<Selector> = Lazy::new(|| selector(START_TIME_SELECTOR));
static END_TIME: Lazy<Selector> = Lazy::new(|| selector(END_TIME_SELECTOR));
static BOOK_LINK: Lazy<Selector> = Lazy::new(|| selector(BOOK_LINK_SELECTOR));
static DESCRIPTION: Lazy<Selector> = Lazy::new(|| selector(DESCRIPTION_SELECTOR));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid detail selector")
}

pub struct DetailExtractor {
    http: Arc<dyn HttpClientPort>,
}

impl DetailExtractor {
    pub fn new(http: Arc<dyn HttpClientPort>) -> Self {
        Self { http }
    }

    /// Fetches one event page. Only the fetch can fail; missing markup
    /// degrades to sentinels inside the returned detail.
    #[instrument(skip(self))]
    pub async fn extract(&self, url: &str) -> Result<EventDetail> {
        let page = self.http.get(url).await?;
        Ok(parse_detail(&page.text()))
    }
}

pub fn parse_detail(body: &str) -> EventDetail {
    let document = Html::parse_document(body);
    let first = |sel: &Lazy<Selector>| first_match(&document, sel);

    let (date, date_raw) = match first(&DATE) {
        Some(el) => (
            strip_weekday(&stripped_text(&el)).to_string(),
            el.value().attr("datetime").unwrap_or_default().to_string(),
        ),
        None => (NO_DATE.to_string(), String::new()),
    };

    let (book_link, book_link_text) = match first(&BOOK_LINK) {
        Some(el) => (
            el.value().attr("href").unwrap_or_default().to_string(),
            stripped_text(&el),
        ),
        None => (String::new(), String::new()),
    };

    let description = first(&DESCRIPTION)
        .map(|el| collapse_whitespace(&joined_text(&el, " ")))
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    EventDetail {
        title: text_or(first(&TITLE), NO_TITLE),
        date,
        date_raw,
        start_time: text_or(first(&START_TIME), NO_START_TIME),
        end_time: text_or(first(&END_TIME), NO_END_TIME),
        book_link,
        book_link_text,
        description,
    }
}

fn first_match<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    document.select(selector).next()
}

fn text_or(element: Option<ElementRef<'_>>, sentinel: &str) -> String {
    element
        .map(|e| stripped_text(&e))
        .unwrap_or_else(|| sentinel.to_string())
}

/// "Wednesday, August 6, 2025" -> "August 6, 2025"; text without ", " is returned as is.
pub fn strip_weekday(text: &str) -> &str {
    match text.split_once(", ") {
        Some((_, rest)) => rest,
        None => text,
    }
}

use std::sync::Arc;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{error, info, instrument, warn};
use url::Url;

use super::html::stripped_text;
use crate::app::ports::{ClockPort, HttpClientPort};
use crate::constants::{LISTING_ANCHOR_SELECTOR, NO_LISTING_TITLE};
use crate::error::Result;
use crate::types::EventReference;

static ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(LISTING_ANCHOR_SELECTOR).expect("valid listing selector"));

/// Collects event links from the upcoming events list.
pub struct ListingHarvester {
    http: Arc<dyn HttpClientPort>,
    clock: Arc<dyn ClockPort>,
    listing_url: String,
    origin: Url,
}

impl ListingHarvester {
    pub fn new(
        http: Arc<dyn HttpClientPort>,
        clock: Arc<dyn ClockPort>,
        listing_url: &str,
        site_origin: &str,
    ) -> Result<Self> {
        Ok(Self {
            http,
            clock,
            listing_url: listing_url.to_string(),
            origin: Url::parse(site_origin)?,
        })
    }

    /// Fetches the listing page. Fetch failures are logged and yield no events.
    #[instrument(skip(self), fields(url = %self.listing_url))]
    pub async fn harvest(&self) -> Vec<EventReference> {
        info!("Fetching events from: {}", self.listing_url);

        let page = match self.http.get(&self.listing_url).await {
            Ok(page) => page,
            Err(e) => {
                error!("Error fetching the listing page: {}", e);
                return Vec::new();
            }
        };

        let events = parse_listing(&page.text(), &self.origin, self.clock.as_ref());
        info!("Total events found: {}", events.len());
        events
    }
}

pub fn parse_listing(body: &str, origin: &Url, clock: &dyn ClockPort) -> Vec<EventReference> {
    let document = Html::parse_document(body);
    let mut events = Vec::new();

    for anchor in document.select(&ANCHOR) {
        let Some(href) = anchor.value().attr("href").filter(|h| !h.is_empty()) else {
            continue;
        };

        let text = stripped_text(&anchor);
        let title = if text.is_empty() {
            anchor.value().attr("title").unwrap_or(NO_LISTING_TITLE).to_string()
        } else {
            text
        };

        let url = match origin.join(href) {
            Ok(url) => url,
            Err(e) => {
                warn!("Skipping event '{}' with unusable href '{}': {}", title, href, e);
                continue;
            }
        };

        info!("Found event: {} - {}", title, href);
        events.push(EventReference {
            title,
            url: url.into(),
            scraped_at: clock.now(),
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SITE_ORIGIN;
    use crate::infra::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2025, 8, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        )
    }

    fn origin() -> Url {
        Url::parse(SITE_ORIGIN).unwrap()
    }

    fn listing(articles: &str) -> String {
        format!(
            r#"<html><body>
            <div class="eventlist eventlist--upcoming">{articles}</div>
            <div class="eventlist eventlist--past">
              <article class="eventlist-event"><a href="/events2/old-show">Old Show</a></article>
            </div>
            </body></html>"#
        )
    }

    #[test]
    fn test_parse_listing_resolves_relative_hrefs() {
        let html = listing(
            r#"<article class="eventlist-event"><a href="/events2/event-a">Summer Concert</a></article>
               <article class="eventlist-event"><a href="/events2/event-b"> Movie <b>Night</b> </a></article>"#,
        );

        let events = parse_listing(&html, &origin(), &clock());
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Summer Concert");
        assert_eq!(events[0].url, "https://www.runwayplayavista.com/events2/event-a");
        assert_eq!(events[1].title, "MovieNight");
        assert_eq!(events[1].url, "https://www.runwayplayavista.com/events2/event-b");
        assert_eq!(events[0].scraped_at, clock().0);
    }

    #[test]
    fn test_parse_listing_keeps_absolute_hrefs() {
        let html = listing(
            r#"<article class="eventlist-event"><a href="https://www.runwayplayavista.com/events2/abs">Abs</a></article>"#,
        );

        let events = parse_listing(&html, &origin(), &clock());
        assert_eq!(events[0].url, "https://www.runwayplayavista.com/events2/abs");
    }

    #[test]
    fn test_parse_listing_title_fallbacks() {
        let html = listing(
            r#"<article class="eventlist-event"><a href="/events2/x" title="From Attribute"><img src="x.png"></a></article>
               <article class="eventlist-event"><a href="/events2/y"><img src="y.png"></a></article>"#,
        );

        let events = parse_listing(&html, &origin(), &clock());
        assert_eq!(events[0].title, "From Attribute");
        assert_eq!(events[1].title, "No title");
    }

    #[test]
    fn test_parse_listing_skips_anchors_without_href() {
        let html = listing(
            r#"<article class="eventlist-event"><a>No link</a></article>
               <article class="eventlist-event"><a href="">Empty link</a></article>
               <article class="eventlist-event"><a href="/events2/ok">Linked</a></article>"#,
        );

        let events = parse_listing(&html, &origin(), &clock());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Linked");
    }

    #[test]
    fn test_parse_listing_keeps_duplicates() {
        let html = listing(
            r#"<article class="eventlist-event"><a href="/events2/same">One</a></article>
               <article class="eventlist-event"><a href="/events2/same">Two</a></article>"#,
        );

        let events = parse_listing(&html, &origin(), &clock());
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].url, events[1].url);
    }

    #[test]
    fn test_parse_listing_without_list_is_empty() {
        let events = parse_listing("<html><body><p>Nothing here</p></body></html>", &origin(), &clock());
        assert!(events.is_empty());
    }
}

/// Site and selector constants for the Runway Playa Vista events pages.
/// Selectors target the Squarespace event list and event item templates.

// Source locations
pub const SITE_ORIGIN: &str = "https://www.runwayplayavista.com";
pub const LISTING_URL: &str = "https://www.runwayplayavista.com/events2";

// Sent with every request; the site rejects non-browser clients
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_DELAY_MS: u64 = 1000;
pub const DEFAULT_OUTPUT_FILE: &str = "runway_events_detailed.json";
pub const DEFAULT_CONFIG_FILE: &str = "runway_scraper.toml";

// Listing page
pub const LISTING_ANCHOR_SELECTOR: &str =
    "div.eventlist.eventlist--upcoming > article.eventlist-event > a";

// Detail page
pub const TITLE_SELECTOR: &str = "h1.eventitem-title";
pub const DATE_SELECTOR: &str = "time.event-date";
pub const START_TIME_SELECTOR: &str = "time.event-time-localized-start";
pub const END_TIME_SELECTOR: &str = "time.event-time-localized-end";
pub const BOOK_LINK_SELECTOR: &str =
    "a.sqs-block-button-element--medium.sqs-button-element--primary.sqs-block-button-element";
pub const DESCRIPTION_SELECTOR: &str = "div.sqs-block.html-block.sqs-block-html";

// Sentinels for absent markup
pub const NO_LISTING_TITLE: &str = "No title";
pub const NO_TITLE: &str = "No title found";
pub const NO_DATE: &str = "No date found";
pub const NO_START_TIME: &str = "No start time found";
pub const NO_END_TIME: &str = "No end time found";
pub const NO_DESCRIPTION: &str = "No description found";

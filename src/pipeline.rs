use std::sync::Arc;
use std::time::{Duration, Instant};

use metrics::{counter, histogram};
use tracing::{error, info, instrument, warn};

use crate::app::ports::{ClockPort, HttpClientPort};
use crate::config::Config;
use crate::error::Result;
use crate::scrapers::runway::{DetailExtractor, ListingHarvester};
use crate::types::{EventDetail, EventRecord, EventReference};

/// Result of a complete pipeline run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// One record per harvested reference, in listing order
    pub records: Vec<EventRecord>,
    pub failed_details: usize,
}

impl RunSummary {
    /// Records whose detail page was fetched successfully
    pub fn scraped_details(&self) -> usize {
        self.records.len() - self.failed_details
    }
}

/// Listing harvest, then one detail fetch per event with a politeness
/// delay between fetches. Strictly sequential.
pub struct Pipeline {
    listing: ListingHarvester,
    detail: DetailExtractor,
    delay: Duration,
}

impl Pipeline {
    pub fn new(listing: ListingHarvester, detail: DetailExtractor, delay: Duration) -> Self {
        Self { listing, detail, delay }
    }

    pub fn from_config(
        config: &Config,
        http: Arc<dyn HttpClientPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self> {
        let listing = ListingHarvester::new(
            http.clone(),
            clock,
            &config.listing_url,
            &config.site_origin,
        )?;
        let detail = DetailExtractor::new(http);
        Ok(Self::new(listing, detail, config.delay()))
    }

    #[instrument(skip(self))]
    pub async fn run(&self) -> RunSummary {
        let t_run = Instant::now();

        let references = self.listing.harvest().await;
        counter!("runway_listing_events_total").increment(references.len() as u64);
        if references.is_empty() {
            warn!("No events found to scrape details for");
            return RunSummary::default();
        }

        info!("Scraping detailed information for {} events...", references.len());
        let details = self.scrape_details(&references).await;

        let mut summary = RunSummary::default();
        for (reference, detail) in references.iter().zip(details) {
            let detail = detail.unwrap_or_else(|e| {
                summary.failed_details += 1;
                EventDetail::failed(e)
            });
            summary.records.push(EventRecord::merge(reference, detail));
        }

        counter!("runway_details_scraped_total").increment(summary.scraped_details() as u64);
        counter!("runway_detail_errors_total").increment(summary.failed_details as u64);
        histogram!("runway_run_duration_seconds").record(t_run.elapsed().as_secs_f64());

        info!(
            "✅ Scraped {} of {} events ({} failed)",
            summary.scraped_details(),
            summary.records.len(),
            summary.failed_details
        );
        summary
    }

    /// One result per reference, same order. A failed fetch is kept as its
    /// error and never stops the loop; the delay follows every fetch.
    pub async fn scrape_details(&self, references: &[EventReference]) -> Vec<Result<EventDetail>> {
        let total = references.len();
        let mut details = Vec::with_capacity(total);

        for (i, reference) in references.iter().enumerate() {
            info!("Scraping details for event {}/{}: {}", i + 1, total, reference.title);

            let detail = self.detail.extract(&reference.url).await;
            if let Err(e) = &detail {
                error!("Error scraping event details from {}: {}", reference.url, e);
            }
            details.push(detail);

            tokio::time::sleep(self.delay).await;
        }

        details
    }
}

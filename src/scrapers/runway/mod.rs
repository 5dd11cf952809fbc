pub mod detail;
pub mod html;
pub mod listing;

pub use detail::DetailExtractor;
pub use listing::ListingHarvester;

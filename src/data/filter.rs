use std::ops::RangeInclusive;

use log::info;

use super::model::Listing;

// ---------------------------------------------------------------------------
// Plausibility windows
// ---------------------------------------------------------------------------

/// Plausible asking prices. Zero-priced listings (~2% of the snapshot) and
/// the handful above $350k are non-representative outliers. Fixed
/// constants, not derived from the data.
pub const PRICE_RANGE: RangeInclusive<u32> = 1..=351_000;

/// Plausible first-registration years. The upper bound is the crawl year;
/// earlier than 1900 predates the automobile as a consumer good.
pub const REGISTRATION_YEAR_RANGE: RangeInclusive<u16> = 1900..=2016;

// ---------------------------------------------------------------------------
// Row filters
// ---------------------------------------------------------------------------

/// Keep listings whose price falls in [`PRICE_RANGE`].
pub fn filter_price(listings: Vec<Listing>) -> Vec<Listing> {
    let before = listings.len();
    let kept: Vec<Listing> = listings
        .into_iter()
        .filter(|l| PRICE_RANGE.contains(&l.price))
        .collect();
    log_removed("price", before, kept.len());
    kept
}

/// Keep listings whose registration year falls in
/// [`REGISTRATION_YEAR_RANGE`].
pub fn filter_registration_year(listings: Vec<Listing>) -> Vec<Listing> {
    let before = listings.len();
    let kept: Vec<Listing> = listings
        .into_iter()
        .filter(|l| REGISTRATION_YEAR_RANGE.contains(&l.registration_year))
        .collect();
    log_removed("registration_year", before, kept.len());
    kept
}

fn log_removed(name: &str, before: usize, after: usize) {
    let removed = before - after;
    let share = if before == 0 {
        0.0
    } else {
        removed as f64 / before as f64 * 100.0
    };
    info!("{name} filter removed {removed} of {before} rows ({share:.1}%)");
}

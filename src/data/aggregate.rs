use std::collections::BTreeMap;

use log::debug;

use super::model::{BrandSummary, Listing};

/// Default minimum relative frequency for a brand to enter the report.
pub const MIN_BRAND_SHARE: f64 = 0.05;

// ---------------------------------------------------------------------------
// Brand summaries
// ---------------------------------------------------------------------------

/// Summarize mean price and mean mileage per brand, restricted to brands
/// whose relative frequency strictly exceeds `min_share`.
///
/// Frequency is count(brand) / total rows. The threshold is a strict `>`:
/// a brand sitting exactly on `min_share` is excluded. Because a retained
/// brand always has at least one row, the means are never taken over an
/// empty set. Means are truncated to the integer (exact: the sums are
/// non-negative, so integer division equals float truncation).
///
/// The result is sorted by mean price descending, ties broken by brand
/// name, so the output is deterministic.
pub fn brand_summaries(listings: &[Listing], min_share: f64) -> Vec<BrandSummary> {
    let total = listings.len();
    if total == 0 {
        return Vec::new();
    }

    // brand → (count, price sum, mileage sum)
    let mut groups: BTreeMap<&str, (usize, u64, u64)> = BTreeMap::new();
    for l in listings {
        let entry = groups.entry(&l.brand).or_default();
        entry.0 += 1;
        entry.1 += u64::from(l.price);
        entry.2 += u64::from(l.odometer_km);
    }
    debug!("{} distinct brands over {} listings", groups.len(), total);

    let mut summaries: Vec<BrandSummary> = groups
        .into_iter()
        .filter(|&(_, (count, _, _))| count as f64 / total as f64 > min_share)
        .map(|(brand, (count, price_sum, mileage_sum))| BrandSummary {
            brand: brand.to_string(),
            listings: count,
            mean_price: (price_sum / count as u64) as u32,
            mean_mileage: (mileage_sum / count as u64) as u32,
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.mean_price
            .cmp(&a.mean_price)
            .then_with(|| a.brand.cmp(&b.brand))
    });
    summaries
}

// ---------------------------------------------------------------------------
// Date distributions
// ---------------------------------------------------------------------------

/// Relative frequency of each calendar date in a timestamp column.
///
/// Timestamps look like `2016-03-26 17:47:46`; only the first 10
/// characters (the date) are kept. Sorted ascending by date.
pub fn date_distribution<'a, F>(listings: &'a [Listing], column: F) -> Vec<(String, f64)>
where
    F: Fn(&'a Listing) -> &'a str,
{
    let total = listings.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for l in listings {
        let value = column(l);
        let day = value.get(..10).unwrap_or(value);
        *counts.entry(day).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(day, count)| (day.to_string(), count as f64 / total as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(brand: &str, price: u32, odometer_km: u32, date_crawled: &str) -> Listing {
        Listing {
            date_crawled: date_crawled.to_string(),
            name: "test_car".to_string(),
            price,
            ab_test: "test".to_string(),
            vehicle_type: None,
            registration_year: 2005,
            gear_box: None,
            power_ps: 90,
            model: None,
            odometer_km,
            registration_month: 4,
            fuel_type: None,
            brand: brand.to_string(),
            unrepaired_damage: None,
            ad_created: "2016-03-20 00:00:00".to_string(),
            postal_code: 50667,
            last_seen: "2016-04-05 12:00:00".to_string(),
        }
    }

    fn crawled(l: &Listing) -> &str {
        &l.date_crawled
    }

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        // 20 rows: "edge" has 1 (share exactly 0.05), "common" has 19.
        let mut listings = vec![listing("edge", 1000, 50_000, "2016-03-26 10:00:00")];
        for _ in 0..19 {
            listings.push(listing("common", 2000, 60_000, "2016-03-26 10:00:00"));
        }

        let summaries = brand_summaries(&listings, 0.05);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].brand, "common");

        // Just above the threshold it is included.
        let summaries = brand_summaries(&listings, 0.0499999);
        assert_eq!(summaries.len(), 2);
    }

    #[test]
    fn test_mean_price_of_six_listings() {
        // Brand "x" appears 6 times in 100 rows (share 0.06 > 0.05).
        let prices = [1000, 2000, 3000, 4000, 5000, 6000];
        let mut listings: Vec<Listing> = prices
            .iter()
            .map(|&p| listing("x", p, 100_000, "2016-03-26 10:00:00"))
            .collect();
        for _ in 0..94 {
            listings.push(listing("filler", 500, 20_000, "2016-03-27 10:00:00"));
        }

        let summaries = brand_summaries(&listings, MIN_BRAND_SHARE);
        let x = summaries.iter().find(|s| s.brand == "x").unwrap();
        assert_eq!(x.listings, 6);
        assert_eq!(x.mean_price, 3500);
        assert_eq!(x.mean_mileage, 100_000);
    }

    #[test]
    fn test_means_truncate_not_round() {
        // mean price 1000.5, mean mileage 99999.5
        let listings = vec![
            listing("a", 1000, 99_999, "2016-03-26 10:00:00"),
            listing("a", 1001, 100_000, "2016-03-26 10:00:00"),
        ];
        let summaries = brand_summaries(&listings, 0.0);
        assert_eq!(summaries[0].mean_price, 1000);
        assert_eq!(summaries[0].mean_mileage, 99_999);
    }

    #[test]
    fn test_sorted_by_mean_price_descending() {
        let mut listings = Vec::new();
        for _ in 0..10 {
            listings.push(listing("cheap", 1000, 10_000, "2016-03-26 10:00:00"));
            listings.push(listing("mid", 5000, 10_000, "2016-03-26 10:00:00"));
            listings.push(listing("dear", 9000, 10_000, "2016-03-26 10:00:00"));
        }
        let summaries = brand_summaries(&listings, MIN_BRAND_SHARE);
        let order: Vec<&str> = summaries.iter().map(|s| s.brand.as_str()).collect();
        assert_eq!(order, vec!["dear", "mid", "cheap"]);
    }

    #[test]
    fn test_brand_keys_are_unique() {
        let listings: Vec<Listing> = (0..30)
            .map(|i| listing(if i % 2 == 0 { "a" } else { "b" }, 100, 100, "2016-03-26 10:00:00"))
            .collect();
        let summaries = brand_summaries(&listings, 0.0);
        let mut brands: Vec<&str> = summaries.iter().map(|s| s.brand.as_str()).collect();
        brands.sort_unstable();
        brands.dedup();
        assert_eq!(brands.len(), summaries.len());
    }

    #[test]
    fn test_empty_input_yields_no_summaries() {
        assert!(brand_summaries(&[], MIN_BRAND_SHARE).is_empty());
        assert!(date_distribution(&[], crawled).is_empty());
    }

    #[test]
    fn test_date_distribution_uses_date_prefix() {
        let listings = vec![
            listing("a", 100, 100, "2016-03-26 10:00:00"),
            listing("a", 100, 100, "2016-03-26 23:59:59"),
            listing("a", 100, 100, "2016-04-01 08:15:00"),
            listing("a", 100, 100, "2016-03-05 01:00:00"),
        ];
        let dist = date_distribution(&listings, crawled);
        assert_eq!(
            dist,
            vec![
                ("2016-03-05".to_string(), 0.25),
                ("2016-03-26".to_string(), 0.5),
                ("2016-04-01".to_string(), 0.25),
            ]
        );
    }
}

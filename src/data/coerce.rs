use std::str::FromStr;

use log::debug;

use super::model::{Listing, RawTable};
use crate::error::PipelineError;

/// Substrings stripped from the price column before parsing ("$5,000").
const PRICE_DECORATIONS: [&str; 2] = ["$", ","];
/// Substrings stripped from the odometer column before parsing ("150,000km").
const ODOMETER_DECORATIONS: [&str; 2] = ["km", ","];

// Column positions in the canonical 17-column table produced by
// `schema::normalize`. Coercion runs strictly after normalization, so the
// order is guaranteed.
const DATE_CRAWLED: usize = 0;
const NAME: usize = 1;
const PRICE: usize = 2;
const AB_TEST: usize = 3;
const VEHICLE_TYPE: usize = 4;
const REGISTRATION_YEAR: usize = 5;
const GEAR_BOX: usize = 6;
const POWER_PS: usize = 7;
const MODEL: usize = 8;
const ODOMETER_KM: usize = 9;
const REGISTRATION_MONTH: usize = 10;
const FUEL_TYPE: usize = 11;
const BRAND: usize = 12;
const UNREPAIRED_DAMAGE: usize = 13;
const AD_CREATED: usize = 14;
const POSTAL_CODE: usize = 15;
const LAST_SEEN: usize = 16;

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

/// Convert a normalized [`RawTable`] into typed [`Listing`] records.
///
/// The two decorated columns lose their currency symbol / unit suffix /
/// thousands separators and parse as base-10 integers; the plain numeric
/// columns parse directly. The dataset is treated as a trusted batch
/// snapshot: a single malformed cell aborts the whole stage with
/// [`PipelineError::Parse`] naming the row, rather than coercing to null.
pub fn to_listings(table: RawTable) -> Result<Vec<Listing>, PipelineError> {
    let mut listings = Vec::with_capacity(table.rows.len());

    for (row_no, row) in table.rows.iter().enumerate() {
        listings.push(Listing {
            date_crawled: field(row, DATE_CRAWLED).to_string(),
            name: field(row, NAME).to_string(),
            price: parse_decorated(row_no, "price", field(row, PRICE), &PRICE_DECORATIONS)?,
            ab_test: field(row, AB_TEST).to_string(),
            vehicle_type: optional(field(row, VEHICLE_TYPE)),
            registration_year: parse_int(row_no, "registration_year", field(row, REGISTRATION_YEAR))?,
            gear_box: optional(field(row, GEAR_BOX)),
            power_ps: parse_int(row_no, "power_ps", field(row, POWER_PS))?,
            model: optional(field(row, MODEL)),
            odometer_km: parse_decorated(
                row_no,
                "odometer_km",
                field(row, ODOMETER_KM),
                &ODOMETER_DECORATIONS,
            )?,
            registration_month: parse_int(row_no, "registration_month", field(row, REGISTRATION_MONTH))?,
            fuel_type: optional(field(row, FUEL_TYPE)),
            brand: field(row, BRAND).to_string(),
            unrepaired_damage: optional(field(row, UNREPAIRED_DAMAGE)),
            ad_created: field(row, AD_CREATED).to_string(),
            postal_code: parse_int(row_no, "postal_code", field(row, POSTAL_CODE))?,
            last_seen: field(row, LAST_SEEN).to_string(),
        });
    }

    debug!("coerced {} listings", listings.len());
    Ok(listings)
}

fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Empty free-text cell → `None`.
fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Strip the given literal substrings, then parse the remainder base-10.
fn parse_decorated<T: FromStr>(
    row: usize,
    column: &'static str,
    raw: &str,
    decorations: &[&str],
) -> Result<T, PipelineError> {
    let mut cleaned = raw.trim().to_string();
    for decoration in decorations {
        cleaned = cleaned.replace(decoration, "");
    }
    cleaned.parse().map_err(|_| PipelineError::Parse {
        row,
        column,
        value: raw.to_string(),
    })
}

fn parse_int<T: FromStr>(row: usize, column: &'static str, raw: &str) -> Result<T, PipelineError> {
    raw.trim().parse().map_err(|_| PipelineError::Parse {
        row,
        column,
        value: raw.to_string(),
    })
}

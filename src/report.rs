use std::fmt::Write as _;

use crate::data::model::BrandSummary;

// ---------------------------------------------------------------------------
// Plain-text report rendering
// ---------------------------------------------------------------------------

/// Render a date-column distribution as an aligned date/share table.
///
/// Pure presentation: the shares arrive already computed and sorted.
pub fn render_date_distribution(title: &str, distribution: &[(String, f64)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{:-<width$}", "", width = title.len());

    if distribution.is_empty() {
        let _ = writeln!(out, "(no rows)");
        return out;
    }

    for (day, share) in distribution {
        let _ = writeln!(out, "{day}  {share:.4}");
    }
    out
}

/// Render the brand summary table, one row per brand, in the order given
/// (by convention: mean price descending).
pub fn render_brand_table(summaries: &[BrandSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "brand summary (mean price descending)");
    let _ = writeln!(out, "-------------------------------------");

    if summaries.is_empty() {
        let _ = writeln!(out, "(no brand above the frequency threshold)");
        return out;
    }

    let brand_width = summaries
        .iter()
        .map(|s| s.brand.len())
        .max()
        .unwrap_or(0)
        .max("brand".len());

    let _ = writeln!(
        out,
        "{:<brand_width$}  {:>8}  {:>10}  {:>12}",
        "brand", "listings", "mean_price", "mean_mileage"
    );
    for s in summaries {
        let _ = writeln!(
            out,
            "{:<brand_width$}  {:>8}  {:>10}  {:>12}",
            s.brand, s.listings, s.mean_price, s.mean_mileage
        );
    }
    out
}

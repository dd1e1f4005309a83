// ---------------------------------------------------------------------------
// RawTable – the loosely-typed table straight out of the CSV
// ---------------------------------------------------------------------------

/// A parsed but untyped table: one header row plus string cells.
///
/// Every row has the same width as the header (the csv reader rejects
/// ragged rows). This is the value the loader and the schema normalizer
/// trade in; nothing downstream of coercion touches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Column names, in file order.
    pub headers: Vec<String>,
    /// Row-major cells, `rows[i].len() == headers.len()`.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Number of data rows (excluding the header).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Listing – one typed row of the canonical schema
// ---------------------------------------------------------------------------

/// One used-car advertisement, after schema normalization and coercion.
///
/// Field order matches the canonical 17-column schema. Timestamps stay as
/// text: the analysis only ever looks at their 10-character date prefix.
/// Free-text columns that are nullable in the snapshot are `Option`s; an
/// empty cell becomes `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub date_crawled: String,
    pub name: String,
    /// Asking price in dollars, decoration already stripped.
    pub price: u32,
    pub ab_test: String,
    pub vehicle_type: Option<String>,
    pub registration_year: u16,
    pub gear_box: Option<String>,
    pub power_ps: u32,
    pub model: Option<String>,
    /// Mileage in kilometres, decoration already stripped.
    pub odometer_km: u32,
    pub registration_month: u8,
    pub fuel_type: Option<String>,
    pub brand: String,
    pub unrepaired_damage: Option<String>,
    pub ad_created: String,
    pub postal_code: u32,
    pub last_seen: String,
}

// ---------------------------------------------------------------------------
// BrandSummary – one aggregated row of the final report
// ---------------------------------------------------------------------------

/// Per-brand aggregate over the filtered listings.
///
/// Means are arithmetic means truncated (not rounded) to the integer, the
/// convention the report table uses. Computed once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandSummary {
    /// Brand name, unique within a summary collection.
    pub brand: String,
    /// How many filtered listings carry this brand.
    pub listings: usize,
    pub mean_price: u32,
    pub mean_mileage: u32,
}

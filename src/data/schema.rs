use log::debug;

use super::model::RawTable;
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// The known original schema and its canonical renaming
// ---------------------------------------------------------------------------

/// Ordered mapping from the snapshot's camelCase header to canonical
/// snake_case names. The transformation assumes this exact 20-column
/// schema; it is configuration, not inference.
pub const COLUMN_RENAMES: [(&str, &str); 20] = [
    ("dateCrawled", "date_crawled"),
    ("name", "name"),
    ("seller", "seller"),
    ("offerType", "offer_type"),
    ("price", "price"),
    ("abtest", "ab_test"),
    ("vehicleType", "vehicle_type"),
    ("yearOfRegistration", "registration_year"),
    ("gearbox", "gear_box"),
    ("powerPS", "power_ps"),
    ("model", "model"),
    ("odometer", "odometer_km"),
    ("monthOfRegistration", "registration_month"),
    ("fuelType", "fuel_type"),
    ("brand", "brand"),
    ("notRepairedDamage", "unrepaired_damage"),
    ("dateCreated", "ad_created"),
    ("nrOfPictures", "num_photos"),
    ("postalCode", "postal_code"),
    ("lastSeen", "last_seen"),
];

/// Columns dropped after renaming: `seller` and `offer_type` are
/// constant-valued in the snapshot, `num_photos` is entirely empty.
pub const DROPPED_COLUMNS: [&str; 3] = ["seller", "offer_type", "num_photos"];

/// The canonical 17-column schema, in order.
pub fn canonical_columns() -> Vec<&'static str> {
    COLUMN_RENAMES
        .iter()
        .map(|&(_, canonical)| canonical)
        .filter(|c| !DROPPED_COLUMNS.contains(c))
        .collect()
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Validate the header against [`COLUMN_RENAMES`], rename every column to
/// its canonical name, then drop [`DROPPED_COLUMNS`].
///
/// Validation is positional and exact: the rename list is applied by
/// position, so a reordered, missing, or unknown column would silently
/// mislabel data and is instead [`PipelineError::SchemaMismatch`].
pub fn normalize(table: RawTable) -> Result<RawTable, PipelineError> {
    for (position, (original, _)) in COLUMN_RENAMES.iter().enumerate() {
        match table.headers.get(position) {
            Some(found) if found == original => {}
            Some(found) => {
                return Err(PipelineError::SchemaMismatch {
                    position,
                    expected: (*original).to_string(),
                    found: found.clone(),
                });
            }
            None => {
                return Err(PipelineError::SchemaMismatch {
                    position,
                    expected: (*original).to_string(),
                    found: "<missing>".to_string(),
                });
            }
        }
    }
    if let Some(extra) = table.headers.get(COLUMN_RENAMES.len()) {
        return Err(PipelineError::SchemaMismatch {
            position: COLUMN_RENAMES.len(),
            expected: "<end of header>".to_string(),
            found: extra.clone(),
        });
    }

    // Indices of columns that survive the drop, in canonical order.
    let kept: Vec<usize> = COLUMN_RENAMES
        .iter()
        .enumerate()
        .filter(|(_, &(_, canonical))| !DROPPED_COLUMNS.contains(&canonical))
        .map(|(i, _)| i)
        .collect();

    let headers: Vec<String> = kept
        .iter()
        .map(|&i| COLUMN_RENAMES[i].1.to_string())
        .collect();

    let rows: Vec<Vec<String>> = table
        .rows
        .into_iter()
        .map(|row| kept.iter().map(|&i| row[i].clone()).collect())
        .collect();

    debug!(
        "normalized header: {} columns kept, {} dropped",
        headers.len(),
        DROPPED_COLUMNS.len()
    );

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn original_header() -> Vec<String> {
        COLUMN_RENAMES.iter().map(|&(o, _)| o.to_string()).collect()
    }

    #[test]
    fn test_full_header_yields_canonical_17_columns() {
        let table = RawTable {
            headers: original_header(),
            rows: vec![(0..20).map(|i| format!("v{i}")).collect()],
        };

        let normalized = normalize(table).unwrap();

        assert_eq!(normalized.headers.len(), 17);
        assert_eq!(normalized.headers, canonical_columns());
        // seller (index 2), offerType (3), nrOfPictures (17) are gone
        assert_eq!(
            normalized.rows[0],
            vec![
                "v0", "v1", "v4", "v5", "v6", "v7", "v8", "v9", "v10", "v11", "v12", "v13",
                "v14", "v15", "v16", "v18", "v19"
            ]
        );
    }

    #[test]
    fn test_no_canonical_name_collisions() {
        let mut names = canonical_columns();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn test_unknown_column_is_schema_mismatch() {
        let mut headers = original_header();
        headers[4] = "cost".to_string();
        let err = normalize(RawTable { headers, rows: vec![] }).unwrap_err();
        match err {
            PipelineError::SchemaMismatch { position, expected, found } => {
                assert_eq!(position, 4);
                assert_eq!(expected, "price");
                assert_eq!(found, "cost");
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_is_schema_mismatch() {
        let mut headers = original_header();
        headers.pop();
        let err = normalize(RawTable { headers, rows: vec![] }).unwrap_err();
        assert!(matches!(err, PipelineError::SchemaMismatch { position: 19, .. }));
    }

    #[test]
    fn test_extra_column_is_schema_mismatch() {
        let mut headers = original_header();
        headers.push("extra".to_string());
        let err = normalize(RawTable { headers, rows: vec![] }).unwrap_err();
        assert!(matches!(err, PipelineError::SchemaMismatch { position: 20, .. }));
    }
}

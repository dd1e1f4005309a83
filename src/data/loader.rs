use std::path::Path;

use encoding_rs::Encoding;
use log::debug;

use super::model::RawTable;
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a delimited listings snapshot into a [`RawTable`].
///
/// The file is read whole, decoded under `encoding` (the eBay
/// Kleinanzeigen snapshot is Latin-1, so UTF-8 readers choke on umlauts in
/// car names), then parsed as comma-separated values with a header row.
///
/// Fatal on any failure: a missing file is [`PipelineError::Io`], bytes
/// invalid under the declared encoding are [`PipelineError::Decode`], and a
/// ragged row is [`PipelineError::Csv`]. A one-shot offline load has
/// nothing sensible to retry.
pub fn load_table(path: &Path, encoding: &'static Encoding) -> Result<RawTable, PipelineError> {
    let bytes = std::fs::read(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(PipelineError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }

    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(
        "loaded {} rows x {} columns from {} ({} bytes, {})",
        rows.len(),
        headers.len(),
        path.display(),
        bytes.len(),
        encoding.name()
    );

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_8, WINDOWS_1252};
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_load_latin1_umlauts() {
        let path = temp_path("autos_eda_loader_latin1.csv");
        // "Käfer" with Latin-1 encoded ä (0xE4)
        let mut bytes = b"name,brand\nK".to_vec();
        bytes.push(0xE4);
        bytes.extend_from_slice(b"fer,volkswagen\n");
        fs::write(&path, &bytes).unwrap();

        let table = load_table(&path, WINDOWS_1252).unwrap();
        assert_eq!(table.headers, vec!["name", "brand"]);
        assert_eq!(table.rows, vec![vec!["Käfer".to_string(), "volkswagen".to_string()]]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_table(Path::new("/no/such/autos.csv"), WINDOWS_1252).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }

    #[test]
    fn test_wrong_encoding_is_decode_error() {
        let path = temp_path("autos_eda_loader_decode.csv");
        // 0xE4 alone is not valid UTF-8
        fs::write(&path, b"name\nK\xE4fer\n").unwrap();

        let err = load_table(&path, UTF_8).unwrap_err();
        assert!(matches!(err, PipelineError::Decode { .. }));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let path = temp_path("autos_eda_loader_ragged.csv");
        fs::write(&path, b"a,b\n1,2,3\n").unwrap();

        let err = load_table(&path, WINDOWS_1252).unwrap_err();
        assert!(matches!(err, PipelineError::Csv(_)));

        fs::remove_file(&path).unwrap();
    }
}

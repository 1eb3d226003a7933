use std::path::Path;

use log::debug;
use serde_json::Value as JsonValue;

use super::model::{Catalog, StarRecord};
use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a star catalog from a JSON file.
///
/// Expected layout (records-oriented, one object per star):
///
/// ```json
/// [
///   { "RA": "00:05:09.9", "DEC": "+45:13:45", "MAG": "6.70", "Title HD": "A1Vn" },
///   ...
/// ]
/// ```
///
/// The file is read in one go. Only the top-level shape is checked here;
/// `MAG` is not looked at until filtering.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let bytes = std::fs::read(path).map_err(|source| CatalogError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {path:?}", bytes.len());

    parse_catalog(&bytes).map_err(|detail| CatalogError::Parse {
        path: path.to_path_buf(),
        detail,
    })
}

// ---------------------------------------------------------------------------
// JSON parsing
// ---------------------------------------------------------------------------

/// Invalid UTF-8 is reported here, as a parse failure, not as a read error.
fn parse_catalog(bytes: &[u8]) -> Result<Catalog, String> {
    let root: JsonValue =
        serde_json::from_slice(bytes).map_err(|e| format!("parsing JSON: {e}"))?;

    let items = match root {
        JsonValue::Array(items) => items,
        other => {
            return Err(format!(
                "expected top-level JSON array, found {}",
                json_type_name(&other)
            ))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match item {
            JsonValue::Object(fields) => records.push(StarRecord::new(fields)),
            other => {
                return Err(format!(
                    "row {i} is not a JSON object (found {})",
                    json_type_name(&other)
                ))
            }
        }
    }

    Ok(Catalog::from_records(records))
}

fn json_type_name(val: &JsonValue) -> &'static str {
    match val {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

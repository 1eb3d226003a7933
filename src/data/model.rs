use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::MagnitudeError;

/// Field holding the visual magnitude.
pub const MAG_FIELD: &str = "MAG";

// ---------------------------------------------------------------------------
// StarRecord – one entry of the catalog
// ---------------------------------------------------------------------------

/// A single star. Fields are kept as-is, in source order; only `MAG` is
/// ever interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRecord {
    pub fields: Map<String, JsonValue>,
}

impl StarRecord {
    pub fn new(fields: Map<String, JsonValue>) -> Self {
        Self { fields }
    }

    /// Read `MAG` as a float.
    ///
    /// Strings are trimmed and parsed; JSON numbers are taken directly.
    /// Any other JSON type is rejected.
    pub fn magnitude(&self) -> Result<f64, MagnitudeError> {
        let value = self.fields.get(MAG_FIELD).ok_or(MagnitudeError::Missing)?;
        magnitude_from_json(value)
    }
}

fn magnitude_from_json(value: &JsonValue) -> Result<f64, MagnitudeError> {
    match value {
        JsonValue::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| MagnitudeError::NotNumeric(s.clone())),
        JsonValue::Number(n) => n
            .as_f64()
            .ok_or_else(|| MagnitudeError::NotNumeric(n.to_string())),
        JsonValue::Null => Err(MagnitudeError::WrongType("null")),
        JsonValue::Bool(_) => Err(MagnitudeError::WrongType("bool")),
        JsonValue::Array(_) => Err(MagnitudeError::WrongType("array")),
        JsonValue::Object(_) => Err(MagnitudeError::WrongType("object")),
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete ordered collection
// ---------------------------------------------------------------------------

/// Ordered star records, in the order they appeared in the source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub records: Vec<StarRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<StarRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StarRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: JsonValue) -> StarRecord {
        match v {
            JsonValue::Object(map) => StarRecord::new(map),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn string_magnitude() {
        assert_eq!(record(json!({"MAG": "4.0"})).magnitude(), Ok(4.0));
        assert_eq!(record(json!({"MAG": " 5.25 "})).magnitude(), Ok(5.25));
        assert_eq!(record(json!({"MAG": "-1.46"})).magnitude(), Ok(-1.46));
    }

    #[test]
    fn numeric_magnitude() {
        assert_eq!(record(json!({"MAG": 3})).magnitude(), Ok(3.0));
        assert_eq!(record(json!({"MAG": 6.5})).magnitude(), Ok(6.5));
    }

    #[test]
    fn missing_magnitude() {
        assert_eq!(
            record(json!({"NAME": "Vega"})).magnitude(),
            Err(MagnitudeError::Missing)
        );
    }

    #[test]
    fn non_numeric_magnitude() {
        assert_eq!(
            record(json!({"MAG": "bright"})).magnitude(),
            Err(MagnitudeError::NotNumeric("bright".into()))
        );
        assert_eq!(
            record(json!({"MAG": ""})).magnitude(),
            Err(MagnitudeError::NotNumeric(String::new()))
        );
    }

    #[test]
    fn wrong_type_magnitude() {
        assert_eq!(
            record(json!({"MAG": null})).magnitude(),
            Err(MagnitudeError::WrongType("null"))
        );
        assert_eq!(
            record(json!({"MAG": true})).magnitude(),
            Err(MagnitudeError::WrongType("bool"))
        );
    }

    #[test]
    fn field_order_is_preserved() {
        let rec: StarRecord =
            serde_json::from_str(r#"{"RA":"00:05:09.9","MAG":"6.70","DEC":"+45:13:45"}"#)
                .unwrap();
        let keys: Vec<&str> = rec.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["RA", "MAG", "DEC"]);
    }
}

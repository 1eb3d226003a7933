use super::model::Catalog;
use crate::error::CatalogError;

/// Counts from one filtering pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSummary {
    pub total: usize,
    pub kept: usize,
    pub dropped: usize,
    pub threshold: f64,
}

/// Keep the records whose magnitude is `>= threshold`, in their original order.
///
/// Stops at the first record whose `MAG` cannot be read; a record that
/// fails here is never silently skipped. A `NaN` magnitude compares false
/// and is dropped.
pub fn filter_by_magnitude(
    catalog: &Catalog,
    threshold: f64,
) -> Result<(Catalog, FilterSummary), CatalogError> {
    let mut kept = Vec::new();

    for (index, record) in catalog.iter().enumerate() {
        let mag = record
            .magnitude()
            .map_err(|source| CatalogError::Field { index, source })?;
        if mag >= threshold {
            kept.push(record.clone());
        }
    }

    let summary = FilterSummary {
        total: catalog.len(),
        kept: kept.len(),
        dropped: catalog.len() - kept.len(),
        threshold,
    };
    Ok((Catalog::from_records(kept), summary))
}

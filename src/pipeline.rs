use std::path::Path;

use log::info;

use crate::config::FilterConfig;
use crate::data::filter::{filter_by_magnitude, FilterSummary};
use crate::data::loader::load_catalog;
use crate::data::writer::save_catalog;
use crate::error::CatalogError;

/// Load `input_path`, keep stars with `MAG >= threshold`, write them to
/// `output_path`.
///
/// The output file is only touched once the whole catalog has been loaded
/// and filtered, so load and field errors leave it alone.
pub fn filter_catalog(
    input_path: &Path,
    output_path: &Path,
    threshold: f64,
) -> Result<FilterSummary, CatalogError> {
    let catalog = load_catalog(input_path)?;
    info!("loaded {} stars from {input_path:?}", catalog.len());

    let (filtered, summary) = filter_by_magnitude(&catalog, threshold)?;
    info!(
        "kept {} of {} stars with MAG >= {} ({} dropped)",
        summary.kept, summary.total, summary.threshold, summary.dropped
    );

    save_catalog(output_path, &filtered)?;
    info!("wrote {output_path:?}");

    Ok(summary)
}

/// Run [`filter_catalog`] with the paths and threshold from `config`.
pub fn run(config: &FilterConfig) -> Result<FilterSummary, CatalogError> {
    filter_catalog(&config.input_path, &config.output_path, config.threshold)
}

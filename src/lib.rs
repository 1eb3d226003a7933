//! Bright Star Catalogue magnitude filter.
//!
//! Reads a JSON array of star records, keeps the ones whose `MAG` is at or
//! above a threshold (larger magnitude means dimmer), and writes them back
//! out as 4-space indented JSON. Records are never modified, only kept or
//! dropped, and their relative order is preserved.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`data::model`] | [`Catalog`], [`StarRecord`], magnitude parsing |
//! | [`data::loader`] | [`load_catalog`] |
//! | [`data::filter`] | [`filter_by_magnitude`], [`FilterSummary`] |
//! | [`data::writer`] | [`save_catalog`] (atomic), [`to_pretty_json`] |
//! | [`pipeline`] | [`filter_catalog`], the whole load → filter → save pass |
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use bsc_filter::filter_catalog;
//!
//! let summary = filter_catalog(Path::new("BSC.json"), Path::new("BSC_filtered.json"), 4.0)?;
//! println!("kept {} of {}", summary.kept, summary.total);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;

pub use config::FilterConfig;
pub use data::filter::{filter_by_magnitude, FilterSummary};
pub use data::loader::load_catalog;
pub use data::model::{Catalog, StarRecord};
pub use data::writer::{save_catalog, to_pretty_json};
pub use error::{CatalogError, ErrorKind, MagnitudeError};
pub use pipeline::filter_catalog;

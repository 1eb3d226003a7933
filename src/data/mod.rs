/// Data layer: catalog types, loading, filtering and writing.
///
/// Architecture:
/// ```text
///   BSC.json
///      │
///      ▼
///   ┌──────────┐
///   │  loader   │  parse file → Catalog
///   └──────────┘
///      │
///      ▼
///   ┌──────────┐
///   │  filter   │  MAG >= threshold → filtered Catalog
///   └──────────┘
///      │
///      ▼
///   ┌──────────┐
///   │  writer   │  pretty JSON → tmp file → rename
///   └──────────┘
///      │
///      ▼
///   BSC_filtered.json
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;

/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ LaunchTable │  immutable rows, site order, payload extent
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  control values → row indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;

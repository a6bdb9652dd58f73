/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  shared header + Vec<Row>, every cell kept as text
///   └──────────┘
/// ```

pub mod loader;
pub mod model;

pub use model::{Dataset, Row};

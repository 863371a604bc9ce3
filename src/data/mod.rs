/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → JobTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  city + role criteria → filtered JobTable
///   └──────────┘
///        │
///        ├──────────────┬──────────────┐
///        ▼              ▼              ▼
///   ┌──────────┐   ┌──────────┐   ┌──────────┐
///   │ metrics   │   │  views    │   │ estimate  │
///   └──────────┘   └──────────┘   └──────────┘
///        └──────── pipeline::run ──────┘
/// ```
pub mod aggregate;
pub mod error;
pub mod estimate;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod views;

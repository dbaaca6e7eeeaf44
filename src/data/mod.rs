/// Data layer: core types, loading, and bound analysis.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file → Vec<RawRow>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  bounds   │  parse rows → Dataset, value bound, date bound
///   └──────────┘
///        │
///        ▼
///     scale / layout
/// ```

pub mod bounds;
pub mod loader;
pub mod model;

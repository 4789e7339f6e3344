/// Data layer: core types, loading, normalization, options and filtering.
///
/// Architecture:
/// ```text
///  location_counts_by_year.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  (normalized variant only) type → allowed vocabulary
///   └───────────┘
///        │
///        ├──────────────► options   distinct placenames / years / types
///        ▼
///   ┌──────────┐
///   │  filter   │  Selection → sorted Vec<&Row>
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod options;

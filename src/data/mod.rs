/// Data layer: core types, loading, filtering, selection and ranking.
///
/// Architecture:
/// ```text
///   word<TAB>count file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → FrequencyTable
///   └──────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  filter   │          │ selector │  term set of interest (unfiltered)
///   └──────────┘          └──────────┘
///        │                      │
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  ranker   │          │  ranker  │  descending, bounded top-N
///   └──────────┘          └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod ranker;
pub mod selector;

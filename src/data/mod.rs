//! Data layer: allow-list, core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!  cities_living_cost.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse CSV, keep GERMAN_CITIES, derive total cost
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ CityCostTable  │  immutable working set, one row per city
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  inclusive cost range → visible indices
//!   └──────────┘
//! ```

pub mod cities;
pub mod filter;
pub mod loader;
pub mod model;

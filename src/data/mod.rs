//! Data layer: loading, schema normalization, coercion, filtering,
//! aggregation.
//!
//! ```text
//!  autos.csv (Latin-1)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  decode + parse → RawTable (original 20 columns)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  schema   │  rename + drop → RawTable (canonical 17 columns)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  coerce   │  strip "$", ",", "km" → Vec<Listing>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  drop implausible prices / registration years
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ aggregate  │  brand summaries, date distributions
//!   └───────────┘
//! ```

pub mod aggregate;
pub mod coerce;
pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;

//! Batch analysis of a used-car listings CSV snapshot.
//!
//! The crate is one linear pipeline: load a Latin-1 CSV, normalize the
//! column schema, coerce decorated numeric columns to integers, drop
//! implausible rows, then summarize mean price and mean mileage per brand.
//! Every stage is a pure function from one value to the next, so each can
//! be tested in isolation.

pub mod data;
pub mod error;
pub mod report;

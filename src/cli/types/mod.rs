//! Type-safe wrappers, alias tables and parameter objects for NFL data queries.

pub mod operation;
pub mod params;
pub mod position;
pub mod time;

//! Core utilities for the NFL data bridge
//!
//! This module consolidates the pieces every operation shares:
//! - `cache`: File system caching of downloaded datasets
//! - `encode`: JSON response envelope and query metadata
//! - `filters`: Post-fetch row filtering
//! - `table`: Column-ordered table of JSON cells

pub mod cache;
pub mod encode;
pub mod filters;
pub mod table;

// Re-export commonly used items for convenience
pub use cache::{dataset_cache_path, default_cache_dir, read_if_fresh, write_bytes};
pub use encode::{encode_response, QueryMetadata};
pub use filters::{filter_table, RowFilter};
pub use table::Table;

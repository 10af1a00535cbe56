//! JSON response envelope: `{"data": [...], "meta": {...}}`.

use crate::core::table::Table;
use crate::{Result, Season};
use serde::Serialize;
use serde_json::{Map, Value};

/// Describes the query that produced a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryMetadata {
    pub source: &'static str,
    pub seasons: Vec<Season>,
    pub filters: Map<String, Value>,
}

impl QueryMetadata {
    pub fn new(source: &'static str, seasons: &[Season]) -> Self {
        Self {
            source,
            seasons: seasons.to_vec(),
            filters: Map::new(),
        }
    }

    /// Record a filter. `None` is kept and serialised as `null`.
    pub fn with_filter(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.filters.insert(name.to_string(), value.into());
        self
    }
}

#[derive(Serialize)]
struct Response<'a> {
    data: Vec<Map<String, Value>>,
    meta: &'a QueryMetadata,
}

/// Serialise a table and its metadata. Missing cells are already `null` in
/// [`Table`], so rows are emitted as-is in column order.
pub fn encode_response(table: &Table, meta: &QueryMetadata) -> Result<String> {
    let data = if table.is_empty() {
        Vec::new()
    } else {
        table.to_records()
    };
    Ok(serde_json::to_string(&Response { data, meta })?)
}

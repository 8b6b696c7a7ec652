//! IS-IS adjacency summary from the `Cisco-IOS-XE-isis-oper` model.
//!
//! Adjacencies under `data/isis-oper-data/isis-instance/isis-neighbor` are
//! grouped by `system-id`, in order of first appearance. The parser emits a
//! single record per device:
//!
//! | Key                    | Value                                          |
//! |------------------------|------------------------------------------------|
//! | `isis_neighbors_count` | number of distinct system ids                  |
//! | `isis-neighbors`       | one summary per system id, see below           |
//!
//! A summary holds the `system-id`, the `local_interfaces_status` of every
//! adjacency to it, and `neighbor_status`: 1 when at least one adjacency is
//! [`ADJACENCY_UP`], 0 otherwise.

use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use crate::error::{Result, ShapeError};
use crate::parser::{Parser, Record, navigate};
use crate::session::Device;

/// Filter id this parser is registered under.
pub const FILTER_ID: &str = "http://cisco.com/ns/yang/Cisco-IOS-XE-isis-oper:/isis-oper-data/isis-instance";

/// Adjacency state of an established neighbor.
pub const ADJACENCY_UP: &str = "isis-adj-up";

const NEIGHBORS: [&str; 4] = ["data", "isis-oper-data", "isis-instance", "isis-neighbor"];

/// Adjacency fields as `(reply key, summary key)`.
const ADJACENCY_FIELDS: [(&str, &str); 5] = [
    ("if-name", "interface_name"),
    ("level", "level"),
    ("ipv4-address", "local_ipv4_address"),
    ("state", "isis_status"),
    ("holdtime", "holdtime"),
];

/// Parser for IS-IS neighbor adjacencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsisOperParser;

impl Parser for IsisOperParser {
    fn parse(&self, reply: &Value, device: &Device, filter_id: &str) -> Result<Vec<Record>> {
        let grouped = group_by_system_id(reply)?;

        let summaries: Vec<Value> = grouped
            .into_iter()
            .map(|(system_id, adjacencies)| {
                let up = adjacencies
                    .iter()
                    .any(|adjacency| adjacency["isis_status"] == ADJACENCY_UP);
                json!({
                    "system-id": system_id,
                    "local_interfaces_status": adjacencies,
                    "neighbor_status": u8::from(up),
                })
            })
            .collect();

        let record = Record::new()
            .with("isis_neighbors_count", summaries.len())
            .with("isis-neighbors", summaries)
            .with_identity(device, filter_id);
        Ok(vec![record])
    }
}

/// Group adjacencies by neighbor system id, keeping first-seen order.
pub fn group_by_system_id(reply: &Value) -> std::result::Result<IndexMap<String, Vec<Value>>, ShapeError> {
    let path = NEIGHBORS.join("/");
    let neighbors = navigate::entries(navigate::descend(reply, &NEIGHBORS)?, &path)?;

    let mut grouped: IndexMap<String, Vec<Value>> = IndexMap::new();
    for (index, neighbor) in neighbors.into_iter().enumerate() {
        let neighbor_path = format!("{path}[{index}]");
        let system_id = navigate::text(neighbor, "system-id", &neighbor_path)?;
        let summary = adjacency(neighbor, &neighbor_path)?;
        grouped.entry(system_id.to_string()).or_default().push(summary);
    }
    Ok(grouped)
}

fn adjacency(neighbor: &Map<String, Value>, path: &str) -> std::result::Result<Value, ShapeError> {
    let mut summary = Map::with_capacity(ADJACENCY_FIELDS.len());
    for (source, target) in ADJACENCY_FIELDS {
        summary.insert(target.to_string(), navigate::field(neighbor, source, path)?.clone());
    }
    Ok(Value::Object(summary))
}

//! Interface statistics from the `Cisco-IOS-XE-interfaces-oper` model.
//!
//! # Reply Shape
//!
//! ```text
//! data
//! └── interfaces
//!     └── interface[]
//!         ├── name               "GigabitEthernet1"
//!         ├── oper-status        "if-oper-state-ready" | "if-oper-state-no-pass" | ...
//!         └── statistics
//!             ├── in-octets      "4249319"
//!             └── ...
//! ```
//!
//! Every interface becomes one record with `name` (spaces replaced by
//! underscores), `operational_status` (1 when ready, else 0) and the counters
//! listed in [`COUNTERS`] as integers.

use serde_json::{Map, Value};

use crate::error::{Result, ShapeError};
use crate::parser::{Parser, Record, navigate};
use crate::session::Device;

/// Filter id this parser is registered under.
pub const FILTER_ID: &str = "Cisco-IOS-XE-interfaces-oper.xml";

/// Operational state reported by an interface that is up.
pub const UP_STATE: &str = "if-oper-state-ready";

const INTERFACES: [&str; 3] = ["data", "interfaces", "interface"];

/// Statistics counters as `(reply key, record key)`.
pub const COUNTERS: [(&str, &str); 23] = [
    ("in-octets", "in_octets"),
    ("in-errors", "in_errors"),
    ("out-octets", "out_octets"),
    ("out-errors", "out_errors"),
    ("in-broadcast-pkts", "in-broadcast-pkts"),
    ("in-crc-errors", "in-crc-errors"),
    ("in-discards", "in-discards"),
    ("in-discards-64", "in-discards-64"),
    ("in-errors-64", "in-errors-64"),
    ("in-multicast-pkts", "in-multicast-pkts"),
    ("in-unicast-pkts", "in-unicast-pkts"),
    ("in-unknown-protos", "in-unknown-protos"),
    ("in-unknown-protos-64", "in-unknown-protos-64"),
    ("num-flaps", "num-flaps"),
    ("out-broadcast-pkts", "out-broadcast-pkts"),
    ("out-discards", "out-discards"),
    ("out-multicast-pkts", "out-multicast-pkts"),
    ("out-octets-64", "out-octets-64"),
    ("out-unicast-pkts", "out-unicast-pkts"),
    ("rx-kbps", "rx-kbps"),
    ("rx-pps", "rx-pps"),
    ("tx-kbps", "tx-kbps"),
    ("tx-pps", "tx-pps"),
];

/// Parser for IOS-XE native interface statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfacesOperParser;

impl Parser for InterfacesOperParser {
    fn parse(&self, reply: &Value, device: &Device, filter_id: &str) -> Result<Vec<Record>> {
        let path = INTERFACES.join("/");
        let interfaces = navigate::entries(navigate::descend(reply, &INTERFACES)?, &path)?;

        interfaces
            .into_iter()
            .enumerate()
            .map(|(index, interface)| {
                let record = interface_record(interface, &format!("{path}[{index}]"))?;
                Ok(record.with_identity(device, filter_id))
            })
            .collect()
    }
}

fn interface_record(interface: &Map<String, Value>, path: &str) -> std::result::Result<Record, ShapeError> {
    let statistics = navigate::child(interface, "statistics", path)?;
    let statistics_path = format!("{path}/statistics");

    let mut record = Record::new();
    for (source, target) in COUNTERS {
        record.insert(target, navigate::counter(statistics, source, &statistics_path)?);
    }

    let oper_status = navigate::text(interface, "oper-status", path)?;
    let name = navigate::text(interface, "name", path)?;
    Ok(record
        .with("operational_status", u8::from(oper_status == UP_STATE))
        .with("name", name.replace(' ', "_")))
}

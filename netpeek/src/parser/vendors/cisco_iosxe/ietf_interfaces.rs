//! Interface counters from the standard `ietf-interfaces` state tree.
//!
//! Reads `data/interfaces-state/interface`. Each interface yields `name`,
//! `operational_status` (1 when `oper-status` is `up`) and four counters.

use serde_json::{Map, Value};

use crate::error::{Result, ShapeError};
use crate::parser::{Parser, Record, navigate};
use crate::session::Device;

/// Filter id this parser is registered under.
pub const FILTER_ID: &str = "cisco_xe_ietf-interfaces.xml";

const INTERFACES: [&str; 3] = ["data", "interfaces-state", "interface"];

const COUNTERS: [(&str, &str); 4] = [
    ("in-octets", "in_octets"),
    ("in-errors", "in_errors"),
    ("out-octets", "out_octets"),
    ("out-errors", "out_errors"),
];

/// Parser for `ietf-interfaces` operational state.
#[derive(Debug, Clone, Copy, Default)]
pub struct IetfInterfacesParser;

impl Parser for IetfInterfacesParser {
    fn parse(&self, reply: &Value, device: &Device, filter_id: &str) -> Result<Vec<Record>> {
        let path = INTERFACES.join("/");
        let interfaces = navigate::entries(navigate::descend(reply, &INTERFACES)?, &path)?;

        let mut records = Vec::with_capacity(interfaces.len());
        for (index, interface) in interfaces.into_iter().enumerate() {
            let record = interface_record(interface, &format!("{path}[{index}]"))?;
            records.push(record.with_identity(device, filter_id));
        }
        Ok(records)
    }
}

fn interface_record(interface: &Map<String, Value>, path: &str) -> std::result::Result<Record, ShapeError> {
    let up = navigate::text(interface, "oper-status", path)? == "up";
    let mut record = Record::new().with("operational_status", u8::from(up));

    let statistics = navigate::child(interface, "statistics", path)?;
    let statistics_path = format!("{path}/statistics");
    for (source, target) in COUNTERS {
        record.insert(target, navigate::counter(statistics, source, &statistics_path)?);
    }

    let name = navigate::text(interface, "name", path)?;
    Ok(record.with("name", name.replace(' ', "_")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::session::DeviceSettings;
    use serde_json::json;

    fn device() -> Device {
        Device::new(DeviceSettings::new("localhost", "user", "pass")).unwrap()
    }

    fn reply() -> Value {
        json!({
            "data": {
                "@xmlns": "urn:ietf:params:xml:ns:netconf:base:1.0",
                "@xmlns:nc": "urn:ietf:params:xml:ns:netconf:base:1.0",
                "interfaces-state": {
                    "@xmlns": "urn:ietf:params:xml:ns:yang:ietf-interfaces",
                    "interface": [
                        {
                            "name": "GigabitEthernet1",
                            "type": {
                                "@xmlns:ianaift": "urn:ietf:params:xml:ns:yang:iana-if-type",
                                "#text": "ianaift:ethernetCsmacd"
                            },
                            "oper-status": "up",
                            "statistics": {
                                "in-octets": "3435605",
                                "in-errors": "0",
                                "out-octets": "35813498",
                                "out-errors": "0"
                            }
                        },
                        {
                            "name": "Loopback0",
                            "type": {
                                "@xmlns:ianaift": "urn:ietf:params:xml:ns:yang:iana-if-type",
                                "#text": "ianaift:softwareLoopback"
                            },
                            "oper-status": "up",
                            "statistics": {
                                "in-octets": "0",
                                "in-errors": "0",
                                "out-octets": "22776",
                                "out-errors": "0"
                            }
                        }
                    ]
                }
            }
        })
    }

    fn expected(name: &str, in_octets: u64, out_octets: u64) -> Record {
        Record::new()
            .with("operational_status", 1)
            .with("in_octets", in_octets)
            .with("in_errors", 0)
            .with("out_octets", out_octets)
            .with("out_errors", 0)
            .with("name", name)
            .with("field", FILTER_ID)
            .with("device", "localhost")
            .with("ip", "localhost")
    }

    #[test]
    fn test_parse() {
        let records = IetfInterfacesParser.parse(&reply(), &device(), FILTER_ID).unwrap();
        assert_eq!(
            records,
            vec![
                expected("GigabitEthernet1", 3435605, 35813498),
                expected("Loopback0", 0, 22776),
            ]
        );
    }

    #[test]
    fn test_down_interface() {
        let mut reply = reply();
        reply["data"]["interfaces-state"]["interface"][1]["oper-status"] = json!("down");
        reply["data"]["interfaces-state"]["interface"][1]["name"] = json!("Tunnel 10");

        let records = IetfInterfacesParser.parse(&reply, &device(), FILTER_ID).unwrap();
        assert_eq!(records[1]["operational_status"], 0);
        assert_eq!(records[1]["name"], "Tunnel_10");
        // only the exact token counts as up
        reply["data"]["interfaces-state"]["interface"][0]["oper-status"] = json!("UP");
        let records = IetfInterfacesParser.parse(&reply, &device(), FILTER_ID).unwrap();
        assert_eq!(records[0]["operational_status"], 0);
    }

    #[test]
    fn test_single_interface() {
        let mut reply = reply();
        let loopback = reply["data"]["interfaces-state"]["interface"][1].clone();
        reply["data"]["interfaces-state"]["interface"] = loopback;

        let records = IetfInterfacesParser.parse(&reply, &device(), FILTER_ID).unwrap();
        assert_eq!(records, vec![expected("Loopback0", 0, 22776)]);
    }

    #[test]
    fn test_shape_errors() {
        let mut reply = reply();
        reply["data"]["interfaces-state"]["interface"][0]["statistics"]["in-errors"] = json!("-");
        let err = IetfInterfacesParser.parse(&reply, &device(), FILTER_ID).unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::NotNumeric { .. })));

        let err = IetfInterfacesParser
            .parse(&json!({"data": null}), &device(), FILTER_ID)
            .unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::UnexpectedType { .. })));
    }
}

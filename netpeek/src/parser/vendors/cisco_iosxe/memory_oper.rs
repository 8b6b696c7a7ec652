//! Memory pool usage from the `Cisco-IOS-XE-memory-oper` model.

use serde_json::{Map, Value};

use crate::error::{Result, ShapeError};
use crate::parser::{Parser, Record, navigate};
use crate::session::Device;

/// Filter id this parser is registered under.
pub const FILTER_ID: &str = "Cisco-IOS-XE-memory-oper.xml";

const POOLS: [&str; 3] = ["data", "memory-statistics", "memory-statistic"];

/// Parser for memory pool statistics.
///
/// One record per pool with its `name` and `percent_used`, the used share
/// of the pool's total memory as a percentage.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryOperParser;

impl Parser for MemoryOperParser {
    fn parse(&self, reply: &Value, device: &Device, filter_id: &str) -> Result<Vec<Record>> {
        let path = POOLS.join("/");
        let pools = navigate::entries(navigate::descend(reply, &POOLS)?, &path)?;

        pools
            .into_iter()
            .enumerate()
            .map(|(index, pool)| {
                let record = pool_record(pool, &format!("{path}[{index}]"))?;
                Ok(record.with_identity(device, filter_id))
            })
            .collect()
    }
}

fn pool_record(pool: &Map<String, Value>, path: &str) -> std::result::Result<Record, ShapeError> {
    let used = navigate::counter(pool, "used-memory", path)?;
    let total = navigate::counter(pool, "total-memory", path)?;
    if total == 0 {
        return Err(ShapeError::ZeroDenominator {
            path: format!("{path}/total-memory"),
        });
    }

    Ok(Record::new()
        .with("name", navigate::text(pool, "name", path)?)
        .with("percent_used", used as f64 / total as f64 * 100.0))
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
                "memory-statistics": {
                    "@xmlns": "http://cisco.com/ns/yang/Cisco-IOS-XE-memory-oper",
                    "memory-statistic": [
                        {
                            "name": "Processor",
                            "total-memory": "2028113884",
                            "used-memory": "192040880"
                        },
                        {
                            "name": "reserve Processor",
                            "total-memory": "102404",
                            "used-memory": "92"
                        },
                        {
                            "name": "lsmpi_io",
                            "total-memory": "3149400",
                            "used-memory": "3148576"
                        }
                    ]
                }
            }
        })
    }

    #[test]
    fn test_parse() {
        let records = MemoryOperParser.parse(&reply(), &device(), FILTER_ID).unwrap();

        let usage: Vec<_> = records
            .iter()
            .map(|record| (record["name"].clone(), record["percent_used"].clone()))
            .collect();
        assert_eq!(
            usage,
            vec![
                (json!("Processor"), json!(9.468939664336915)),
                (json!("reserve Processor"), json!(0.08984024061560095)),
                (json!("lsmpi_io"), json!(99.97383628627675)),
            ]
        );

        for record in &records {
            assert_eq!(record["field"], FILTER_ID);
            assert_eq!(record["device"], "localhost");
            assert_eq!(record["ip"], "localhost");
            assert_eq!(record.len(), 5);
        }
    }

    #[test]
    fn test_name_kept_verbatim() {
        let records = MemoryOperParser.parse(&reply(), &device(), FILTER_ID).unwrap();
        assert_eq!(records[1]["name"], "reserve Processor");
    }

    #[test]
    fn test_zero_total() {
        let mut reply = reply();
        reply["data"]["memory-statistics"]["memory-statistic"][2]["total-memory"] = json!("0");

        let err = MemoryOperParser.parse(&reply, &device(), FILTER_ID).unwrap_err();
        match err {
            Error::Shape(ShapeError::ZeroDenominator { path }) => {
                assert_eq!(path, "data/memory-statistics/memory-statistic[2]/total-memory");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_shape_errors() {
        let mut reply = reply();
        reply["data"]["memory-statistics"]["memory-statistic"][1]["used-memory"] = json!("n/a");
        let err = MemoryOperParser.parse(&reply, &device(), FILTER_ID).unwrap_err();
        match err {
            Error::Shape(ShapeError::NotNumeric { path, value }) => {
                assert_eq!(path, "data/memory-statistics/memory-statistic[1]/used-memory");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }

        let mut reply = self::reply();
        reply["data"]["memory-statistics"]["memory-statistic"][0]["total-memory"] = json!("-1");
        let err = MemoryOperParser.parse(&reply, &device(), FILTER_ID).unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::NotNumeric { .. })));

        let err = MemoryOperParser
            .parse(&json!({"data": {}}), &device(), FILTER_ID)
            .unwrap_err();
        match err {
            Error::Shape(ShapeError::MissingPath { path }) => {
                assert_eq!(path, "data/memory-statistics");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_single_pool() {
        let reply = json!({
            "data": {
                "memory-statistics": {
                    "memory-statistic": {
                        "name": "Processor",
                        "total-memory": "200",
                        "used-memory": "50"
                    }
                }
            }
        });

        let records = MemoryOperParser.parse(&reply, &device(), FILTER_ID).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["percent_used"], 25.0);
    }
}

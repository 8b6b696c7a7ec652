//! Canned replies example: run the collection pipeline offline.
//!
//! This example wires a [`Connector`] that answers from recorded IOS-XE
//! replies instead of a live NETCONF session, then runs every shipped filter
//! against the sample device list. The second device is unreachable, so each
//! run also shows the per-device error record.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example canned_replies
//! RUST_LOG=debug cargo run --example canned_replies
//! ```

use std::path::Path;

use netpeek::error::SessionError;
use netpeek::{Connector, Device, NetconfClient, NetconfFilter, Session};

const IETF_INTERFACES: &str = r#"<data xmlns="urn:ietf:params:xml:ns:netconf:base:1.0">
  <interfaces-state xmlns="urn:ietf:params:xml:ns:yang:ietf-interfaces">
    <interface>
      <name>GigabitEthernet1</name>
      <type xmlns:ianaift="urn:ietf:params:xml:ns:yang:iana-if-type">ianaift:ethernetCsmacd</type>
      <oper-status>up</oper-status>
      <statistics>
        <in-octets>3435605</in-octets><in-errors>0</in-errors>
        <out-octets>35813498</out-octets><out-errors>0</out-errors>
      </statistics>
    </interface>
    <interface>
      <name>Loopback0</name>
      <type xmlns:ianaift="urn:ietf:params:xml:ns:yang:iana-if-type">ianaift:softwareLoopback</type>
      <oper-status>up</oper-status>
      <statistics>
        <in-octets>0</in-octets><in-errors>0</in-errors>
        <out-octets>22776</out-octets><out-errors>0</out-errors>
      </statistics>
    </interface>
  </interfaces-state>
</data>"#;

const MEMORY: &str = r#"<data xmlns="urn:ietf:params:xml:ns:netconf:base:1.0">
  <memory-statistics xmlns="http://cisco.com/ns/yang/Cisco-IOS-XE-memory-oper">
    <memory-statistic>
      <name>Processor</name><total-memory>2028113884</total-memory><used-memory>192040880</used-memory>
    </memory-statistic>
    <memory-statistic>
      <name>lsmpi_io</name><total-memory>3149400</total-memory><used-memory>3148576</used-memory>
    </memory-statistic>
  </memory-statistics>
</data>"#;

const ISIS: &str = r#"<data xmlns="urn:ietf:params:xml:ns:netconf:base:1.0">
  <isis-oper-data xmlns="http://cisco.com/ns/yang/Cisco-IOS-XE-isis-oper">
    <isis-instance>
      <tag>1</tag>
      <isis-neighbor>
        <system-id>00:00:00:00:00:0b</system-id>
        <if-name>GigabitEthernet3</if-name>
        <level>isis-level-1</level>
        <ipv4-address>10.4.4.1</ipv4-address>
        <state>isis-adj-up</state>
        <holdtime>22</holdtime>
      </isis-neighbor>
    </isis-instance>
  </isis-oper-data>
</data>"#;

const NATIVE: &str = r#"<data xmlns="urn:ietf:params:xml:ns:netconf:base:1.0">
  <native xmlns="http://cisco.com/ns/yang/Cisco-IOS-XE-native">
    <version>17.9</version>
    <hostname>csr1000v-1</hostname>
  </native>
</data>"#;

/// Recorded replies, keyed by a model name found in the filter.
const REPLIES: [(&str, &str); 4] = [
    ("ietf-interfaces", IETF_INTERFACES),
    ("Cisco-IOS-XE-memory-oper", MEMORY),
    ("Cisco-IOS-XE-isis-oper", ISIS),
    ("Cisco-IOS-XE-native", NATIVE),
];

struct CannedConnector;

struct CannedSession;

impl Connector for CannedConnector {
    type Session = CannedSession;

    async fn connect(&self, device: &Device) -> netpeek::Result<CannedSession> {
        if device.host().contains("iosxr") {
            return Err(SessionError::ConnectionFailed {
                host: device.host().to_string(),
                port: device.port(),
                message: "no route to host".to_string(),
            }
            .into());
        }
        Ok(CannedSession)
    }
}

impl Session for CannedSession {
    async fn get(&mut self, filter: &NetconfFilter) -> netpeek::Result<String> {
        let text = match filter {
            NetconfFilter::Subtree(xml) => xml.clone(),
            NetconfFilter::XPath { namespaces, select } => {
                format!("{} {select}", namespaces.values().cloned().collect::<Vec<_>>().join(" "))
            }
        };
        REPLIES
            .iter()
            .find(|(model, _)| text.contains(model))
            .map(|(_, reply)| reply.to_string())
            .ok_or_else(|| {
                SessionError::Rpc {
                    message: "unknown-element".to_string(),
                }
                .into()
            })
    }

    async fn close(self) -> netpeek::Result<()> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut client = NetconfClient::builder()
        .devices_dir(root.join("devices"))
        .filters_dir(root.join("filters"))
        .build();
    client.set_device_settings("example.json")?;

    let xml_filters = [
        "cisco_xe_ietf-interfaces.xml",
        "Cisco-IOS-XE-memory-oper.xml",
        "Cisco-IOS-XE-native-hostname.xml",
    ];
    for xml_filter in xml_filters {
        client.set_xml_filter(xml_filter)?;
        println!("\n{xml_filter}");
        println!("{}", "-".repeat(50));
        println!("{}", client.run(&CannedConnector).await?);
    }

    let xpath = "http://cisco.com/ns/yang/Cisco-IOS-XE-isis-oper:/isis-oper-data/isis-instance";
    client.set_xpath_filter(xpath)?;
    println!("\n{xpath}");
    println!("{}", "-".repeat(50));
    println!("{}", client.run(&CannedConnector).await?);

    Ok(())
}

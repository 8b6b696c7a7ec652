//! # netpeek
//!
//! NETCONF state collector that flattens nested device replies into uniform
//! records.
//!
//! netpeek queries a list of devices with one filter, decodes every reply,
//! and reshapes it into flat JSON records tagged with the device and the
//! filter that produced them.
//!
//! ## Features
//!
//! - Subtree (XML) and XPath filters, from inline text or filter files
//! - Parsers for Cisco IOS-XE interface, memory and IS-IS operational data
//! - Namespace-stripping fallback for every other filter
//! - Per-device failure isolation: one bad device never aborts the batch
//! - Pluggable session layer through the [`Connector`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use netpeek::{Connector, NetconfClient};
//!
//! async fn collect(connector: impl Connector) -> Result<(), netpeek::Error> {
//!     let mut client = NetconfClient::new();
//!     client.set_device_settings(
//!         r#"[{"host": "10.0.0.1", "username": "admin", "password": "secret"}]"#,
//!     )?;
//!     client.set_xpath_filter(
//!         "http://cisco.com/ns/yang/Cisco-IOS-XE-isis-oper:/isis-oper-data/isis-instance",
//!     )?;
//!
//!     println!("{}", client.run(&connector).await?);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod parser;
pub mod session;
pub mod settings;
pub mod xml;

// Re-export main types for convenience
pub use client::{ClientBuilder, NetconfClient};
pub use error::{Error, Result};
pub use parser::{Parser, ParserRegistry, Record};
pub use session::{Connector, Device, DeviceSettings, NetconfFilter, Session};
pub use settings::{Cli, DeviceSource, ResolvedFilter};

//! Collection pipeline.
//!
//! For every configured device, in order: validate its settings, open a
//! session through the [`Connector`], run the query, decode the reply, and
//! hand it to the parser registered for the filter id. A device that fails
//! at any step contributes a single `{"error": ...}` record and the run moves
//! on to the next device.
//!
//! # Example
//!
//! ```rust,no_run
//! use netpeek::client::NetconfClient;
//! use netpeek::session::Connector;
//!
//! # async fn example(connector: impl Connector) -> Result<(), netpeek::Error> {
//! let mut client = NetconfClient::new();
//! client.set_device_settings("devices.json")?;
//! client.set_xml_filter("Cisco-IOS-XE-memory-oper.xml")?;
//!
//! println!("{}", client.run(&connector).await?);
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod output;

pub use builder::ClientBuilder;

use std::sync::Arc;

use clap::Parser as _;
use log::{debug, info, warn};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::parser::{ParserRegistry, Record};
use crate::session::{Connector, Device, Session};
use crate::settings::{Cli, DeviceSource, ResolvedFilter, Settings};
use crate::xml;

/// Client holding the run settings and the parser registry.
#[derive(Debug, Clone)]
pub struct NetconfClient {
    settings: Settings,
    registry: Option<Arc<ParserRegistry>>,
}

impl NetconfClient {
    /// Create a client with default settings.
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /// Create a builder for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(settings: Settings, registry: Option<Arc<ParserRegistry>>) -> Self {
        Self { settings, registry }
    }

    /// Create a client from parsed command line arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self::from_parts(Settings::from_cli(cli)?, None))
    }

    /// Set the device settings: a list of settings objects, a JSON document,
    /// or the name of a JSON file.
    pub fn set_device_settings(&mut self, source: impl Into<DeviceSource>) -> Result<()> {
        Ok(self.settings.set_device_settings(source)?)
    }

    /// Set an XML subtree filter: inline XML or the name of an XML file.
    pub fn set_xml_filter(&mut self, source: &str) -> Result<()> {
        Ok(self.settings.set_xml_filter(source)?)
    }

    /// Set an XPath filter expression.
    pub fn set_xpath_filter(&mut self, expression: &str) -> Result<()> {
        Ok(self.settings.set_xpath_filter(expression)?)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parser registry in use.
    pub fn registry(&self) -> &ParserRegistry {
        self.registry.as_deref().unwrap_or(ParserRegistry::global())
    }

    /// Query every device and return the records of each, in device order.
    pub async fn collect<C: Connector>(&self, connector: &C) -> Result<Vec<Vec<Record>>> {
        let devices = self.settings.devices()?;
        let filter = self.settings.filter()?;
        collect(connector, self.registry(), devices, filter).await
    }

    /// Query every device and return all records as a JSON array.
    pub async fn run<C: Connector>(&self, connector: &C) -> Result<String> {
        let records: Vec<Record> = self.collect(connector).await?.into_iter().flatten().collect();
        output::render(&records)
    }

    /// Parse the process arguments and run.
    ///
    /// Invalid arguments print usage and exit the process.
    pub async fn execute_cli<C: Connector>(connector: &C) -> Result<String> {
        let cli = Cli::parse();
        Self::from_cli(&cli)?.run(connector).await
    }
}

impl Default for NetconfClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Query `devices` one after the other.
///
/// Returns one entry per device, in input order. A device that fails holds
/// a single error record. Fails only when `devices` is empty.
pub async fn collect<C: Connector>(
    connector: &C,
    registry: &ParserRegistry,
    devices: &[Value],
    filter: &ResolvedFilter,
) -> Result<Vec<Vec<Record>>> {
    if devices.is_empty() {
        return Err(ConfigError::NoDevices.into());
    }

    let mut results = Vec::with_capacity(devices.len());
    let mut failed = 0;
    for (index, settings) in devices.iter().enumerate() {
        let records = match query_device(connector, registry, settings, filter).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Device #{} failed: {}", index + 1, e);
                failed += 1;
                vec![Record::error(e.to_string())]
            }
        };
        results.push(records);
    }

    info!(
        "Collected '{}' from {} device(s), {} failed",
        filter.id,
        devices.len(),
        failed
    );
    Ok(results)
}

/// Like [`collect`], with the records of all devices in one list.
pub async fn run<C: Connector>(
    connector: &C,
    registry: &ParserRegistry,
    devices: &[Value],
    filter: &ResolvedFilter,
) -> Result<Vec<Record>> {
    let results = collect(connector, registry, devices, filter).await?;
    Ok(results.into_iter().flatten().collect())
}

async fn query_device<C: Connector>(
    connector: &C,
    registry: &ParserRegistry,
    settings: &Value,
    filter: &ResolvedFilter,
) -> Result<Vec<Record>> {
    let device = Device::from_value(settings)?;
    debug!("Querying {} at {}", device.hostname(), device.socket_addr());

    let mut session = connector.connect(&device).await?;
    let reply = session.get(&filter.filter).await;
    if let Err(e) = session.close().await {
        warn!("Failed to close session to {}: {}", device.host(), e);
    }
    let tree = xml::to_tree(&reply?)?;

    if registry.contains(&filter.id) {
        debug!("Parsing reply from {} with parser for '{}'", device.hostname(), filter.id);
    } else {
        debug!("No parser for '{}', using default parser", filter.id);
    }
    registry.resolve(&filter.id).parse(&tree, &device, &filter.id)
}

//! Run settings: the device list and the filter to query.
//!
//! Device settings are accepted as an in-memory list, as a JSON document, or
//! as the name of a JSON file. Filters are resolved by [`filter`]. Relative
//! file names that do not exist as given are looked up in the devices and
//! filters directories.

pub mod cli;
pub mod files;
pub mod filter;

pub use cli::{Cli, FilterArgs};
pub use filter::{GENERIC_FILTER_ID, ResolvedFilter};

use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use crate::error::ConfigError;

/// Default directory searched for device settings files.
pub const DEFAULT_DEVICES_DIR: &str = "devices";

/// Default directory searched for XML filter files.
pub const DEFAULT_FILTERS_DIR: &str = "filters";

/// Where device settings come from.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceSource {
    /// Device settings objects.
    List(Vec<Value>),

    /// A JSON document, or the name of a file holding one.
    Text(String),
}

impl From<Vec<Value>> for DeviceSource {
    fn from(devices: Vec<Value>) -> Self {
        Self::List(devices)
    }
}

impl From<&str> for DeviceSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DeviceSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Load the device settings list from `source`.
///
/// A single settings object is treated as a list of one.
pub fn load_devices(source: DeviceSource, devices_dir: &Path) -> Result<Vec<Value>, ConfigError> {
    let text = match source {
        DeviceSource::List(devices) => return Ok(devices),
        DeviceSource::Text(text) => text,
    };

    let document = match serde_json::from_str::<Value>(&text) {
        Ok(document) => document,
        Err(_) => {
            let path = files::resolve_path(&text, devices_dir);
            debug!("Loading device settings from {}", path.display());
            let content = files::read_file(&path)?;
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidSettings {
                message: format!("{}: {e}", path.display()),
            })?
        }
    };

    match document {
        Value::Array(devices) => Ok(devices),
        object @ Value::Object(_) => Ok(vec![object]),
        other => Err(ConfigError::InvalidSettings {
            message: format!("expected a list of devices, found {other}"),
        }),
    }
}

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    devices_dir: PathBuf,
    filters_dir: PathBuf,
    devices: Option<Vec<Value>>,
    filter: Option<ResolvedFilter>,
}

impl Settings {
    pub fn new(devices_dir: impl Into<PathBuf>, filters_dir: impl Into<PathBuf>) -> Self {
        Self {
            devices_dir: devices_dir.into(),
            filters_dir: filters_dir.into(),
            devices: None,
            filter: None,
        }
    }

    /// Build settings from parsed command line arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = Self::new(&cli.devices_dir, &cli.filters_dir);
        settings.set_device_settings(cli.device_settings.as_str())?;
        match (&cli.filter.xml_filter, &cli.filter.xpath_filter) {
            (Some(xml_filter), _) => settings.set_xml_filter(xml_filter)?,
            (None, Some(xpath_filter)) => settings.set_xpath_filter(xpath_filter)?,
            (None, None) => return Err(ConfigError::FilterNotSet),
        }
        Ok(settings)
    }

    pub fn devices_dir(&self) -> &Path {
        &self.devices_dir
    }

    pub fn filters_dir(&self) -> &Path {
        &self.filters_dir
    }

    /// Load and store the device settings list.
    pub fn set_device_settings(&mut self, source: impl Into<DeviceSource>) -> Result<(), ConfigError> {
        self.devices = Some(load_devices(source.into(), &self.devices_dir)?);
        Ok(())
    }

    /// Resolve and store an XML subtree filter, replacing any previous filter.
    pub fn set_xml_filter(&mut self, source: &str) -> Result<(), ConfigError> {
        self.filter = Some(filter::resolve_xml(source, &self.filters_dir)?);
        Ok(())
    }

    /// Resolve and store an XPath filter, replacing any previous filter.
    pub fn set_xpath_filter(&mut self, expression: &str) -> Result<(), ConfigError> {
        self.filter = Some(filter::resolve_xpath(expression)?);
        Ok(())
    }

    pub fn devices(&self) -> Result<&[Value], ConfigError> {
        self.devices.as_deref().ok_or(ConfigError::DevicesNotSet)
    }

    pub fn filter(&self) -> Result<&ResolvedFilter, ConfigError> {
        self.filter.as_ref().ok_or(ConfigError::FilterNotSet)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICES_DIR, DEFAULT_FILTERS_DIR)
    }
}

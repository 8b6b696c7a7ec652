//! Builder for creating clients.

use std::path::PathBuf;
use std::sync::Arc;

use super::NetconfClient;
use crate::parser::ParserRegistry;
use crate::settings::{DEFAULT_DEVICES_DIR, DEFAULT_FILTERS_DIR, Settings};

/// Builder for constructing a [`NetconfClient`].
///
/// # Example
///
/// ```rust
/// use netpeek::client::ClientBuilder;
///
/// let client = ClientBuilder::new()
///     .devices_dir("/etc/netpeek/devices")
///     .filters_dir("/etc/netpeek/filters")
///     .build();
/// assert_eq!(client.settings().filters_dir().to_str(), Some("/etc/netpeek/filters"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    devices_dir: PathBuf,
    filters_dir: PathBuf,
    registry: Option<Arc<ParserRegistry>>,
}

impl ClientBuilder {
    /// Create a builder with the default search directories and the global
    /// parser registry.
    pub fn new() -> Self {
        Self {
            devices_dir: PathBuf::from(DEFAULT_DEVICES_DIR),
            filters_dir: PathBuf::from(DEFAULT_FILTERS_DIR),
            registry: None,
        }
    }

    /// Set the directory searched for device settings files (default: `devices`).
    pub fn devices_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.devices_dir = dir.into();
        self
    }

    /// Set the directory searched for XML filter files (default: `filters`).
    pub fn filters_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.filters_dir = dir.into();
        self
    }

    /// Use a custom parser registry instead of the global one.
    pub fn registry(mut self, registry: ParserRegistry) -> Self {
        self.registry = Some(Arc::new(registry));
        self
    }

    /// Build the client.
    ///
    /// Device settings and a filter still have to be set before running.
    pub fn build(self) -> NetconfClient {
        NetconfClient::from_parts(Settings::new(self.devices_dir, self.filters_dir), self.registry)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

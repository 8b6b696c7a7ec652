//! Device session seam.
//!
//! netpeek never speaks NETCONF itself. A [`Connector`] opens a [`Session`]
//! for a validated [`Device`]; the session answers one `<get>` query with the
//! raw reply XML and is closed by the caller on every exit path.
//!
//! ```rust,no_run
//! use netpeek::session::{Connector, Device, NetconfFilter, Session};
//!
//! # async fn example(connector: &impl Connector, device: &Device) -> Result<(), netpeek::Error> {
//! let mut session = connector.connect(device).await?;
//! let reply = session
//!     .get(&NetconfFilter::subtree("<filter><interfaces/></filter>"))
//!     .await;
//! session.close().await?;
//! println!("{}", reply?);
//! # Ok(())
//! # }
//! ```

pub mod config;

pub use config::{BoolOption, DEFAULT_PORT, DEFAULT_TIMEOUT, Device, DeviceSettings};

use std::future::Future;

use indexmap::IndexMap;

use crate::error::Result;

/// Query payload sent to the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetconfFilter {
    /// Subtree filter, as XML text.
    Subtree(String),

    /// XPath filter with its namespace prefix bindings.
    XPath {
        namespaces: IndexMap<String, String>,
        select: String,
    },
}

impl NetconfFilter {
    /// Create a subtree filter.
    pub fn subtree(xml: impl Into<String>) -> Self {
        Self::Subtree(xml.into())
    }

    /// Create an XPath filter without namespace bindings.
    pub fn xpath(select: impl Into<String>) -> Self {
        Self::XPath {
            namespaces: IndexMap::new(),
            select: select.into(),
        }
    }

    /// Create an XPath filter binding `ns0` to `namespace`.
    pub fn xpath_in(namespace: impl Into<String>, select: impl Into<String>) -> Self {
        let mut namespaces = IndexMap::new();
        namespaces.insert("ns0".to_string(), namespace.into());
        Self::XPath {
            namespaces,
            select: select.into(),
        }
    }
}

/// Opens sessions to devices.
///
/// Implementations own transport, authentication and host key policy, and
/// enforce the device's configured timeout.
pub trait Connector: Send + Sync {
    /// Session type produced by this connector.
    type Session: Session;

    /// Connect and authenticate to the device.
    fn connect(&self, device: &Device) -> impl Future<Output = Result<Self::Session>> + Send;
}

/// An open management session to one device.
pub trait Session: Send {
    /// Run a `<get>` with the given filter and return the reply data as XML text.
    fn get(&mut self, filter: &NetconfFilter) -> impl Future<Output = Result<String>> + Send;

    /// Close the session.
    fn close(self) -> impl Future<Output = Result<()>> + Send;
}

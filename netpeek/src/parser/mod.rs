//! Reply parsers for multi-vendor support.
//!
//! A parser turns one decoded reply into flat [`Record`]s. Which parser runs
//! is decided by the filter id of the request, through the
//! [`ParserRegistry`]; filters without a dedicated parser get the
//! [`DefaultParser`], which only strips namespace declarations.

pub mod namespaces;
pub mod navigate;
mod record;
mod registry;
pub mod vendors;

pub use namespaces::{DEFAULT_DEPTH_LIMIT, remove_namespaces};
pub use record::{DEVICE_KEY, ERROR_KEY, FIELD_KEY, IP_KEY, Record};
pub use registry::ParserRegistry;

use serde_json::Value;

use crate::error::{Result, ShapeError};
use crate::session::Device;

/// Trait for reply parsers.
///
/// Parsers are stateless: everything a parse needs arrives as arguments, so
/// one instance serves every device.
pub trait Parser: Send + Sync {
    /// Parse a decoded reply (`{"data": ...}`) into records tagged with the
    /// device identity and `filter_id`.
    fn parse(&self, reply: &Value, device: &Device, filter_id: &str) -> Result<Vec<Record>>;
}

/// Fallback parser: one record holding the namespace-free `data` tree.
#[derive(Debug, Clone, Copy)]
pub struct DefaultParser {
    depth_limit: usize,
}

impl DefaultParser {
    pub fn new(depth_limit: usize) -> Self {
        Self { depth_limit }
    }
}

impl Default for DefaultParser {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH_LIMIT)
    }
}

impl Parser for DefaultParser {
    fn parse(&self, reply: &Value, device: &Device, filter_id: &str) -> Result<Vec<Record>> {
        let data = navigate::descend(reply, &["data"])?;
        if !(data.is_object() || data.is_null()) {
            return Err(ShapeError::UnexpectedType {
                path: "data".to_string(),
                expected: "a map",
            }
            .into());
        }

        let record = Record::new()
            .with("data", remove_namespaces(data, self.depth_limit))
            .with_identity(device, filter_id);
        Ok(vec![record])
    }
}

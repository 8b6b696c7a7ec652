//! Filter resolution.
//!
//! A filter argument is turned into the query sent to the device plus the
//! filter id that selects the reply parser.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::files;
use crate::error::ConfigError;
use crate::session::NetconfFilter;
use crate::xml;

/// Filter id of inline XML filters.
pub const GENERIC_FILTER_ID: &str = "generic";

/// `<http(s) namespace>:<select>`, split at the last colon.
static URL_XPATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(https?://\S+):(\S+)").unwrap());

/// A filter ready to be sent, with the id used for parser lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilter {
    pub id: String,
    pub filter: NetconfFilter,
}

/// Resolve an XML subtree filter.
///
/// `source` is either the filter XML itself (id [`GENERIC_FILTER_ID`]) or a
/// file name, looked up in `filters_dir` when it is not an existing path. A
/// file filter is identified by its base name.
pub fn resolve_xml(source: &str, filters_dir: &Path) -> Result<ResolvedFilter, ConfigError> {
    if xml::is_valid(source) {
        return Ok(ResolvedFilter {
            id: GENERIC_FILTER_ID.to_string(),
            filter: NetconfFilter::subtree(source),
        });
    }

    let content = files::read_file(&files::resolve_path(source, filters_dir))?;
    if !xml::is_valid(&content) {
        return Err(ConfigError::InvalidXmlFilter {
            filter: source.to_string(),
        });
    }

    Ok(ResolvedFilter {
        id: files::basename(source).to_string(),
        filter: NetconfFilter::subtree(content),
    })
}

/// Resolve an XPath filter expression.
///
/// Accepted forms:
/// - `<select>`
/// - `<namespace>:<select>`
/// - `http(s)://<namespace>:<select>`
///
/// The namespace is bound to the `ns0` prefix. The whole expression is the
/// filter id.
pub fn resolve_xpath(expression: &str) -> Result<ResolvedFilter, ConfigError> {
    let invalid = || ConfigError::InvalidXPathFilter {
        filter: expression.to_string(),
    };

    let filter = if !expression.contains(':') {
        if expression.trim().is_empty() {
            return Err(invalid());
        }
        NetconfFilter::xpath(expression)
    } else if expression.contains("http://") || expression.contains("https://") {
        let captures = URL_XPATH.captures(expression).ok_or_else(invalid)?;
        NetconfFilter::xpath_in(&captures[1], &captures[2])
    } else {
        match expression.split_once(':') {
            Some((namespace, select)) if !namespace.is_empty() && !select.is_empty() => {
                NetconfFilter::xpath_in(namespace, select)
            }
            _ => return Err(invalid()),
        }
    };

    Ok(ResolvedFilter {
        id: expression.to_string(),
        filter,
    })
}

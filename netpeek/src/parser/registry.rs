//! Global parser registry for looking up parsers by filter id.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use super::vendors;
use super::{DefaultParser, Parser};
use crate::error::{RegistryError, Result};

/// Global parser registry. Built once, read-only afterwards.
static REGISTRY: LazyLock<ParserRegistry> = LazyLock::new(|| {
    let mut registry = ParserRegistry::new();
    registry.register_builtin_parsers();
    registry
});

/// Registry mapping filter ids to parsers.
///
/// Lookup is an exact match on the filter id; anything else resolves to the
/// fallback parser.
pub struct ParserRegistry {
    parsers: HashMap<String, Arc<dyn Parser>>,
    fallback: Arc<dyn Parser>,
}

impl ParserRegistry {
    /// Create a new registry with no dedicated parsers.
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
            fallback: Arc::new(DefaultParser::default()),
        }
    }

    /// Get the global registry.
    pub fn global() -> &'static ParserRegistry {
        &REGISTRY
    }

    /// Register built-in parsers.
    fn register_builtin_parsers(&mut self) {
        use vendors::cisco_iosxe::{ietf_interfaces, interfaces_oper, isis_oper, memory_oper};

        self.parsers.insert(
            ietf_interfaces::FILTER_ID.to_string(),
            Arc::new(ietf_interfaces::IetfInterfacesParser),
        );
        self.parsers.insert(
            interfaces_oper::FILTER_ID.to_string(),
            Arc::new(interfaces_oper::InterfacesOperParser),
        );
        self.parsers.insert(
            memory_oper::FILTER_ID.to_string(),
            Arc::new(memory_oper::MemoryOperParser),
        );
        self.parsers.insert(
            isis_oper::FILTER_ID.to_string(),
            Arc::new(isis_oper::IsisOperParser),
        );
    }

    /// Register a parser for a filter id.
    pub fn register(&mut self, filter_id: impl Into<String>, parser: Arc<dyn Parser>) -> Result<()> {
        let filter_id = filter_id.into();
        if self.parsers.contains_key(&filter_id) {
            return Err(RegistryError::AlreadyRegistered { filter_id }.into());
        }
        self.parsers.insert(filter_id, parser);
        Ok(())
    }

    /// Replace the parser used for unknown filter ids.
    pub fn with_fallback(mut self, parser: Arc<dyn Parser>) -> Self {
        self.fallback = parser;
        self
    }

    /// Get the parser for a filter id, falling back to the default parser.
    pub fn resolve(&self, filter_id: &str) -> &dyn Parser {
        self.parsers
            .get(filter_id)
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    /// Check if a dedicated parser is registered.
    pub fn contains(&self, filter_id: &str) -> bool {
        self.parsers.contains_key(filter_id)
    }

    /// List all filter ids with a dedicated parser.
    pub fn filter_ids(&self) -> impl Iterator<Item = &String> {
        self.parsers.keys()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut filter_ids: Vec<_> = self.parsers.keys().collect();
        filter_ids.sort();
        f.debug_struct("ParserRegistry")
            .field("filter_ids", &filter_ids)
            .finish_non_exhaustive()
    }
}

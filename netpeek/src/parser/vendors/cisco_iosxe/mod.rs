//! Cisco IOS-XE operational data parsers.
//!
//! | Filter id | Parser | Records |
//! |-----------|--------|---------|
//! | `Cisco-IOS-XE-interfaces-oper.xml` | [`InterfacesOperParser`] | one per interface |
//! | `cisco_xe_ietf-interfaces.xml` | [`IetfInterfacesParser`] | one per interface |
//! | `Cisco-IOS-XE-memory-oper.xml` | [`MemoryOperParser`] | one per memory pool |
//! | `http://cisco.com/ns/yang/Cisco-IOS-XE-isis-oper:/isis-oper-data/isis-instance` | [`IsisOperParser`] | one per reply |

pub mod ietf_interfaces;
pub mod interfaces_oper;
pub mod isis_oper;
pub mod memory_oper;

pub use ietf_interfaces::IetfInterfacesParser;
pub use interfaces_oper::InterfacesOperParser;
pub use isis_oper::IsisOperParser;
pub use memory_oper::MemoryOperParser;

//! Command line arguments.

use clap::{Args, Parser};

use super::{DEFAULT_DEVICES_DIR, DEFAULT_FILTERS_DIR};

/// NETCONF client to gather operational data from devices.
///
/// Device credentials and options are read from JSON. Exactly one of an XML
/// filter or an XPath filter selects the data to retrieve.
#[derive(Parser, Debug, Clone)]
#[command(name = "netpeek", version)]
pub struct Cli {
    /// Device settings: a JSON document or the name of a JSON file
    #[arg(short = 'd', long)]
    pub device_settings: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Directory searched for device settings files
    #[arg(long, default_value = DEFAULT_DEVICES_DIR)]
    pub devices_dir: String,

    /// Directory searched for XML filter files
    #[arg(long, default_value = DEFAULT_FILTERS_DIR)]
    pub filters_dir: String,
}

/// Filter selection; exactly one is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct FilterArgs {
    /// XML filter: inline XML or the name of an XML file
    #[arg(short = 'x', long)]
    pub xml_filter: Option<String>,

    /// XPath filter: <xpath> or <namespace>:<xpath>, e.g.
    /// 'http://cisco.com/ns/yang/Cisco-IOS-XE-interfaces-oper:interfaces/interface'
    #[arg(short = 'p', long)]
    pub xpath_filter: Option<String>,
}

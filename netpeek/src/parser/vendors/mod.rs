//! Vendor-specific reply parsers.
//!
//! Each module maps the reply of one filter onto records. The filter id a
//! parser answers to is exported as `FILTER_ID`.

pub mod cisco_iosxe;

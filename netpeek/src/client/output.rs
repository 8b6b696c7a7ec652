//! JSON rendering of collected records.

use crate::error::Result;
use crate::parser::Record;

/// Render records as a JSON array.
///
/// The text is decoded again before it is returned, so callers only ever see
/// output that parses back into records.
pub fn render(records: &[Record]) -> Result<String> {
    let json = serde_json::to_string(records)?;
    let _: Vec<Record> = serde_json::from_str(&json)?;
    Ok(json)
}

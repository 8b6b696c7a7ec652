//! Reply tree navigation helpers shared by the vendor parsers.
//!
//! Every helper reports a [`ShapeError`] naming the full path that failed, so
//! an error record points at the offending part of the reply.

use serde_json::{Map, Value};

use crate::error::ShapeError;

/// Follow `segments` from `node`, requiring an object at every step.
pub fn descend<'a>(node: &'a Value, segments: &[&str]) -> Result<&'a Value, ShapeError> {
    let mut current = node;
    for (depth, segment) in segments.iter().enumerate() {
        let map = current.as_object().ok_or_else(|| ShapeError::UnexpectedType {
            path: segments[..depth].join("/"),
            expected: "a map",
        })?;
        current = map.get(*segment).ok_or_else(|| ShapeError::MissingPath {
            path: segments[..=depth].join("/"),
        })?;
    }
    Ok(current)
}

/// Normalize a repeated element to a list of entries.
///
/// A list element that occurs once decodes to a single map; both forms are
/// returned as a sequence of maps.
pub fn entries<'a>(node: &'a Value, path: &str) -> Result<Vec<&'a Map<String, Value>>, ShapeError> {
    match node {
        Value::Object(map) => Ok(vec![map]),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_object().ok_or_else(|| ShapeError::UnexpectedType {
                    path: format!("{path}[{index}]"),
                    expected: "a map",
                })
            })
            .collect(),
        _ => Err(ShapeError::UnexpectedType {
            path: path.to_string(),
            expected: "a map or a list of maps",
        }),
    }
}

/// Get a required field of an entry.
pub fn field<'a>(entry: &'a Map<String, Value>, key: &str, path: &str) -> Result<&'a Value, ShapeError> {
    entry.get(key).ok_or_else(|| ShapeError::MissingPath {
        path: format!("{path}/{key}"),
    })
}

/// Get a required nested map of an entry.
pub fn child<'a>(
    entry: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ShapeError> {
    field(entry, key, path)?
        .as_object()
        .ok_or_else(|| ShapeError::UnexpectedType {
            path: format!("{path}/{key}"),
            expected: "a map",
        })
}

/// Get a required text field of an entry.
pub fn text<'a>(entry: &'a Map<String, Value>, key: &str, path: &str) -> Result<&'a str, ShapeError> {
    field(entry, key, path)?
        .as_str()
        .ok_or_else(|| ShapeError::UnexpectedType {
            path: format!("{path}/{key}"),
            expected: "text",
        })
}

/// Parse a required decimal counter of an entry.
pub fn counter(entry: &Map<String, Value>, key: &str, path: &str) -> Result<u64, ShapeError> {
    let raw = text(entry, key, path)?;
    raw.trim().parse().map_err(|_| ShapeError::NotNumeric {
        path: format!("{path}/{key}"),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descend() {
        let tree = json!({"data": {"interfaces": {"interface": []}}});
        assert!(descend(&tree, &["data", "interfaces", "interface"]).unwrap().is_array());

        let err = descend(&tree, &["data", "interfaces-state", "interface"]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::MissingPath {
                path: "data/interfaces-state".to_string()
            }
        );

        let tree = json!({"data": "unexpected"});
        let err = descend(&tree, &["data", "interfaces"]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::UnexpectedType {
                path: "data".to_string(),
                expected: "a map"
            }
        );
    }

    #[test]
    fn test_entries_normalizes_single_map() {
        let single = json!({"name": "Gi1"});
        let list = json!([{"name": "Gi1"}]);
        assert_eq!(entries(&single, "x").unwrap(), entries(&list, "x").unwrap());

        assert!(entries(&json!([{"a": "1"}, "text"]), "x").is_err());
        assert!(entries(&json!("text"), "x").is_err());
        assert!(entries(&Value::Null, "x").is_err());
    }

    #[test]
    fn test_counter() {
        let entry = json!({"in-octets": "4249319", "padded": " 7 ", "bad": "n/a", "num": 3});
        let entry = entry.as_object().unwrap();

        assert_eq!(counter(entry, "in-octets", "stats").unwrap(), 4249319);
        assert_eq!(counter(entry, "padded", "stats").unwrap(), 7);
        assert_eq!(
            counter(entry, "bad", "stats").unwrap_err(),
            ShapeError::NotNumeric {
                path: "stats/bad".to_string(),
                value: "n/a".to_string()
            }
        );
        assert!(matches!(
            counter(entry, "num", "stats"),
            Err(ShapeError::UnexpectedType { .. })
        ));
        assert!(matches!(
            counter(entry, "absent", "stats"),
            Err(ShapeError::MissingPath { .. })
        ));
    }
}

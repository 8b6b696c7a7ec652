//! Namespace marker removal.
//!
//! XML decoding keeps namespace declarations as `@xmlns` / `@xmlns:<prefix>`
//! keys. They carry no device data, so the generic parser strips them before
//! handing a reply downstream.

use serde_json::{Map, Value};

/// Default number of map levels that are cleaned.
pub const DEFAULT_DEPTH_LIMIT: usize = 10;

/// Check whether a key is a namespace declaration.
pub fn is_namespace_key(key: &str) -> bool {
    key == "@xmlns" || key.starts_with("@xmlns:")
}

/// Remove namespace keys from a tree, down to `depth_limit` map levels.
///
/// The root map is depth 0. Marker keys are dropped at every depth below
/// `depth_limit`; a nested map found at depth `d` is only entered while
/// `d < depth_limit - 1`, and is copied verbatim otherwise. An entered map
/// left with no keys is dropped along with its key; the root map is always
/// kept. Arrays and scalars are copied as they are. The input is left
/// untouched.
pub fn remove_namespaces(node: &Value, depth_limit: usize) -> Value {
    match node {
        Value::Object(map) => Value::Object(clean_map(map, 0, depth_limit)),
        other => other.clone(),
    }
}

fn clean_map(map: &Map<String, Value>, depth: usize, depth_limit: usize) -> Map<String, Value> {
    let mut cleaned = Map::with_capacity(map.len());
    for (key, value) in map {
        if depth < depth_limit && is_namespace_key(key) {
            continue;
        }
        let value = match value {
            Value::Object(child) if depth + 1 < depth_limit => {
                let child = clean_map(child, depth + 1, depth_limit);
                if child.is_empty() {
                    continue;
                }
                Value::Object(child)
            }
            other => other.clone(),
        };
        cleaned.insert(key.clone(), value);
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply() -> Value {
        json!({
            "data": {
                "@xmlns": "urn:ietf:params:xml:ns:netconf:base:1.0",
                "@xmlns:nc": "urn:ietf:params:xml:ns:netconf:base:1.0",
                "system-time": {
                    "@xmlns": "http://cisco.com/ns/yang/Cisco-IOS-XR-shellutil-oper",
                    "clock": {"year": "2023", "month": "12", "time-zone": "UTC"},
                    "uptime": {"host-name": "sandbox-iosxr", "uptime": "1568064"}
                },
                "interfaces": {
                    "@xmlns": "http://cisco.com/ns/yang/Cisco-IOS-XR-pfi-im-cmd-oper",
                    "interfaces": {
                        "interface": [
                            {"interface-name": "GigabitEthernet0/0/0/0"},
                            {"interface-name": "Null0"}
                        ]
                    }
                },
                "inventory": {
                    "@xmlns": "http://cisco.com/ns/yang/Cisco-IOS-XR-invmgr-oper",
                    "entities": {
                        "entity": {
                            "name": "Rack 0",
                            "attributes": {
                                "inv-basic-bag": {
                                    "software-revision": "7.3.2",
                                    "model-name": "R-IOSXRV9000-CC"
                                }
                            }
                        }
                    }
                }
            }
        })
    }

    fn has_namespace_key(node: &Value, depth: usize, limit: usize) -> bool {
        match node {
            Value::Object(map) => map.iter().any(|(key, value)| {
                (depth < limit && is_namespace_key(key))
                    || has_namespace_key(value, depth + 1, limit)
            }),
            _ => false,
        }
    }

    #[test]
    fn test_remove_namespaces() {
        let expected = json!({
            "data": {
                "system-time": {
                    "clock": {"year": "2023", "month": "12", "time-zone": "UTC"},
                    "uptime": {"host-name": "sandbox-iosxr", "uptime": "1568064"}
                },
                "interfaces": {
                    "interfaces": {
                        "interface": [
                            {"interface-name": "GigabitEthernet0/0/0/0"},
                            {"interface-name": "Null0"}
                        ]
                    }
                },
                "inventory": {
                    "entities": {
                        "entity": {
                            "name": "Rack 0",
                            "attributes": {
                                "inv-basic-bag": {
                                    "software-revision": "7.3.2",
                                    "model-name": "R-IOSXRV9000-CC"
                                }
                            }
                        }
                    }
                }
            }
        });
        assert_eq!(remove_namespaces(&reply(), DEFAULT_DEPTH_LIMIT), expected);
    }

    #[test]
    fn test_no_markers_below_limit() {
        let cleaned = remove_namespaces(&reply(), DEFAULT_DEPTH_LIMIT);
        assert!(!has_namespace_key(&cleaned, 0, DEFAULT_DEPTH_LIMIT));
    }

    #[test]
    fn test_idempotent() {
        let once = remove_namespaces(&reply(), DEFAULT_DEPTH_LIMIT);
        let twice = remove_namespaces(&once, DEFAULT_DEPTH_LIMIT);
        assert_eq!(once, twice);

        let shallow = remove_namespaces(&reply(), 2);
        assert_eq!(remove_namespaces(&shallow, 2), shallow);
    }

    #[test]
    fn test_depth_limit_preserves_deep_markers() {
        let node = json!({
            "@xmlns": "root",
            "a": {
                "@xmlns": "one",
                "b": {"@xmlns": "two", "c": "x"}
            }
        });

        // depth 0 is cleaned, the map under "a" sits at the limit and is copied
        let cleaned = remove_namespaces(&node, 1);
        assert_eq!(
            cleaned,
            json!({"a": {"@xmlns": "one", "b": {"@xmlns": "two", "c": "x"}}})
        );

        let cleaned = remove_namespaces(&node, 2);
        assert_eq!(
            cleaned,
            json!({"a": {"b": {"@xmlns": "two", "c": "x"}}})
        );
    }

    #[test]
    fn test_emptied_maps_dropped() {
        let node = json!({
            "@xmlns": "root",
            "native": {"@xmlns": "x"},
            "system": {"clock": {"@xmlns:nc": "y"}, "name": "r1"},
            "blank": {}
        });
        assert_eq!(
            remove_namespaces(&node, DEFAULT_DEPTH_LIMIT),
            json!({"system": {"name": "r1"}})
        );

        assert_eq!(remove_namespaces(&json!({"@xmlns": "x"}), DEFAULT_DEPTH_LIMIT), json!({}));

        // maps at the limit are copied, empty or not
        assert_eq!(
            remove_namespaces(&node, 1),
            json!({"native": {"@xmlns": "x"}, "system": {"clock": {"@xmlns:nc": "y"}, "name": "r1"}, "blank": {}})
        );
    }

    #[test]
    fn test_arrays_and_scalars_copied() {
        let node = json!({
            "list": [{"@xmlns": "kept", "v": "1"}],
            "text": "@xmlns",
            "empty": null
        });
        assert_eq!(remove_namespaces(&node, DEFAULT_DEPTH_LIMIT), node);
        assert_eq!(remove_namespaces(&json!("plain"), DEFAULT_DEPTH_LIMIT), json!("plain"));
    }

    #[test]
    fn test_input_untouched() {
        let node = reply();
        let before = node.clone();
        let _ = remove_namespaces(&node, DEFAULT_DEPTH_LIMIT);
        assert_eq!(node, before);
    }
}

use std::collections::HashMap;

use super::AgentConfig;

#[test]
fn set_and_get_works() {
    let mut config = AgentConfig::new();

    assert_eq!(config.get("nicmatch"), None);

    config.set("nicmatch", "eth.*");
    assert_eq!(config.get("nicmatch"), Some("eth.*"));

    config.set("nicmatch", "lo");
    assert_eq!(config.get("nicmatch"), Some("lo"));
}

#[test]
fn get_non_empty_skips_empty_values() {
    let mut config = AgentConfig::new();
    config.set("address", "");

    assert_eq!(config.get("address"), Some(""));
    assert_eq!(config.get_non_empty("address"), None);

    config.set("address", "10.0.0.1");
    assert_eq!(config.get_non_empty("address"), Some("10.0.0.1"));
}

#[test]
fn from_map_works() {
    let mut entries = HashMap::new();
    entries.insert("nicmatch".to_owned(), "eth0".to_owned());

    let config = AgentConfig::from(entries);
    assert_eq!(config.get("nicmatch"), Some("eth0"));
}

#[test]
fn from_json_works() {
    let config = AgentConfig::from_json(r#"{"nicmatch": "eth.*", "port": "8080"}"#)
        .expect("Can not parse config from json");

    assert_eq!(config.get("nicmatch"), Some("eth.*"));
    assert_eq!(config.get("port"), Some("8080"));
    assert_eq!(config.get("host"), None);
}

#[test]
fn from_json_rejects_non_string_values() {
    let result = AgentConfig::from_json(r#"{"port": 8080}"#);
    assert!(result.is_err());
}

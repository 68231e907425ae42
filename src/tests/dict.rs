use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};

use crate::{ErrorKind, ObjectDict, Value};

#[test]
fn empty() {
    let dict = ObjectDict::new();
    assert!(dict.is_empty());
    assert_eq!(dict.len(), 0);
    assert_eq!(dict.keys().count(), 0);
    assert_eq!(dict, ObjectDict::default());
}

#[test]
fn missing_attribute() {
    let dict = ObjectDict::new();
    let error = dict.get_attribute("missing").unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::AttributeNotFound("missing".into()));
    assert_eq!(error.to_string(), "attribute `missing` not found");
    assert!(dict.get("missing").is_none());
}

#[test]
fn attribute_and_key_views_share_storage() -> Result<()> {
    let mut dict = ObjectDict::new();

    dict.set_attribute("k", 1)?;
    assert_eq!(dict.get("k"), Some(&Value::Integer(1)));
    assert_eq!(dict["k"], Value::Integer(1));

    dict.insert("k", "two")?;
    assert_eq!(dict.get_attribute("k")?.as_str(), Some("two"));

    *dict.get_mut("k").context("missing k")? = Value::Bool(true);
    assert_eq!(dict.get_attribute("k")?.as_bool(), Some(true));

    *dict.get_attribute_mut("k")? = Value::Float(0.5);
    assert_eq!(dict["k"].as_f64(), Some(0.5));

    assert_eq!(dict.len(), 1);
    Ok(())
}

#[test]
fn nested_mapping_is_converted_on_assignment() -> Result<()> {
    let mut dict = ObjectDict::new();
    dict.set_attribute("b", HashMap::from([("c", vec![1, 2])]))?;

    let b = dict.get_attribute("b")?.as_mapping().context("b is not a mapping")?;
    let c = b.get_attribute("c")?.as_sequence().context("c is not a sequence")?;
    assert_eq!(c, [Value::Integer(1), Value::Integer(2)]);
    Ok(())
}

#[test]
fn example_structure() -> Result<()> {
    let inner = ObjectDict::from_mapping([("d", "x")])?;
    let c = vec![Value::from(1), Value::from(2), Value::Mapping(inner)];
    let b = ObjectDict::from_mapping([("c", c)])?;
    let dict = ObjectDict::from_mapping([("a", Value::from(1)), ("b", Value::Mapping(b))])?;

    assert_eq!(dict.get_attribute("a")?.as_i64(), Some(1));

    let c = dict["b"]["c"].as_sequence().context("c is not a sequence")?;
    assert_eq!(c.len(), 3);
    assert_eq!(c[0], Value::Integer(1));
    assert_eq!(c[1], Value::Integer(2));
    assert_eq!(c[2].get("d").and_then(Value::as_str), Some("x"));

    assert_eq!(dict["b"]["c"][2]["d"].as_str(), Some("x"));
    assert_eq!(dict.to_string(), r#"{a: 1, b: {c: [1, 2, {d: "x"}]}}"#);
    Ok(())
}

#[test]
fn failed_insert_leaves_dict_unchanged() -> Result<()> {
    let mut dict = ObjectDict::from_mapping([("x", 1)])?;

    let error = dict.insert("x", vec![Some(1), None]).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::UnsupportedValueKind("none"));
    assert_eq!(dict["x"], Value::Integer(1));

    let error = dict.set_attribute("y", BTreeMap::from([("z", ())])).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::UnsupportedValueKind("unit"));
    assert!(!dict.contains_key("y"));
    Ok(())
}

#[test]
fn keys_are_sorted() -> Result<()> {
    let dict = ObjectDict::from_mapping([("delta", 4), ("alpha", 1), ("charlie", 3), ("bravo", 2)])?;

    assert!(dict.keys().eq(["alpha", "bravo", "charlie", "delta"]));
    assert!(dict.keys().rev().eq(["delta", "charlie", "bravo", "alpha"]));
    assert_eq!(dict.keys().len(), 4);

    // Enumeration is repeatable and reflects the current state.
    assert!(dict.keys().eq(dict.keys()));
    assert!(dict.values().flat_map(Value::as_i64).eq([1, 2, 3, 4]));
    Ok(())
}

#[test]
fn remove_and_clear() -> Result<()> {
    let mut dict = ObjectDict::from_mapping([("one", 1), ("two", 2)])?;

    assert_eq!(dict.remove("one"), Some(Value::Integer(1)));
    assert_eq!(dict.remove("one"), None);
    assert!(dict.keys().eq(["two"]));

    dict.clear();
    assert!(dict.is_empty());
    Ok(())
}

#[test]
fn extend_keeps_earlier_entries() -> Result<()> {
    let mut dict = ObjectDict::new();
    let error = dict.extend([("a", Some(1)), ("b", None)]).unwrap_err();

    assert_eq!(error.kind(), &ErrorKind::UnsupportedValueKind("none"));
    assert_eq!(dict.get("a"), Some(&Value::Integer(1)));
    assert!(dict.get("b").is_none());
    Ok(())
}

#[test]
fn display_quotes_unusual_keys() -> Result<()> {
    let dict = ObjectDict::from_mapping([("plain_key", "v"), ("with space", "w")])?;
    assert_eq!(dict.to_string(), r#"{plain_key: "v", "with space": "w"}"#);

    let dict = ObjectDict::from_mapping([("f", 1.5), ("g", -0.25)])?;
    assert_eq!(dict.to_string(), "{f: 1.5, g: -0.25}");
    Ok(())
}

#[test]
fn display_reads_back_as_flow_yaml() -> Result<()> {
    let dict = ObjectDict::from_mapping([
        ("1", Value::from("esc\u{1b}ape")),
        ("true", Value::Float(f64::NAN)),
        ("null", Value::Float(f64::NEG_INFINITY)),
        ("line", Value::from("a\tb\n\"c\"")),
    ])?;

    assert_eq!(
        dict.to_string(),
        r#"{"1": "esc\x1Bape", line: "a\tb\n\"c\"", "null": -.inf, "true": .nan}"#
    );
    Ok(())
}

#[test]
#[should_panic(expected = "attribute `missing` not found")]
fn index_missing_panics() {
    let dict = ObjectDict::new();
    let _ = &dict["missing"];
}

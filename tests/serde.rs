#![cfg(feature = "serde")]

use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use objdict::{Error, ErrorKind, ObjectDict, Value};
use serde::de::value::{I128Deserializer, U128Deserializer, UnitDeserializer};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};

const CONFIG: &str = r#"
name: objdict
debug: false
ratio: 0.75
server:
  host: localhost
  ports: [80, 443]
  mode: strict
"#;

#[test]
fn deserialize_from_yaml() -> Result<()> {
    let dict: ObjectDict = serde_yaml::from_str(CONFIG)?;

    assert_eq!(dict.get_attribute("name")?.as_str(), Some("objdict"));
    assert_eq!(dict.get_attribute("debug")?.as_bool(), Some(false));
    assert_eq!(dict.get_attribute("ratio")?.as_f64(), Some(0.75));

    let server = dict
        .get_attribute("server")?
        .as_mapping()
        .context("server is not a mapping")?;
    assert_eq!(server.get_attribute("host")?.as_str(), Some("localhost"));
    assert_eq!(server["ports"][1].as_u16(), Some(443));
    Ok(())
}

#[test]
fn null_is_unsupported() {
    let error = serde_yaml::from_str::<ObjectDict>("x: ~").unwrap_err();
    assert!(
        error
            .to_string()
            .contains("null values cannot be stored in an object dict"),
        "{error}"
    );

    let error = serde_yaml::from_str::<ObjectDict>("x: [1, null]").unwrap_err();
    assert!(error.to_string().contains("null values"), "{error}");
}

#[test]
fn non_string_keys_are_invalid() {
    let error = serde_yaml::from_str::<ObjectDict>("1: one").unwrap_err();
    assert!(
        error
            .to_string()
            .contains("integer keys are not supported, expected a string"),
        "{error}"
    );
}

#[test]
fn top_level_must_be_a_mapping() {
    let error = serde_yaml::from_str::<ObjectDict>("[1, 2]").unwrap_err();
    assert!(
        error.to_string().contains("expected mapping, found sequence"),
        "{error}"
    );

    let value: Value = serde_yaml::from_str("[1, 2]").expect("sequence is a valid value");
    assert_eq!(value, Value::Sequence(vec![1.into(), 2.into()]));
}

#[derive(Serialize)]
struct Server {
    host: &'static str,
    ports: Vec<u16>,
    mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    proxy: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Mode {
    Strict,
    Lenient,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
enum Shape {
    Circle(f64),
    Rect { w: u32, h: u32 },
    Line(i32, i32),
    Empty,
}

#[test]
fn from_serialize_struct() -> Result<()> {
    let server = Server {
        host: "localhost",
        ports: vec![80, 443],
        mode: Mode::Strict,
        proxy: None,
    };

    let dict = ObjectDict::from_serialize(&server)?;
    assert!(dict.keys().eq(["host", "mode", "ports"]));
    assert_eq!(dict.get_attribute("mode")?.as_str(), Some("strict"));
    assert_eq!(dict.lookup("ports[0]")?.as_u16(), Some(80));
    Ok(())
}

#[test]
fn from_serialize_enum_variants() -> Result<()> {
    let shapes = vec![
        Shape::Circle(1.5),
        Shape::Rect { w: 2, h: 3 },
        Shape::Line(-1, 1),
    ];

    let value = Value::from_serialize(&shapes)?;
    assert_eq!(value[0]["Circle"].as_f64(), Some(1.5));
    assert_eq!(value[1]["Rect"]["h"].as_u32(), Some(3));
    assert_eq!(value[2]["Line"][0].as_i32(), Some(-1));
    Ok(())
}

#[test]
fn enum_variants_round_trip() -> Result<()> {
    let shapes = [
        Shape::Circle(1.5),
        Shape::Rect { w: 2, h: 3 },
        Shape::Line(-1, 1),
        Shape::Empty,
    ];

    for shape in shapes {
        let value = Value::from_serialize(&shape)?;
        assert_eq!(Shape::deserialize(&value)?, shape, "{value}");
    }

    let value: Value = serde_yaml::from_str("{Circle: 1.5, Line: [1, 2]}")?;
    assert!(Shape::deserialize(&value).is_err());
    Ok(())
}

#[test]
fn wide_integers_deserialize_in_range() -> Result<()> {
    let de: U128Deserializer<Error> = 5u128.into_deserializer();
    assert_eq!(Value::deserialize(de)?, Value::Integer(5));

    let de: I128Deserializer<Error> = (-5i128).into_deserializer();
    assert_eq!(Value::deserialize(de)?, Value::Integer(-5));

    let de: U128Deserializer<Error> = u128::MAX.into_deserializer();
    let error = Value::deserialize(de).unwrap_err();
    assert_eq!(error.to_string(), "u128 value out of range for i64");

    let de: I128Deserializer<Error> = i128::MIN.into_deserializer();
    let error = Value::deserialize(de).unwrap_err();
    assert_eq!(error.to_string(), "i128 value out of range for i64");
    Ok(())
}

#[test]
fn deserializer_errors_carry_the_message() {
    let de: UnitDeserializer<Error> = ().into_deserializer();
    let error = Value::deserialize(de).unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorKind::Custom("null values cannot be stored in an object dict".into())
    );
}

#[test]
fn display_parses_as_yaml() -> Result<()> {
    let dict = ObjectDict::from_mapping([
        ("1", Value::from("esc\u{1b}ape")),
        ("true", Value::Float(f64::NEG_INFINITY)),
        ("line", Value::from("a\tb\n\"c\" \\ d")),
        ("nested-key", Value::from(vec![Value::from(1), Value::from(false)])),
    ])?;

    let again: ObjectDict = serde_yaml::from_str(&dict.to_string())?;
    assert_eq!(again, dict);
    Ok(())
}

#[test]
fn from_serialize_errors() {
    let error = ObjectDict::from_serialize(&BTreeMap::from([("x", None::<u32>)])).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::UnsupportedValueKind("none"));

    let error = ObjectDict::from_serialize(&HashMap::from([(true, 1)])).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::InvalidKeyKind("bool"));

    let error = ObjectDict::from_serialize(&vec![1, 2]).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::ExpectedMapping("sequence"));

    let error = Value::from_serialize(&u64::MAX).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::IntegerOutOfRange("u64"));
}

#[derive(Debug, Deserialize, PartialEq)]
struct TypedServer {
    host: String,
    ports: Vec<u16>,
    mode: Mode,
    proxy: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct TypedConfig {
    name: String,
    debug: bool,
    ratio: f64,
    server: TypedServer,
}

#[test]
fn typed_extraction() -> Result<()> {
    let dict: ObjectDict = serde_yaml::from_str(CONFIG)?;
    let config = TypedConfig::deserialize((&dict).into_deserializer())?;

    assert_eq!(
        config,
        TypedConfig {
            name: String::from("objdict"),
            debug: false,
            ratio: 0.75,
            server: TypedServer {
                host: String::from("localhost"),
                ports: vec![80, 443],
                mode: Mode::Strict,
                proxy: None,
            },
        }
    );

    let server = dict.get_attribute("server")?;
    let ports = Vec::<u16>::deserialize(server["ports"].into_deserializer())?;
    assert_eq!(ports, [80, 443]);
    Ok(())
}

#[test]
fn serialize_round_trip() -> Result<()> {
    let dict: ObjectDict = serde_yaml::from_str(CONFIG)?;
    let output = serde_yaml::to_string(&dict)?;
    let again: ObjectDict = serde_yaml::from_str(&output)?;
    assert_eq!(again, dict);

    // Keys are serialized in sorted order.
    let keys = output
        .lines()
        .filter(|line| !line.starts_with(' '))
        .filter_map(|line| line.split(':').next())
        .collect::<Vec<_>>();
    assert_eq!(keys, ["debug", "name", "ratio", "server"]);
    Ok(())
}

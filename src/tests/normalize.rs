use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};

use anyhow::Result;

use crate::{normalize, ErrorKind, Normalize, ObjectDict, Value};

#[test]
fn primitives() -> Result<()> {
    assert_eq!(normalize(1u8)?, Value::Integer(1));
    assert_eq!(normalize(-7i32)?, Value::Integer(-7));
    assert_eq!(normalize(u32::MAX)?, Value::Integer(i64::from(u32::MAX)));
    assert_eq!(normalize(1.5f32)?, Value::Float(1.5));
    assert_eq!(normalize(2.25f64)?, Value::Float(2.25));
    assert_eq!(normalize("s")?, Value::String(String::from("s")));
    assert_eq!(normalize(String::from("s"))?, Value::from("s"));
    assert_eq!(normalize(Box::<str>::from("s"))?, Value::from("s"));
    assert_eq!(normalize(Cow::Borrowed("s"))?, Value::from("s"));
    assert_eq!(normalize('c')?, Value::from("c"));
    assert_eq!(normalize(true)?, Value::Bool(true));
    assert_eq!(normalize(Some(3))?, Value::Integer(3));
    Ok(())
}

#[test]
fn booleans_are_distinct_from_integers() -> Result<()> {
    let value = normalize(true)?;
    assert_eq!(value.as_bool(), Some(true));
    assert_eq!(value.as_i64(), None);
    assert_ne!(value, Value::Integer(1));
    Ok(())
}

#[test]
fn wide_integers() -> Result<()> {
    assert_eq!(normalize(42u64)?, Value::Integer(42));
    assert_eq!(normalize(-42i128)?, Value::Integer(-42));
    assert_eq!(normalize(7usize)?, Value::Integer(7));

    let error = normalize(u64::MAX).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::IntegerOutOfRange("u64"));

    let error = normalize(u128::MAX).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::IntegerOutOfRange("u128"));
    Ok(())
}

#[test]
fn unsupported() {
    let error = normalize(None::<i32>).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::UnsupportedValueKind("none"));
    assert_eq!(
        error.to_string(),
        "none values cannot be stored in an object dict"
    );

    let error = normalize(()).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::UnsupportedValueKind("unit"));

    let error = ObjectDict::from_mapping([("x", None::<String>)]).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::UnsupportedValueKind("none"));
}

#[test]
fn sequences() -> Result<()> {
    let expected = Value::Sequence(vec![1.into(), 2.into(), 3.into()]);

    assert_eq!(normalize(vec![1, 2, 3])?, expected);
    assert_eq!(normalize([1, 2, 3])?, expected);
    assert_eq!(normalize(VecDeque::from([1, 2, 3]))?, expected);
    assert_eq!(normalize(Vec::<u8>::new())?, Value::Sequence(Vec::new()));

    let nested = normalize(vec![vec![1], vec![2, 3]])?;
    assert_eq!(nested[1][1], Value::Integer(3));
    Ok(())
}

#[test]
fn sequence_of_mappings() -> Result<()> {
    let value = normalize(vec![HashMap::from([("d", "x")])])?;
    let inner = value[0].as_mapping().ok_or_else(|| anyhow::anyhow!("not a mapping"))?;
    assert_eq!(inner.get_attribute("d")?.as_str(), Some("x"));
    Ok(())
}

#[test]
fn mappings() -> Result<()> {
    let from_hash = normalize(HashMap::from([("a", 1), ("b", 2)]))?;
    let from_btree = normalize(BTreeMap::from([(String::from("a"), 1), (String::from("b"), 2)]))?;
    assert_eq!(from_hash, from_btree);

    let dict = from_hash.into_mapping().ok_or_else(|| anyhow::anyhow!("not a mapping"))?;
    assert!(dict.keys().eq(["a", "b"]));
    Ok(())
}

#[test]
fn idempotent() -> Result<()> {
    let value = normalize(BTreeMap::from([(
        "b",
        BTreeMap::from([("c", vec![BTreeMap::from([("d", "x")])])]),
    )]))?;

    assert_eq!(value.clone().normalize()?, value);
    assert_eq!((&value).normalize()?, value);

    let dict = value.into_mapping().ok_or_else(|| anyhow::anyhow!("not a mapping"))?;
    assert_eq!(dict.clone().normalize()?, Value::Mapping(dict.clone()));
    assert_eq!(ObjectDict::from_mapping(dict.iter())?, dict);
    Ok(())
}

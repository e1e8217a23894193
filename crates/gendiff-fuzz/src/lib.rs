//! Fuzzing harnesses for `gendiff-core`.
//!
//! Each public function accepts raw bytes so it can be driven both from
//! `cargo fuzz` targets and from ordinary tests. Decoding failures are
//! ignored; broken invariants panic so the fuzzer records them.
//!
//! ```
//! gendiff_fuzz::fuzz_load(b"{\"a\":1}");
//! gendiff_fuzz::fuzz_diff(&[1, 2, 3, 4]);
//! gendiff_fuzz::fuzz_tree_json(b"[]");
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arbitrary::Unstructured;
use gendiff_core::{build_diff, render, Change, DiffNode, Format, Node};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

const MAX_DEPTH: usize = 4;
const MAX_ARRAY_LEN: u8 = 6;
const MAX_OBJECT_LEN: u8 = 6;
const MAX_STRING_LEN: u8 = 12;
// Keys drawn from a small alphabet so both documents share keys often.
const KEY_ALPHABET: &[u8] = b"abcde";

/// Feeds arbitrary bytes through the JSON and YAML decoders.
///
/// ```
/// gendiff_fuzz::fuzz_load(b"key: value");
/// ```
pub fn fuzz_load(data: &[u8]) {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Node::from_json_str(text);
        let _ = Node::from_yaml_str(text);
    }
}

/// Diffs two random mappings and renders the tree in every format.
///
/// Panics if sibling keys are out of order or the JSON rendering does not
/// decode back into the same tree.
///
/// ```
/// gendiff_fuzz::fuzz_diff(b"seed");
/// ```
pub fn fuzz_diff(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Some(lhs) = random_object(&mut unstructured) else {
        return;
    };
    let Some(rhs) = random_object(&mut unstructured) else {
        return;
    };
    let (Node::Object(lhs), Node::Object(rhs)) = (&lhs, &rhs) else {
        return;
    };

    let tree = build_diff(lhs, rhs);
    assert_sorted(&tree);

    for format in Format::ALL {
        let rendered = render::render(&tree, format);
        assert!(rendered.is_ok(), "{format} rendering failed: {rendered:?}");
    }

    if let Ok(json) = render::render_json(&tree) {
        let decoded: Vec<DiffNode> =
            serde_json::from_str(&json).unwrap_or_else(|err| panic!("undecodable output: {err}"));
        assert_eq!(decoded, tree, "json rendering lost information");
    }
}

/// Decodes arbitrary bytes as a serialized diff tree and renders it.
///
/// ```
/// gendiff_fuzz::fuzz_tree_json(br#"[{"key":"a","status":"added","value":1}]"#);
/// ```
pub fn fuzz_tree_json(data: &[u8]) {
    if let Ok(tree) = serde_json::from_slice::<Vec<DiffNode>>(data) {
        let _ = render::render_stylish(&tree);
        let _ = render::render_plain(&tree);
        let _ = render::render_json(&tree);
    }
}

fn assert_sorted(tree: &[DiffNode]) {
    for pair in tree.windows(2) {
        assert!(pair[0].key < pair[1].key, "{:?} is not before {:?}", pair[0].key, pair[1].key);
    }
    for node in tree {
        if let Change::Nested { children } = &node.change {
            assert_sorted(children);
        }
    }
}

fn random_object(unstructured: &mut Unstructured<'_>) -> Option<Node> {
    let value = json_object(unstructured, 0).ok()?;
    Node::from_json_value(value).ok()
}

fn json_object(
    unstructured: &mut Unstructured<'_>,
    depth: usize,
) -> Result<JsonValue, arbitrary::Error> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_OBJECT_LEN)?);
    let mut map = JsonMap::new();
    for _ in 0..len {
        let key = random_key(unstructured)?;
        let value = json_value_from_unstructured(unstructured, depth + 1)?;
        map.insert(key, value);
    }
    Ok(JsonValue::Object(map))
}

fn json_value_from_unstructured(
    unstructured: &mut Unstructured<'_>,
    depth: usize,
) -> Result<JsonValue, arbitrary::Error> {
    if depth >= MAX_DEPTH {
        return json_leaf(unstructured);
    }

    let choice = unstructured.int_in_range::<u8>(0..=5)?;
    match choice {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => Ok(JsonValue::Number(random_number(unstructured)?)),
        3 => Ok(JsonValue::String(random_string(unstructured)?)),
        4 => {
            let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_ARRAY_LEN)?);
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(json_value_from_unstructured(unstructured, depth + 1)?);
            }
            Ok(JsonValue::Array(items))
        }
        _ => json_object(unstructured, depth),
    }
}

fn json_leaf(unstructured: &mut Unstructured<'_>) -> Result<JsonValue, arbitrary::Error> {
    let choice = unstructured.int_in_range::<u8>(0..=3)?;
    match choice {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => Ok(JsonValue::Number(random_number(unstructured)?)),
        _ => Ok(JsonValue::String(random_string(unstructured)?)),
    }
}

fn random_number(unstructured: &mut Unstructured<'_>) -> Result<JsonNumber, arbitrary::Error> {
    if unstructured.arbitrary()? {
        let int = unstructured.arbitrary::<i32>()?;
        Ok(JsonNumber::from(int))
    } else {
        let numerator = f64::from(unstructured.arbitrary::<i32>()?);
        let denominator = f64::from(unstructured.int_in_range::<u16>(1..=1024)?);
        JsonNumber::from_f64(numerator / denominator).ok_or(arbitrary::Error::IncorrectFormat)
    }
}

fn random_key(unstructured: &mut Unstructured<'_>) -> Result<String, arbitrary::Error> {
    let len = usize::from(unstructured.int_in_range::<u8>(1..=2)?);
    let mut key = String::with_capacity(len);
    for _ in 0..len {
        key.push(char::from(*unstructured.choose(KEY_ALPHABET)?));
    }
    Ok(key)
}

fn random_string(unstructured: &mut Unstructured<'_>) -> Result<String, arbitrary::Error> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_STRING_LEN)?);
    let mut string = String::with_capacity(len);
    for _ in 0..len {
        let byte = unstructured.int_in_range::<u8>(0x20..=0x7e)?;
        string.push(char::from(byte));
    }
    Ok(string)
}

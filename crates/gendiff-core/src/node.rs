use std::collections::BTreeMap;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

use crate::{DiffNode, LoadError, Number};

/// A decoded configuration value.
///
/// Serializes to (and deserializes from) its plain JSON shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// JSON `null` / YAML `~`.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar; integers stay exact.
    Number(Number),
    /// String scalar.
    String(String),
    /// Sequence; compared as an opaque value.
    Array(Vec<Node>),
    /// Mapping with deterministic key ordering.
    Object(BTreeMap<String, Node>),
}

impl Node {
    /// Parses a JSON string into a [`Node`].
    ///
    /// ```
    /// # use gendiff_core::Node;
    /// let node = Node::from_json_str("{\"hello\":\"world\"}")?;
    /// assert!(node.is_object());
    /// # Ok::<(), gendiff_core::LoadError>(())
    /// ```
    pub fn from_json_str(input: &str) -> Result<Self, LoadError> {
        let value: JsonValue = serde_json::from_str(input)?;
        Self::from_json_value(value)
    }

    /// Parses a YAML string into a [`Node`].
    ///
    /// An empty document decodes to [`Node::Null`].
    ///
    /// ```
    /// # use gendiff_core::Node;
    /// let node = Node::from_yaml_str("---\nanswer: 42\n")?;
    /// assert!(node.is_object());
    /// assert_eq!(Node::from_yaml_str("")?, Node::Null);
    /// # Ok::<(), gendiff_core::LoadError>(())
    /// ```
    pub fn from_yaml_str(input: &str) -> Result<Self, LoadError> {
        if input.trim().is_empty() {
            return Ok(Self::Null);
        }
        let value: YamlValue = serde_yaml::from_str(input)?;
        Self::from_yaml_value(value)
    }

    /// Converts a serde JSON value into a [`Node`].
    ///
    /// Integers keep their exact value; see [`Number`].
    pub fn from_json_value(value: JsonValue) -> Result<Self, LoadError> {
        Ok(match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(v) => Self::Bool(v),
            JsonValue::Number(num) => Self::Number(json_number(&num)?),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(values) => {
                Self::Array(values.into_iter().map(Self::from_json_value).collect::<Result<_, _>>()?)
            }
            JsonValue::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| Ok((key, Self::from_json_value(value)?)))
                    .collect::<Result<_, LoadError>>()?,
            ),
        })
    }

    fn from_yaml_value(value: YamlValue) -> Result<Self, LoadError> {
        Ok(match value {
            YamlValue::Null => Self::Null,
            YamlValue::Bool(v) => Self::Bool(v),
            YamlValue::Number(num) => Self::Number(yaml_number(&num)?),
            YamlValue::String(s) => Self::String(s),
            YamlValue::Sequence(seq) => {
                Self::Array(seq.into_iter().map(Self::from_yaml_value).collect::<Result<_, _>>()?)
            }
            YamlValue::Mapping(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| match key {
                        YamlValue::String(key) => Ok((key, Self::from_yaml_value(value)?)),
                        other => Err(LoadError::NonStringYamlKey { found: format!("{other:?}") }),
                    })
                    .collect::<Result<_, LoadError>>()?,
            ),
            YamlValue::Tagged(tagged) => {
                return Err(LoadError::UnsupportedYamlTag { tag: tagged.tag.to_string() });
            }
        })
    }

    /// Converts the node back into a serde JSON value.
    #[must_use]
    pub fn to_json_value(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(v) => JsonValue::Bool(*v),
            Self::Number(n) => JsonValue::Number(n.to_json_number()),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Array(values) => JsonValue::Array(values.iter().map(Self::to_json_value).collect()),
            Self::Object(map) => {
                let mut object = serde_json::Map::new();
                for (key, value) in map {
                    object.insert(key.clone(), value.to_json_value());
                }
                JsonValue::Object(object)
            }
        }
    }

    /// Returns the entries when this node is a mapping.
    #[must_use]
    pub fn as_object(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Indicates whether this node is a mapping.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Computes the diff tree between two mappings.
    ///
    /// Returns `None` unless both nodes are mappings.
    ///
    /// ```
    /// # use gendiff_core::{Node, Status};
    /// let lhs = Node::from_json_str("{\"a\":1}")?;
    /// let rhs = Node::from_json_str("{\"a\":2}")?;
    /// let tree = lhs.diff(&rhs).expect("both are mappings");
    /// assert_eq!(tree[0].status(), Status::Changed);
    /// assert!(Node::Null.diff(&rhs).is_none());
    /// # Ok::<(), gendiff_core::LoadError>(())
    /// ```
    #[must_use]
    pub fn diff(&self, other: &Self) -> Option<Vec<DiffNode>> {
        match (self, other) {
            (Self::Object(lhs), Self::Object(rhs)) => Some(crate::diff::build_diff(lhs, rhs)),
            _ => None,
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(values) => values.serialize(serializer),
            Self::Object(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Self::from_json_value(value).map_err(D::Error::custom)
    }
}

fn json_number(num: &serde_json::Number) -> Result<Number, LoadError> {
    if let Some(i) = num.as_i64() {
        Ok(Number::Int(i))
    } else if let Some(u) = num.as_u64() {
        Ok(Number::UInt(u))
    } else if let Some(f) = num.as_f64() {
        Number::from_f64(f)
    } else {
        Err(LoadError::NumberOutOfRange { value: num.to_string() })
    }
}

fn yaml_number(num: &serde_yaml::Number) -> Result<Number, LoadError> {
    if let Some(i) = num.as_i64() {
        Ok(Number::Int(i))
    } else if let Some(u) = num.as_u64() {
        Ok(Number::UInt(u))
    } else if let Some(f) = num.as_f64() {
        Number::from_f64(f)
    } else {
        Err(LoadError::NumberOutOfRange { value: num.to_string() })
    }
}

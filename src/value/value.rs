//! Core value types and operations.

use serde::{Deserialize, Serialize};

/// Value represents a parsed JSON/YAML document node.
///
/// Objects compare by key set and recursive value equality; the stored key
/// order (sorted) only affects output formatting. List element order is
/// significant. Values of different tags are never equal, so `Int(1)` and
/// `Float(1.0)` are structurally distinct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

/// Map represents a key-value map where keys are strings.
///
/// Keys are kept sorted, which makes serialized output and key iteration
/// deterministic regardless of the order the input file used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Map {
    pub fields: std::collections::BTreeMap<String, Value>,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the tag name of this value, used when reporting type changes.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns true if both values carry the same tag.
    pub fn same_type(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Map {
    pub fn new() -> Self {
        Map {
            fields: std::collections::BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: String, value: Value) {
        self.fields.insert(key, value);
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }
}

/// Parse a value from JSON.
pub fn from_json(json: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize a value to compact JSON.
pub fn to_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serialize a value to 4-space-indented JSON, the format the upstream spec
/// files themselves use. No trailing newline; callers writing files add one.
pub fn to_json_pretty(value: &Value) -> Result<String, serde_json::Error> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).expect("serde_json output is UTF-8"))
}

/// Parse a value from YAML.
pub fn from_yaml(yaml: &str) -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Null, Value::Null);
        assert_eq!(Value::Bool(true), Value::Bool(true));
        assert_ne!(Value::Bool(true), Value::Bool(false));
        assert_eq!(Value::Int(42), Value::Int(42));
        assert_eq!(Value::String("hello".into()), Value::String("hello".into()));
    }

    #[test]
    fn test_different_tags_never_equal() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Int(1), Value::String("1".into()));
        assert_ne!(Value::Null, Value::Bool(false));
        assert_ne!(Value::List(vec![]), Value::Map(Map::new()));
    }

    #[test]
    fn test_map_comparison_ignores_input_order() {
        let a = from_json(r#"{"a": 1, "b": 2}"#).unwrap();
        let b = from_json(r#"{"b": 2, "a": 1}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_list_order_significant() {
        let a = from_json("[1, 2]").unwrap();
        let b = from_json("[2, 1]").unwrap();
        assert_ne!(a, b);
        assert_ne!(from_json("[1, 2]").unwrap(), from_json("[1, 2, 3]").unwrap());
    }

    #[test]
    fn test_map_operations() {
        let mut map = Map::new();
        assert!(map.is_empty());

        map.set("key".into(), Value::String("value".into()));
        assert!(!map.is_empty());
        assert!(map.has("key"));
        assert_eq!(map.get("key"), Some(&Value::String("value".into())));

        map.delete("key");
        assert!(!map.has("key"));
    }

    #[test]
    fn test_json_roundtrip() {
        let value = Value::Map({
            let mut m = Map::new();
            m.set("name".into(), Value::String("test".into()));
            m.set("count".into(), Value::Int(42));
            m.set("items".into(), Value::List(vec![Value::Int(1), Value::Null]));
            m
        });

        let json = to_json(&value).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(value, parsed);

        let pretty = to_json_pretty(&value).unwrap();
        let parsed = from_json(&pretty).unwrap();
        assert_eq!(value, parsed);
    }

    #[test]
    fn test_pretty_indent_is_four_spaces() {
        let value = from_json(r#"{"a": 1}"#).unwrap();
        let pretty = to_json_pretty(&value).unwrap();
        assert_eq!(pretty, "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_yaml_agrees_with_json() {
        let from_y = from_yaml("name: test\ncount: 42\nflag: true\n").unwrap();
        let from_j = from_json(r#"{"name": "test", "count": 42, "flag": true}"#).unwrap();
        assert_eq!(from_y, from_j);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Int(1).type_name(), "int");
        assert_eq!(Value::Float(1.0).type_name(), "float");
        assert_eq!(Value::Map(Map::new()).type_name(), "map");
        assert!(Value::Int(1).same_type(&Value::Int(2)));
        assert!(!Value::Int(1).same_type(&Value::Float(2.0)));
    }
}

//! Bind parameter registry with automatic type inference.
//!
//! A [`BindParamList`] is the shared accumulator for one statement build:
//! fragments register their literals into it while rendering and reference
//! them by `:name` placeholders. Auto-generated names (`_h_0`, `_h_1`, ...)
//! are unique for the lifetime of the list; only [`BindParamList::reset`]
//! restarts the counter.

use std::fmt;

use crate::error::{BuildError, BuildResult};

/// Prefix for auto-generated bind names.
const AUTO_PREFIX: &str = "_h_";

/// Wire-level type tag attached to a bind value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// Character data (default for anything without a more specific type)
    Str,
    /// Integer
    Int,
    /// Boolean
    Bool,
    /// Large object / binary stream
    Lob,
}

impl DataType {
    /// Infer the type for a value. This is a priority list and the first
    /// matching rule wins: bytes travel as LOBs, integers as INT, booleans
    /// as BOOL, and everything else (null, float, text, json) as STR.
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Bytes(_) => DataType::Lob,
            Value::Int(_) => DataType::Int,
            Value::Bool(_) => DataType::Bool,
            _ => DataType::Str,
        }
    }
}

/// An owned scalar that can be bound into a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Text value
    Text(String),
    /// Binary value
    Bytes(Vec<u8>),
    /// JSON document (serialized by the driver as text)
    Json(serde_json::Value),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// A bind name: caller-supplied text, a positional index (>= 1), or an
/// auto-generated `_h_<n>` name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BindName {
    /// Textual name, referenced as `:name` in the rendered SQL
    Named(String),
    /// 1-based positional index
    Positional(i64),
}

impl fmt::Display for BindName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindName::Named(name) => f.write_str(name),
            BindName::Positional(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<&str> for BindName {
    fn from(name: &str) -> Self {
        BindName::Named(name.to_string())
    }
}

impl From<String> for BindName {
    fn from(name: String) -> Self {
        BindName::Named(name)
    }
}

impl From<i64> for BindName {
    fn from(idx: i64) -> Self {
        BindName::Positional(idx)
    }
}

/// An immutable (name, value, data type) triple.
///
/// The data type is either given explicitly or inferred once at construction
/// and never recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct BindParam {
    name: BindName,
    value: Value,
    data_type: DataType,
}

impl BindParam {
    /// Create a bind parameter.
    ///
    /// Fails with [`BuildError::InvalidBindName`] when a positional name is
    /// below 1.
    pub fn new(
        name: impl Into<BindName>,
        value: impl Into<Value>,
        data_type: Option<DataType>,
    ) -> BuildResult<Self> {
        let name = name.into();
        if let BindName::Positional(idx) = name {
            if idx < 1 {
                return Err(BuildError::InvalidBindName { got: idx });
            }
        }
        let value = value.into();
        let data_type = data_type.unwrap_or_else(|| DataType::infer(&value));
        Ok(Self {
            name,
            value,
            data_type,
        })
    }

    /// The resolved bind name.
    pub fn name(&self) -> &BindName {
        &self.name
    }

    /// The bound value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The explicit or inferred data type.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The `:name` placeholder referencing this parameter in rendered SQL.
    pub fn placeholder(&self) -> String {
        format!(":{}", self.name)
    }
}

/// Insertion-ordered list of bind parameters, unique by name.
///
/// Re-adding an existing name overwrites the entry in place, keeping its
/// original position (map semantics over a stable order).
///
/// A list is the unit of sharing within one statement build. It must not be
/// reused across independent builds without [`reset`](Self::reset): the
/// auto-name counter and the key space are mutable shared state.
#[derive(Clone, Debug, Default)]
pub struct BindParamList {
    params: Vec<BindParam>,
    counter: u64,
}

impl BindParamList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from a sequence of values, named by 1-based position.
    pub fn from_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        let mut list = Self::new();
        for (idx, value) in values.into_iter().enumerate() {
            let value = value.into();
            let data_type = DataType::infer(&value);
            list.insert(BindParam {
                name: BindName::Positional(idx as i64 + 1),
                value,
                data_type,
            });
        }
        list
    }

    /// Create a list from (name, value) pairs, keeping the mapping's keys.
    pub fn from_named<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> BuildResult<Self>
    where
        N: Into<BindName>,
        V: Into<Value>,
    {
        let mut list = Self::new();
        for (name, value) in pairs {
            list.add_named(name, value, None)?;
        }
        Ok(list)
    }

    /// Register a value under a fresh auto-generated name.
    pub fn add(&mut self, value: impl Into<Value>) -> &BindParam {
        let name = BindName::Named(format!("{AUTO_PREFIX}{}", self.counter));
        self.counter += 1;
        let value = value.into();
        let data_type = DataType::infer(&value);
        self.insert(BindParam {
            name,
            value,
            data_type,
        })
    }

    /// Register a value under an explicit name, overwriting any prior entry
    /// with the same name.
    pub fn add_named(
        &mut self,
        name: impl Into<BindName>,
        value: impl Into<Value>,
        data_type: Option<DataType>,
    ) -> BuildResult<&BindParam> {
        let param = BindParam::new(name, value, data_type)?;
        Ok(self.insert(param))
    }

    /// Insert a pre-built parameter as-is under its own name, bypassing
    /// naming and type inference.
    pub fn add_param(&mut self, param: BindParam) -> &BindParam {
        self.insert(param)
    }

    fn insert(&mut self, param: BindParam) -> &BindParam {
        let idx = match self.params.iter().position(|p| p.name == param.name) {
            Some(existing) => {
                self.params[existing] = param;
                existing
            }
            None => {
                self.params.push(param);
                self.params.len() - 1
            }
        };
        &self.params[idx]
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &BindName) -> Option<&BindParam> {
        self.params.iter().find(|p| &p.name == name)
    }

    /// Number of registered parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, BindParam> {
        self.params.iter()
    }

    /// Clear all entries and restart the auto-name counter at zero.
    ///
    /// This is the only clearing primitive; it is what makes a single list
    /// instance reusable across rebuilds.
    pub fn reset(&mut self) {
        self.params.clear();
        self.counter = 0;
    }
}

impl<'a> IntoIterator for &'a BindParamList {
    type Item = &'a BindParam;
    type IntoIter = std::slice::Iter<'a, BindParam>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_is_rule_ordered() {
        assert_eq!(DataType::infer(&Value::Bytes(vec![1, 2])), DataType::Lob);
        assert_eq!(DataType::infer(&Value::Int(7)), DataType::Int);
        assert_eq!(DataType::infer(&Value::Bool(true)), DataType::Bool);
        assert_eq!(DataType::infer(&Value::Null), DataType::Str);
        assert_eq!(DataType::infer(&Value::Float(1.5)), DataType::Str);
        assert_eq!(DataType::infer(&Value::Text("x".into())), DataType::Str);
        assert_eq!(
            DataType::infer(&Value::Json(serde_json::json!({"a": 1}))),
            DataType::Str
        );
    }

    #[test]
    fn test_explicit_type_wins() {
        let param = BindParam::new("blob", "binary-as-text", Some(DataType::Lob)).unwrap();
        assert_eq!(param.data_type(), DataType::Lob);
        assert_eq!(param.value(), &Value::Text("binary-as-text".to_string()));
    }

    #[test]
    fn test_positional_name_must_be_at_least_one() {
        assert!(matches!(
            BindParam::new(0i64, "v", None),
            Err(BuildError::InvalidBindName { got: 0 })
        ));
        assert!(matches!(
            BindParam::new(-3i64, "v", None),
            Err(BuildError::InvalidBindName { got: -3 })
        ));
        assert!(BindParam::new(1i64, "v", None).is_ok());
    }

    #[test]
    fn test_auto_names_increase() {
        let mut binds = BindParamList::new();
        assert_eq!(binds.add("a").placeholder(), ":_h_0");
        assert_eq!(binds.add("b").placeholder(), ":_h_1");
        assert_eq!(binds.add(3i64).placeholder(), ":_h_2");
        assert_eq!(binds.len(), 3);
    }

    #[test]
    fn test_reset_restarts_counter() {
        let mut binds = BindParamList::new();
        binds.add("a");
        binds.add("b");
        binds.reset();
        assert!(binds.is_empty());
        assert_eq!(binds.add("c").placeholder(), ":_h_0");
    }

    #[test]
    fn test_named_overwrite_keeps_position() {
        let mut binds = BindParamList::new();
        binds.add_named("first", 1i64, None).unwrap();
        binds.add_named("second", 2i64, None).unwrap();
        binds.add_named("first", 10i64, None).unwrap();
        assert_eq!(binds.len(), 2);
        let names: Vec<String> = binds.iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(
            binds.get(&BindName::Named("first".into())).unwrap().value(),
            &Value::Int(10)
        );
    }

    #[test]
    fn test_add_param_bypasses_inference() {
        let mut binds = BindParamList::new();
        let param = BindParam::new("custom", 1i64, Some(DataType::Str)).unwrap();
        let stored = binds.add_param(param);
        assert_eq!(stored.name(), &BindName::Named("custom".to_string()));
        assert_eq!(stored.data_type(), DataType::Str);
    }

    #[test]
    fn test_from_values_is_one_based() {
        let binds = BindParamList::from_values(["a", "b"]);
        let names: Vec<String> = binds.iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, vec!["1", "2"]);
    }

    #[test]
    fn test_from_named_keeps_keys() {
        let binds = BindParamList::from_named([("x", 1i64), ("y", 2i64)]).unwrap();
        let names: Vec<String> = binds.iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn test_option_values() {
        let mut binds = BindParamList::new();
        let some = binds.add(Some(5i64)).clone();
        let none = binds.add(None::<i64>).clone();
        assert_eq!(some.value(), &Value::Int(5));
        assert_eq!(some.data_type(), DataType::Int);
        assert_eq!(none.value(), &Value::Null);
        assert_eq!(none.data_type(), DataType::Str);
    }
}

//! Value model for translation tables.
//!
//! Translation tables are JSON-like trees whose leaves may also be callables.
//! Everything here mirrors loose JSON semantics: no schema, no validation,
//! and a permissive notion of truthiness used by the path reader.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A locale table: arbitrarily nested mapping from keys to values.
pub type Table = BTreeMap<String, Value>;

/// Interpolation parameters. Same shape as a table so nested paths work.
pub type Params = Table;

/// Every known locale mapped to its table.
pub type Dictionary = BTreeMap<String, Table>;

/// A callable message. Receives the translation params and returns any value.
#[derive(Clone)]
pub struct MessageFn(Rc<dyn Fn(&Params) -> Value>);

impl MessageFn {
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&Params) -> R + 'static,
        R: Into<Value>,
    {
        Self(Rc::new(move |params| f(params).into()))
    }

    pub fn call(&self, params: &Params) -> Value {
        (self.0)(params)
    }
}

/// Two handles are equal only when they share the same closure.
impl PartialEq for MessageFn {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MessageFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MessageFn(..)")
    }
}

/// A node of a translation table.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<Value>),
    Table(Table),
    Func(MessageFn),
}

impl Value {
    /// Loose truthiness: `null`, `false`, zero and `""` are falsy.
    /// Tables, lists and callables are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::Text(s) => !s.is_empty(),
            Value::List(_) | Value::Table(_) | Value::Func(_) => true,
        }
    }

    /// Index one level down. Tables index by key, lists by canonical
    /// decimal position; anything else has no children.
    pub fn get(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Table(table) => table.get(segment),
            Value::List(items) => segment
                .parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == segment)
                .and_then(|index| items.get(index)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// String form used when a value is spliced into a template.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => match n.as_f64() {
                // `1.0` prints as `1`, like other integral numbers.
                Some(float) if n.is_f64() => write!(f, "{float}"),
                _ => write!(f, "{n}"),
            },
            Value::Text(s) => f.write_str(s),
            Value::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_null() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Value::Table(_) => f.write_str("[object Object]"),
            Value::Func(_) => f.write_str("[function]"),
        }
    }
}

/// Build a params table from `(key, value)` pairs.
///
/// ```
/// use i18n_context::value::{params, Value};
///
/// let p = params([("name", "Tom")]);
/// assert_eq!(p.get("name"), Some(&Value::from("Tom")));
/// ```
pub fn params<I, K, V>(pairs: I) -> Params
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Table(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// Callables have no JSON form and are written as `null`.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Func(_) => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::Text(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Table(table) => serde_json::Value::Object(
                table.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

/// Non-finite floats have no JSON number form and become `Null`.
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<Table> for Value {
    fn from(table: Table) -> Self {
        Value::Table(table)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<MessageFn> for Value {
    fn from(f: MessageFn) -> Self {
        Value::Func(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

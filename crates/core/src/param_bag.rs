//! Ordered multi-value parameter container
//!
//! A [`ParamBag`] carries backend-specific request parameters from the caller
//! through a command to the backend. Each parameter name maps to a list of
//! values:
//! - Names are case-sensitive and keep first-insertion order
//! - Values keep insertion order, duplicates allowed
//! - An absent name is distinct from a name holding an empty list
//!
//! Values are opaque JSON values, so strings, numbers and booleans all fit.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Characters left unescaped by [`ParamBag::request`] (RFC 3986 unreserved).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Ordered mapping from parameter name to a list of values.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use vufind_search_core::ParamBag;
///
/// let mut params = ParamBag::new();
/// params.set("a", [1, 2]);
/// params.add("a", 3);
/// assert_eq!(params.get("a").unwrap(), &[json!(1), json!(2), json!(3)]);
/// assert!(params.get("b").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamBag {
    entries: Vec<(String, Vec<Value>)>,
}

impl ParamBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }

    fn values_mut(&mut self, name: &str) -> &mut Vec<Value> {
        let idx = match self.position(name) {
            Some(idx) => idx,
            None => {
                self.entries.push((name.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Replace all values for `name`.
    ///
    /// Setting an empty iterator keeps the name present with no values.
    pub fn set<I, V>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let slot = self.values_mut(name);
        slot.clear();
        slot.extend(values.into_iter().map(Into::into));
        self
    }

    /// Replace all values for `name` with a single value
    pub fn set_one(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        let value: Value = value.into();
        self.set(name, [value])
    }

    /// Append a value to `name`, creating the entry if absent
    pub fn add(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.values_mut(name).push(value.into());
        self
    }

    /// Append a value to `name` unless it is already present there
    pub fn add_unique(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        let value: Value = value.into();
        let slot = self.values_mut(name);
        if !slot.contains(&value) {
            slot.push(value);
        }
        self
    }

    /// Values stored under `name`, or `None` when the name was never set
    pub fn get(&self, name: &str) -> Option<&[Value]> {
        self.position(name).map(|idx| self.entries[idx].1.as_slice())
    }

    /// First value stored under `name`
    pub fn first(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(|values| values.first())
    }

    /// Whether `name` is present (even with an empty list)
    pub fn has_param(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Whether `value` is one of the values stored under `name`
    pub fn contains(&self, name: &str, value: &Value) -> bool {
        self.get(name).is_some_and(|values| values.contains(value))
    }

    /// Remove `name` entirely, returning its values
    pub fn remove(&mut self, name: &str) -> Option<Vec<Value>> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    /// Append every value of `other`, key by key.
    ///
    /// Keys new to this bag are added after existing keys, in `other`'s order.
    pub fn merge(&mut self, other: &ParamBag) -> &mut Self {
        for (name, values) in &other.entries {
            self.values_mut(name).extend(values.iter().cloned());
        }
        self
    }

    /// Number of distinct parameter names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag holds no names at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, values)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Render the bag as URL-encoded `name=value` pairs, one per value.
    ///
    /// String values are encoded as-is; other values use their JSON text.
    pub fn request(&self) -> Vec<String> {
        let mut pairs = Vec::new();
        for (name, values) in &self.entries {
            let key = utf8_percent_encode(name, QUERY_VALUE);
            for value in values {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                pairs.push(format!("{}={}", key, utf8_percent_encode(&text, QUERY_VALUE)));
            }
        }
        pairs
    }
}

impl<K, V> FromIterator<(K, V)> for ParamBag
where
    K: AsRef<str>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut bag = ParamBag::new();
        for (name, value) in iter {
            bag.add(name.as_ref(), value);
        }
        bag
    }
}

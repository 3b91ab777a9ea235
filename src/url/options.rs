//! Transform option whitelist and option bags
//!
//! The recognized option keys form a fixed, ordered whitelist. Option
//! bags accept any key; filtering down to the whitelist happens at
//! encode time, so unknown keys are silently dropped rather than
//! rejected up front.

use std::fmt;

/// Recognized transform option keys.
///
/// Declaration order is the canonical emission order; directives are
/// always written in this order no matter how the options were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OptionKey {
    Width,
    Height,
    Dpr,
    Fit,
    Gravity,
    Quality,
    Format,
    Onerror,
    Metadata,
}

impl OptionKey {
    pub const ALL: [OptionKey; 9] = [
        OptionKey::Width,
        OptionKey::Height,
        OptionKey::Dpr,
        OptionKey::Fit,
        OptionKey::Gravity,
        OptionKey::Quality,
        OptionKey::Format,
        OptionKey::Onerror,
        OptionKey::Metadata,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::Width => "width",
            OptionKey::Height => "height",
            OptionKey::Dpr => "dpr",
            OptionKey::Fit => "fit",
            OptionKey::Gravity => "gravity",
            OptionKey::Quality => "quality",
            OptionKey::Format => "format",
            OptionKey::Onerror => "onerror",
            OptionKey::Metadata => "metadata",
        }
    }

    /// Whitelist lookup. Unknown keys yield `None`, never an error.
    pub fn lookup(key: &str) -> Option<OptionKey> {
        Self::ALL.iter().copied().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single option value: an opaque printable token.
///
/// Values are never validated; they are rendered into the directive
/// exactly as given. Lists render joined with `x` (`[400, 300]` becomes
/// `400x300`).
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<OptionValue>),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(s) => f.write_str(s),
            OptionValue::Int(n) => write!(f, "{}", n),
            OptionValue::Float(x) => write!(f, "{}", x),
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str("x")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<(u32, u32)> for OptionValue {
    fn from((a, b): (u32, u32)) -> Self {
        OptionValue::List(vec![a.into(), b.into()])
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(values: Vec<OptionValue>) -> Self {
        OptionValue::List(values)
    }
}

/// An option bag: string-keyed, insertion-ordered, last write wins.
///
/// Insertion order is irrelevant to the output; [`sanitize`] recomputes
/// the canonical order from the whitelist every time.
///
/// [`sanitize`]: TransformOptions::sanitize
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformOptions {
    entries: Vec<(String, OptionValue)>,
}

impl TransformOptions {
    pub fn new() -> Self {
        TransformOptions::default()
    }

    /// Set `key`, replacing any previous value for it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`set`](TransformOptions::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overlay `other` onto this bag; `other`'s values win per key.
    pub fn overlay(&mut self, other: &TransformOptions) {
        for (key, value) in &other.entries {
            self.set(key.clone(), value.clone());
        }
    }

    /// Filter down to whitelisted keys in canonical order, rendering
    /// every value (lists flatten to their joined form here).
    pub fn sanitize(&self) -> Vec<(OptionKey, String)> {
        let mut pairs: Vec<(OptionKey, String)> = self
            .entries
            .iter()
            .filter_map(|(key, value)| OptionKey::lookup(key).map(|k| (k, value.to_string())))
            .collect();
        pairs.sort_by_key(|(key, _)| *key);
        pairs
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for TransformOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = TransformOptions::new();
        for (key, value) in iter {
            options.set(key, value);
        }
        options
    }
}

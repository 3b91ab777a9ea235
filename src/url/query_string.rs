//! Query-string micro-codec
//!
//! A minimal mapping-valued parser/serializer for raw query strings,
//! independent of the directive syntax. Parameter order is preserved,
//! the last value wins on duplicate names, and an empty mapping
//! serializes to nothing at all so a stripped query drops its `?`.

/// Ordered query parameter mapping.
///
/// A parameter without an assigner (`?flag`) is kept as a valueless
/// entry and serializes back without an `=`, so pass-through queries
/// stay byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryString {
    /// Decode a raw query string (the part after `?`).
    ///
    /// Keys and values are percent-decoded. Duplicate names keep the
    /// position of the first occurrence and the value of the last one.
    pub fn parse(query: &str) -> Self {
        let mut params = QueryString::default();
        for piece in query.split('&') {
            if piece.is_empty() {
                continue;
            }
            match piece.split_once('=') {
                Some((key, value)) => params.insert(decode(key), Some(decode(value))),
                None => params.insert(decode(piece), None),
            }
        }
        params
    }

    fn insert(&mut self, key: String, value: Option<String>) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Value for `key`; a valueless parameter reads as the empty string.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Set `key` to `value`, replacing in place so surrounding
    /// parameters never reorder.
    pub fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), Some(value.to_string()));
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Serialize back to a raw query string, or `None` when empty.
    pub fn to_query(&self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| match value {
                Some(value) => format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                ),
                None => urlencoding::encode(key).into_owned(),
            })
            .collect();
        Some(encoded.join("&"))
    }
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_default()
}

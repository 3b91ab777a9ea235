//! Structural URL splitting
//!
//! Splits a URL string (absolute or relative) into scheme, authority,
//! path, query, and fragment without normalizing or percent-decoding
//! anything. Serializing the parts reproduces the input byte for byte;
//! the codec only ever rewrites the path or the query.

use std::fmt;

use crate::error::UrlError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: Option<String>,
    pub authority: Option<String>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlParts {
    /// Split a URL into its structural components.
    ///
    /// Accepts relative references (`/1.jpg`, `img.png?v=2`) as well as
    /// absolute URLs. Rejects URLs containing whitespace or ASCII
    /// control characters; everything else is taken as-is.
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        if let Some(bad) = url.chars().find(|c| c.is_ascii_control() || *c == ' ') {
            return Err(UrlError::invalid_url(
                url,
                format!("contains forbidden character {:?}", bad),
            ));
        }

        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (url, None),
        };

        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query.to_string())),
            None => (rest, None),
        };

        let (scheme, rest) = split_scheme(rest);

        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => match after.find('/') {
                Some(idx) => (Some(after[..idx].to_string()), after[idx..].to_string()),
                None => (Some(after.to_string()), String::new()),
            },
            None => (None, rest.to_string()),
        };

        Ok(UrlParts {
            scheme: scheme.map(str::to_string),
            authority,
            path,
            query,
            fragment,
        })
    }
}

/// Splits off a leading `scheme:` when the text before the first colon is
/// a syntactically valid scheme and the colon precedes any slash. A path
/// segment containing a colon (`/a:b/c`) is not a scheme.
fn split_scheme(s: &str) -> (Option<&str>, &str) {
    let colon = match s.find(':') {
        Some(idx) => idx,
        None => return (None, s),
    };

    if let Some(slash) = s.find('/') {
        if slash < colon {
            return (None, s);
        }
    }

    let candidate = &s[..colon];
    let mut chars = candidate.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    };

    if valid {
        (Some(candidate), &s[colon + 1..])
    } else {
        (None, s)
    }
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{}:", scheme)?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "//{}", authority)?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

//! Query string helpers.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Builder for endpoint query strings.
///
/// Pairs render in insertion order. Absent and empty values are skipped
/// at render time, so optional filters can be appended unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a key-value pair.
    #[must_use]
    pub fn append(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Appends the pair when the value is present.
    #[must_use]
    pub fn append_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.append(key, value),
            None => self,
        }
    }

    /// Number of pairs appended so far, empty values included.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pairs have been appended.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders the pairs as a query string with a leading `?`, or an
    /// empty string when nothing survives the empty-value filter.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut any = false;

        for (key, value) in &self.pairs {
            if value.is_empty() {
                continue;
            }
            serializer.append_pair(key, value);
            any = true;
        }

        if any {
            format!("?{}", serializer.finish())
        } else {
            String::new()
        }
    }
}

/// Parses a query string into an ordered map, tolerating a leading `?`.
/// Later duplicates of a key win.
#[must_use]
pub fn parse_query_string(query: &str) -> BTreeMap<String, String> {
    let trimmed = query.strip_prefix('?').unwrap_or(query);

    form_urlencoded::parse(trimmed.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

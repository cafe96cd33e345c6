//! Parameter values fetched from the remote store

use std::collections::HashMap;
use std::ops::Deref;

/// Mapping from Parameter Store path to its (decrypted) value.
///
/// A path missing from the mapping means the parameter was not returned by
/// the store, whatever the reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedParameters(HashMap<String, String>);

impl ResolvedParameters {
    /// Create a new empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a parameter, returning the previous value if any
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(path.into(), value.into())
    }

    /// Look up a parameter value by its exact path
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Merge another batch into this one; entries in `other` win
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }
}

impl Deref for ResolvedParameters {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K, V> FromIterator<(K, V)> for ResolvedParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

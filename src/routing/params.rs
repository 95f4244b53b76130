//! Path parameters captured during matching.

use std::collections::HashMap;

use serde::Serialize;

/// Reserved key carrying the declared name of the matched route.
///
/// Set only on a successful dispatch of a named route. A user parameter with
/// the same name is not protected against and will be overwritten.
pub const ROUTE_NAME_PARAM: &str = "__route__";

/// Parameters extracted from the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters {
    values: HashMap<String, String>,
}

impl Parameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a captured value by parameter name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Store a value, replacing any earlier capture under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Name of the matched route, if one was declared.
    pub fn route_name(&self) -> Option<&str> {
        self.get(ROUTE_NAME_PARAM)
    }

    pub(crate) fn with_route_name(mut self, route_name: Option<&str>) -> Self {
        if let Some(name) = route_name.filter(|n| !n.is_empty()) {
            self.insert(ROUTE_NAME_PARAM, name);
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<Parameters> for HashMap<String, String> {
    fn from(params: Parameters) -> Self {
        params.values
    }
}

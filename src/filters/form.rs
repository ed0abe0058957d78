use std::collections::HashMap;
use url::form_urlencoded;

/// Raw values of a submitted form, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    /// Parse an `application/x-www-form-urlencoded` body or query string.
    /// Repeated keys keep the last value.
    pub fn from_urlencoded(input: &[u8]) -> Self {
        let values = form_urlencoded::parse(input).into_owned().collect();
        Self { values }
    }

    /// Trimmed value of `id`, or `None` when absent or blank.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values
            .get(id)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Checkbox semantics: present with any non-blank value means on.
    pub fn is_on(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}

use std::fmt;

use secrecy::{ExposeSecret as _, SecretString};

/// Query parameter value. Secrets are redacted from [`fmt::Debug`] output and only exposed
/// when the request is serialized onto the wire.
#[non_exhaustive]
#[derive(Clone)]
pub enum ParamValue {
    Plain(String),
    Secret(SecretString),
}

impl ParamValue {
    /// Returns the value as it is sent on the wire.
    #[must_use]
    pub fn expose(&self) -> &str {
        match self {
            ParamValue::Plain(value) => value,
            ParamValue::Secret(value) => value.expose_secret(),
        }
    }
}

impl fmt::Debug for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Plain(value) => fmt::Debug::fmt(value, f),
            ParamValue::Secret(_) => f.write_str("[REDACTED]"),
        }
    }
}

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Plain(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Plain(value)
    }
}

impl From<SecretString> for ParamValue {
    fn from(value: SecretString) -> Self {
        ParamValue::Secret(value)
    }
}

/// Query parameters appended to every Game Data request, such as `locale`, `region` and
/// `access_token`.
///
/// Keys keep their insertion order. Setting a key again replaces its value in place.
///
/// # Example
///
/// ```
/// use wow_game_data_sdk::game_data::DefaultParams;
///
/// let params = DefaultParams::new()
///     .locale("en_US")
///     .access_token("token".to_owned());
///
/// assert_eq!(params.get("locale"), Some("en_US"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefaultParams {
    entries: Vec<(String, ParamValue)>,
}

impl DefaultParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn locale<S: Into<String>>(self, locale: S) -> Self {
        self.param("locale", ParamValue::Plain(locale.into()))
    }

    #[must_use]
    pub fn region<S: Into<String>>(self, region: S) -> Self {
        self.param("region", ParamValue::Plain(region.into()))
    }

    /// Sets the OAuth access token. It is never printed by [`fmt::Debug`].
    #[must_use]
    pub fn access_token(self, token: String) -> Self {
        self.secret("access_token", SecretString::from(token))
    }

    #[must_use]
    pub fn param<K: Into<String>, V: Into<ParamValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn secret<K: Into<String>>(mut self, key: K, value: SecretString) -> Self {
        self.insert(key.into(), ParamValue::Secret(value));
        self
    }

    /// Returns the exposed value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.expose())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes `key`, returning whether it was present.
    pub(crate) fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        before != self.entries.len()
    }

    fn insert(&mut self, key: String, value: ParamValue) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }
}

//! Loosely-typed option values as supplied by the generator host.

use indexmap::IndexMap;
use nestdto_core::toml_scalar_to_string;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A raw option value.
///
/// Hosts pass each option either once (a single string) or, when the key is
/// repeated, as an ordered sequence. An absent option is represented by the
/// key being missing from [`RawConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOption {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for RawOption {
    fn from(value: &str) -> Self {
        RawOption::Single(value.to_string())
    }
}

impl From<String> for RawOption {
    fn from(value: String) -> Self {
        RawOption::Single(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for RawOption {
    fn from(values: Vec<S>) -> Self {
        RawOption::Multiple(values.into_iter().map(Into::into).collect())
    }
}

/// Raw generator configuration, keyed by option name.
///
/// Keys keep the order in which the host supplied them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawConfig(IndexMap<String, RawOption>);

impl RawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an option; `None` means the option is absent.
    pub fn get(&self, key: &str) -> Option<&RawOption> {
        self.0.get(key)
    }

    /// Set an option, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawOption>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawOption>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a raw config from a TOML table.
    ///
    /// Scalars become single values (`true` becomes `"true"`), arrays become
    /// sequences with each element stringified. Nested tables cannot be
    /// expressed as options and are dropped.
    pub fn from_toml_table(table: &toml::Table) -> Self {
        let mut config = Self::new();

        for (key, value) in table {
            match value {
                toml::Value::Array(items) => {
                    let values: Vec<String> = items
                        .iter()
                        .filter_map(|item| {
                            let converted = toml_scalar_to_string(item);
                            if converted.is_none() {
                                warn!(key = %key, "dropping nested value in option sequence");
                            }
                            converted
                        })
                        .collect();
                    config.insert(key.clone(), RawOption::Multiple(values));
                }
                other => match toml_scalar_to_string(other) {
                    Some(s) => config.insert(key.clone(), RawOption::Single(s)),
                    None => {
                        warn!(key = %key, "ignoring option with table value");
                    }
                },
            }
        }

        config
    }
}

impl<K, V> FromIterator<(K, V)> for RawConfig
where
    K: Into<String>,
    V: Into<RawOption>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.insert(key, value);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_single_and_multiple() {
        let config: RawConfig =
            serde_json::from_str(r#"{"reExport":"true","dtoSuffix":["Dto","Ignored"]}"#).unwrap();

        assert_eq!(config.get("reExport"), Some(&RawOption::from("true")));
        assert_eq!(
            config.get("dtoSuffix"),
            Some(&RawOption::from(vec!["Dto", "Ignored"]))
        );
        assert_eq!(config.get("entityPrefix"), None);
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let config = RawConfig::new()
            .with("zeta", "1")
            .with("alpha", "2")
            .with("mid", "3");
        assert_eq!(config.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_toml_table() {
        let table: toml::Table = toml::from_str(
            r#"
            reExport = true
            dtoSuffix = ["Dto", "Ignored"]
            entityPrefix = ""
            retries = 3
            [nested]
            key = "value"
            "#,
        )
        .unwrap();

        let config = RawConfig::from_toml_table(&table);

        assert_eq!(config.get("reExport"), Some(&RawOption::from("true")));
        assert_eq!(
            config.get("dtoSuffix"),
            Some(&RawOption::from(vec!["Dto", "Ignored"]))
        );
        assert_eq!(config.get("entityPrefix"), Some(&RawOption::from("")));
        assert_eq!(config.get("retries"), Some(&RawOption::from("3")));
        assert_eq!(config.get("nested"), None);
        assert_eq!(config.len(), 4);
    }

    #[test]
    fn test_from_iterator() {
        let config: RawConfig = [("reExport", "false"), ("dtoSuffix", "Model")]
            .into_iter()
            .collect();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("dtoSuffix"), Some(&RawOption::from("Model")));
    }
}

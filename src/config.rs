use crate::error::{Result, RewardsError};

pub const ENV_URL: &str = "HOODIE_REWARDS_URL";
pub const ENV_KEY: &str = "HOODIE_REWARDS_KEY";
pub const ENV_TABLE: &str = "HOODIE_REWARDS_TABLE";

/// Table awards are written to unless configured otherwise.
pub const DEFAULT_TABLE: &str = "retailstar_rewards";

/// Where and how to reach the hosted rewards table.
#[derive(Clone)]
pub struct ClientConfig {
    /// Project URL without the `/rest/v1` suffix.
    pub base_url: String,
    pub api_key: String,
    pub table: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Read the configuration from `HOODIE_REWARDS_URL`, `HOODIE_REWARDS_KEY`
    /// and the optional `HOODIE_REWARDS_TABLE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(RewardsError::MissingConfig { var })
        };
        let config = Self::new(required(ENV_URL)?, required(ENV_KEY)?);
        Ok(match lookup(ENV_TABLE).filter(|t| !t.trim().is_empty()) {
            Some(table) => config.with_table(table),
            None => config,
        })
    }

    pub(crate) fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_URL, "https://db.example.com/"),
            (ENV_KEY, "anon"),
        ]))
        .unwrap();
        assert_eq!(config.table, DEFAULT_TABLE);
        assert_eq!(
            config.table_url(),
            "https://db.example.com/rest/v1/retailstar_rewards"
        );

        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_URL, "https://db.example.com"),
            (ENV_KEY, "anon"),
            (ENV_TABLE, "bounty_rewards"),
        ]))
        .unwrap();
        assert_eq!(config.table, "bounty_rewards");
    }

    #[test]
    fn test_missing_vars() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_KEY, "anon")])).unwrap_err();
        assert!(matches!(err, RewardsError::MissingConfig { var } if var == ENV_URL));

        let err = ClientConfig::from_lookup(lookup(&[(ENV_URL, "https://x"), (ENV_KEY, " ")]))
            .unwrap_err();
        assert!(matches!(err, RewardsError::MissingConfig { var } if var == ENV_KEY));
    }

    #[test]
    fn test_debug_hides_key() {
        let config = ClientConfig::new("https://x", "secret-key");
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}

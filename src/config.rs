//! Runtime configuration read from the process environment.
//!
//! The host launches plugin processes with two variables set:
//! `DF_PLUGIN_ID` overrides the id a plugin declares for itself, and
//! `DF_PLUGIN_SERVER_ADDRESS` tells it where to connect.

use crate::PluginIdentity;

pub const PLUGIN_ID_ENV: &str = "DF_PLUGIN_ID";
pub const SERVER_ADDRESS_ENV: &str = "DF_PLUGIN_SERVER_ADDRESS";
pub const DEFAULT_SERVER_ADDRESS: &str = "tcp://127.0.0.1:50050";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub plugin_id: Option<String>,
    pub server_address: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            plugin_id: None,
            server_address: DEFAULT_SERVER_ADDRESS.to_owned(),
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            plugin_id: read(PLUGIN_ID_ENV),
            server_address: read(SERVER_ADDRESS_ENV)
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_owned()),
        }
    }

    /// Applies the id override, if any, to a plugin identity.
    pub fn apply(&self, identity: &mut PluginIdentity) {
        if let Some(id) = &self.plugin_id {
            identity.id = id.clone();
        }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = RuntimeConfig::from_lookup(lookup(&[]));
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.server_address, DEFAULT_SERVER_ADDRESS);
    }

    #[test]
    fn empty_values_are_unset() {
        let config =
            RuntimeConfig::from_lookup(lookup(&[(PLUGIN_ID_ENV, ""), (SERVER_ADDRESS_ENV, "  ")]));
        assert_eq!(config.plugin_id, None);
        assert_eq!(config.server_address, DEFAULT_SERVER_ADDRESS);
    }

    #[test]
    fn env_overrides_identity_id() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            (PLUGIN_ID_ENV, "area-7"),
            (SERVER_ADDRESS_ENV, "unix:///tmp/df.sock"),
        ]));
        assert_eq!(config.server_address, "unix:///tmp/df.sock");

        let mut identity = PluginIdentity::new("area", "Area", "1.0.0");
        config.apply(&mut identity);
        assert_eq!(identity.id, "area-7");
        assert_eq!(identity.name, "Area");
    }
}

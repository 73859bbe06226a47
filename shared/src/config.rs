//! Configuration management for the schedule Lambda.

use std::env;
use std::str::FromStr;

use crate::{Error, Result};

/// Default DynamoDB table holding schedule records.
pub const DEFAULT_TABLE_NAME: &str = "schedule_table";

/// Default address used by the IP echo path.
pub const DEFAULT_IP_LOOKUP_URL: &str = "https://checkip.amazonaws.com";

/// What the router does with a POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouterVariant {
    /// POST writes the schedule record to the store.
    #[default]
    Store,
    /// POST echoes the caller's public IP address.
    IpEcho,
}

impl FromStr for RouterVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "store" => Ok(RouterVariant::Store),
            "ip-echo" | "ip_echo" => Ok(RouterVariant::IpEcho),
            other => Err(Error::Config(format!("Unknown ROUTER_VARIANT: {}", other))),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table name
    pub table_name: String,
    /// Router variant
    pub variant: RouterVariant,
    /// IP lookup address
    pub ip_lookup_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            variant: RouterVariant::default(),
            ip_lookup_url: DEFAULT_IP_LOOKUP_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let variant = match lookup("ROUTER_VARIANT") {
            Some(value) => value.parse()?,
            None => defaults.variant,
        };

        Ok(Self {
            table_name: lookup("SCHEDULE_TABLE").unwrap_or(defaults.table_name),
            variant,
            ip_lookup_url: lookup("IP_LOOKUP_URL").unwrap_or(defaults.ip_lookup_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.table_name, "schedule_table");
        assert_eq!(config.variant, RouterVariant::Store);
        assert_eq!(config.ip_lookup_url, "https://checkip.amazonaws.com");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SCHEDULE_TABLE", "comroom_schedule"),
            ("ROUTER_VARIANT", "IP-ECHO"),
        ]))
        .unwrap();
        assert_eq!(config.table_name, "comroom_schedule");
        assert_eq!(config.variant, RouterVariant::IpEcho);
    }

    #[test]
    fn test_unknown_variant() {
        let err = Config::from_lookup(lookup_from(&[("ROUTER_VARIANT", "both")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

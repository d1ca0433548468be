use std::time::Duration;

use crate::error::{Error, Result};
use crate::session::{Session, MAX_REST_RETRIES, TRANSPORT_TIMEOUT};

/// Session overrides read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub token: Option<String>,
    pub shard_id: u32,
    pub shard_count: u32,
    pub max_rest_retries: u32,
    pub transport_timeout: Duration,
    pub user_agent: Option<String>,
    pub compress: bool,
    pub state_enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            token: std::env::var("DISCORD_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            shard_id: parse_var("DISCORD_SHARD_ID", 0),
            shard_count: parse_var::<u32>("DISCORD_SHARD_COUNT", 1).max(1),
            max_rest_retries: parse_var("DISCORD_MAX_REST_RETRIES", MAX_REST_RETRIES),
            transport_timeout: Duration::from_secs(parse_var(
                "DISCORD_HTTP_TIMEOUT_SECS",
                TRANSPORT_TIMEOUT.as_secs(),
            )),
            user_agent: std::env::var("DISCORD_USER_AGENT")
                .ok()
                .filter(|ua| !ua.is_empty()),
            compress: flag_var("DISCORD_COMPRESS", true),
            state_enabled: flag_var("DISCORD_STATE_ENABLED", true),
        }
    }

    /// Build a session from the configured token and apply every override.
    pub fn bootstrap(&self) -> Result<Session> {
        let token = self.token.as_deref().ok_or(Error::MissingToken)?;
        let mut session = Session::new(token)?;

        if self.shard_count > 1 || self.shard_id > 0 {
            session.set_shard(self.shard_id, self.shard_count);
        }
        session.max_rest_retries = self.max_rest_retries;
        if self.transport_timeout != session.transport_timeout() {
            session.set_transport_timeout(self.transport_timeout)?;
        }
        if let Some(ref ua) = self.user_agent {
            session.user_agent = ua.clone();
            session.identify.properties.browser_user_agent = ua.clone();
        }
        session.compress = self.compress;
        session.identify.compress = self.compress;
        session.state_enabled = self.state_enabled;

        Ok(session)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{name}={raw:?} is not a valid number, using default");
            default
        }),
        Err(_) => default,
    }
}

fn flag_var(name: &str, default: bool) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("DISCORD_TOKEN");
        std::env::remove_var("DISCORD_SHARD_ID");
        std::env::remove_var("DISCORD_SHARD_COUNT");
        std::env::remove_var("DISCORD_MAX_REST_RETRIES");
        std::env::remove_var("DISCORD_HTTP_TIMEOUT_SECS");
        std::env::remove_var("DISCORD_USER_AGENT");
        std::env::remove_var("DISCORD_COMPRESS");
        std::env::remove_var("DISCORD_STATE_ENABLED");
    }

    #[test]
    #[serial]
    fn test_default_config() {
        clear_env();
        let config = Config::from_env();
        assert!(config.token.is_none());
        assert_eq!(config.shard_id, 0);
        assert_eq!(config.shard_count, 1);
        assert_eq!(config.max_rest_retries, 3);
        assert_eq!(config.transport_timeout, Duration::from_secs(20));
        assert!(config.user_agent.is_none());
        assert!(config.compress);
        assert!(config.state_enabled);
    }

    #[test]
    #[serial]
    fn test_shard_from_env() {
        clear_env();
        std::env::set_var("DISCORD_SHARD_ID", "2");
        std::env::set_var("DISCORD_SHARD_COUNT", "4");
        let config = Config::from_env();
        assert_eq!(config.shard_id, 2);
        assert_eq!(config.shard_count, 4);
    }

    #[test]
    #[serial]
    fn test_zero_shard_count_clamped() {
        clear_env();
        std::env::set_var("DISCORD_SHARD_COUNT", "0");
        let config = Config::from_env();
        assert_eq!(config.shard_count, 1);
    }

    #[test]
    #[serial]
    fn test_invalid_number_falls_back_to_default() {
        clear_env();
        std::env::set_var("DISCORD_MAX_REST_RETRIES", "lots");
        std::env::set_var("DISCORD_HTTP_TIMEOUT_SECS", "-5");
        let config = Config::from_env();
        assert_eq!(config.max_rest_retries, 3);
        assert_eq!(config.transport_timeout, Duration::from_secs(20));
    }

    #[test]
    #[serial]
    fn test_flags_from_env() {
        clear_env();
        std::env::set_var("DISCORD_COMPRESS", "false");
        std::env::set_var("DISCORD_STATE_ENABLED", "0");
        let config = Config::from_env();
        assert!(!config.compress);
        assert!(!config.state_enabled);
    }

    #[test]
    #[serial]
    fn test_bootstrap_without_token_fails() {
        clear_env();
        let config = Config::from_env();
        assert!(matches!(config.bootstrap(), Err(Error::MissingToken)));
    }

    #[test]
    #[serial]
    fn test_bootstrap_applies_overrides() {
        clear_env();
        std::env::set_var("DISCORD_TOKEN", "Bot from-env");
        std::env::set_var("DISCORD_SHARD_ID", "1");
        std::env::set_var("DISCORD_SHARD_COUNT", "2");
        std::env::set_var("DISCORD_MAX_REST_RETRIES", "7");
        std::env::set_var("DISCORD_HTTP_TIMEOUT_SECS", "5");
        std::env::set_var("DISCORD_USER_AGENT", "cordial-test/1.0");
        std::env::set_var("DISCORD_COMPRESS", "false");
        let session = Config::from_env().bootstrap().unwrap();
        clear_env();

        assert_eq!(session.token, "Bot from-env");
        assert_eq!(session.identify.token, "Bot from-env");
        assert_eq!(session.identify.shard, Some([1, 2]));
        assert_eq!(session.max_rest_retries, 7);
        assert_eq!(session.transport_timeout(), Duration::from_secs(5));
        assert_eq!(session.user_agent, "cordial-test/1.0");
        assert_eq!(session.identify.properties.browser_user_agent, "cordial-test/1.0");
        assert!(!session.compress);
        assert!(!session.identify.compress);
    }

    #[test]
    #[serial]
    fn test_bootstrap_unsharded_leaves_identify_shard_unset() {
        clear_env();
        std::env::set_var("DISCORD_TOKEN", "Bearer oauth");
        let session = Config::from_env().bootstrap().unwrap();
        clear_env();
        assert!(session.identify.shard.is_none());
        assert_eq!(session.shard_count, 1);
    }
}

use serde::{Deserialize, Serialize};

use crate::session::USER_AGENT;

pub const BROWSER: &str = "Chrome";
pub const BROWSER_VERSION: &str = "101.0.4951.67";
pub const CLIENT_BUILD_NUMBER: u64 = 132647;
pub const OS: &str = "Windows";
pub const OS_VERSION: &str = "10";
pub const RELEASE_CHANNEL: &str = "stable";
pub const SYSTEM_LOCALE: &str = "en-US";
pub const CAPABILITIES: u64 = 509;

/// IDENTIFY payload sent during the gateway handshake.
///
/// Everything here may be changed on the session before the gateway is opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identify {
    pub token: String,
    pub properties: IdentifyProperties,
    pub compress: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_threshold: Option<u32>,
    /// `[shard_id, shard_count]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<u64>,
    pub capabilities: u64,
}

impl Identify {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            properties: IdentifyProperties::default(),
            compress: true,
            large_threshold: None,
            shard: None,
            presence: None,
            intents: None,
            capabilities: CAPABILITIES,
        }
    }
}

/// Client fingerprint reported with IDENTIFY.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifyProperties {
    pub browser: String,
    pub browser_user_agent: String,
    pub browser_version: String,
    pub client_build_number: u64,
    pub client_event_source: Option<String>,
    pub device: String,
    pub os: String,
    pub os_version: String,
    pub referrer: String,
    pub referrer_current: String,
    pub referring_domain: String,
    pub referring_domain_current: String,
    pub release_channel: String,
    pub system_locale: String,
}

impl Default for IdentifyProperties {
    fn default() -> Self {
        Self {
            browser: BROWSER.to_string(),
            browser_user_agent: USER_AGENT.to_string(),
            browser_version: BROWSER_VERSION.to_string(),
            client_build_number: CLIENT_BUILD_NUMBER,
            client_event_source: None,
            device: String::new(),
            os: OS.to_string(),
            os_version: OS_VERSION.to_string(),
            referrer: String::new(),
            referrer_current: String::new(),
            referring_domain: String::new(),
            referring_domain_current: String::new(),
            release_channel: RELEASE_CHANNEL.to_string(),
            system_locale: SYSTEM_LOCALE.to_string(),
        }
    }
}

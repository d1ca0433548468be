use serde::{Deserialize, Serialize};

/// An external account (Twitch, GitHub, ...) linked to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConnection {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub connection_type: String,
    #[serde(default)]
    pub revoked: bool,
    #[serde(default)]
    pub integrations: Vec<serde_json::Value>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub friend_sync: bool,
    #[serde(default)]
    pub show_activity: bool,
    /// 0 = only the user, 1 = everyone.
    #[serde(default)]
    pub visibility: u8,
}

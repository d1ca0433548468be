use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::connection::UserConnection;
use super::user::User;

/// A guild shared between the profile owner and the requesting user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutualGuild {
    pub id: String,
    #[serde(rename = "nick", default)]
    pub nickname: Option<String>,
}

/// A user's full profile. `user` is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user: User,
    #[serde(default)]
    pub connections: Vec<UserConnection>,
    #[serde(default)]
    pub premium_since: Option<DateTime<Utc>>,
    #[serde(rename = "premium_guild_since", default)]
    pub boosting_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub mutual_guilds: Vec<MutualGuild>,
    #[serde(default)]
    pub user_profile: serde_json::Map<String, serde_json::Value>,
}

#![allow(dead_code)]

use cordial::models::{Profile, User};
use serde_json::json;

/// Snowflake used for the fixture user.
pub const USER_ID: &str = "123456789012345678";

/// A user payload as the API would return it, with optional resource hashes.
pub fn user_json(avatar: Option<&str>, banner: Option<&str>) -> serde_json::Value {
    json!({
        "id": USER_ID,
        "username": "Ada",
        "global_name": "Ada Lovelace",
        "discriminator": "0001",
        "avatar": avatar,
        "banner": banner,
        "banner_color": "#112233",
        "accent_color": 1122867,
        "locale": "en-GB",
        "bot": false,
        "system": false,
        "public_flags": 64,
        "premium_type": 1,
    })
}

pub fn user(avatar: Option<&str>, banner: Option<&str>) -> User {
    serde_json::from_value(user_json(avatar, banner)).expect("fixture user should decode")
}

pub fn profile() -> Profile {
    serde_json::from_value(json!({
        "user": user_json(Some("a_0123abcd"), Some("feedface")),
        "connections": [
            { "id": "1", "name": "ada", "type": "github", "verified": true, "integrations": [] }
        ],
        "premium_since": "2023-01-01T00:00:00Z",
        "premium_guild_since": "2023-06-01T12:00:00Z",
        "mutual_guilds": [{ "id": "99", "nick": "countess" }],
        "user_profile": { "theme_colors": [1, 2] }
    }))
    .expect("fixture profile should decode")
}

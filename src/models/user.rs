use std::ops::BitOr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::cdn;
use crate::endpoints;

/// Public badge flags on a user account, sent as a bare integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserFlags(pub u64);

impl UserFlags {
    pub const DISCORD_EMPLOYEE: UserFlags = UserFlags(1 << 0);
    pub const DISCORD_PARTNER: UserFlags = UserFlags(1 << 1);
    pub const HYPESQUAD_EVENTS: UserFlags = UserFlags(1 << 2);
    pub const BUG_HUNTER_LEVEL_1: UserFlags = UserFlags(1 << 3);
    pub const HOUSE_BRAVERY: UserFlags = UserFlags(1 << 6);
    pub const HOUSE_BRILLIANCE: UserFlags = UserFlags(1 << 7);
    pub const HOUSE_BALANCE: UserFlags = UserFlags(1 << 8);
    pub const EARLY_SUPPORTER: UserFlags = UserFlags(1 << 9);
    pub const TEAM_USER: UserFlags = UserFlags(1 << 10);
    pub const SYSTEM: UserFlags = UserFlags(1 << 12);
    pub const BUG_HUNTER_LEVEL_2: UserFlags = UserFlags(1 << 14);
    pub const VERIFIED_BOT: UserFlags = UserFlags(1 << 16);
    pub const VERIFIED_BOT_DEVELOPER: UserFlags = UserFlags(1 << 17);
    pub const DISCORD_CERTIFIED_MODERATOR: UserFlags = UserFlags(1 << 18);
    pub const BOT_HTTP_INTERACTIONS: UserFlags = UserFlags(1 << 19);
    pub const SPAMMER: UserFlags = UserFlags(1 << 20);
    pub const ACTIVE_DEVELOPER: UserFlags = UserFlags(1 << 22);

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// True when every bit of `other` is set.
    pub const fn contains(self, other: UserFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for UserFlags {
    type Output = UserFlags;

    fn bitor(self, rhs: UserFlags) -> UserFlags {
        UserFlags(self.0 | rhs.0)
    }
}

/// Nitro subscription tier. Tiers added by the platform later decode as
/// `Unknown` and serialize back to the same number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum PremiumType {
    #[default]
    None,
    NitroClassic,
    Nitro,
    NitroBasic,
    Unknown(u8),
}

impl From<u8> for PremiumType {
    fn from(value: u8) -> Self {
        match value {
            0 => PremiumType::None,
            1 => PremiumType::NitroClassic,
            2 => PremiumType::Nitro,
            3 => PremiumType::NitroBasic,
            other => PremiumType::Unknown(other),
        }
    }
}

impl From<PremiumType> for u8 {
    fn from(value: PremiumType) -> Self {
        match value {
            PremiumType::None => 0,
            PremiumType::NitroClassic => 1,
            PremiumType::Nitro => 2,
            PremiumType::NitroBasic => 3,
            PremiumType::Unknown(other) => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum UserSettingsType {
    PreloadedUserSettings = 1,
    FrecencyUserSettings = 2,
    TestSettings = 3,
}

/// A platform user as reported by the API.
///
/// `email`, `phone`, `token`, `bio` and `pronouns` are only populated for the
/// user the session is authenticated as (or with the matching OAuth scopes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub username: String,
    #[serde(rename = "global_name", default)]
    pub display_name: Option<String>,
    /// Avatar hash; `a_`-prefixed hashes are animated.
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    /// Legacy 4-digit tag.
    #[serde(default)]
    pub discriminator: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mfa_enabled: bool,
    #[serde(default)]
    pub banner: Option<String>,
    /// Banner color as a hex code, e.g. `#ff00aa`.
    #[serde(default)]
    pub banner_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bot: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_flags: UserFlags,
    #[serde(default, deserialize_with = "null_as_default")]
    pub premium_type: PremiumType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub system: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: i64,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub pronouns: Option<String>,
}

/// Absent and `null` both decode to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// A string which mentions the user in a message.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    /// `username#discriminator`.
    #[deprecated(note = "use `username` or `display_name` instead")]
    pub fn display_label(&self) -> String {
        format!("{}#{}", self.username, self.discriminator)
    }

    /// URL of the user's avatar, falling back to the default avatar for the
    /// discriminator. An empty `size` leaves out the size parameter.
    pub fn avatar_url(&self, size: &str) -> String {
        let hash = self.avatar.as_deref().unwrap_or_default();
        cdn::resolve_url(
            self.avatar.as_deref(),
            Some(endpoints::default_user_avatar(&self.discriminator).as_str()),
            &endpoints::user_avatar(&self.id, hash),
            Some(endpoints::user_avatar_animated(&self.id, hash).as_str()),
            size,
        )
    }

    /// URL of the user's banner, or an empty string when none is set.
    /// `size` can be any power of two between 16 and 4096.
    pub fn banner_url(&self, size: &str) -> String {
        let hash = self.banner.as_deref().unwrap_or_default();
        cdn::resolve_url(
            self.banner.as_deref(),
            None,
            &endpoints::user_banner(&self.id, hash),
            Some(endpoints::user_banner_animated(&self.id, hash).as_str()),
            size,
        )
    }

    pub fn has_flag(&self, flag: UserFlags) -> bool {
        self.public_flags.contains(flag)
    }
}

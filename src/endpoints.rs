//! Raw URL templates for platform CDN resources.
//!
//! These only build strings. Choosing between them (default vs static vs
//! animated) is done by [`crate::cdn::resolve_url`].

pub const CDN: &str = "https://cdn.discordapp.com/";
pub const CDN_AVATARS: &str = "https://cdn.discordapp.com/avatars/";
pub const CDN_BANNERS: &str = "https://cdn.discordapp.com/banners/";

/// Number of built-in default avatars keyed by legacy discriminator.
const DEFAULT_AVATAR_COUNT: i64 = 5;

/// Default avatar for a user without a custom one, keyed by the legacy
/// discriminator. A discriminator that isn't a number maps to avatar 0.
pub fn default_user_avatar(discriminator: &str) -> String {
    let index = discriminator
        .parse::<i64>()
        .unwrap_or(0)
        .rem_euclid(DEFAULT_AVATAR_COUNT);
    format!("{CDN}embed/avatars/{index}.png")
}

pub fn user_avatar(user_id: &str, hash: &str) -> String {
    format!("{CDN_AVATARS}{user_id}/{hash}.png")
}

pub fn user_avatar_animated(user_id: &str, hash: &str) -> String {
    format!("{CDN_AVATARS}{user_id}/{hash}.gif")
}

pub fn user_banner(user_id: &str, hash: &str) -> String {
    format!("{CDN_BANNERS}{user_id}/{hash}.png")
}

pub fn user_banner_animated(user_id: &str, hash: &str) -> String {
    format!("{CDN_BANNERS}{user_id}/{hash}.gif")
}

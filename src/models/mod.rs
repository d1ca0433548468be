pub mod connection;
pub mod profile;
pub mod user;

pub use connection::UserConnection;
pub use profile::{MutualGuild, Profile};
pub use user::{PremiumType, User, UserFlags, UserSettingsType};

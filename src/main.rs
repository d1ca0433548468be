use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::json;

use cordial::config::Config;
use cordial::models::{Profile, User};
use cordial::Session;

#[derive(Debug, Parser)]
#[command(name = "cordial", version, about = "Session bootstrap and CDN URL helper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Bootstrap a session and print its configuration (token redacted)
    Session {
        /// Token including its scheme, e.g. "Bot abc" (overrides DISCORD_TOKEN)
        #[arg(long)]
        token: Option<String>,

        #[arg(long)]
        shard_id: Option<u32>,

        #[arg(long)]
        shard_count: Option<u32>,
    },

    /// Resolve avatar and banner URLs for a user JSON document
    User {
        /// Path to the JSON file, or "-" for stdin
        input: PathBuf,

        /// Image size as a power of two; omitted when empty
        #[arg(long, default_value = "")]
        size: String,
    },

    /// Summarize a profile JSON document
    Profile {
        /// Path to the JSON file, or "-" for stdin
        input: PathBuf,

        #[arg(long, default_value = "")]
        size: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cordial=info".into()),
        )
        .init();

    let cli = Cli::parse();
    print_banner();

    if let Err(e) = run(cli.command) {
        eprintln!("{}", error_line(&e));
        std::process::exit(1);
    }
}

fn error_line(e: &cordial::Error) -> String {
    format!("  \x1b[31merror:\x1b[0m {e}")
}

fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    let git_sha = env!("GIT_SHA");

    eprintln!();
    eprintln!("  \x1b[1;36mcordial\x1b[0m \x1b[2mv{version} ({git_sha})\x1b[0m");
    eprintln!();
}

fn run(command: Commands) -> cordial::Result<()> {
    match command {
        Commands::Session {
            token,
            shard_id,
            shard_count,
        } => {
            let mut config = Config::from_env();
            if token.is_some() {
                config.token = token;
            }
            if let Some(id) = shard_id {
                config.shard_id = id;
            }
            if let Some(count) = shard_count {
                config.shard_count = count.max(1);
            }
            let session = config.bootstrap()?;
            print_json(&session_summary(&session))
        }
        Commands::User { input, size } => {
            let user: User = serde_json::from_str(&read_input(&input)?)?;
            print_json(&user_summary(&user, &size))
        }
        Commands::Profile { input, size } => {
            let profile: Profile = serde_json::from_str(&read_input(&input)?)?;
            let connections: Vec<_> = profile
                .connections
                .iter()
                .map(|c| json!({ "type": c.connection_type, "name": c.name, "verified": c.verified }))
                .collect();
            print_json(&json!({
                "user": user_summary(&profile.user, &size),
                "connections": connections,
                "mutual_guilds": profile.mutual_guilds.len(),
                "premium_since": profile.premium_since,
                "boosting_since": profile.boosting_since,
            }))
        }
    }
}

fn session_summary(session: &Session) -> serde_json::Value {
    let mut identify = session.identify.clone();
    identify.token = "<redacted>".to_string();
    json!({
        "token": "<redacted>",
        "state_enabled": session.state_enabled,
        "compress": session.compress,
        "should_reconnect_on_error": session.should_reconnect_on_error,
        "should_retry_on_rate_limit": session.should_retry_on_rate_limit,
        "shard_id": session.shard_id,
        "shard_count": session.shard_count,
        "max_rest_retries": session.max_rest_retries,
        "transport_timeout_secs": session.transport_timeout().as_secs(),
        "user_agent": session.user_agent,
        "last_heartbeat_ack": session.last_heartbeat_ack,
        "identify": identify,
    })
}

#[allow(deprecated)]
fn user_summary(user: &User, size: &str) -> serde_json::Value {
    json!({
        "id": user.id,
        "username": user.username,
        "display_name": user.display_name,
        "label": user.display_label(),
        "mention": user.mention(),
        "avatar_url": user.avatar_url(size),
        "banner_url": user.banner_url(size),
    })
}

fn read_input(path: &Path) -> cordial::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn print_json(value: &serde_json::Value) -> cordial::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

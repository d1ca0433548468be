use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::error::Result;
use crate::identify::Identify;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/101.0.4951.67 Safari/537.36";
pub const TRANSPORT_TIMEOUT: Duration = Duration::from_secs(20);
pub const MAX_REST_RETRIES: u32 = 3;

/// Configuration and handshake state for one connection to the platform.
///
/// Fields are public so they can be adjusted between [`Session::new`] and
/// opening the gateway. Changing transport or identify fields after that
/// point has no defined effect.
///
/// `token` and `identify.token` start out equal. Code that assigns one of
/// them directly is responsible for keeping the other in sync, or can use
/// [`Session::set_token`].
pub struct Session {
    /// Credential including its scheme, e.g. `"Bot abc"` or `"Bearer abc"`.
    pub token: String,
    pub state_enabled: bool,
    pub compress: bool,
    pub should_reconnect_on_error: bool,
    pub should_retry_on_rate_limit: bool,
    pub shard_id: u32,
    pub shard_count: u32,
    pub max_rest_retries: u32,
    pub user_agent: String,
    pub identify: Identify,
    /// Set to the construction time so a heartbeat monitor starts out healthy.
    pub last_heartbeat_ack: DateTime<Utc>,
    transport_timeout: Duration,
    client: Client,
    // last gateway sequence number seen; written by the gateway only
    sequence: AtomicI64,
}

impl Session {
    /// Bootstrap a session from a token that already carries its scheme
    /// prefix (`"Bot "` or `"Bearer "`). The token is stored as given.
    ///
    /// Performs no network I/O. Fails only if the HTTP client cannot be
    /// initialized.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let client = build_client(TRANSPORT_TIMEOUT)?;

        let session = Self {
            identify: Identify::new(token.clone()),
            token,
            state_enabled: true,
            compress: true,
            should_reconnect_on_error: true,
            should_retry_on_rate_limit: true,
            shard_id: 0,
            shard_count: 1,
            max_rest_retries: MAX_REST_RETRIES,
            user_agent: USER_AGENT.to_string(),
            last_heartbeat_ack: Utc::now(),
            transport_timeout: TRANSPORT_TIMEOUT,
            client,
            sequence: AtomicI64::new(0),
        };

        tracing::debug!(
            shard_id = session.shard_id,
            shard_count = session.shard_count,
            "session bootstrapped"
        );
        Ok(session)
    }

    /// Replace the credential in both the session and the identify payload.
    pub fn set_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.identify.token = token.clone();
        self.token = token;
    }

    /// Set sharding coordinates on the session and the identify payload.
    /// A `shard_count` of 0 is treated as 1.
    pub fn set_shard(&mut self, shard_id: u32, shard_count: u32) {
        let shard_count = shard_count.max(1);
        if shard_id >= shard_count {
            tracing::warn!(shard_id, shard_count, "shard id is outside the shard count");
        }
        self.shard_id = shard_id;
        self.shard_count = shard_count;
        self.identify.shard = Some([shard_id, shard_count]);
    }

    pub fn transport_timeout(&self) -> Duration {
        self.transport_timeout
    }

    /// Rebuild the HTTP client with a new request timeout.
    pub fn set_transport_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.client = build_client(timeout)?;
        self.transport_timeout = timeout;
        Ok(())
    }

    /// HTTP client configured with the session's transport timeout.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("state_enabled", &self.state_enabled)
            .field("compress", &self.compress)
            .field("should_reconnect_on_error", &self.should_reconnect_on_error)
            .field("should_retry_on_rate_limit", &self.should_retry_on_rate_limit)
            .field("shard_id", &self.shard_id)
            .field("shard_count", &self.shard_count)
            .field("max_rest_retries", &self.max_rest_retries)
            .field("transport_timeout", &self.transport_timeout)
            .field("user_agent", &self.user_agent)
            .field("identify_capabilities", &self.identify.capabilities)
            .field("identify_shard", &self.identify.shard)
            .field("last_heartbeat_ack", &self.last_heartbeat_ack)
            .field("sequence", &self.sequence.load(Ordering::Relaxed))
            .finish()
    }
}

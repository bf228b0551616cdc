use crate::Error;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.meetup.com";
pub const DEFAULT_EVENT_BASE: &str = "http://www.meetup.com";
pub const DEFAULT_SIG_ID: &str = "44948372";
pub const DEFAULT_SIG: &str = "03b1cf02afd70a3ae78cc9c8cc83d514d6f37ecf";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Signed-URL credential pair for the Meetup API.
///
/// The default pair is the one published for public, read-only access. It is not
/// a secret, but deployments may sign their own requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub sig_id: String,
    pub sig: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials {
            sig_id: DEFAULT_SIG_ID.to_string(),
            sig: DEFAULT_SIG.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the API, without a trailing slash.
    pub api_base: String,

    /// Base URL of the public event pages, without a trailing slash.
    pub event_base: String,

    pub credentials: Credentials,

    pub timeout: Duration,

    pub https_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: DEFAULT_API_BASE.to_string(),
            event_base: DEFAULT_EVENT_BASE.to_string(),
            credentials: Credentials::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            https_only: true,
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// A `.env` file in the working directory is read first if one exists.
    pub fn from_env() -> Result<Config, Error> {
        dotenvy::dotenv().ok();

        let mut config = Config::default();

        if let Ok(api_base) = env::var("MEETUP_API_BASE") {
            config.api_base = api_base.trim_end_matches('/').to_string();
            config.https_only = config.api_base.starts_with("https://");
        }
        if let Ok(event_base) = env::var("MEETUP_EVENT_BASE") {
            config.event_base = event_base.trim_end_matches('/').to_string();
        }
        if let Ok(sig_id) = env::var("MEETUP_SIG_ID") {
            config.credentials.sig_id = sig_id;
        }
        if let Ok(sig) = env::var("MEETUP_SIG") {
            config.credentials.sig = sig;
        }
        if let Ok(timeout) = env::var("MEETUP_TIMEOUT_SECS") {
            let secs = timeout.parse::<u64>().map_err(|err| {
                Error::ConfigError(format!(
                    "Invalid MEETUP_TIMEOUT_SECS \"{}\" ({}).",
                    timeout, err
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(https_only) = env::var("MEETUP_HTTPS_ONLY") {
            config.https_only = https_only.parse::<bool>().map_err(|err| {
                Error::ConfigError(format!(
                    "Invalid MEETUP_HTTPS_ONLY \"{}\" ({}).",
                    https_only, err
                ))
            })?;
        }

        Ok(config)
    }
}

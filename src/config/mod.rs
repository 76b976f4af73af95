//! Configuration management.
//!
//! Settings come from built-in defaults, an optional TOML file and
//! `ARXIV_FEED_*` environment variables, in increasing priority.
//!
//! ```toml
//! [arxiv]
//! api_url = "http://export.arxiv.org/api/query?search_query="
//! rss_url = "http://export.arxiv.org/rss/"
//! max_authors = 3
//! max_results = 10
//!
//! [http]
//! timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`find_config_file`]
pub const CONFIG_FILE_NAME: &str = "arxiv-feed.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "ARXIV_FEED";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// arXiv endpoints and result shaping
    #[serde(default)]
    pub arxiv: ArxivConfig,

    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpConfig,
}

/// arXiv endpoints and result shaping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArxivConfig {
    /// Search API link, up to and including `search_query=`
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Daily-submissions RSS link, the category is appended to it
    #[serde(default = "default_rss_url")]
    pub rss_url: String,

    /// Authors shown before collapsing into "et al."
    #[serde(default = "default_max_authors")]
    pub max_authors: usize,

    /// Page size for searches
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            rss_url: default_rss_url(),
            max_authors: default_max_authors(),
            max_results: default_max_results(),
        }
    }
}

fn default_api_url() -> String {
    "http://export.arxiv.org/api/query?search_query=".to_string()
}

fn default_rss_url() -> String {
    "http://export.arxiv.org/rss/".to_string()
}

fn default_max_authors() -> usize {
    3
}

fn default_max_results() -> usize {
    10
}

/// HTTP transport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

/// Configuration from defaults and environment variables only
pub fn get_config() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(environment())
        .build()?
        .try_deserialize()
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator("__")
}

/// Find a configuration file in the usual locations
///
/// Looks at `./arxiv-feed.toml` first, then at `arxiv-feed/config.toml`
/// under the platform config directory.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("arxiv-feed").join("config.toml"))
        .filter(|path| path.is_file())
}

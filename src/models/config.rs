//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob of the Tera templates, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Key signing the session cookie. At least 64 bytes.
    pub secret: String,
    /// CSV file the task store is loaded from.
    pub tasks_csv: String,
    /// CSV file of `group,project` memberships. No groups when unset.
    #[serde(default)]
    pub groups_csv: Option<String>,
    #[serde(default)]
    pub session_secure: bool,
}

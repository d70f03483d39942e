//! Library error type for configuration and denylist construction.
//!
//! The policy lookups themselves never fail; errors only surface while
//! building a denylist or reading configuration at startup.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HostgateError {
    /// A denylist entry could not be used as a domain suffix.
    #[error("invalid denylist entry {entry:?}: {reason}")]
    InvalidDenylistEntry { entry: String, reason: &'static str },

    /// Config file exists but is not valid TOML for [`crate::config::HostgateConfig`].
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HostgateError>;

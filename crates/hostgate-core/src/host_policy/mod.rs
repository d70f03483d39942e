//! Host denylist and mirror preference.
//!
//! Media items usually come with several mirror URLs. Some hosting domains are
//! known to be unusable, so callers ask this module for the first mirror that
//! is not on the denylist:
//! - [`hostname_of`] extracts the lowercased host of a URL, or `None`
//! - [`is_blacklisted`] checks one URL against the built-in denylist
//! - [`prefer_non_blacklisted`] picks a mirror from an ordered candidate list
//!
//! None of these fail. Malformed URLs simply have no host and are never
//! denied. The free functions use the built-in [`BLACKLIST_HOSTS`]; a
//! [`HostDenylist`] built from config offers the same operations as methods.

mod denylist;
mod select;

use std::sync::OnceLock;

pub use denylist::{HostDenylist, BLACKLIST_HOSTS};
pub use crate::url_model::hostname_of;

static BUILTIN: OnceLock<HostDenylist> = OnceLock::new();

/// Process-wide denylist holding [`BLACKLIST_HOSTS`].
pub fn builtin_denylist() -> &'static HostDenylist {
    BUILTIN.get_or_init(HostDenylist::builtin)
}

/// True when the host of `url` equals or is a subdomain of a built-in entry.
pub fn is_blacklisted(url: &str) -> bool {
    builtin_denylist().is_blacklisted(url)
}

/// First candidate not on the built-in denylist, else the first candidate.
pub fn prefer_non_blacklisted<S: AsRef<str>>(urls: &[S]) -> Option<&str> {
    builtin_denylist().prefer_non_blacklisted(urls)
}

/// [`prefer_non_blacklisted`] for untyped JSON input; non-arrays yield `None`.
pub fn prefer_non_blacklisted_json(value: &serde_json::Value) -> Option<String> {
    builtin_denylist().prefer_non_blacklisted_json(value)
}

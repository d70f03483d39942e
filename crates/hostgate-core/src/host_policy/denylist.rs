//! Denylist of domain suffixes.

use crate::config::DenylistConfig;
use crate::error::{HostgateError, Result};
use crate::url_model::hostname_of;

/// Built-in denied hosts. Mirrors on these domains are known to be broken for
/// embedded playback.
pub static BLACKLIST_HOSTS: &[&str] = &["vidmoly.to", "vidmoly.me"];

/// Ordered, immutable set of denied domain suffixes.
///
/// A hostname is denied when it equals an entry or ends with `"." + entry`.
/// Entries are stored lowercased and deduplicated in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDenylist {
    entries: Vec<String>,
}

impl Default for HostDenylist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl HostDenylist {
    /// Denylist holding exactly [`BLACKLIST_HOSTS`].
    pub fn builtin() -> Self {
        Self {
            entries: BLACKLIST_HOSTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build from arbitrary entries, normalising and validating each one.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for raw in entries {
            let entry = normalize_entry(raw.as_ref())?;
            if !out.contains(&entry) {
                out.push(entry);
            }
        }
        Ok(Self { entries: out })
    }

    /// Built-in entries followed by `extra_hosts`, or only `extra_hosts` when
    /// `replace_builtin` is set.
    pub fn from_config(cfg: &DenylistConfig) -> Result<Self> {
        let builtin: &[&str] = if cfg.replace_builtin {
            &[]
        } else {
            BLACKLIST_HOSTS
        };
        let list = Self::from_entries(
            builtin
                .iter()
                .copied()
                .chain(cfg.extra_hosts.iter().map(String::as_str)),
        )?;
        tracing::debug!(entries = ?list.entries, "denylist built from config");
        Ok(list)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry that denies `host`, if any. Case-insensitive.
    pub fn matching_host_entry(&self, host: &str) -> Option<&str> {
        let host = host.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|entry| host_matches(&host, entry))
            .map(String::as_str)
    }

    pub fn denies_host(&self, host: &str) -> bool {
        self.matching_host_entry(host).is_some()
    }

    /// The entry that denies the host of `url`. Unparseable URLs match nothing.
    pub fn matching_entry(&self, url: &str) -> Option<&str> {
        self.matching_host_entry(&hostname_of(url)?)
    }

    pub fn is_blacklisted(&self, url: &str) -> bool {
        self.matching_entry(url).is_some()
    }
}

/// Exact match or dot-bounded suffix match; `host` must already be lowercase.
fn host_matches(host: &str, entry: &str) -> bool {
    host == entry
        || host
            .strip_suffix(entry)
            .map_or(false, |rest| rest.ends_with('.'))
}

fn normalize_entry(raw: &str) -> Result<String> {
    let invalid = |reason| HostgateError::InvalidDenylistEntry {
        entry: raw.to_string(),
        reason,
    };

    let trimmed = raw.trim();
    let entry = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if entry.is_empty() {
        return Err(invalid("empty entry"));
    }
    if entry.contains('*') {
        return Err(invalid("wildcards are not supported"));
    }
    if entry.contains('/') || entry.contains(':') {
        return Err(invalid("expected a bare domain, not a URL"));
    }
    if entry.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }
    Ok(entry.to_ascii_lowercase())
}

//! Mirror selection over a candidate list.

use serde_json::Value;

use super::HostDenylist;

impl HostDenylist {
    /// Returns the first candidate whose host is not denied.
    ///
    /// When every candidate is denied the first one is returned anyway, so the
    /// caller still has something to try; an empty first candidate yields
    /// `None`. An empty list yields `None`.
    pub fn prefer_non_blacklisted<'a, S: AsRef<str>>(&self, urls: &'a [S]) -> Option<&'a str> {
        let first = urls.first()?.as_ref();

        for url in urls {
            let url = url.as_ref();
            match self.matching_entry(url) {
                None => {
                    tracing::trace!(url = %url, "candidate accepted");
                    return Some(url);
                }
                Some(entry) => {
                    tracing::debug!(url = %url, entry = %entry, "skipping denied candidate")
                }
            }
        }

        tracing::debug!(
            candidates = urls.len(),
            "every candidate denied, falling back to first"
        );
        (!first.is_empty()).then_some(first)
    }

    /// Same selection over an untyped JSON value.
    ///
    /// Anything other than an array yields `None`. Only string elements can be
    /// selected; a non-string first element means there is no fallback.
    ///
    /// Non-string elements are skipped by the scan rather than ending it, so
    /// `[null, "https://good.com/b"]` picks `"https://good.com/b"`.
    pub fn prefer_non_blacklisted_json(&self, value: &Value) -> Option<String> {
        let items = value.as_array()?;
        let first = items.first()?;

        let accepted = items
            .iter()
            .filter_map(Value::as_str)
            .find(|url| !self.is_blacklisted(url));
        if let Some(url) = accepted {
            return Some(url.to_string());
        }

        first
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

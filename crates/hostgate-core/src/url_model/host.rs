//! Hostname extraction from URL authority.

/// Returns the lowercased hostname of an absolute URL.
///
/// Returns `None` if the URL cannot be parsed (relative, empty, garbage) or
/// has no host component (e.g. `mailto:` or `data:` URLs).
pub fn hostname_of(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    if host.is_empty() {
        return None;
    }
    // Special schemes are already lowercased by the parser; opaque hosts
    // (custom schemes) keep their case.
    Some(host.to_ascii_lowercase())
}

/// True when `url` parses as an absolute URL, with or without a host.
pub fn is_absolute_url(url: &str) -> bool {
    url::Url::parse(url).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_host() {
        assert_eq!(
            hostname_of("https://VidMoly.TO/abc").as_deref(),
            Some("vidmoly.to")
        );
        assert_eq!(
            hostname_of("https://Sub.Example.COM:8443/p?q=1").as_deref(),
            Some("sub.example.com")
        );
        assert_eq!(
            hostname_of("myproto://MiXeD.Host/x").as_deref(),
            Some("mixed.host")
        );
    }

    #[test]
    fn not_a_url() {
        assert_eq!(hostname_of("not a url"), None);
        assert_eq!(hostname_of(""), None);
        assert_eq!(hostname_of("/relative/path"), None);
        assert_eq!(hostname_of("vidmoly.to/abc"), None);
    }

    #[test]
    fn no_host() {
        assert_eq!(hostname_of("mailto:someone@vidmoly.to"), None);
        assert_eq!(hostname_of("file:///etc/hosts"), None);
    }

    #[test]
    fn ip_hosts() {
        assert_eq!(
            hostname_of("http://127.0.0.1:8080/x").as_deref(),
            Some("127.0.0.1")
        );
        assert_eq!(hostname_of("http://[::1]/").as_deref(), Some("[::1]"));
    }

    #[test]
    fn absolute_check() {
        assert!(is_absolute_url("https://example.com"));
        assert!(is_absolute_url("mailto:a@b.c"));
        assert!(!is_absolute_url("example.com"));
        assert!(!is_absolute_url(""));
    }
}

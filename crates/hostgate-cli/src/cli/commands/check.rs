//! `hostgate check <url>...` – report denylist matches.

use hostgate_core::host_policy::{hostname_of, HostDenylist};
use hostgate_core::url_model::is_absolute_url;
use std::process::ExitCode;

pub fn run_check(denylist: &HostDenylist, urls: &[String]) -> ExitCode {
    println!("{:<8} {:<20} {}", "STATUS", "MATCH", "URL");
    for url in urls {
        println!("{}", check_row(denylist, url));
    }
    ExitCode::SUCCESS
}

/// One table row. URLs without a host are never denied; the MATCH column says
/// whether the input was not a URL at all or a URL with no host (`mailto:`).
pub(crate) fn check_row(denylist: &HostDenylist, url: &str) -> String {
    let (status, matched) = match denylist.matching_entry(url) {
        Some(entry) => ("denied", entry),
        None if !is_absolute_url(url) => ("ok", "(not a url)"),
        None if hostname_of(url).is_none() => ("ok", "(no host)"),
        None => ("ok", "-"),
    };
    format!("{:<8} {:<20} {}", status, matched, url)
}

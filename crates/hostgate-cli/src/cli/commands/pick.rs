//! `hostgate pick` – choose a mirror from a candidate list.

use anyhow::{Context, Result};
use hostgate_core::candidates;
use hostgate_core::host_policy::HostDenylist;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

/// Outcome of a pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Picked {
    pub url: String,
    /// Every candidate was denied and `url` is the first one.
    pub fell_back: bool,
}

/// Prints the chosen URL. Exits with failure (no output) when the list is
/// empty or not a list.
pub fn run_pick(denylist: &HostDenylist, urls: &[String], json: Option<&str>) -> Result<ExitCode> {
    let picked = match json {
        Some(source) => pick_from_json(denylist, &read_json(source)?),
        None => pick_from_urls(denylist, urls),
    };

    let Some(picked) = picked else {
        tracing::info!("no candidate to pick");
        return Ok(ExitCode::FAILURE);
    };

    if picked.fell_back {
        eprintln!("warning: every candidate is denied; using the first one");
        tracing::warn!(url = %picked.url, "falling back to denied candidate");
    }
    println!("{}", picked.url);
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn pick_from_urls(denylist: &HostDenylist, urls: &[String]) -> Option<Picked> {
    let url = denylist.prefer_non_blacklisted(urls)?;
    Some(classify(denylist, url.to_string()))
}

pub(crate) fn pick_from_json(denylist: &HostDenylist, value: &Value) -> Option<Picked> {
    let url = denylist.prefer_non_blacklisted_json(value)?;
    Some(classify(denylist, url))
}

/// The selection only returns a denied URL when it fell back.
fn classify(denylist: &HostDenylist, url: String) -> Picked {
    let fell_back = denylist.is_blacklisted(&url);
    Picked { url, fell_back }
}

/// Reads JSON candidates from a file, or stdin for `-`.
pub(crate) fn read_json(source: &str) -> Result<Value> {
    if source == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("read candidate list from stdin")?;
        candidates::parse_candidates(&buf)
    } else {
        candidates::load_candidates(Path::new(source))
    }
}

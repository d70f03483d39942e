//! Tests for rendered command output and pick outcomes.

use crate::cli::commands::{check_row, pick_from_json, pick_from_urls, read_json, Picked};
use hostgate_core::host_policy::HostDenylist;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

fn urls(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn check_row_denied_names_entry() {
    let list = HostDenylist::builtin();
    let row = check_row(&list, "https://sub.vidmoly.me/x");
    assert!(row.starts_with("denied"));
    assert!(row.contains("vidmoly.me"));
    assert!(row.ends_with("https://sub.vidmoly.me/x"));
}

#[test]
fn check_row_ok() {
    let list = HostDenylist::builtin();
    let row = check_row(&list, "https://notvidmoly.to/x");
    assert!(row.starts_with("ok"));
    assert!(!row.contains("(no host)"));
    assert!(!row.contains("(not a url)"));
}

#[test]
fn check_row_not_a_url() {
    let list = HostDenylist::builtin();
    let row = check_row(&list, "not a url");
    assert!(row.starts_with("ok"));
    assert!(row.contains("(not a url)"));
    assert!(!row.contains("(no host)"));
}

#[test]
fn check_row_url_without_host() {
    let list = HostDenylist::builtin();
    let row = check_row(&list, "mailto:someone@vidmoly.to");
    assert!(row.starts_with("ok"));
    assert!(row.contains("(no host)"));
    assert!(!row.contains("(not a url)"));
}

#[test]
fn pick_empty_list_has_no_result() {
    let list = HostDenylist::builtin();
    assert_eq!(pick_from_urls(&list, &[]), None);
}

#[test]
fn pick_first_allowed_without_fallback() {
    let list = HostDenylist::builtin();
    let picked = pick_from_urls(&list, &urls(&["https://vidmoly.to/a", "https://good.com/b"]));
    assert_eq!(
        picked,
        Some(Picked {
            url: "https://good.com/b".to_string(),
            fell_back: false,
        })
    );
}

#[test]
fn pick_all_denied_falls_back_to_first() {
    let list = HostDenylist::builtin();
    let picked = pick_from_urls(&list, &urls(&["https://vidmoly.to/a", "https://vidmoly.me/b"]))
        .expect("fallback candidate");
    assert_eq!(picked.url, "https://vidmoly.to/a");
    assert!(picked.fell_back);
}

#[test]
fn pick_json_fallback_sets_flag() {
    let list = HostDenylist::builtin();
    let picked = pick_from_json(&list, &json!(["https://vidmoly.me/b"])).expect("fallback");
    assert_eq!(picked.url, "https://vidmoly.me/b");
    assert!(picked.fell_back);
}

#[test]
fn pick_json_file_with_null_has_no_result() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mirrors.json");
    fs::write(&path, "null").unwrap();

    let value = read_json(path.to_str().unwrap()).unwrap();
    assert_eq!(pick_from_json(&HostDenylist::builtin(), &value), None);
}

#[test]
fn pick_json_file_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mirrors.json");
    fs::write(&path, r#"["https://vidmoly.to/a", "https://good.com/b"]"#).unwrap();

    let value = read_json(path.to_str().unwrap()).unwrap();
    let picked = pick_from_json(&HostDenylist::builtin(), &value).unwrap();
    assert_eq!(picked.url, "https://good.com/b");
    assert!(!picked.fell_back);
}

#[test]
fn pick_json_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(read_json(path.to_str().unwrap()).is_err());
}

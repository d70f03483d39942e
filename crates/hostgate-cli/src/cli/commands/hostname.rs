//! `hostgate hostname <url>` – print the hostname the policy sees.

use hostgate_core::host_policy::hostname_of;
use std::process::ExitCode;

pub fn run_hostname(url: &str) -> ExitCode {
    match hostname_of(url) {
        Some(host) => println!("{host}"),
        None => println!("-"),
    }
    ExitCode::SUCCESS
}

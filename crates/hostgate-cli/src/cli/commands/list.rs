//! `hostgate list` – show the active denylist.

use hostgate_core::host_policy::HostDenylist;
use std::process::ExitCode;

pub fn run_list(denylist: &HostDenylist) -> ExitCode {
    if denylist.is_empty() {
        println!("Denylist is empty.");
    } else {
        for entry in denylist.entries() {
            println!("{entry}");
        }
    }
    ExitCode::SUCCESS
}

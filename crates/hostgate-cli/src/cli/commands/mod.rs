//! CLI command handlers, one file per subcommand.

mod check;
mod hostname;
mod list;
mod pick;

pub use check::run_check;
pub use hostname::run_hostname;
pub use list::run_list;
pub use pick::run_pick;

#[cfg(test)]
pub(crate) use check::check_row;
#[cfg(test)]
pub(crate) use pick::{pick_from_json, pick_from_urls, read_json, Picked};

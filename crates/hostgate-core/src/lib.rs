pub mod config;
pub mod error;
pub mod logging;

pub mod candidates;
pub mod host_policy;
pub mod url_model;

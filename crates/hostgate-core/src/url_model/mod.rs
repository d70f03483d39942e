//! URL modeling.
//!
//! Reduces candidate URLs to the one piece the host policy cares about: the
//! lowercased hostname from the authority component.

mod host;

pub use host::{hostname_of, is_absolute_url};

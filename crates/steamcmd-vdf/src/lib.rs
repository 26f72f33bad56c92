//! Parser for SteamCMD's nested key-value text format
//!
//! One shared implementation backs both the `app_info_print` metadata
//! path and the on-disk app manifest reader; the two must never diverge.

pub mod error;
pub mod node;
pub mod parser;

pub use error::{Error, Result};
pub use node::{Mapping, Node};
pub use parser::parse;

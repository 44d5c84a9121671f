//! Investor dataset ingestion.
//!
//! - **loader**: investor files, group tables and the built-in sample
//! - **lenient**: JSON parsing that tolerates trailing commas

#![deny(unsafe_code)]

pub mod error;
pub mod lenient;
pub mod loader;

pub use error::{IngestError, Result};
pub use lenient::{parse_lenient, strip_trailing_commas};
pub use loader::{embedded_sample, load_group_table, load_investors, parse_investors};

#![deny(unsafe_code)]

pub mod error;
pub mod filter_state;
pub mod groups;
pub mod investor;
pub mod localized;

pub use error::{ModelError, Result};
pub use filter_state::{BASE_MIN_YEAR, FilterState, SortMode, YearRange, current_year};
pub use groups::{ALL_GROUP, GroupTable};
pub use investor::{
    DEFAULT_REGION, InvestorRecord, ListItem, RawEvent, ResolvedEvent, ResolvedInvestor,
};
pub use localized::{FieldValue, Localized};

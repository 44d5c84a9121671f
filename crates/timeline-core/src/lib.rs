//! Investor timeline pipeline.
//!
//! Pure functions over the data model, invoked in this order by renderers:
//!
//! - **normalize**: resolve localized fields into one language
//! - **groups**: expand style-group selections into tag sets
//! - **filter**: tag, text and year filters with never-empty degradation
//! - **sort**: default, name and first-year ordering
//! - **geometry**: axis ticks and event markers
//!
//! Supporting modules: **locale** (fallback chain and language detection),
//! **region** (static region lookup), **query** (filter state in URLs) and
//! **view** (the whole pipeline as one serializable view model).

pub mod filter;
pub mod geometry;
pub mod groups;
pub mod locale;
pub mod normalize;
pub mod query;
pub mod region;
pub mod sort;
pub mod view;

pub use filter::{FilterReport, filter, filter_with_report};
pub use geometry::{DisplayRange, Marker, Tick, TimelineGeometry, compute_geometry, highlights};
pub use groups::{expand_groups, is_all_active, select_groups, toggle_group, toggle_tag};
pub use locale::{DEFAULT_LANG, SUPPORTED_LANGS, detect_lang, fallback_chain, resolve};
pub use normalize::{collect_tags, normalize, normalize_record, normalize_value, year_bounds};
pub use query::{QueryState, parse_query, to_query};
pub use region::region_for;
pub use sort::sort;
pub use view::{InvestorCard, TimelineView, build_view};

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod registry;

pub use catalog::{Catalog, Letter, LetterBucket, Unplaced, DEFAULT_EXCLUDED_FAMILY};
pub use config::FontshelfConfig;
pub use error::{FontshelfError, Result};
pub use filter::{filter_fonts, FilterState, SearchPolicy};
pub use registry::{FamilySummary, FontRegistry, StaticFontRegistry, SystemFontRegistry};

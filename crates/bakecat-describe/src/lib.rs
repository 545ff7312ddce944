//! Structured description engine for bakery product listings.
//!
//! Converts between the canonical description text stored on a product and
//! the structured record a product form edits, and derives servings and
//! scaled weights from operator-entered amounts. Text handling is total:
//! malformed input degrades to empty fields. Only price parsing can fail.

pub mod autofill;
pub mod error;
pub mod generate;
pub mod parse;
pub mod sanitize;
pub mod scale;
pub mod servings;
pub mod session;
pub mod sync;
pub mod units;

pub use autofill::AutoPopulator;
pub use error::DescribeError;
pub use generate::{generate_description, generate_record};
pub use parse::{parse_description, parse_description_with};
pub use sanitize::{sanitize, Sanitizer};
pub use scale::{parse_price, scale_weight, size_variants, SizeVariant};
pub use servings::calculate_servings;
pub use session::DescriptionSession;
pub use sync::{SyncGuard, SyncState};

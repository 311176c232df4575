//! commonx · small Chinese-locale utility belt
//!
//! - `idcard`: resident ID validation (18-digit check character, 15-digit legacy form)
//! - `date`: strict template parsing and date pattern auto-detection
//! - `numeral`: uppercase Chinese currency text and small lowercase numerals
//!
//! Everything here is pure and synchronous; the lookup tables are `const` data.

pub mod config;
pub mod date;
pub mod error;
pub mod idcard;
pub mod numeral;
mod util;

pub use date::{resolve_pattern, DateFormatPattern};
pub use error::{Error, Result};
pub use idcard::{is_id_card15, is_id_card18};
pub use numeral::{to_chinese_amount, to_chinese_amount_i64};

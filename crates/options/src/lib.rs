//! Command option categories.
//!
//! Bot commands are grouped under one of four [`OptionCategory`] values on
//! the help page. The display form capitalises the constant name
//! (`MODERATION` renders as `Moderation`); parsing accepts any casing.
//!
//! ```rust
//! use options::OptionCategory;
//!
//! let category: OptionCategory = "guild".parse().expect("known label");
//! assert_eq!(category.to_string(), "Guild");
//! assert_eq!(category.label(), "GUILD");
//! ```

mod category;
mod error;
mod text;

pub use crate::category::OptionCategory;
pub use crate::error::ParseCategoryError;
pub use crate::text::capitalize;

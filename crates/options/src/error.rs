use thiserror::Error;

/// A label that names no [`OptionCategory`](crate::OptionCategory).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown option category: {0:?}")]
pub struct ParseCategoryError(pub String);

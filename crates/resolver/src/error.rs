use thiserror::Error;

/// Errors produced at the edges of the resolver.
///
/// Resolution itself never fails: an unmatched or malformed query yields an
/// empty [`Resolution`](crate::Resolution). These errors only surface when
/// validating configuration or parsing identifiers handed over by a client
/// library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// Invalid resolver configuration.
    #[error("invalid resolver config: {0}")]
    InvalidConfig(String),
    /// Text that is not a decimal `u64` identifier.
    #[error("invalid snowflake: {0}")]
    InvalidSnowflake(String),
}

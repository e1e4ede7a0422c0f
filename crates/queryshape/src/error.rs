use thiserror::Error;

/// Internal error for the integer-parse step of parameter handling.
///
/// Construction of [`Params`](crate::Params) is best effort: this error is
/// logged at debug level and replaced by the parameter's default, so it never
/// reaches callers.
#[derive(Debug, Error)]
pub enum ParamError {
    /// Parameter value is not a non-negative integer
    #[error("query param `{name}` is not a non-negative integer (got {value:?})")]
    InvalidInteger {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

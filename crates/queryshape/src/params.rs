use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ParamError;

/// Default `limit` when the parameter is absent, zero, or malformed.
pub const DEFAULT_LIMIT: u64 = 10;

/// Upper bound on `limit`; larger values are clamped down.
pub const MAX_LIMIT: u64 = 100;

/// Source of named request parameters, typically an HTTP query string.
///
/// Recognized names are `skip` (comma-separated field names), `offset` and
/// `limit` (integers).
pub trait RequestParams {
    /// Look up a parameter by name. `None` means the parameter is absent.
    fn query_param(&self, name: &str) -> Option<&str>;
}

impl RequestParams for HashMap<String, String> {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl RequestParams for [(String, String)] {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Pagination/omission query parameters as they arrive on the wire.
///
/// Usable with `axum::extract::Query` when a handler wants the raw values;
/// [`Params::from_request`] accepts it like any other parameter source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListQuery {
    pub skip: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

impl RequestParams for RawListQuery {
    fn query_param(&self, name: &str) -> Option<&str> {
        match name {
            "skip" => self.skip.as_deref(),
            "offset" => self.offset.as_deref(),
            "limit" => self.limit.as_deref(),
            _ => None,
        }
    }
}

/// Normalized pagination and omission request, read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Params {
    offset: u64,
    limit: u64,
    skip_fields: Vec<String>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            skip_fields: Vec::new(),
        }
    }
}

impl Params {
    /// Parse `skip`, `offset` and `limit` from a parameter source.
    ///
    /// Parsing is best effort: malformed or missing numbers fall back to
    /// their defaults and are never reported to the caller.
    pub fn from_request<P>(params: &P) -> Self
    where
        P: RequestParams + ?Sized,
    {
        let offset = int_param(params, "offset").unwrap_or(0);
        let limit = clamp_limit(int_param(params, "limit").unwrap_or(DEFAULT_LIMIT));

        let skip_fields = match params.query_param("skip") {
            Some(raw) if !raw.is_empty() => raw.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        };

        Self {
            offset,
            limit,
            skip_fields,
        }
    }

    /// Parse from a raw (percent-encoded) query string such as
    /// `offset=20&limit=5&skip=password,comments`.
    pub fn from_query(query: &str) -> Self {
        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self::from_request(pairs.as_slice())
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum rows to return, always in `1..=MAX_LIMIT`.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Field names the caller asked to skip, in request order.
    pub fn skip_fields(&self) -> &[String] {
        &self.skip_fields
    }
}

/// Read an integer parameter. Absent or empty parameters yield `None`;
/// malformed ones are logged and yield `None` as well.
fn int_param<P>(params: &P, name: &'static str) -> Option<u64>
where
    P: RequestParams + ?Sized,
{
    let raw = params.query_param(name)?;
    if raw.is_empty() {
        return None;
    }

    match parse_quantity(name, raw) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(%err, "invalid query param, using default");
            None
        }
    }
}

fn parse_quantity(name: &'static str, value: &str) -> Result<u64, ParamError> {
    value.parse().map_err(|source| ParamError::InvalidInteger {
        name,
        value: value.to_string(),
        source,
    })
}

fn clamp_limit(limit: u64) -> u64 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else if limit > MAX_LIMIT {
        debug!(limit, max = MAX_LIMIT, "limit above maximum, clamping");
        MAX_LIMIT
    } else {
        limit
    }
}

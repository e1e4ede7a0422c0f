//! Axum integration: extract [`Params`] straight from the request URI.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::params::Params;

/// Lenient extractor: malformed pagination input never rejects the request,
/// it degrades to the defaults.
impl<S> FromRequestParts<S> for Params
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Params::from_query(parts.uri.query().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    use crate::params::{Params, DEFAULT_LIMIT};

    async fn extract(uri: &str) -> Params {
        let request = Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        Params::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_extracts_params_from_uri() {
        let params = extract("/posts?offset=20&limit=5&skip=password%2Ccomments").await;
        assert_eq!(params.offset(), 20);
        assert_eq!(params.limit(), 5);
        assert_eq!(params.skip_fields(), ["password", "comments"]);
    }

    #[tokio::test]
    async fn test_missing_query_string_yields_defaults() {
        let params = extract("/posts").await;
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), DEFAULT_LIMIT);
        assert!(params.skip_fields().is_empty());
    }
}

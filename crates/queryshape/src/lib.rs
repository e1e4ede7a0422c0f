//! # queryshape
//!
//! Translates HTTP-style query parameters (`skip`, `offset`, `limit`) into
//! relational query configuration: pagination bounds, field omission, and
//! eager-load ("preload") directives.
//!
//! ## Architecture
//!
//! The crate is a thin translation layer built around three seams:
//!
//! - **RequestParams**: where raw parameters come from (query string, map,
//!   deserialized carrier)
//! - **FieldPolicy**: which fields/relations a resource type lets clients
//!   manipulate (allow-list)
//! - **ShapeTarget**: the query-builder handle the translated configuration
//!   is applied to, implemented by backend crates
//!
//! Parsing is best effort: malformed `offset`/`limit` values fall back to
//! their defaults and skip fields outside the allow-list are dropped, so no
//! request ever fails on pagination input.
//!
//! ## Example
//!
//! ```rust
//! use queryshape::testing::RecordingQuery;
//! use queryshape::{AllowList, Params, QueryContext};
//!
//! // GET /posts?offset=20&limit=5&skip=password,comments
//! let params = Params::from_query("offset=20&limit=5&skip=password,comments");
//!
//! let policy = AllowList::new()
//!     .with_omittable(["password", "email"])
//!     .with_preloadable(["comments", "author"]);
//!
//! let mut ctx = QueryContext::<RecordingQuery>::new(params).with_skip(&policy);
//! assert_eq!(ctx.params().limit(), 5);
//!
//! // `password` is omitted, `comments` eager-loading was opted out,
//! // `author` remains an eager load.
//! let shaped = ctx.shape(RecordingQuery::new(), &[]);
//! assert_eq!(shaped.preloaded(), vec!["author"]);
//! ```
//!
//! ## Backend implementation
//!
//! To support a query library:
//!
//! 1. Pick the customization payload (`ShapeTarget::Preload`) its eager
//!    loading can express
//! 2. Implement `ShapeTarget` for its query handle (or a wrapper)
//! 3. Hand shaped handles back to the caller for execution
//!
//! `queryshape-seaorm` implements the contract for SeaORM selects.

pub mod context;
pub mod error;
mod extract;
pub mod params;
pub mod policy;
pub mod testing;
pub mod traits;

// Re-export commonly used items
pub use context::QueryContext;
pub use error::ParamError;
pub use params::{Params, RawListQuery, RequestParams, DEFAULT_LIMIT, MAX_LIMIT};
pub use policy::{AllowList, FieldPolicy};
pub use traits::ShapeTarget;

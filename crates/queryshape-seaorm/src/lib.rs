//! # queryshape-seaorm
//!
//! SeaORM backend for [`queryshape`]: implements
//! [`ShapeTarget`](queryshape::ShapeTarget) for a wrapper around
//! `sea_orm::Select<E>`.
//!
//! Pagination and column omission are translated into the select itself.
//! Eager loads have no in-query equivalent in SeaORM (relations load in a
//! separate step), so they are recorded as [`PreloadDirective`]s on the
//! shaped select; the caller executes them with its loader of choice,
//! applying each directive's [`RelationShape`] to the related select.
//!
//! ```rust,ignore
//! use queryshape::{AllowList, QueryContext, Params};
//! use queryshape_seaorm::{RelationShape, ShapedSelect};
//! use sea_orm::{EntityTrait, LoaderTrait};
//!
//! let policy = AllowList::new()
//!     .with_omittable(["secret_note"])
//!     .with_preloadable(["comments"]);
//!
//! let mut ctx = QueryContext::<ShapedSelect<posts::Entity>>::new(params)
//!     .with_skip(&policy);
//! ctx.add_preload_fn("comments", Box::new(RelationShape::new().with_limit(3)));
//!
//! let (select, directives) = ctx.shape(posts::Entity::find().into(), &[]).into_parts();
//! let rows = select.all(&db).await?;
//! for directive in &directives {
//!     if directive.relation == "comments" {
//!         let related = match &directive.shape {
//!             Some(shape) => shape.apply_to(comments::Entity::find()),
//!             None => comments::Entity::find(),
//!         };
//!         let comments = rows.load_many(related, &db).await?;
//!         // ...
//!     }
//! }
//! ```

pub mod relation;
pub mod select;

// Re-export commonly used items
pub use relation::RelationShape;
pub use select::{PreloadDirective, ShapedSelect};

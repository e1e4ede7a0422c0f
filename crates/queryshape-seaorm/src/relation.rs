use sea_orm::{EntityTrait, QuerySelect, Select};

use crate::select::omit_columns;

/// Declarative customization of a relation's sub-query, applied when the
/// caller executes an eager-load directive.
///
/// This is the shaping payload registered with
/// [`QueryContext::add_preload_fn`](queryshape::QueryContext::add_preload_fn)
/// for [`ShapedSelect`](crate::ShapedSelect) targets: per-relation limits,
/// offsets and column omissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationShape {
    limit: Option<u64>,
    offset: Option<u64>,
    omit: Vec<String>,
}

impl RelationShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_omit<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.omit.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Apply this shape to the related entity's select.
    pub fn apply_to<R: EntityTrait>(&self, select: Select<R>) -> Select<R> {
        let mut select = select;
        if let Some(limit) = self.limit {
            select = select.limit(limit);
        }
        if let Some(offset) = self.offset {
            select = select.offset(offset);
        }
        if self.omit.is_empty() {
            select
        } else {
            omit_columns(select, &self.omit)
        }
    }
}

use queryshape::ShapeTarget;
use sea_orm::{EntityTrait, IdenStatic, Iterable, QuerySelect, Select};
use tracing::debug;

use crate::relation::RelationShape;

/// Eager-load directive recorded while shaping a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadDirective {
    /// Relation name as requested by the client/allow-list
    pub relation: String,
    /// Customization registered for the relation, if any
    pub shape: Option<RelationShape>,
}

/// [`ShapeTarget`] for SeaORM selects.
///
/// Limit, offset and column omission are pushed into the wrapped
/// `Select<E>`. Eager loads are recorded as [`PreloadDirective`]s: execute
/// the select first, then walk [`preloads`](Self::preloads) and load each
/// relation, applying its [`RelationShape`] to the related select.
#[derive(Debug, Clone)]
pub struct ShapedSelect<E: EntityTrait> {
    select: Select<E>,
    preloads: Vec<PreloadDirective>,
}

impl<E: EntityTrait> ShapedSelect<E> {
    pub fn new(select: Select<E>) -> Self {
        Self {
            select,
            preloads: Vec::new(),
        }
    }

    /// Directives recorded so far, in shaping order.
    pub fn preloads(&self) -> &[PreloadDirective] {
        &self.preloads
    }

    /// The shaped select, dropping any recorded directives.
    pub fn into_select(self) -> Select<E> {
        self.select
    }

    /// The shaped select together with the recorded directives.
    pub fn into_parts(self) -> (Select<E>, Vec<PreloadDirective>) {
        (self.select, self.preloads)
    }
}

impl<E: EntityTrait> From<Select<E>> for ShapedSelect<E> {
    fn from(select: Select<E>) -> Self {
        Self::new(select)
    }
}

impl<E: EntityTrait> ShapeTarget for ShapedSelect<E> {
    type Preload = RelationShape;

    fn limit(mut self, limit: u64) -> Self {
        self.select = self.select.limit(limit);
        self
    }

    fn offset(mut self, offset: u64) -> Self {
        self.select = self.select.offset(offset);
        self
    }

    fn omit(mut self, fields: &[String]) -> Self {
        if !fields.is_empty() {
            self.select = omit_columns(self.select, fields);
        }
        self
    }

    fn preload(mut self, relation: &str, customize: Option<&RelationShape>) -> Self {
        self.preloads.push(PreloadDirective {
            relation: relation.to_string(),
            shape: customize.cloned(),
        });
        self
    }
}

/// Rebuild the column list without the omitted fields. Field names matching
/// no column are ignored.
pub(crate) fn omit_columns<E: EntityTrait>(select: Select<E>, fields: &[String]) -> Select<E> {
    for field in fields {
        if !E::Column::iter().any(|column| column.as_str() == field.as_str()) {
            debug!(%field, "omit field matches no column, ignoring");
        }
    }

    let mut select = select.select_only();
    for column in E::Column::iter() {
        if !fields.iter().any(|field| field.as_str() == column.as_str()) {
            select = select.column(column);
        }
    }
    select
}

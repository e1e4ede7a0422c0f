//! Test support: a call-recording [`ShapeTarget`] double.
//!
//! Lets tests assert exactly which shaping directives reached the query
//! handle without standing up a database.

use crate::traits::ShapeTarget;

/// One recorded shaping call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeCall {
    Limit(u64),
    Offset(u64),
    Omit(Vec<String>),
    Preload {
        relation: String,
        /// Tag of the customization that was attached, if any.
        customized: Option<String>,
    },
}

/// [`ShapeTarget`] that records every call in order.
///
/// Customizations are plain string tags so tests can assert which one was
/// attached to which relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingQuery {
    pub calls: Vec<ShapeCall>,
}

impl RecordingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// The relations preloaded so far, in call order.
    pub fn preloaded(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ShapeCall::Preload { relation, .. } => Some(relation.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ShapeTarget for RecordingQuery {
    type Preload = str;

    fn limit(mut self, limit: u64) -> Self {
        self.calls.push(ShapeCall::Limit(limit));
        self
    }

    fn offset(mut self, offset: u64) -> Self {
        self.calls.push(ShapeCall::Offset(offset));
        self
    }

    fn omit(mut self, fields: &[String]) -> Self {
        self.calls.push(ShapeCall::Omit(fields.to_vec()));
        self
    }

    fn preload(mut self, relation: &str, customize: Option<&str>) -> Self {
        self.calls.push(ShapeCall::Preload {
            relation: relation.to_string(),
            customized: customize.map(str::to_string),
        });
        self
    }
}

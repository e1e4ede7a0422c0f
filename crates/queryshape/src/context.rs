use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::params::{Params, RequestParams};
use crate::policy::FieldPolicy;
use crate::traits::ShapeTarget;

/// Per-request shaping context for a single resource type.
///
/// Owns the normalized [`Params`] plus the derived omit and preload sets, and
/// applies them to a query handle via [`shape`](Self::shape) or
/// [`shape_single`](Self::shape_single). Build one per incoming request; it
/// is not meant to be shared across requests or threads.
///
/// The omit and preload sets are disjoint by construction: a relation the
/// client skipped is removed from preload candidacy, and only allow-listed
/// fields ever enter the omit set.
pub struct QueryContext<Q: ShapeTarget> {
    params: Params,
    omit: BTreeSet<String>,
    preload: BTreeSet<String>,
    preload_fns: HashMap<String, Box<Q::Preload>>,
}

impl<Q: ShapeTarget> QueryContext<Q> {
    pub fn new(params: Params) -> Self {
        Self {
            params,
            omit: BTreeSet::new(),
            preload: BTreeSet::new(),
            preload_fns: HashMap::new(),
        }
    }

    /// Shorthand for `QueryContext::new(Params::from_request(params))`.
    pub fn from_request<P>(params: &P) -> Self
    where
        P: RequestParams + ?Sized,
    {
        Self::new(Params::from_request(params))
    }

    /// The normalized request parameters this context was built from.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Refine the omit and preload sets against an allow-list policy.
    ///
    /// Every preloadable relation becomes a preload candidate. Each field the
    /// request asked to skip is then resolved: omittable fields join the omit
    /// set, preloadable relations leave the candidate set (the client opted
    /// out of that eager load), anything else is dropped.
    ///
    /// Calling this repeatedly accumulates omissions and candidates across
    /// distinct names.
    pub fn with_skip(mut self, policy: &dyn FieldPolicy) -> Self {
        let (omittable, preloadable) = policy.skip_fields();

        for relation in &preloadable {
            self.preload.insert(relation.clone());
        }

        for field in self.params.skip_fields() {
            if omittable.iter().any(|candidate| candidate == field) {
                self.omit.insert(field.clone());
            } else if preloadable.iter().any(|candidate| candidate == field) {
                self.preload.remove(field);
            } else {
                debug!(%field, "skip field matches no allow-list entry, ignoring");
            }
        }

        self
    }

    /// Register a customization used when `relation` is eager-loaded,
    /// overwriting any previous customization for the same relation.
    pub fn add_preload_fn(&mut self, relation: impl Into<String>, customize: Box<Q::Preload>) {
        self.preload_fns.insert(relation.into(), customize);
    }

    /// Merge a batch of customizations, overwriting on name collisions.
    pub fn add_preload_fns<I>(&mut self, fns: I)
    where
        I: IntoIterator<Item = (String, Box<Q::Preload>)>,
    {
        self.preload_fns.extend(fns);
    }

    /// Apply the configured limit, offset, omissions and preloads to `query`.
    ///
    /// `force_omit` names are merged into the omit set first and stay there
    /// for any later shaping call.
    pub fn shape(&mut self, query: Q, force_omit: &[&str]) -> Q {
        self.format(query, false, force_omit)
    }

    /// Like [`shape`](Self::shape) but for single-row lookups: limit is
    /// forced to 1 and no offset is applied.
    pub fn shape_single(&mut self, query: Q, force_omit: &[&str]) -> Q {
        self.format(query, true, force_omit)
    }

    fn format(&mut self, query: Q, single: bool, force_omit: &[&str]) -> Q {
        for field in force_omit {
            self.omit.insert((*field).to_string());
        }
        let omit: Vec<String> = self.omit.iter().cloned().collect();

        let mut shaped = if single {
            query.limit(1).omit(&omit)
        } else {
            query
                .limit(self.params.limit())
                .offset(self.params.offset())
                .omit(&omit)
        };

        for relation in &self.preload {
            let customize = self.preload_fns.get(relation).map(|boxed| &**boxed);
            shaped = shaped.preload(relation, customize);
        }

        shaped
    }
}

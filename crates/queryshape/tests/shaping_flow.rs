//! End-to-end shaping flow against a closure-customizable query target.

use queryshape::{AllowList, Params, QueryContext, ShapeTarget};

/// Minimal query builder that renders directives as clause strings. Its
/// preload customizations are sub-query transforms, mirroring query libraries
/// whose eager-load hooks receive a builder for the relation.
#[derive(Debug, Default)]
struct SqlWriter {
    clauses: Vec<String>,
}

impl ShapeTarget for SqlWriter {
    type Preload = dyn Fn(SqlWriter) -> SqlWriter + Send + Sync;

    fn limit(mut self, limit: u64) -> Self {
        self.clauses.push(format!("limit {limit}"));
        self
    }

    fn offset(mut self, offset: u64) -> Self {
        self.clauses.push(format!("offset {offset}"));
        self
    }

    fn omit(mut self, fields: &[String]) -> Self {
        if !fields.is_empty() {
            self.clauses.push(format!("omit {}", fields.join(",")));
        }
        self
    }

    fn preload(mut self, relation: &str, customize: Option<&Self::Preload>) -> Self {
        match customize {
            Some(custom) => {
                let sub = custom(SqlWriter::default());
                self.clauses
                    .push(format!("preload {relation} ({})", sub.clauses.join("; ")));
            }
            None => self.clauses.push(format!("preload {relation}")),
        }
        self
    }
}

#[test]
fn test_full_flow_shapes_list_query() {
    let params = Params::from_query("offset=40&limit=20&skip=password,audit_log,comments");
    let policy = AllowList::new()
        .with_omittable(["password", "audit_log"])
        .with_preloadable(["comments", "author"]);

    let mut ctx = QueryContext::<SqlWriter>::new(params).with_skip(&policy);
    let shaped = ctx.shape(SqlWriter::default(), &[]);

    assert_eq!(
        shaped.clauses,
        vec![
            "limit 20",
            "offset 40",
            "omit audit_log,password",
            "preload author",
        ]
    );
}

#[test]
fn test_registered_customization_reaches_its_relation() {
    let params = Params::from_query("limit=3");
    let policy = AllowList::new().with_preloadable(["comments", "author"]);

    let mut ctx = QueryContext::<SqlWriter>::new(params).with_skip(&policy);
    ctx.add_preload_fn("comments", Box::new(|sub: SqlWriter| sub.limit(5)));

    let shaped = ctx.shape(SqlWriter::default(), &[]);
    assert_eq!(
        shaped.clauses,
        vec![
            "limit 3",
            "offset 0",
            "preload author",
            "preload comments (limit 5)",
        ]
    );
}

#[test]
fn test_single_row_flow_with_forced_omissions() {
    let params = Params::from_query("offset=40&limit=20");

    let mut ctx = QueryContext::<SqlWriter>::new(params);
    let shaped = ctx.shape_single(SqlWriter::default(), &["internal_flags"]);

    assert_eq!(shaped.clauses, vec!["limit 1", "omit internal_flags"]);

    // Forced omissions persist into later shaping calls.
    let again = ctx.shape(SqlWriter::default(), &[]);
    assert_eq!(
        again.clauses,
        vec!["limit 20", "offset 40", "omit internal_flags"]
    );
}

#[test]
fn test_request_params_map_matches_query_string() {
    let from_query = Params::from_query("offset=7&limit=0&skip=a");
    let pairs = vec![
        ("offset".to_string(), "7".to_string()),
        ("limit".to_string(), "0".to_string()),
        ("skip".to_string(), "a".to_string()),
    ];
    let from_pairs = Params::from_request(pairs.as_slice());

    assert_eq!(from_query, from_pairs);
}

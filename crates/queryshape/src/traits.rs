/// A chainable query handle that shaping directives apply to.
///
/// Implemented by relational query builders. A
/// [`QueryContext`](crate::QueryContext) drives this contract but never
/// executes the underlying query; any query-building failure surfaces when
/// the caller eventually runs the returned handle.
pub trait ShapeTarget: Sized {
    /// Backend-specific payload handed to eager-load customization: a
    /// sub-query transform closure, a declarative shape, or whatever the
    /// backend can express.
    type Preload: ?Sized;

    /// Cap the number of rows returned.
    fn limit(self, limit: u64) -> Self;

    /// Skip rows before the first returned one.
    fn offset(self, offset: u64) -> Self;

    /// Exclude the named fields from the result. Implementations treat an
    /// empty list as a no-op.
    fn omit(self, fields: &[String]) -> Self;

    /// Eager-load `relation`, with an optional customization of the
    /// relation's sub-query.
    fn preload(self, relation: &str, customize: Option<&Self::Preload>) -> Self;
}

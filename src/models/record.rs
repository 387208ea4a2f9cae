use uuid::Uuid;

/// A stored entity: keyed by a server-generated id, listable through a filter
/// type and wholesale-replaceable from a request body.
pub trait Record: Clone + Send + Sync + 'static {
    /// Request body used for both create and replace
    type Request: Send + 'static;

    /// List filters for this entity
    type Filters: Send + Sync + 'static;

    /// Name used in logs and metric labels
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    fn matches_filters(&self, filters: &Self::Filters) -> bool;

    /// Overwrite every mutable field from `request`. The id and `created_at`
    /// are kept; `updated_at` is refreshed.
    fn replace(&mut self, request: Self::Request);
}

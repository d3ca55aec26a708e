/// A store failure annotated with the step that produced it.
///
/// Used where one repository call spans several statements, so the caller
/// can tell from the message which statement failed.
#[derive(Debug, thiserror::Error)]
#[error("{context}: {source}")]
pub struct DbError {
    pub context: &'static str,
    #[source]
    pub source: sqlx::Error,
}

impl DbError {
    /// Build a `map_err` adapter that tags a `sqlx::Error` with `context`.
    pub fn with_context(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self { context, source }
    }
}

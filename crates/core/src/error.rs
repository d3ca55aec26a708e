use crate::validation::ValidationError;

/// Boxed store-level failure carried by [`CoreError::Persistence`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A field rule was violated; the request never reached storage.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The caller passed a nil identifier.
    #[error("{entity} id cannot be nil")]
    IdentifierRequired { entity: &'static str },

    /// The store rejected or failed the operation.
    #[error("{context}: {source}")]
    Persistence {
        context: &'static str,
        #[source]
        source: BoxError,
    },
}

impl CoreError {
    /// Wrap a store failure with a short static description of the operation.
    pub fn persistence<E>(context: &'static str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Persistence {
            context,
            source: source.into(),
        }
    }
}

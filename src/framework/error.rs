//! # Framework Errors
//!
//! Transport and lookup failures shared by every actor, plus a boxed slot for
//! whatever error an entity hook returned.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    /// The actor has handed out every sequence number.
    #[error("Sequence numbers exhausted")]
    SequenceExhausted,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Hands the original error back unchanged if it is not an entity error or
    /// the boxed value is of another type.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(entity_error) => Ok(*entity_error),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("cart is empty")]
    struct EmptyCart;

    #[test]
    fn downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(EmptyCart));
        assert_eq!(err.downcast_entity::<EmptyCart>().unwrap(), EmptyCart);
    }

    #[test]
    fn downcast_leaves_transport_errors_alone() {
        let err = FrameworkError::ActorClosed;
        assert!(matches!(
            err.downcast_entity::<EmptyCart>(),
            Err(FrameworkError::ActorClosed)
        ));
    }

    #[test]
    fn downcast_of_foreign_entity_error_keeps_the_box() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("io")));
        match err.downcast_entity::<EmptyCart>() {
            Err(FrameworkError::EntityError(inner)) => assert_eq!(inner.to_string(), "io"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

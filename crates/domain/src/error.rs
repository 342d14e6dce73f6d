//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`OnAirError`]
//! via `#[from]`.

use crate::entity::EntityType;

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum OnAirError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A field name could not be resolved on an entity type's field metadata.
    ///
    /// This is a configuration defect. It aborts the flush rather than
    /// risking a wrong restart decision.
    #[error("field `{field}` is not declared on entity type `{entity_type}`")]
    UnknownFieldExclusion {
        entity_type: EntityType,
        field: String,
    },

    /// The persistence layer failed while handling a request from a listener.
    #[error("persistence error")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations raised by builders and `validate` methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("identifier is required")]
    MissingId,

    #[error("owning station is required")]
    MissingStation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_type_and_field_in_unknown_field_message() {
        let err = OnAirError::UnknownFieldExclusion {
            entity_type: EntityType::Mount,
            field: "bogus".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field `bogus` is not declared on entity type `mount`"
        );
    }

    #[test]
    fn should_convert_validation_error_via_from() {
        let err: OnAirError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            OnAirError::Validation(ValidationError::EmptyName)
        ));
    }
}

//! Common error infrastructure for eligibility-core.
//!
//! # Design Principles
//!
//! - **Localised failures**: a malformed definition skips one entry, never a load pass
//! - **Severity Classification**: errors are categorised for logging and recovery
//! - **Stable codes**: every variant exposes a static code for tests and tooling

use crate::types::{ResourceId, ResourceKind, RestrictionKind, SubjectId};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller may retry or fall back.
    Recoverable,

    /// Validation error - invalid definition data, skipped without retry.
    ///
    /// Examples: unresolvable resource id, kind mismatch
    Validation,

    /// Internal error - the engine was used in a way it was not set up for.
    ///
    /// Examples: query against an uninitialised table
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all eligibility errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait PolicyError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while loading definitions or answering queries.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    /// A definition references a resource id the registry does not know.
    #[error("{owner} references unknown {kind} resource '{resource}'")]
    UnresolvedResource {
        owner: String,
        kind: ResourceKind,
        resource: ResourceId,
    },

    /// A definition references a resource of the wrong kind.
    #[error("{owner} references '{resource}' as {expected}, but it is {found}")]
    KindMismatch {
        owner: String,
        resource: ResourceId,
        expected: ResourceKind,
        found: ResourceKind,
    },

    /// Two subject definitions share an id; the later one is skipped.
    #[error("subject '{0}' is defined more than once")]
    DuplicateSubject(SubjectId),

    /// Two resources share an id; the later one is skipped.
    #[error("resource '{0}' is defined more than once")]
    DuplicateResource(ResourceId),

    /// A table was used that the engine was not configured for.
    #[error("restriction table '{0}' was never initialised")]
    UnknownKind(RestrictionKind),

    /// A query arrived before the first load pass completed.
    #[error("eligibility tables are not loaded")]
    NotLoaded,
}

impl EligibilityError {
    /// True for errors that describe a bad definition rather than misuse.
    pub const fn is_malformed_definition(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedResource { .. }
                | Self::KindMismatch { .. }
                | Self::DuplicateSubject(_)
                | Self::DuplicateResource(_)
        )
    }
}

impl PolicyError for EligibilityError {
    fn severity(&self) -> ErrorSeverity {
        use EligibilityError::*;
        match self {
            UnresolvedResource { .. }
            | KindMismatch { .. }
            | DuplicateSubject(_)
            | DuplicateResource(_) => ErrorSeverity::Validation,

            UnknownKind(_) => ErrorSeverity::Internal,

            NotLoaded => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use EligibilityError::*;
        match self {
            UnresolvedResource { .. } => "ELIGIBILITY_UNRESOLVED_RESOURCE",
            KindMismatch { .. } => "ELIGIBILITY_KIND_MISMATCH",
            DuplicateSubject(_) => "ELIGIBILITY_DUPLICATE_SUBJECT",
            DuplicateResource(_) => "ELIGIBILITY_DUPLICATE_RESOURCE",
            UnknownKind(_) => "ELIGIBILITY_UNKNOWN_KIND",
            NotLoaded => "ELIGIBILITY_NOT_LOADED",
        }
    }
}

pub type Result<T> = std::result::Result<T, EligibilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_definitions_are_validation_errors() {
        let err = EligibilityError::UnresolvedResource {
            owner: "subject 'Avian'".into(),
            kind: ResourceKind::Item,
            resource: "Ghost".into(),
        };

        assert!(err.is_malformed_definition());
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "ELIGIBILITY_UNRESOLVED_RESOURCE");
        assert_eq!(
            err.to_string(),
            "subject 'Avian' references unknown item resource 'Ghost'"
        );
    }

    #[test]
    fn unknown_kind_is_internal() {
        let err = EligibilityError::UnknownKind(RestrictionKind::Bed);
        assert!(err.severity().is_internal());
        assert!(!err.is_malformed_definition());
        assert_eq!(err.to_string(), "restriction table 'bed' was never initialised");
    }

    #[test]
    fn not_loaded_is_recoverable() {
        let err = EligibilityError::NotLoaded;
        assert!(err.severity().is_recoverable());
        assert!(!err.severity().is_internal());
        assert_eq!(err.severity().as_str(), "recoverable");
    }
}

//! Common error infrastructure for planner-core.
//!
//! This module provides the shared severity classification and trait used by every
//! error type in the crate. Domain-specific errors (e.g., [`BuildError`](crate::BuildError),
//! [`TablesError`](crate::TablesError)) live next to the operations that raise them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation family has its own error enum with specific variants
//! - **Rich Context**: Variants carry the slot, item and threshold values involved
//! - **Severity Classification**: Errors are categorized so hosts can pick a message style
//! - **Non-fatal by default**: Every rejection leaves the build untouched

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same request may succeed once the build changes (e.g. a locked slot
///   unlocks after more souls are spent)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency that requires investigation
/// - **Fatal**: the planner cannot continue with the given data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Can succeed later with the same request.
    ///
    /// Examples: slot still locked, not enough ability points yet
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: duplicate item, slot index out of range
    Validation,

    /// Unexpected state inconsistency.
    Internal,

    /// Unusable data, cannot continue.
    ///
    /// Examples: balance tables that are not ascending
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or unusable data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all planner-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Hosts use this to pick a localized message; tests use it to match variants.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

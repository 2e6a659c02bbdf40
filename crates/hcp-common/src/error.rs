//! Error types for hosted control plane ingress reconciliation
//!
//! Errors carry structured fields so the caller can surface them through
//! status conditions without re-parsing the message.

use thiserror::Error;

/// Main error type for ingress desired-state computation
#[derive(Debug, Error)]
pub enum Error {
    /// An input object is unusable for the requested computation
    #[error("validation error for {resource}: {message}")]
    Validation {
        /// Object that failed validation (e.g., "openshift-ingress/router-nodeport-default")
        resource: String,
        /// Description of what's invalid
        message: String,
        /// The invalid field path (e.g., "spec.ports[port=443].nodePort")
        field: Option<String>,
    },
}

impl Error {
    /// Create a validation error for a named resource and field path
    pub fn validation_for_field(
        resource: impl Into<String>,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Validation {
            resource: resource.into(),
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Get the resource name if this error is associated with a specific object
    pub fn resource(&self) -> Option<&str> {
        match self {
            Error::Validation { resource, .. } => Some(resource),
        }
    }

    /// Get the field path if this error names one
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => field.as_deref(),
        }
    }
}

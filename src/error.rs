//! Errors raised by the context getters.
//!
//! Every nested getter (`use_accordion_item`, `use_avatar_image`, ...) needs
//! its ancestors to have published their context first. Calling one outside
//! that chain is a usage error and surfaces as [`ContextError::MissingAncestorContext`].

use thiserror::Error;

/// Errors produced by the primitive context stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A nested component was created outside its required ancestor.
    #[error("Context not found: {component} is not a child of the {ancestor} component.")]
    MissingAncestorContext {
        /// The component that asked for the context (e.g. `Accordion.Trigger`).
        component: &'static str,
        /// The ancestor that never published its context (e.g. `Accordion.Item`).
        ancestor: &'static str,
    },

    /// A value of the wrong accordion mode was written to a root.
    #[error("Accordion value mismatch: root is `{expected}` but got a `{found}` value")]
    ValueTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl ContextError {
    pub(crate) fn missing(component: &'static str, ancestor: &'static str) -> Self {
        log::warn!("{component} used outside of {ancestor}");
        Self::MissingAncestorContext {
            component,
            ancestor,
        }
    }

    /// Name of the missing ancestor, if this is a missing-context error.
    pub fn missing_ancestor(&self) -> Option<&'static str> {
        match self {
            Self::MissingAncestorContext { ancestor, .. } => Some(*ancestor),
            Self::ValueTypeMismatch { .. } => None,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ContextError>;

// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::component::ComponentKind;

/// Error type for jCal document operations.
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum JcalError {
    /// The input is not a jCal document.
    #[error("Malformed jCal document: {message}")]
    Malformed {
        /// Description of what the deserializer rejected.
        message: String,
    },

    /// The value count handed to `add_component` does not match the kind's
    /// required schema.
    #[error("Expected {expected} required values for {kind}, got {got}")]
    RequiredCountMismatch {
        /// The component kind being added.
        kind: ComponentKind,
        /// Number of required fields the schema declares.
        expected: usize,
        /// Number of values actually provided.
        got: usize,
    },

    /// No component of the kind exists at the index.
    #[error("No {kind} component at index {index}")]
    NoSuchComponent {
        /// The component kind that was addressed.
        kind: ComponentKind,
        /// The out-of-range index.
        index: usize,
    },

    /// The document could not be serialized.
    #[error("Failed to serialize jCal document: {message}")]
    Serialize {
        /// Description of the serializer failure.
        message: String,
    },
}

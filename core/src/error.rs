// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calpost_jcal::{ComponentKind, JcalError};

/// Reasons a single record drops out of the fan-out.
///
/// One bad record never aborts the batch; the failure is recorded in the
/// publish report and processing continues with the next record.
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordError {
    /// A required schema field is absent from the extracted component body.
    #[error("Required field '{field}' missing from {kind} component")]
    MissingRequired {
        /// The component kind being rebuilt.
        kind: ComponentKind,
        /// The required field that was absent.
        field: &'static str,
    },

    /// The outbound component carries no usable unique identifier.
    #[error("Missing uid on outbound {kind} component")]
    MissingUid {
        /// The component kind being notified.
        kind: ComponentKind,
    },

    /// The document model rejected an operation.
    #[error(transparent)]
    Document(#[from] JcalError),
}

// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calpost_jcal::ComponentKind;

use crate::error::RecordError;

/// Outcome of one publish run.
///
/// Counts submissions to the transport, not deliveries: the pipeline is
/// fire-and-forget past the handoff.
#[derive(Debug, Default)]
pub struct PublishReport {
    /// Messages handed to the mail transport, one per (record, attendee)
    /// pair.
    pub submitted: usize,

    /// Records dropped from the fan-out, with the reason each was dropped.
    pub skipped: Vec<SkippedRecord>,
}

impl PublishReport {
    /// Whether every extracted record fanned out without a failure.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// One record dropped from the fan-out.
#[derive(Debug)]
pub struct SkippedRecord {
    /// Kind of the source component.
    pub kind: ComponentKind,

    /// Index of the source component in its per-kind array.
    pub index: usize,

    /// Unique identifier of the source component, when it had a readable
    /// one.
    pub uid: Option<String>,

    /// Why the record was dropped.
    pub reason: RecordError,
}

// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calpost_jcal::keyword::{KW_ATTENDEES, KW_UID};
use calpost_jcal::{Calendar, Component, ComponentKind};
use serde_json::Value;

/// One component detached from the source document, paired with its parsed
/// attendee list.
///
/// Produced once per component-with-attendees, in document index order, and
/// consumed once by the fan-out.
#[derive(Debug, Clone)]
pub struct ExtractionRecord {
    /// Index of the component in the source document's per-kind array.
    pub index: usize,

    /// Recipient addresses in field order, duplicates preserved.
    pub attendees: Vec<String>,

    /// Snapshot of the component body, taken after the attendee field was
    /// cleared on the source document.
    pub component: Component,
}

/// Extracts every component of `kind` that carries attendees.
///
/// Scans indices 0,1,2,… until the document reports no unique identifier;
/// for each component with a non-empty attendees field, splits the field
/// into individual addresses, clears it on the source document, and emits a
/// record. Components without attendees are left untouched, so the caller
/// may keep using the document afterwards.
pub fn extract_kind(calendar: &mut Calendar, kind: ComponentKind) -> Vec<ExtractionRecord> {
    let mut records = Vec::new();

    for index in 0.. {
        // The scan ends where the identifiers end, not at the array bound.
        match calendar
            .component_field(kind, index, KW_UID)
            .and_then(Value::as_str)
        {
            Some(uid) if !uid.is_empty() => {}
            _ => break,
        }

        let has_attendees = calendar
            .component_field(kind, index, KW_ATTENDEES)
            .and_then(Value::as_str)
            .is_some_and(|raw| !raw.is_empty());
        if !has_attendees {
            continue;
        }

        let Some(Value::String(raw)) = calendar.detach_component_field(kind, index, KW_ATTENDEES)
        else {
            continue;
        };
        let attendees = split_attendees(&raw);
        if attendees.is_empty() {
            continue;
        }

        let Some(component) = calendar.component(kind, index).cloned() else {
            break;
        };
        records.push(ExtractionRecord {
            index,
            attendees,
            component,
        });
    }

    tracing::debug!(kind = %kind, records = records.len(), "extracted components with attendees");
    records
}

/// Splits a comma-separated attendee field into trimmed addresses.
///
/// Order is preserved and duplicates are kept; empty segments are dropped.
fn split_attendees(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect()
}

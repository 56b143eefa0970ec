// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calpost_jcal::keyword::{KW_METHOD_PUBLISH, KW_UID};
use calpost_jcal::{Calendar, ComponentKind};
use serde_json::Value;

use crate::config::Config;
use crate::error::RecordError;
use crate::extract::ExtractionRecord;
use crate::mailer::MailTransport;
use crate::notify::notify;
use crate::report::SkippedRecord;

/// Fans one kind's extraction records out to their attendees.
///
/// Every record is rebuilt into a fresh single-component publish document
/// and submitted once per attendee. A record that cannot be rebuilt is
/// reported and skipped; it never aborts the batch.
///
/// Returns the number of messages submitted and the records skipped.
pub(crate) fn fanout(
    kind: ComponentKind,
    records: &[ExtractionRecord],
    config: &Config,
    transport: &dyn MailTransport,
) -> (usize, Vec<SkippedRecord>) {
    let mut submitted = 0;
    let mut skipped = Vec::new();

    for record in records {
        match fanout_record(kind, record, config, transport) {
            Ok(count) => submitted += count,
            Err(reason) => {
                tracing::warn!(kind = %kind, index = record.index, %reason, "skipping record");
                skipped.push(SkippedRecord {
                    kind,
                    index: record.index,
                    uid: record_uid(record),
                    reason,
                });
            }
        }
    }

    (submitted, skipped)
}

/// Rebuilds one record into an outbound document and notifies each of its
/// attendees in order.
fn fanout_record(
    kind: ComponentKind,
    record: &ExtractionRecord,
    config: &Config,
    transport: &dyn MailTransport,
) -> Result<usize, RecordError> {
    let schema = kind.schema();

    let mut required = Vec::with_capacity(schema.required.len());
    for &field in schema.required {
        let value = record
            .component
            .get(field)
            .cloned()
            .ok_or(RecordError::MissingRequired { kind, field })?;
        required.push(value);
    }

    let mut outbound = Calendar::new(&config.prod_id, &config.version);
    outbound.set_method(KW_METHOD_PUBLISH);
    outbound.add_component(kind, required)?;

    // Absent optional fields are omitted, not null-filled.
    for &field in schema.optional {
        if let Some(value) = record.component.get(field) {
            outbound.set_component_field(kind, 0, field, value.clone())?;
        }
    }

    for attendee in &record.attendees {
        notify(&mut outbound, attendee, kind, config, transport)?;
    }

    Ok(record.attendees.len())
}

fn record_uid(record: &ExtractionRecord) -> Option<String> {
    record
        .component
        .get(KW_UID)
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::tests_utils::{RecordingTransport, test_config};

    fn record(index: usize, attendees: &[&str], component: serde_json::Value) -> ExtractionRecord {
        let Value::Object(component) = component else {
            panic!("component must be an object");
        };
        ExtractionRecord {
            index,
            attendees: attendees.iter().map(|a| (*a).to_string()).collect(),
            component,
        }
    }

    fn standup(attendees: &[&str]) -> ExtractionRecord {
        record(
            0,
            attendees,
            json!({
                "uid": "E1",
                "summary": "Standup",
                "dtstart": "20260401T090000Z",
                "dtend": "20260401T091500Z",
            }),
        )
    }

    #[test]
    fn test_one_notification_per_attendee() {
        let transport = RecordingTransport::new();
        let records = [standup(&["a@x", "b@x", "c@x"])];

        let (submitted, skipped) =
            fanout(ComponentKind::Event, &records, &test_config(), &transport);

        assert_eq!(submitted, 3);
        assert!(skipped.is_empty());

        let messages = transport.messages();
        assert_eq!(messages.len(), 3);
        for (message, expected) in messages.iter().zip(["a@x", "b@x", "c@x"]) {
            assert_eq!(message.to, expected);
            let body: serde_json::Value = serde_json::from_str(&message.text).unwrap();
            // Each copy names only its own recipient.
            assert_eq!(
                body["vcalendar"]["vevent"][0]["attendees"],
                json!(expected)
            );
        }
    }

    #[test]
    fn test_repeated_addresses_are_not_deduplicated() {
        let transport = RecordingTransport::new();
        let records = [standup(&["a@x", "a@x"])];

        let (submitted, _) = fanout(ComponentKind::Event, &records, &test_config(), &transport);

        assert_eq!(submitted, 2);
        assert_eq!(transport.messages().len(), 2);
    }

    #[test]
    fn test_outbound_copies_required_and_present_optional_fields() {
        let transport = RecordingTransport::new();
        let records = [record(
            0,
            &["a@x"],
            json!({
                "uid": "E1",
                "summary": "Standup",
                "dtstart": "20260401T090000Z",
                "dtend": "20260401T091500Z",
                "location": "Room 4",
            }),
        )];

        fanout(ComponentKind::Event, &records, &test_config(), &transport);

        let messages = transport.messages();
        let body: serde_json::Value = serde_json::from_str(&messages[0].text).unwrap();
        let component = &body["vcalendar"]["vevent"][0];
        assert_eq!(component["uid"], json!("E1"));
        assert_eq!(component["summary"], json!("Standup"));
        assert_eq!(component["dtstart"], json!("20260401T090000Z"));
        assert_eq!(component["dtend"], json!("20260401T091500Z"));
        assert_eq!(component["location"], json!("Room 4"));
        // Absent optional fields stay absent on the outbound component.
        assert_eq!(component.get("description"), None);
        assert_eq!(component.get("status"), None);
    }

    #[test]
    fn test_unrelated_source_fields_are_not_copied() {
        let transport = RecordingTransport::new();
        let records = [record(
            0,
            &["a@x"],
            json!({
                "uid": "E1",
                "summary": "Standup",
                "dtstart": "20260401T090000Z",
                "dtend": "20260401T091500Z",
                "x-private-note": "do not leak",
            }),
        )];

        fanout(ComponentKind::Event, &records, &test_config(), &transport);

        let messages = transport.messages();
        assert!(!messages[0].text.contains("do not leak"));
    }

    #[test]
    fn test_missing_required_field_skips_record_and_continues() {
        let transport = RecordingTransport::new();
        let records = [
            record(0, &["a@x"], json!({"uid": "E1", "summary": "no dates"})),
            standup(&["b@x"]),
        ];

        let (submitted, skipped) =
            fanout(ComponentKind::Event, &records, &test_config(), &transport);

        assert_eq!(submitted, 1);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].index, 0);
        assert_eq!(skipped[0].uid.as_deref(), Some("E1"));
        assert!(matches!(
            skipped[0].reason,
            RecordError::MissingRequired {
                kind: ComponentKind::Event,
                field: "dtstart",
            }
        ));

        let messages = transport.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].to, "b@x");
    }

    #[test]
    fn test_todo_records_use_the_todo_schema() {
        let transport = RecordingTransport::new();
        let records = [record(
            0,
            &["a@x"],
            json!({
                "uid": "T1",
                "summary": "Chore",
                "due": "20260102",
                "priority": 5,
            }),
        )];

        let (submitted, skipped) =
            fanout(ComponentKind::Todo, &records, &test_config(), &transport);

        assert_eq!(submitted, 1);
        assert!(skipped.is_empty());

        let messages = transport.messages();
        let body: serde_json::Value = serde_json::from_str(&messages[0].text).unwrap();
        let component = &body["vcalendar"]["vtodo"][0];
        assert_eq!(component["due"], json!("20260102"));
        assert_eq!(component["priority"], json!(5));
    }
}

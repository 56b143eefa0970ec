// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calpost_jcal::keyword::{KW_ATTENDEES, KW_UID};
use calpost_jcal::{Calendar, ComponentKind};
use serde_json::Value;

use crate::config::Config;
use crate::error::RecordError;
use crate::mailer::{MailTransport, OutboundMessage};

/// Submits one publish notification for a single recipient.
///
/// `outbound` must hold exactly one component of `kind`. The recipient is
/// written as the sole attendee before serialization and cleared again
/// after the handoff, so the next call starts from a clean document and a
/// multi-recipient attendee field can never survive a send.
pub(crate) fn notify(
    outbound: &mut Calendar,
    recipient: &str,
    kind: ComponentKind,
    config: &Config,
    transport: &dyn MailTransport,
) -> Result<(), RecordError> {
    let uid = match outbound
        .component_field(kind, 0, KW_UID)
        .and_then(Value::as_str)
    {
        Some(uid) if !uid.is_empty() => uid.to_string(),
        _ => return Err(RecordError::MissingUid { kind }),
    };

    outbound.set_component_field(kind, 0, KW_ATTENDEES, Value::String(recipient.to_string()))?;
    let text = outbound.to_json_text()?;

    let message = OutboundMessage {
        from: config.sender.clone(),
        to: recipient.to_string(),
        subject: format!("PUBLISH: New event posted in your calendar ({uid})"),
        html: format!("<pre>{text}</pre>"),
        text,
    };

    tracing::debug!(kind = %kind, uid = %uid, to = recipient, "submitting publish notification");
    transport.submit(message);

    outbound.set_component_field(kind, 0, KW_ATTENDEES, Value::String(String::new()))?;
    Ok(())
}

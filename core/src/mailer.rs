// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Mail transport seam.

/// A single outbound notification message.
///
/// Transient: built once per (component, attendee) pair and handed to the
/// transport, never persisted by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Sender address.
    pub from: String,

    /// The sole recipient address.
    pub to: String,

    /// Subject line embedding the component's unique identifier.
    pub subject: String,

    /// Plain-text body: the serialized single-component jCal document.
    pub text: String,

    /// HTML body: the same serialized document wrapped in `<pre>` tags.
    pub html: String,
}

/// Trait for the outbound mail transport.
///
/// The pipeline hands each message off exactly once and never inspects the
/// outcome; delivery, retries and connection management belong to the
/// implementation. Submission order is deterministic, wire order is not.
pub trait MailTransport: Send + Sync {
    /// Accepts one message for delivery.
    fn submit(&self, message: OutboundMessage);
}

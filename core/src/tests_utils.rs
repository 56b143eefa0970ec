// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for the publish pipeline.
//!
//! Provides a recording mail transport so tests can observe exactly what
//! the pipeline handed off, without any delivery machinery.

use std::sync::Mutex;

use crate::config::Config;
use crate::mailer::{MailTransport, OutboundMessage};

/// A mail transport that records every submitted message.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    messages: Mutex<Vec<OutboundMessage>>,
}

impl RecordingTransport {
    /// Creates an empty recording transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages submitted so far, in submission order.
    pub fn messages(&self) -> Vec<OutboundMessage> {
        self.messages
            .lock()
            .expect("transport mutex poisoned")
            .clone()
    }
}

impl MailTransport for RecordingTransport {
    fn submit(&self, message: OutboundMessage) {
        self.messages
            .lock()
            .expect("transport mutex poisoned")
            .push(message);
    }
}

/// A pipeline configuration usable across tests.
pub fn test_config() -> Config {
    Config {
        sender: "calendar@example.com".to_string(),
        ..Config::default()
    }
}

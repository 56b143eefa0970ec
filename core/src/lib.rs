// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod config;
mod error;
mod extract;
mod fanout;
mod mailer;
mod notify;
mod publisher;
mod report;

#[cfg(test)]
pub(crate) mod tests_utils;

pub use crate::config::Config;
pub use crate::error::RecordError;
pub use crate::extract::{ExtractionRecord, extract_kind};
pub use crate::mailer::{MailTransport, OutboundMessage};
pub use crate::publisher::Publisher;
pub use crate::report::{PublishReport, SkippedRecord};

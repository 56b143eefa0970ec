// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::Arc;

use calpost_jcal::{Calendar, ComponentKind};

use crate::config::Config;
use crate::extract::extract_kind;
use crate::fanout::fanout;
use crate::mailer::MailTransport;
use crate::report::PublishReport;

/// Publish pipeline entry point.
///
/// Holds the configuration and the mail transport; one instance can
/// publish any number of documents. A single document must not be handed
/// to two publishers concurrently, since attendee fields are cleared on it
/// in place.
#[derive(Clone)]
pub struct Publisher {
    config: Config,
    transport: Arc<dyn MailTransport>,
}

impl Publisher {
    /// Creates a new publisher with the given configuration and transport.
    pub fn new(config: Config, transport: Arc<dyn MailTransport>) -> Self {
        Self { config, transport }
    }

    /// Extracts every component with attendees from the document and
    /// submits one publish notification per attendee.
    ///
    /// Kinds are processed in the fixed order event, free/busy, to-do,
    /// journal. Extracted components have their attendee field cleared on
    /// the source document; the caller may keep using it afterwards.
    ///
    /// Best-effort: a record that cannot be fanned out is reported in the
    /// returned [`PublishReport`] and never aborts the run.
    #[tracing::instrument(skip_all)]
    pub fn publish(&self, calendar: &mut Calendar) -> PublishReport {
        let mut extractions = Vec::new();
        for kind in ComponentKind::ALL {
            let records = extract_kind(calendar, kind);
            if !records.is_empty() {
                extractions.push((kind, records));
            }
        }

        let mut report = PublishReport::default();
        for (kind, records) in &extractions {
            let (submitted, skipped) =
                fanout(*kind, records, &self.config, self.transport.as_ref());
            tracing::debug!(
                kind = %kind,
                submitted,
                skipped = skipped.len(),
                "fanned out extraction records"
            );
            report.submitted += submitted;
            report.skipped.extend(skipped);
        }

        report
    }
}

impl fmt::Debug for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

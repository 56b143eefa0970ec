// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

use crate::keyword::{
    KW_CATEGORIES, KW_DESCRIPTION, KW_DTEND, KW_DTSTART, KW_DUE, KW_FREEBUSY, KW_LOCATION,
    KW_ORGANIZER, KW_PRIORITY, KW_STATUS, KW_SUMMARY, KW_UID, KW_VEVENT, KW_VFREEBUSY, KW_VJOURNAL,
    KW_VTODO,
};

/// The structural categories a jCal document may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// An event.
    Event,

    /// A free/busy block.
    FreeBusy,

    /// A to-do.
    Todo,

    /// A journal entry.
    Journal,
}

impl ComponentKind {
    /// Every kind, in the fixed processing order: event, free/busy, to-do,
    /// journal.
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Event,
        ComponentKind::FreeBusy,
        ComponentKind::Todo,
        ComponentKind::Journal,
    ];

    /// The key of this kind's component array inside the `vcalendar`
    /// container.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ComponentKind::Event => KW_VEVENT,
            ComponentKind::FreeBusy => KW_VFREEBUSY,
            ComponentKind::Todo => KW_VTODO,
            ComponentKind::Journal => KW_VJOURNAL,
        }
    }

    /// The declared parameter schema for this kind.
    ///
    /// `uid` is the first required field of every kind.
    #[must_use]
    pub const fn schema(self) -> &'static ParameterSchema {
        match self {
            ComponentKind::Event => &EVENT_SCHEMA,
            ComponentKind::FreeBusy => &FREEBUSY_SCHEMA,
            ComponentKind::Todo => &TODO_SCHEMA,
            ComponentKind::Journal => &JOURNAL_SCHEMA,
        }
    }
}

impl AsRef<str> for ComponentKind {
    fn as_ref(&self) -> &str {
        self.key()
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ComponentKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            KW_VEVENT => Ok(ComponentKind::Event),
            KW_VFREEBUSY => Ok(ComponentKind::FreeBusy),
            KW_VTODO => Ok(ComponentKind::Todo),
            KW_VJOURNAL => Ok(ComponentKind::Journal),
            _ => Err(()),
        }
    }
}

/// Declared required and optional field names for one component kind.
///
/// Required fields are copied positionally when a component is rebuilt for
/// an outbound document; optional fields are copied only when present.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSchema {
    /// Field names every component of the kind must carry, in order.
    pub required: &'static [&'static str],

    /// Field names a component of the kind may carry, in order.
    pub optional: &'static [&'static str],
}

const EVENT_SCHEMA: ParameterSchema = ParameterSchema {
    required: &[KW_UID, KW_SUMMARY, KW_DTSTART, KW_DTEND],
    optional: &[
        KW_LOCATION,
        KW_DESCRIPTION,
        KW_STATUS,
        KW_ORGANIZER,
        KW_CATEGORIES,
    ],
};

const FREEBUSY_SCHEMA: ParameterSchema = ParameterSchema {
    required: &[KW_UID, KW_DTSTART, KW_DTEND],
    optional: &[KW_ORGANIZER, KW_FREEBUSY],
};

const TODO_SCHEMA: ParameterSchema = ParameterSchema {
    required: &[KW_UID, KW_SUMMARY, KW_DUE],
    optional: &[KW_DESCRIPTION, KW_STATUS, KW_PRIORITY, KW_LOCATION],
};

const JOURNAL_SCHEMA: ParameterSchema = ParameterSchema {
    required: &[KW_UID, KW_SUMMARY, KW_DTSTART],
    optional: &[KW_DESCRIPTION, KW_CATEGORIES],
};

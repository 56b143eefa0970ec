// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Field names used in jCal documents.
//!
//! jCal stores component fields under lowercase names, unlike the uppercase
//! property names of the iCalendar text format.

/// Top-level container key.
pub const KW_VCALENDAR: &str = "vcalendar";
/// Event component array key.
pub const KW_VEVENT: &str = "vevent";
/// Free/busy component array key.
pub const KW_VFREEBUSY: &str = "vfreebusy";
/// To-do component array key.
pub const KW_VTODO: &str = "vtodo";
/// Journal component array key.
pub const KW_VJOURNAL: &str = "vjournal";

/// Unique identifier field.
pub const KW_UID: &str = "uid";
/// Comma-separated attendee address field.
pub const KW_ATTENDEES: &str = "attendees";
/// Summary field.
pub const KW_SUMMARY: &str = "summary";
/// Start date-time field.
pub const KW_DTSTART: &str = "dtstart";
/// End date-time field.
pub const KW_DTEND: &str = "dtend";
/// Due date-time field.
pub const KW_DUE: &str = "due";
/// Location field.
pub const KW_LOCATION: &str = "location";
/// Description field.
pub const KW_DESCRIPTION: &str = "description";
/// Status field.
pub const KW_STATUS: &str = "status";
/// Organizer field.
pub const KW_ORGANIZER: &str = "organizer";
/// Categories field.
pub const KW_CATEGORIES: &str = "categories";
/// Priority field.
pub const KW_PRIORITY: &str = "priority";
/// Free/busy period field.
pub const KW_FREEBUSY: &str = "freebusy";

/// The PUBLISH method, used when broadcasting components to recipients.
pub const KW_METHOD_PUBLISH: &str = "publish";

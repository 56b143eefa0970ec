// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Represent and manipulate jCal calendar documents.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

mod calendar;
mod component;
mod error;
pub mod keyword;

pub use crate::calendar::{Calendar, Component};
pub use crate::component::{ComponentKind, ParameterSchema};
pub use crate::error::JcalError;

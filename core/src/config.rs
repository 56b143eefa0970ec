// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Configuration for the publish pipeline.
///
/// Passed explicitly to [`crate::Publisher::new`]; nothing is read from
/// process-wide state, so two publishers with different configurations can
/// coexist.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Sender address stamped on every outbound message.
    pub sender: String,

    /// Product identifier stamped on outbound documents.
    #[serde(default = "default_prod_id")]
    pub prod_id: String,

    /// jCal version stamped on outbound documents.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_prod_id() -> String {
    concat!("-//yzx9.xyz//calpost ", env!("CARGO_PKG_VERSION"), "//EN").to_string()
}

fn default_version() -> String {
    "2.0".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sender: String::new(),
            prod_id: default_prod_id(),
            version: default_version(),
        }
    }
}

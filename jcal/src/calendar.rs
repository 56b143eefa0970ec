// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! jCal document container type.

use serde_json::Value;

use crate::component::ComponentKind;
use crate::error::JcalError;

/// A component body: a flat map from field name to value.
pub type Component = serde_json::Map<String, Value>;

/// The `vcalendar` container: document-level fields plus one component
/// array per kind.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct Container {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prodid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    method: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    vevent: Vec<Component>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    vfreebusy: Vec<Component>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    vtodo: Vec<Component>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    vjournal: Vec<Component>,

    /// Document-level fields we do not model (e.g. `calscale`), preserved
    /// for round-trip.
    #[serde(flatten)]
    retained: serde_json::Map<String, Value>,
}

/// A jCal calendar document.
///
/// Serializes as `{"vcalendar": {...}}` with one component array per kind
/// (`vevent`, `vfreebusy`, `vtodo`, `vjournal`). Components are flat maps
/// from field name to value; the `attendees` field holds a comma-separated
/// string.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Calendar {
    vcalendar: Container,
}

impl Calendar {
    /// Creates a new empty document with the given product identifier and
    /// version.
    #[must_use]
    pub fn new(prod_id: &str, version: &str) -> Self {
        Self {
            vcalendar: Container {
                prodid: Some(prod_id.to_string()),
                version: Some(version.to_string()),
                ..Container::default()
            },
        }
    }

    /// Parses a document from jCal JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`JcalError::Malformed`] if the input is not valid JSON or
    /// lacks the `vcalendar` container.
    pub fn parse(raw: &str) -> Result<Self, JcalError> {
        serde_json::from_str(raw).map_err(|e| JcalError::Malformed {
            message: e.to_string(),
        })
    }

    /// Builds a document from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`JcalError::Malformed`] if the value lacks the `vcalendar`
    /// container or its shape does not match a jCal document.
    pub fn from_json(value: Value) -> Result<Self, JcalError> {
        serde_json::from_value(value).map_err(|e| JcalError::Malformed {
            message: e.to_string(),
        })
    }

    /// Serializes the whole document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`JcalError::Serialize`] if the document cannot be
    /// represented as JSON.
    pub fn to_json(&self) -> Result<Value, JcalError> {
        serde_json::to_value(self).map_err(|e| JcalError::Serialize {
            message: e.to_string(),
        })
    }

    /// Serializes the whole document to its canonical JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`JcalError::Serialize`] if the document cannot be
    /// represented as JSON.
    pub fn to_json_text(&self) -> Result<String, JcalError> {
        serde_json::to_string(self).map_err(|e| JcalError::Serialize {
            message: e.to_string(),
        })
    }

    /// The document's product identifier, if set.
    #[must_use]
    pub fn prod_id(&self) -> Option<&str> {
        self.vcalendar.prodid.as_deref()
    }

    /// The document's jCal version, if set.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.vcalendar.version.as_deref()
    }

    /// The document's method, if set.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.vcalendar.method.as_deref()
    }

    /// Sets the document's method (e.g. `publish`).
    pub fn set_method(&mut self, method: &str) {
        self.vcalendar.method = Some(method.to_string());
    }

    /// The number of components of the given kind.
    #[must_use]
    pub fn component_count(&self, kind: ComponentKind) -> usize {
        self.components(kind).len()
    }

    /// The component of the given kind at the given index.
    #[must_use]
    pub fn component(&self, kind: ComponentKind, index: usize) -> Option<&Component> {
        self.components(kind).get(index)
    }

    /// The value of a named field on the component at the given index.
    ///
    /// Returns `None` when no such component exists or the component does
    /// not carry the field.
    #[must_use]
    pub fn component_field(&self, kind: ComponentKind, index: usize, name: &str) -> Option<&Value> {
        self.components(kind).get(index)?.get(name)
    }

    /// Sets a named field on the component at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`JcalError::NoSuchComponent`] if no component of the kind
    /// exists at the index.
    pub fn set_component_field(
        &mut self,
        kind: ComponentKind,
        index: usize,
        name: &str,
        value: Value,
    ) -> Result<(), JcalError> {
        let component = self
            .components_mut(kind)
            .get_mut(index)
            .ok_or(JcalError::NoSuchComponent { kind, index })?;
        component.insert(name.to_string(), value);
        Ok(())
    }

    /// Replaces a named field with the empty string and returns its prior
    /// value.
    ///
    /// Returns `None` without touching the component when the component or
    /// the field does not exist.
    pub fn detach_component_field(
        &mut self,
        kind: ComponentKind,
        index: usize,
        name: &str,
    ) -> Option<Value> {
        let component = self.components_mut(kind).get_mut(index)?;
        if !component.contains_key(name) {
            return None;
        }
        component.insert(name.to_string(), Value::String(String::new()))
    }

    /// Appends a component of the given kind, populating its required
    /// fields positionally from `values`.
    ///
    /// # Errors
    ///
    /// Returns [`JcalError::RequiredCountMismatch`] if `values` does not
    /// contain exactly one value per required field of the kind's schema.
    pub fn add_component(
        &mut self,
        kind: ComponentKind,
        values: Vec<Value>,
    ) -> Result<(), JcalError> {
        let schema = kind.schema();
        if values.len() != schema.required.len() {
            return Err(JcalError::RequiredCountMismatch {
                kind,
                expected: schema.required.len(),
                got: values.len(),
            });
        }

        let mut component = Component::new();
        for (&name, value) in schema.required.iter().zip(values) {
            component.insert(name.to_string(), value);
        }
        self.components_mut(kind).push(component);
        Ok(())
    }

    fn components(&self, kind: ComponentKind) -> &Vec<Component> {
        match kind {
            ComponentKind::Event => &self.vcalendar.vevent,
            ComponentKind::FreeBusy => &self.vcalendar.vfreebusy,
            ComponentKind::Todo => &self.vcalendar.vtodo,
            ComponentKind::Journal => &self.vcalendar.vjournal,
        }
    }

    fn components_mut(&mut self, kind: ComponentKind) -> &mut Vec<Component> {
        match kind {
            ComponentKind::Event => &mut self.vcalendar.vevent,
            ComponentKind::FreeBusy => &mut self.vcalendar.vfreebusy,
            ComponentKind::Todo => &mut self.vcalendar.vtodo,
            ComponentKind::Journal => &mut self.vcalendar.vjournal,
        }
    }
}

//! Controls and pages modeled as plain data.
//!
//! The host document is a flat list of controls, each with a class list, its
//! associated key-value data, and a mutable style map. Binding logic works
//! against this model instead of a live document; a host serializes its
//! scraped document into a `Page` and reads applied styles back out.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Data Structures
// ============================================================================

/// Key-value data associated with a control (its `data-*` attributes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSet {
    entries: HashMap<String, String>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a data value. Missing keys are not an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DataSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One UI element: class list, data attributes, and inline style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub data: DataSet,
    #[serde(default)]
    pub style: HashMap<String, String>,
}

impl Control {
    /// A control with a single class and no data.
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            classes: vec![class.into()],
            ..Default::default()
        }
    }

    /// A control with a single class and the given data entries.
    pub fn with_data<K, V, I>(class: impl Into<String>, data: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            classes: vec![class.into()],
            data: data.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.style.insert(property.into(), value.into());
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(|v| v.as_str())
    }
}

/// The root container handed to the initialization entry point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub controls: Vec<Control>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize a scraped document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn push(&mut self, control: Control) {
        self.controls.push(control);
    }

    /// All controls carrying a class, in document order.
    pub fn select(&self, class: &str) -> Vec<&Control> {
        self.controls.iter().filter(|c| c.has_class(class)).collect()
    }

    pub fn select_mut(&mut self, class: &str) -> Vec<&mut Control> {
        self.controls
            .iter_mut()
            .filter(|c| c.has_class(class))
            .collect()
    }
}

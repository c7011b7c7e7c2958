//! Configuration field descriptors
//!
//! Adapters describe the settings, package options, and checkout options they
//! need; the host renders the forms and validates input against `rules`.

use serde::{Deserialize, Serialize};

/// Input type of a configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Password,
    Email,
    Select,
}

/// One selectable option: stored value and display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A field rendered by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigField {
    /// Storage key, e.g. `contabo::client_id`
    pub key: String,

    /// Display name
    pub name: String,

    pub description: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Host validation rules, e.g. `required`, `email`
    pub rules: Vec<String>,

    /// Layout column class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<String>,

    /// Options for `select` fields, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,

    /// Whether several options may be selected
    #[serde(default)]
    pub multiple: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl ConfigField {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            field_type,
            rules: Vec::new(),
            col: None,
            options: Vec::new(),
            multiple: false,
            default_value: None,
        }
    }

    pub fn with_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules = rules.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_col(mut self, col: impl Into<String>) -> Self {
        self.col = Some(col.into());
        self
    }

    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = SelectOption>,
    {
        self.options = options.into_iter().collect();
        self
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| r == "required")
    }

    /// Find an option by its stored value
    pub fn option(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let field = ConfigField::new("region", "Region", "Select a region", FieldType::Select)
            .with_rules(["required"])
            .with_options([
                SelectOption::new("EU", "Germany (Europe)"),
                SelectOption::new("UK", "United Kingdom (Europe)"),
            ])
            .with_default("EU");

        assert!(field.is_required());
        assert!(!field.multiple);
        assert_eq!(field.option("UK").unwrap().label, "United Kingdom (Europe)");
        assert!(field.option("MARS").is_none());
    }

    #[test]
    fn test_serialize_uses_host_names() {
        let field = ConfigField::new("contabo::username", "User", "", FieldType::Email)
            .with_rules(["required", "email"]);
        let json = serde_json::to_value(&field).unwrap();

        assert_eq!(json["type"], "email");
        assert_eq!(json["rules"], serde_json::json!(["required", "email"]));
        assert!(json.get("options").is_none());
        assert!(json.get("default_value").is_none());
    }
}

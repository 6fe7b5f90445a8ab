//! Declarative tool input schemas
//!
//! A [`ToolSchema`] lists every field a tool accepts: its type, whether it is
//! required, an optional set of allowed values and the default applied when
//! the caller leaves it unset. The same declaration renders the JSON schema
//! shown to the language model and validates inbound arguments.

use scrapeless_core::{Error, Result};
use serde_json::{Map, Value, json};

/// Value type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    StringArray,
    StringMap,
}

impl FieldKind {
    fn json_type(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::StringArray => "array",
            FieldKind::StringMap => "object",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Integer => "an integer",
            FieldKind::Boolean => "a boolean",
            FieldKind::StringArray => "an array of strings",
            FieldKind::StringMap => "an object with string values",
        }
    }
}

/// A single input field
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    kind: FieldKind,
    description: String,
    required: bool,
    allowed: Option<Vec<String>>,
    default: Option<Value>,
}

impl Field {
    fn new(name: impl Into<String>, kind: FieldKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            required: false,
            allowed: None,
            default: None,
        }
    }

    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String, description)
    }

    pub fn integer(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Integer, description)
    }

    pub fn boolean(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean, description)
    }

    pub fn string_array(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, FieldKind::StringArray, description)
    }

    pub fn string_map(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, FieldKind::StringMap, description)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict a string field (or the items of a string array) to `values`.
    pub fn one_of(mut self, values: &[&str]) -> Self {
        self.allowed = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn allowed_values(&self) -> Option<&[String]> {
        self.allowed.as_deref()
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    fn to_json(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".to_string(), json!(self.kind.json_type()));
        prop.insert("description".to_string(), json!(self.description.trim()));

        match self.kind {
            FieldKind::StringArray => {
                let mut items = Map::new();
                items.insert("type".to_string(), json!("string"));
                if let Some(allowed) = &self.allowed {
                    items.insert("enum".to_string(), json!(allowed));
                }
                prop.insert("items".to_string(), Value::Object(items));
            }
            FieldKind::StringMap => {
                prop.insert(
                    "additionalProperties".to_string(),
                    json!({ "type": "string" }),
                );
            }
            _ => {
                if let Some(allowed) = &self.allowed {
                    prop.insert("enum".to_string(), json!(allowed));
                }
            }
        }

        if let Some(default) = &self.default {
            prop.insert("default".to_string(), default.clone());
        }

        Value::Object(prop)
    }

    fn check(&self, tool: &str, value: &Value) -> Result<()> {
        let type_ok = match self.kind {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            FieldKind::StringMap => value
                .as_object()
                .is_some_and(|map| map.values().all(Value::is_string)),
        };

        if !type_ok {
            return Err(Error::invalid_input(
                tool,
                format!("'{}' must be {}, got {}", self.name, self.kind.describe(), value),
            ));
        }

        let Some(allowed) = &self.allowed else {
            return Ok(());
        };

        let candidates: Vec<&str> = match value {
            Value::String(s) => vec![s.as_str()],
            Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        };

        for candidate in candidates {
            if !allowed.iter().any(|a| a == candidate) {
                return Err(Error::invalid_input(
                    tool,
                    format!(
                        "'{}' does not accept '{}'; expected one of: {}",
                        self.name,
                        candidate,
                        allowed.join(", ")
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// Tool schema builder
#[derive(Debug, Clone, Default)]
pub struct ToolSchema {
    fields: Vec<Field>,
}

impl ToolSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Render as a JSON schema object
    pub fn build(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            properties.insert(field.name.clone(), field.to_json());
        }

        let required: Vec<Value> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| Value::String(f.name.clone()))
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Check `params` against the declared fields.
    ///
    /// Unset optional fields (missing or `null`) are accepted. Keys that are
    /// not declared are ignored.
    pub fn validate(&self, tool: &str, params: &Value) -> Result<()> {
        let Some(map) = params.as_object() else {
            return Err(Error::invalid_input(
                tool,
                format!("arguments must be a JSON object, got {}", params),
            ));
        };

        for field in &self.fields {
            match map.get(&field.name) {
                None | Some(Value::Null) if field.required => {
                    return Err(Error::invalid_input(
                        tool,
                        format!("missing required parameter '{}'", field.name),
                    ));
                }
                None | Some(Value::Null) => {}
                Some(value) => field.check(tool, value)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> ToolSchema {
        ToolSchema::new()
            .field(Field::string("url", "Page to fetch").required())
            .field(
                Field::string("response_type", "Output format")
                    .one_of(&["html", "markdown"])
                    .default_value("html"),
            )
            .field(Field::integer("limit", "Max pages").default_value(10))
            .field(
                Field::string_array("formats", "Formats")
                    .one_of(&["markdown", "html"])
                    .default_value(json!(["markdown"])),
            )
            .field(Field::string_map("headers", "Headers"))
    }

    #[test]
    fn test_tool_schema_builder() {
        let schema = sample_schema().build();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["url"]));
        assert_eq!(schema["properties"]["response_type"]["enum"], json!(["html", "markdown"]));
        assert_eq!(schema["properties"]["response_type"]["default"], "html");
        assert_eq!(schema["properties"]["formats"]["type"], "array");
        assert_eq!(schema["properties"]["formats"]["items"]["enum"], json!(["markdown", "html"]));
        assert_eq!(schema["properties"]["headers"]["additionalProperties"]["type"], "string");
        assert!(schema["properties"]["limit"]["enum"].is_null());
    }

    #[test]
    fn test_validate_accepts_unset_optionals() {
        let schema = sample_schema();
        schema
            .validate("t", &json!({"url": "https://example.com", "limit": null}))
            .unwrap();
    }

    #[test]
    fn test_validate_rejects_missing_required() {
        let err = sample_schema().validate("t", &json!({"limit": 3})).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_validate_rejects_value_outside_domain() {
        let schema = sample_schema();
        let err = schema
            .validate("t", &json!({"url": "u", "response_type": "pdf"}))
            .unwrap_err();
        assert!(err.to_string().contains("pdf"));

        let err = schema
            .validate("t", &json!({"url": "u", "formats": ["markdown", "xml"]}))
            .unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let schema = sample_schema();
        assert!(schema.validate("t", &json!({"url": 5})).is_err());
        assert!(schema.validate("t", &json!({"url": "u", "limit": "ten"})).is_err());
        assert!(schema.validate("t", &json!({"url": "u", "limit": 1.5})).is_err());
        assert!(schema.validate("t", &json!({"url": "u", "headers": {"a": 1}})).is_err());
        assert!(schema.validate("t", &json!(["not", "an", "object"])).is_err());
    }
}

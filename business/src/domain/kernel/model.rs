use serde_json::{Map, Value};

/// Named arguments passed to a kernel function.
pub type KernelArguments = Map<String, Value>;

/// JSON type accepted for a function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    String,
    Integer,
    Number,
    Boolean,
}

impl ParameterKind {
    /// JSON schema type name.
    pub fn schema_type(&self) -> &'static str {
        match self {
            ParameterKind::String => "string",
            ParameterKind::Integer => "integer",
            ParameterKind::Number => "number",
            ParameterKind::Boolean => "boolean",
        }
    }

    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ParameterKind::String => value.is_string(),
            ParameterKind::Integer => value.is_i64() || value.is_u64(),
            ParameterKind::Number => value.is_number(),
            ParameterKind::Boolean => value.is_boolean(),
        }
    }
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.schema_type())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterMetadata {
    pub name: String,
    pub description: Option<String>,
    pub kind: ParameterKind,
    pub required: bool,
    /// Value substituted when an optional argument is absent.
    pub default: Option<Value>,
}

impl ParameterMetadata {
    pub fn required(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            required: true,
            default: None,
        }
    }

    pub fn optional(name: impl Into<String>, kind: ParameterKind, default: Value) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            required: false,
            default: Some(default),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Describes a function a plugin exposes to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionMetadata {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterMetadata>,
}

impl FunctionMetadata {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterMetadata) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// Separator between plugin and function in qualified names.
pub const FUNCTION_NAME_SEPARATOR: char = '-';

/// A function as registered in the kernel, bound to its plugin name.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelFunction {
    pub plugin_name: String,
    pub metadata: FunctionMetadata,
}

impl KernelFunction {
    /// `<plugin>-<function>`, the name advertised to the model.
    pub fn qualified_name(&self) -> String {
        format!(
            "{}{}{}",
            self.plugin_name, FUNCTION_NAME_SEPARATOR, self.metadata.name
        )
    }
}

/// Splits a qualified name into plugin and function parts.
pub fn split_qualified_name(qualified: &str) -> Option<(&str, &str)> {
    qualified
        .split_once(FUNCTION_NAME_SEPARATOR)
        .filter(|(plugin, function)| !plugin.is_empty() && !function.is_empty())
}

//! Parameter specifications for tool inputs.
//!
//! Every tool declares its inputs as a static slice of [`ParamSpec`]. The
//! same slice drives two things:
//!
//! - the JSON Schema published in `tools/list` ([`input_schema`])
//! - the structural validation run before any handler sees the arguments
//!   ([`validate`])
//!
//! Keeping both on one declaration means the published schema and the
//! accepted inputs cannot drift apart.

use std::fmt;
use std::sync::Arc;

use rmcp::model::JsonObject;
use serde_json::{Value, json};

// ============================================================================
// Parameter Specification
// ============================================================================

/// JSON kind accepted by a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Integer,
    Number,
    Boolean,
    String,
    /// Array of strings drawn from the parameter's allowed values.
    Array,
}

impl ParamKind {
    /// Name used in the JSON Schema `type` keyword.
    pub fn json_type(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Array => "array",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Number)
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::String => value.is_string(),
            Self::Array => value.is_array(),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_type())
    }
}

/// Declaration of a single tool parameter.
///
/// Built with `const` constructors so tool definitions can keep their
/// parameter lists in `static` slices:
///
/// ```
/// use pediatric_mcp_server::domains::tools::ParamSpec;
///
/// const WEIGHT: ParamSpec = ParamSpec::number("weight_kg", "Peso in kg").range(0.1, 200.0);
/// assert!(WEIGHT.required);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub multiple_of: Option<f64>,
    pub allowed: Option<&'static [&'static str]>,
    pub required: bool,
    /// Documented default, published in the schema only.
    pub default: Option<DefaultValue>,
}

/// A documented default for an optional parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Number(f64),
    Boolean(bool),
}

impl DefaultValue {
    fn to_json(self) -> Value {
        match self {
            // Integral defaults are published as JSON integers.
            Self::Number(n) if n.fract() == 0.0 => json!(n as i64),
            Self::Number(n) => json!(n),
            Self::Boolean(b) => json!(b),
        }
    }
}

impl ParamSpec {
    const fn new(name: &'static str, description: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            description,
            kind,
            minimum: None,
            maximum: None,
            multiple_of: None,
            allowed: None,
            required: true,
            default: None,
        }
    }

    pub const fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Integer)
    }

    pub const fn number(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Number)
    }

    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, ParamKind::Boolean)
    }

    /// A string restricted to `values`.
    pub const fn choice(
        name: &'static str,
        description: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self::new(name, description, ParamKind::String).allowed(values)
    }

    /// An array whose items are drawn from `values`.
    pub const fn multi_choice(
        name: &'static str,
        description: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self::new(name, description, ParamKind::Array).allowed(values)
    }

    /// Inclusive numeric bounds.
    pub const fn range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    pub const fn at_least(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub const fn multiple_of(mut self, step: f64) -> Self {
        self.multiple_of = Some(step);
        self
    }

    pub const fn allowed(mut self, values: &'static [&'static str]) -> Self {
        self.allowed = Some(values);
        self
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Optional numeric parameter with a documented default.
    pub const fn default_number(mut self, value: f64) -> Self {
        self.required = false;
        self.default = Some(DefaultValue::Number(value));
        self
    }

    /// Optional boolean parameter with a documented default.
    pub const fn default_bool(mut self, value: bool) -> Self {
        self.required = false;
        self.default = Some(DefaultValue::Boolean(value));
        self
    }

    /// Check the declaration itself.
    ///
    /// Returns a human readable reason when the spec can never be satisfied
    /// or does not make sense for its kind.
    pub fn check(&self) -> Result<(), String> {
        if let (Some(min), Some(max)) = (self.minimum, self.maximum) {
            if min > max {
                return Err(format!("minimum {min} is greater than maximum {max}"));
            }
        }
        if (self.minimum.is_some() || self.maximum.is_some() || self.multiple_of.is_some())
            && !self.kind.is_numeric()
        {
            return Err(format!("numeric constraint on a {} parameter", self.kind));
        }
        if let Some(step) = self.multiple_of {
            if step <= 0.0 {
                return Err(format!("multipleOf must be positive (got {step})"));
            }
        }
        match (self.kind, self.allowed) {
            (ParamKind::String | ParamKind::Array, Some([])) => {
                Err("allowed value set is empty".to_string())
            }
            (ParamKind::Array, None) => Err("array parameter without allowed values".to_string()),
            (ParamKind::String | ParamKind::Array, _) => Ok(()),
            (_, Some(_)) => Err(format!("allowed values on a {} parameter", self.kind)),
            (_, None) => Ok(()),
        }
    }

    /// JSON Schema fragment for this parameter.
    pub fn to_schema(&self) -> Value {
        let mut schema = serde_json::Map::new();
        schema.insert("type".into(), json!(self.kind.json_type()));
        schema.insert("description".into(), json!(self.description));
        if let Some(min) = self.minimum {
            schema.insert("minimum".into(), self.bound_to_json(min));
        }
        if let Some(max) = self.maximum {
            schema.insert("maximum".into(), self.bound_to_json(max));
        }
        if let Some(step) = self.multiple_of {
            schema.insert("multipleOf".into(), self.bound_to_json(step));
        }
        if let Some(values) = self.allowed {
            match self.kind {
                ParamKind::Array => {
                    schema.insert("items".into(), json!({ "type": "string", "enum": values }));
                }
                _ => {
                    schema.insert("enum".into(), json!(values));
                }
            }
        }
        if let Some(default) = self.default {
            schema.insert("default".into(), default.to_json());
        }
        Value::Object(schema)
    }

    fn bound_to_json(&self, bound: f64) -> Value {
        if self.kind == ParamKind::Integer && bound.fract() == 0.0 {
            json!(bound as i64)
        } else {
            json!(bound)
        }
    }

    /// Validate one present, non-null value against this spec.
    fn validate_value(&self, value: &Value) -> Option<Violation> {
        if !self.kind.accepts(value) {
            return Some(Violation::WrongKind { expected: self.kind });
        }

        if self.kind.is_numeric() {
            let n = value.as_f64()?;
            if let Some(min) = self.minimum {
                if n < min {
                    return Some(Violation::BelowMinimum { value: n, minimum: min });
                }
            }
            if let Some(max) = self.maximum {
                if n > max {
                    return Some(Violation::AboveMaximum { value: n, maximum: max });
                }
            }
            if let Some(step) = self.multiple_of {
                let ratio = n / step;
                if (ratio - ratio.round()).abs() > 1e-9 {
                    return Some(Violation::NotMultipleOf { value: n, step });
                }
            }
            return None;
        }

        let allowed = self.allowed?;
        match value {
            Value::String(s) if !allowed.contains(&s.as_str()) => Some(Violation::NotAllowed {
                value: s.clone(),
                allowed,
            }),
            Value::Array(items) => items.iter().find_map(|item| match item.as_str() {
                Some(s) if allowed.contains(&s) => None,
                Some(s) => Some(Violation::NotAllowed {
                    value: s.to_string(),
                    allowed,
                }),
                None => Some(Violation::WrongItemKind),
            }),
            _ => None,
        }
    }
}

// ============================================================================
// Schema Generation
// ============================================================================

/// Build the `inputSchema` object for a parameter list.
pub fn input_schema(params: &[ParamSpec]) -> Arc<JsonObject> {
    let properties: serde_json::Map<String, Value> = params
        .iter()
        .map(|p| (p.name.to_string(), p.to_schema()))
        .collect();
    let required: Vec<&str> = params.iter().filter(|p| p.required).map(|p| p.name).collect();

    let mut schema = JsonObject::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Value::Object(properties));
    schema.insert("required".into(), json!(required));
    Arc::new(schema)
}

// ============================================================================
// Validation
// ============================================================================

/// Why a parameter was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    Missing,
    WrongKind { expected: ParamKind },
    WrongItemKind,
    BelowMinimum { value: f64, minimum: f64 },
    AboveMaximum { value: f64, maximum: f64 },
    NotMultipleOf { value: f64, step: f64 },
    NotAllowed { value: String, allowed: &'static [&'static str] },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing required parameter"),
            Self::WrongKind { expected } => write!(f, "expected {expected}"),
            Self::WrongItemKind => write!(f, "array items must be strings"),
            Self::BelowMinimum { value, minimum } => {
                write!(f, "value {value} is below minimum {minimum}")
            }
            Self::AboveMaximum { value, maximum } => {
                write!(f, "value {value} is above maximum {maximum}")
            }
            Self::NotMultipleOf { value, step } => {
                write!(f, "value {value} is not a multiple of {step}")
            }
            Self::NotAllowed { value, allowed } => {
                write!(f, "'{value}' is not one of [{}]", allowed.join(", "))
            }
        }
    }
}

/// A violation attached to the parameter that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamViolation {
    pub param: &'static str,
    pub violation: Violation,
}

impl fmt::Display for ParamViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.param, self.violation)
    }
}

/// Result of checking a call's arguments against a parameter list.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<ParamViolation>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validate `args` against `params`.
///
/// All violations are collected in declaration order. Keys not declared in
/// `params` are ignored. A `null` value counts as absent.
pub fn validate(params: &[ParamSpec], args: &JsonObject) -> ValidationOutcome {
    let violations: Vec<ParamViolation> = params
        .iter()
        .filter_map(|spec| {
            let violation = match args.get(spec.name) {
                None | Some(Value::Null) if spec.required => Some(Violation::Missing),
                None | Some(Value::Null) => None,
                Some(value) => spec.validate_value(value),
            }?;
            Some(ParamViolation {
                param: spec.name,
                violation,
            })
        })
        .collect();

    if violations.is_empty() {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid(violations)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: &[ParamSpec] = &[
        ParamSpec::number("weight_kg", "Peso").range(0.1, 200.0),
        ParamSpec::integer("score", "Punteggio").range(0.0, 3.0),
        ParamSpec::boolean("flag", "Flag").optional(),
        ParamSpec::choice("genotype", "Genotipo", &["ss", "sc"]).optional(),
        ParamSpec::multi_choice("features", "Segni", &["pallor", "cyanosis"]).optional(),
        ParamSpec::integer("level", "Livello")
            .range(0.0, 100.0)
            .multiple_of(10.0)
            .optional(),
        ParamSpec::number("bands", "Bande").range(0.0, 100.0).default_number(0.0),
    ];

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn violations(value: Value) -> Vec<ParamViolation> {
        match validate(PARAMS, &args(value)) {
            ValidationOutcome::Valid => vec![],
            ValidationOutcome::Invalid(v) => v,
        }
    }

    #[test]
    fn test_valid_minimal_call() {
        assert!(validate(PARAMS, &args(json!({ "weight_kg": 20, "score": 2 }))).is_valid());
    }

    #[test]
    fn test_missing_required_reported_in_order() {
        let v = violations(json!({}));
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].param, "weight_kg");
        assert_eq!(v[0].violation, Violation::Missing);
        assert_eq!(v[1].param, "score");
    }

    #[test]
    fn test_null_counts_as_missing_or_absent() {
        let v = violations(json!({ "weight_kg": null, "score": 1, "flag": null }));
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].param, "weight_kg");
        assert_eq!(v[0].violation, Violation::Missing);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(violations(json!({ "weight_kg": 0.1, "score": 0 })).is_empty());
        assert!(violations(json!({ "weight_kg": 200, "score": 3 })).is_empty());

        let v = violations(json!({ "weight_kg": 0.0999, "score": 4 }));
        assert!(matches!(v[0].violation, Violation::BelowMinimum { .. }));
        assert!(matches!(v[1].violation, Violation::AboveMaximum { .. }));
    }

    #[test]
    fn test_integer_rejects_fractional_values() {
        let v = violations(json!({ "weight_kg": 10, "score": 1.5 }));
        assert_eq!(
            v[0].violation,
            Violation::WrongKind {
                expected: ParamKind::Integer
            }
        );
    }

    #[test]
    fn test_number_accepts_integers() {
        assert!(violations(json!({ "weight_kg": 25, "score": 1 })).is_empty());
    }

    #[test]
    fn test_wrong_kind() {
        let v = violations(json!({ "weight_kg": "20", "score": 1, "flag": "yes" }));
        assert_eq!(v.len(), 2);
        assert_eq!(v[1].param, "flag");
    }

    #[test]
    fn test_enum_and_array_membership() {
        let v = violations(json!({
            "weight_kg": 20, "score": 1,
            "genotype": "aa",
            "features": ["pallor", "fever"]
        }));
        assert_eq!(v.len(), 2);
        assert!(v[0].to_string().contains("'aa' is not one of [ss, sc]"));
        assert!(v[1].to_string().contains("'fever'"));

        let v = violations(json!({ "weight_kg": 20, "score": 1, "features": [1] }));
        assert_eq!(v[0].violation, Violation::WrongItemKind);

        assert!(violations(json!({ "weight_kg": 20, "score": 1, "features": [] })).is_empty());
    }

    #[test]
    fn test_multiple_of() {
        assert!(violations(json!({ "weight_kg": 20, "score": 1, "level": 70 })).is_empty());
        let v = violations(json!({ "weight_kg": 20, "score": 1, "level": 75 }));
        assert!(matches!(v[0].violation, Violation::NotMultipleOf { .. }));
    }

    #[test]
    fn test_extra_keys_ignored() {
        assert!(violations(json!({ "weight_kg": 20, "score": 1, "unexpected": true })).is_empty());
    }

    #[test]
    fn test_input_schema_shape() {
        let schema = input_schema(PARAMS);
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["weight_kg", "score"]));

        let props = &schema["properties"];
        assert_eq!(props["weight_kg"]["minimum"], json!(0.1));
        assert_eq!(props["score"]["maximum"], json!(3));
        assert_eq!(props["genotype"]["enum"], json!(["ss", "sc"]));
        assert_eq!(props["features"]["items"]["enum"], json!(["pallor", "cyanosis"]));
        assert_eq!(props["level"]["multipleOf"], json!(10));
        assert_eq!(props["bands"]["default"], json!(0));
    }

    #[test]
    fn test_check_rejects_inverted_bounds() {
        let spec = ParamSpec::number("x", "x").range(5.0, 1.0);
        assert!(spec.check().is_err());
    }

    #[test]
    fn test_check_rejects_empty_allowed_set() {
        let spec = ParamSpec::choice("x", "x", &[]);
        assert!(spec.check().unwrap_err().contains("empty"));
    }

    #[test]
    fn test_check_accepts_catalog_style_specs() {
        for spec in PARAMS {
            assert!(spec.check().is_ok(), "{}", spec.name);
        }
    }
}

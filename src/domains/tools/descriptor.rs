//! Tool descriptors: name, description, parameters and handler.

use std::fmt;
use std::sync::Arc;

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{JsonObject, Tool},
};
use serde::de::DeserializeOwned;

use super::error::ToolError;
use super::result::{Band, CalculationResult, check_bands};
use super::schema::{ParamSpec, input_schema};

/// Handler bound to a tool name. Receives arguments that already passed
/// schema validation.
pub type Handler =
    Arc<dyn Fn(&JsonObject) -> Result<CalculationResult, ToolError> + Send + Sync>;

/// Immutable description of one calculator.
#[derive(Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    /// Classification tables the handler looks values up in.
    pub bands: Vec<&'static [Band]>,
    handler: Handler,
}

impl ToolDescriptor {
    pub fn new(
        name: &'static str,
        description: &'static str,
        params: &'static [ParamSpec],
        handler: Handler,
    ) -> Self {
        Self {
            name,
            description,
            params,
            bands: Vec::new(),
            handler,
        }
    }

    /// Register the classification tables used by the handler, so that
    /// [`check`](Self::check) covers them.
    pub fn with_bands<const N: usize>(mut self, bands: [&'static [Band]; N]) -> Self {
        self.bands.extend(bands);
        self
    }

    /// Build a descriptor whose handler takes a typed parameter struct.
    ///
    /// Arguments are decoded with serde after validation, so `P` only has to
    /// mirror the declared parameters.
    pub fn typed<P, F>(
        name: &'static str,
        description: &'static str,
        params: &'static [ParamSpec],
        run: F,
    ) -> Self
    where
        P: DeserializeOwned,
        F: Fn(&P) -> Result<CalculationResult, ToolError> + Send + Sync + 'static,
    {
        let handler = move |args: &JsonObject| {
            let parsed: P = serde_json::from_value(serde_json::Value::Object(args.clone()))
                .map_err(|e| ToolError::malformed_arguments(e.to_string()))?;
            run(&parsed)
        };
        Self::new(name, description, params, Arc::new(handler))
    }

    /// Run the handler.
    pub fn invoke(&self, args: &JsonObject) -> Result<CalculationResult, ToolError> {
        (self.handler)(args)
    }

    /// Validate the parameter declarations and classification tables.
    pub fn check(&self) -> Result<(), ToolError> {
        for bands in &self.bands {
            check_bands(bands)
                .map_err(|reason| ToolError::invalid_descriptor(self.name, reason))?;
        }
        for (i, spec) in self.params.iter().enumerate() {
            spec.check().map_err(|reason| {
                ToolError::invalid_descriptor(self.name, format!("{}: {reason}", spec.name))
            })?;
            if self.params[..i].iter().any(|p| p.name == spec.name) {
                return Err(ToolError::invalid_descriptor(
                    self.name,
                    format!("parameter {} declared twice", spec.name),
                ));
            }
        }
        Ok(())
    }

    /// Create a Tool model for this descriptor (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: input_schema(self.params),
            annotations: None,
            output_schema: Some(schema_for_type::<CalculationResult>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("params", &self.params.len())
            .field("bands", &self.bands.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::result::{Classification, Measure};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct EchoParams {
        value: u32,
    }

    const PARAMS: &[ParamSpec] = &[ParamSpec::integer("value", "Valore").range(0.0, 10.0)];

    fn echo(p: &EchoParams) -> Result<CalculationResult, ToolError> {
        Ok(CalculationResult::new(
            "Echo",
            Measure::score("Valore", p.value),
            Classification::new("Esito", "OK"),
        ))
    }

    #[test]
    fn test_typed_handler_decodes_arguments() {
        let descriptor = ToolDescriptor::typed("echo", "Echo", PARAMS, echo);
        let args = serde_json::json!({ "value": 7 }).as_object().cloned().unwrap();
        let result = descriptor.invoke(&args).unwrap();
        assert_eq!(result.primary.value, 7.0);
    }

    #[test]
    fn test_typed_handler_reports_decode_failure() {
        let descriptor = ToolDescriptor::typed("echo", "Echo", PARAMS, echo);
        let err = descriptor.invoke(&JsonObject::new()).unwrap_err();
        assert!(matches!(err, ToolError::MalformedArguments(_)));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = ToolDescriptor::typed("echo", "Echo tool", PARAMS, echo).to_tool();
        assert_eq!(tool.name, "echo");
        assert_eq!(tool.description.as_deref(), Some("Echo tool"));
        assert_eq!(tool.input_schema["required"], serde_json::json!(["value"]));
        assert!(tool.output_schema.is_some());
    }

    #[test]
    fn test_check_rejects_malformed_band_table() {
        static NO_CATCH_ALL: &[Band] = &[
            Band::at_most(1.0, "Basso", ""),
            Band::at_most(2.0, "Alto", ""),
        ];
        static OUT_OF_ORDER: &[Band] = &[
            Band::at_most(5.0, "Alto", ""),
            Band::at_most(1.0, "Basso", ""),
            Band::otherwise("Critico", ""),
        ];

        for table in [NO_CATCH_ALL, OUT_OF_ORDER] {
            let descriptor =
                ToolDescriptor::typed("echo", "Echo", PARAMS, echo).with_bands([table]);
            assert!(matches!(
                descriptor.check(),
                Err(ToolError::InvalidDescriptor { .. })
            ));
        }
    }

    #[test]
    fn test_check_accepts_well_formed_bands() {
        static LEVELS: &[Band] = &[Band::below(3.0, "Basso", ""), Band::otherwise("Alto", "")];
        let descriptor = ToolDescriptor::typed("echo", "Echo", PARAMS, echo).with_bands([LEVELS]);
        assert_eq!(descriptor.bands.len(), 1);
        assert!(descriptor.check().is_ok());
    }

    #[test]
    fn test_check_rejects_duplicate_parameter() {
        const DUP: &[ParamSpec] = &[
            ParamSpec::boolean("flag", "a"),
            ParamSpec::boolean("flag", "b"),
        ];
        let descriptor = ToolDescriptor::typed("dup", "Dup", DUP, echo);
        assert!(matches!(
            descriptor.check(),
            Err(ToolError::InvalidDescriptor { .. })
        ));
    }
}

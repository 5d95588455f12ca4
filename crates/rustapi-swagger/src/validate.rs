//! Opt-in checks for enum-like options

use crate::config::{doc_expansion, model_rendering, DEFAULT_SUBMIT_METHODS};
use crate::{Result, SwaggerConfig, SwaggerError};

impl SwaggerConfig {
    /// Check enum-like options against the values Swagger UI understands
    ///
    /// Construction never calls this. Expansion depths are not checked since
    /// negative values are meaningful.
    pub fn validate(&self) -> Result<()> {
        check_one_of("doc_expansion", &self.doc_expansion, doc_expansion::ALL)?;
        check_one_of(
            "default_model_rendering",
            &self.default_model_rendering,
            model_rendering::ALL,
        )?;

        if let Some(method) = self
            .supported_submit_methods
            .iter()
            .find(|m| !DEFAULT_SUBMIT_METHODS.contains(&m.as_str()))
        {
            tracing::debug!(method = %method, "rejected submit method");
            return Err(SwaggerError::InvalidSubmitMethod(method.clone()));
        }

        Ok(())
    }
}

fn check_one_of(field: &'static str, value: &str, expected: &'static [&'static str]) -> Result<()> {
    if expected.contains(&value) {
        Ok(())
    } else {
        tracing::debug!(field, value, "rejected option value");
        Err(SwaggerError::invalid_enum(field, value, expected))
    }
}

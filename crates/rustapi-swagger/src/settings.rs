//! Swagger UI settings loaded from external configuration
//!
//! [`SwaggerSettings`] mirrors the option catalog with every field optional,
//! so it can be deserialized from any serde source and turned into options.
//!
//! # Example
//!
//! ```rust,ignore
//! use rustapi_swagger::{SwaggerConfig, SwaggerSettings};
//!
//! // SWAGGER_URL=/openapi.json SWAGGER_DEEP_LINKING=false
//! let settings = SwaggerSettings::from_env()?;
//! let config = SwaggerConfig::new(settings.into_options());
//! ```

use crate::{DocUrl, RawJs, SwaggerOption};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Environment variable prefix read by [`SwaggerSettings::from_env`]
pub const ENV_PREFIX: &str = "SWAGGER_";

/// Deserializable form of the option catalog
///
/// Absent fields produce no option, leaving the default in place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwaggerSettings {
    /// Primary API definition URL
    pub url: Option<String>,
    /// Named API definitions, appended in order
    pub urls: Vec<DocUrl>,
    /// Deep linking for tags and operations
    pub deep_linking: Option<bool>,
    /// Expansion mode (`list`, `full`, `none`)
    pub doc_expansion: Option<String>,
    /// DOM anchor id
    pub dom_id: Option<String>,
    /// Documentation set name
    pub instance_name: Option<String>,
    /// Persist authorization over browser close/refresh
    pub persist_authorization: Option<bool>,
    /// Show operation ids
    pub display_operation_id: Option<bool>,
    /// Models section expansion depth
    pub default_models_expand_depth: Option<i32>,
    /// Model-example expansion depth
    pub default_model_expand_depth: Option<i32>,
    /// Initial model rendering (`example`, `schema`, `model`)
    pub default_model_rendering: Option<String>,
    /// Show Try-It-Out request durations
    pub display_request_duration: Option<bool>,
    /// Show vendor extension fields
    pub show_extensions: Option<bool>,
    /// Show common extension fields
    pub show_common_extensions: Option<bool>,
    /// HTTP methods with Try-It-Out enabled
    pub supported_submit_methods: Option<Vec<String>>,
    /// Enable Try-It-Out by default
    pub try_it_out_enabled: Option<bool>,
    /// Plugins, as raw JavaScript
    pub plugins: Option<Vec<String>>,
    /// Extra `SwaggerUIBundle` properties, as raw JavaScript
    pub ui_config: Option<BTreeMap<String, String>>,
    /// Script run before the UI is created
    pub before_script: Option<String>,
    /// Script run after the UI is created
    pub after_script: Option<String>,
}

impl SwaggerSettings {
    /// Read settings from `SWAGGER_*` environment variables
    ///
    /// List fields are comma separated. `urls` and `ui_config` cannot be
    /// expressed as plain variables and are only read from structured sources.
    #[cfg(feature = "config")]
    pub fn from_env() -> crate::Result<Self> {
        Self::from_env_iter(std::env::vars())
    }

    /// Read settings from an explicit set of `SWAGGER_*` variables
    #[cfg(feature = "config")]
    pub fn from_env_iter<I>(vars: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect();
        let settings: Self = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        tracing::debug!(?settings, "swagger settings loaded from environment");
        Ok(settings)
    }

    /// Convert present fields into options, in catalog order
    pub fn into_options(self) -> Vec<SwaggerOption> {
        let mut options = Vec::new();

        if let Some(url) = self.url {
            options.push(SwaggerOption::Url(url));
        }
        options.extend(self.urls.into_iter().map(SwaggerOption::AddUrl));
        if let Some(enabled) = self.deep_linking {
            options.push(SwaggerOption::DeepLinking(enabled));
        }
        if let Some(mode) = self.doc_expansion {
            options.push(SwaggerOption::DocExpansion(mode));
        }
        if let Some(id) = self.dom_id {
            options.push(SwaggerOption::DomId(id));
        }
        if let Some(name) = self.instance_name {
            options.push(SwaggerOption::InstanceName(name));
        }
        if let Some(enabled) = self.persist_authorization {
            options.push(SwaggerOption::PersistAuthorization(enabled));
        }
        if let Some(enabled) = self.display_operation_id {
            options.push(SwaggerOption::DisplayOperationId(enabled));
        }
        if let Some(depth) = self.default_models_expand_depth {
            options.push(SwaggerOption::DefaultModelsExpandDepth(depth));
        }
        if let Some(depth) = self.default_model_expand_depth {
            options.push(SwaggerOption::DefaultModelExpandDepth(depth));
        }
        if let Some(mode) = self.default_model_rendering {
            options.push(SwaggerOption::DefaultModelRendering(mode));
        }
        if let Some(enabled) = self.display_request_duration {
            options.push(SwaggerOption::DisplayRequestDuration(enabled));
        }
        if let Some(enabled) = self.show_extensions {
            options.push(SwaggerOption::ShowExtensions(enabled));
        }
        if let Some(enabled) = self.show_common_extensions {
            options.push(SwaggerOption::ShowCommonExtensions(enabled));
        }
        if let Some(methods) = self.supported_submit_methods {
            options.push(SwaggerOption::SupportedSubmitMethods(methods));
        }
        if let Some(enabled) = self.try_it_out_enabled {
            options.push(SwaggerOption::TryItOutEnabled(enabled));
        }
        if let Some(plugins) = self.plugins {
            options.push(SwaggerOption::plugins(plugins));
        }
        if let Some(props) = self.ui_config {
            options.push(SwaggerOption::ui_config(props));
        }
        if let Some(js) = self.before_script {
            options.push(SwaggerOption::BeforeScript(RawJs::new(js)));
        }
        if let Some(js) = self.after_script {
            options.push(SwaggerOption::AfterScript(RawJs::new(js)));
        }

        options
    }
}

//! Chained builder for [`SwaggerConfig`]

use crate::config::DEFAULT_INSTANCE_NAME;
use crate::{Result, RawJs, SwaggerConfig, SwaggerOption};

/// Builder recording options in call order
///
/// Every setter records one [`SwaggerOption`]; [`build`](Self::build) applies
/// them in the order the setters were called.
///
/// # Example
///
/// ```rust
/// use rustapi_swagger::SwaggerConfig;
///
/// let config = SwaggerConfig::builder()
///     .add_url("/v1/openapi.json", "v1")
///     .add_url("/v2/openapi.json", "v2")
///     .doc_expansion("none")
///     .persist_authorization(true)
///     .build();
///
/// assert_eq!(config.urls().len(), 2);
/// assert_eq!(config.doc_expansion(), "none");
/// ```
#[derive(Debug, Clone)]
pub struct SwaggerConfigBuilder {
    options: Vec<SwaggerOption>,
    fallback_name: String,
}

impl SwaggerConfigBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            fallback_name: DEFAULT_INSTANCE_NAME.to_string(),
        }
    }

    /// Record an arbitrary option
    pub fn option(mut self, option: SwaggerOption) -> Self {
        self.options.push(option);
        self
    }

    /// Record several options, keeping their order
    pub fn options(mut self, options: impl IntoIterator<Item = SwaggerOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Instance name used when none is set explicitly
    pub fn fallback_instance_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = name.into();
        self
    }

    /// Set the primary API definition URL
    pub fn url(self, url: impl Into<String>) -> Self {
        self.option(SwaggerOption::Url(url.into()))
    }

    /// Append a named API definition
    pub fn add_url(self, url: impl Into<String>, name: impl Into<String>) -> Self {
        self.option(SwaggerOption::add_url(url, name))
    }

    /// Set deep linking
    pub fn deep_linking(self, enabled: bool) -> Self {
        self.option(SwaggerOption::DeepLinking(enabled))
    }

    /// Set the expansion mode
    pub fn doc_expansion(self, mode: impl Into<String>) -> Self {
        self.option(SwaggerOption::DocExpansion(mode.into()))
    }

    /// Set the DOM anchor id
    pub fn dom_id(self, id: impl Into<String>) -> Self {
        self.option(SwaggerOption::DomId(id.into()))
    }

    /// Set the documentation set name
    pub fn instance_name(self, name: impl Into<String>) -> Self {
        self.option(SwaggerOption::InstanceName(name.into()))
    }

    /// Persist authorization over browser close/refresh
    pub fn persist_authorization(self, enabled: bool) -> Self {
        self.option(SwaggerOption::PersistAuthorization(enabled))
    }

    /// Show operation ids
    pub fn display_operation_id(self, enabled: bool) -> Self {
        self.option(SwaggerOption::DisplayOperationId(enabled))
    }

    /// Set the models section expansion depth (`-1` hides the section)
    pub fn default_models_expand_depth(self, depth: i32) -> Self {
        self.option(SwaggerOption::DefaultModelsExpandDepth(depth))
    }

    /// Set the model-example expansion depth
    pub fn default_model_expand_depth(self, depth: i32) -> Self {
        self.option(SwaggerOption::DefaultModelExpandDepth(depth))
    }

    /// Set the initial model rendering
    pub fn default_model_rendering(self, mode: impl Into<String>) -> Self {
        self.option(SwaggerOption::DefaultModelRendering(mode.into()))
    }

    /// Show request durations
    pub fn display_request_duration(self, enabled: bool) -> Self {
        self.option(SwaggerOption::DisplayRequestDuration(enabled))
    }

    /// Show vendor extension fields
    pub fn show_extensions(self, enabled: bool) -> Self {
        self.option(SwaggerOption::ShowExtensions(enabled))
    }

    /// Show common extension fields
    pub fn show_common_extensions(self, enabled: bool) -> Self {
        self.option(SwaggerOption::ShowCommonExtensions(enabled))
    }

    /// Replace the Try-It-Out method list
    pub fn supported_submit_methods<I, S>(self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.option(SwaggerOption::supported_submit_methods(methods))
    }

    /// Enable Try-It-Out by default
    pub fn try_it_out_enabled(self, enabled: bool) -> Self {
        self.option(SwaggerOption::TryItOutEnabled(enabled))
    }

    /// Replace the plugin list
    pub fn plugins<I, S>(self, plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.option(SwaggerOption::plugins(plugins))
    }

    /// Replace the extra `SwaggerUIBundle` properties
    pub fn ui_config<I, K, V>(self, props: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.option(SwaggerOption::ui_config(props))
    }

    /// Set the script run before the UI is created
    pub fn before_script(self, js: impl Into<String>) -> Self {
        self.option(SwaggerOption::BeforeScript(RawJs::new(js)))
    }

    /// Set the script run after the UI is created
    pub fn after_script(self, js: impl Into<String>) -> Self {
        self.option(SwaggerOption::AfterScript(RawJs::new(js)))
    }

    /// Apply the recorded options and return the finished config
    pub fn build(self) -> SwaggerConfig {
        SwaggerConfig::with_fallback_name(self.fallback_name, self.options)
    }

    /// Build, then run [`SwaggerConfig::validate`]
    pub fn try_build(self) -> Result<SwaggerConfig> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

impl Default for SwaggerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SwaggerConfigBuilder> for SwaggerConfig {
    fn from(builder: SwaggerConfigBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SwaggerError;

    #[test]
    fn test_empty_builder_matches_defaults() {
        assert_eq!(SwaggerConfig::builder().build(), SwaggerConfig::default());
    }

    #[test]
    fn test_builder_last_write_wins() {
        let config = SwaggerConfig::builder()
            .url("custom.yaml")
            .deep_linking(false)
            .dom_id("docs")
            .dom_id("api-docs")
            .build();

        assert_eq!(config.url(), "custom.yaml");
        assert!(!config.deep_linking());
        assert_eq!(config.dom_id(), "api-docs");
    }

    #[test]
    fn test_fallback_instance_name() {
        let config = SwaggerConfig::builder()
            .fallback_instance_name("internal")
            .build();
        assert_eq!(config.instance_name(), "internal");

        let config = SwaggerConfig::builder()
            .fallback_instance_name("internal")
            .instance_name("public")
            .build();
        assert_eq!(config.instance_name(), "public");
    }

    #[test]
    fn test_every_setter_reaches_config() {
        let config = SwaggerConfig::builder()
            .persist_authorization(true)
            .display_operation_id(true)
            .default_models_expand_depth(-1)
            .default_model_expand_depth(3)
            .default_model_rendering("model")
            .display_request_duration(true)
            .show_extensions(true)
            .show_common_extensions(true)
            .try_it_out_enabled(true)
            .plugins(["HierarchicalTagsPlugin"])
            .ui_config([("filter", "true")])
            .before_script("const start = Date.now();")
            .after_script("console.log(Date.now() - start);")
            .build();

        assert!(config.persist_authorization());
        assert!(config.display_operation_id());
        assert_eq!(config.default_models_expand_depth(), -1);
        assert_eq!(config.default_model_expand_depth(), 3);
        assert_eq!(config.default_model_rendering(), "model");
        assert!(config.display_request_duration());
        assert!(config.show_extensions());
        assert!(config.show_common_extensions());
        assert!(config.try_it_out_enabled());
        assert_eq!(config.plugins(), [RawJs::new("HierarchicalTagsPlugin")]);
        assert_eq!(config.ui_config().get("filter"), Some(&RawJs::new("true")));
        assert_eq!(config.before_script().as_str(), "const start = Date.now();");
        assert_eq!(
            config.after_script().as_str(),
            "console.log(Date.now() - start);"
        );
    }

    #[test]
    fn test_try_build_rejects_unknown_expansion() {
        let result = SwaggerConfig::builder().doc_expansion("open").try_build();
        assert!(matches!(
            result,
            Err(SwaggerError::InvalidEnumValue { field: "doc_expansion", .. })
        ));
    }

    #[test]
    fn test_build_accepts_unknown_expansion() {
        let config = SwaggerConfig::builder().doc_expansion("open").build();
        assert_eq!(config.doc_expansion(), "open");
    }
}

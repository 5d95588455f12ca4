//! Swagger UI configuration

use crate::option::SwaggerOption;
use crate::{RawJs, SwaggerConfigBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the default documentation set registered by the spec generator
pub const DEFAULT_INSTANCE_NAME: &str = "swagger";

/// Default location of the API definition, relative to the UI page
pub const DEFAULT_URL: &str = "doc.json";

/// Default DOM anchor the UI mounts into
pub const DEFAULT_DOM_ID: &str = "swagger-ui";

/// HTTP methods enabled for Try-It-Out by default
pub const DEFAULT_SUBMIT_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Values accepted by the `docExpansion` option
pub mod doc_expansion {
    /// Expand only the tags
    pub const LIST: &str = "list";
    /// Expand the tags and operations
    pub const FULL: &str = "full";
    /// Expand nothing
    pub const NONE: &str = "none";

    pub(crate) const ALL: &[&str] = &[LIST, FULL, NONE];
}

/// Values accepted by the `defaultModelRendering` option
pub mod model_rendering {
    /// Show an example value
    pub const EXAMPLE: &str = "example";
    /// Show the schema
    pub const SCHEMA: &str = "schema";
    /// Show the model
    pub const MODEL: &str = "model";

    pub(crate) const ALL: &[&str] = &[EXAMPLE, SCHEMA, MODEL];
}

/// One named API definition in a multi-spec UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocUrl {
    /// Location of the API definition
    pub url: String,
    /// Name shown in the definition selector
    pub name: String,
}

impl DocUrl {
    /// Create a new named definition location
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}

/// Settings for one Swagger UI page
///
/// A config is produced once by [`SwaggerConfig::new`] or the
/// [`SwaggerConfigBuilder`] and is read-only afterwards, so it can be shared
/// freely between request handlers.
///
/// # Example
///
/// ```rust
/// use rustapi_swagger::{SwaggerConfig, SwaggerOption};
///
/// let config = SwaggerConfig::new([
///     SwaggerOption::Url("custom.yaml".to_string()),
///     SwaggerOption::DeepLinking(false),
/// ]);
///
/// assert_eq!(config.url(), "custom.yaml");
/// assert!(!config.deep_linking());
/// assert_eq!(config.instance_name(), "swagger");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerConfig {
    pub(crate) url: String,
    pub(crate) urls: Vec<DocUrl>,
    pub(crate) doc_expansion: String,
    pub(crate) deep_linking: bool,
    pub(crate) dom_id: String,
    pub(crate) persist_authorization: bool,
    pub(crate) display_operation_id: bool,
    pub(crate) default_models_expand_depth: i32,
    pub(crate) default_model_expand_depth: i32,
    pub(crate) default_model_rendering: String,
    pub(crate) display_request_duration: bool,
    pub(crate) show_extensions: bool,
    pub(crate) show_common_extensions: bool,
    pub(crate) supported_submit_methods: Vec<String>,
    pub(crate) try_it_out_enabled: bool,
    pub(crate) instance_name: String,
    pub(crate) before_script: RawJs,
    pub(crate) after_script: RawJs,
    pub(crate) plugins: Vec<RawJs>,
    pub(crate) ui_config: BTreeMap<RawJs, RawJs>,
}

impl SwaggerConfig {
    /// Build a config from defaults and the given options
    ///
    /// Options are applied in order, so a later option wins over an earlier
    /// one touching the same field. An instance name left empty falls back to
    /// [`DEFAULT_INSTANCE_NAME`].
    pub fn new(options: impl IntoIterator<Item = SwaggerOption>) -> Self {
        Self::with_fallback_name(DEFAULT_INSTANCE_NAME, options)
    }

    /// Build a config, using `fallback` when no instance name was set
    pub fn with_fallback_name(
        fallback: impl Into<String>,
        options: impl IntoIterator<Item = SwaggerOption>,
    ) -> Self {
        let mut config = Self::defaults();
        let mut applied = 0usize;
        for option in options {
            option.apply(&mut config);
            applied += 1;
        }

        if config.instance_name.is_empty() {
            config.instance_name = fallback.into();
            tracing::trace!(instance = %config.instance_name, "using fallback instance name");
        }

        tracing::debug!(
            instance = %config.instance_name,
            options = applied,
            "swagger config built"
        );
        config
    }

    /// Start a builder with chained setters
    pub fn builder() -> SwaggerConfigBuilder {
        SwaggerConfigBuilder::new()
    }

    fn defaults() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            urls: Vec::new(),
            doc_expansion: doc_expansion::LIST.to_string(),
            deep_linking: true,
            dom_id: DEFAULT_DOM_ID.to_string(),
            persist_authorization: false,
            display_operation_id: false,
            default_models_expand_depth: 1,
            default_model_expand_depth: 1,
            default_model_rendering: model_rendering::EXAMPLE.to_string(),
            display_request_duration: false,
            show_extensions: false,
            show_common_extensions: false,
            supported_submit_methods: DEFAULT_SUBMIT_METHODS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            try_it_out_enabled: false,
            instance_name: String::new(),
            before_script: RawJs::default(),
            after_script: RawJs::default(),
            plugins: Vec::new(),
            ui_config: BTreeMap::new(),
        }
    }

    /// URL of the primary API definition
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Additional named API definitions, in the order they were added
    pub fn urls(&self) -> &[DocUrl] {
        &self.urls
    }

    /// Expansion mode: `list`, `full` or `none`
    pub fn doc_expansion(&self) -> &str {
        &self.doc_expansion
    }

    /// Whether deep linking for tags and operations is enabled
    pub fn deep_linking(&self) -> bool {
        self.deep_linking
    }

    /// DOM id of the element the UI mounts into
    pub fn dom_id(&self) -> &str {
        &self.dom_id
    }

    /// Whether authorization survives browser close/refresh
    pub fn persist_authorization(&self) -> bool {
        self.persist_authorization
    }

    /// Whether operation ids are shown in the operations list
    pub fn display_operation_id(&self) -> bool {
        self.display_operation_id
    }

    /// Expansion depth of the models section (`-1` hides it)
    pub fn default_models_expand_depth(&self) -> i32 {
        self.default_models_expand_depth
    }

    /// Expansion depth of the model in the model-example section
    pub fn default_model_expand_depth(&self) -> i32 {
        self.default_model_expand_depth
    }

    /// How a model is first shown: `example`, `schema` or `model`
    pub fn default_model_rendering(&self) -> &str {
        &self.default_model_rendering
    }

    /// Whether Try-It-Out requests show their duration
    pub fn display_request_duration(&self) -> bool {
        self.display_request_duration
    }

    /// Whether vendor extension (`x-`) fields are shown
    pub fn show_extensions(&self) -> bool {
        self.show_extensions
    }

    /// Whether common extension fields are shown
    pub fn show_common_extensions(&self) -> bool {
        self.show_common_extensions
    }

    /// HTTP methods that have Try-It-Out enabled
    pub fn supported_submit_methods(&self) -> &[String] {
        &self.supported_submit_methods
    }

    /// Whether Try-It-Out is enabled by default
    pub fn try_it_out_enabled(&self) -> bool {
        self.try_it_out_enabled
    }

    /// Name of the documentation set this UI displays
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    /// Script run right before the UI object is created
    pub fn before_script(&self) -> &RawJs {
        &self.before_script
    }

    /// Script run right after the UI object is created and set on `window`
    pub fn after_script(&self) -> &RawJs {
        &self.after_script
    }

    /// Extra plugins loaded into the UI
    pub fn plugins(&self) -> &[RawJs] {
        &self.plugins
    }

    /// Extra `SwaggerUIBundle` properties, both sides emitted verbatim
    pub fn ui_config(&self) -> &BTreeMap<RawJs, RawJs> {
        &self.ui_config
    }
}

impl Default for SwaggerConfig {
    fn default() -> Self {
        Self::new([])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SwaggerConfig::new([]);

        assert_eq!(config.url(), "doc.json");
        assert!(config.urls().is_empty());
        assert_eq!(config.doc_expansion(), "list");
        assert!(config.deep_linking());
        assert_eq!(config.dom_id(), "swagger-ui");
        assert!(!config.persist_authorization());
        assert!(!config.display_operation_id());
        assert_eq!(config.default_models_expand_depth(), 1);
        assert_eq!(config.default_model_expand_depth(), 1);
        assert_eq!(config.default_model_rendering(), "example");
        assert!(!config.display_request_duration());
        assert!(!config.show_extensions());
        assert!(!config.show_common_extensions());
        assert_eq!(
            config.supported_submit_methods(),
            ["get", "put", "post", "delete", "options", "head", "patch", "trace"]
        );
        assert!(!config.try_it_out_enabled());
        assert_eq!(config.instance_name(), DEFAULT_INSTANCE_NAME);
        assert!(config.before_script().is_empty());
        assert!(config.after_script().is_empty());
        assert!(config.plugins().is_empty());
        assert!(config.ui_config().is_empty());
    }

    #[test]
    fn test_default_impl_matches_new() {
        assert_eq!(SwaggerConfig::default(), SwaggerConfig::new([]));
    }

    #[test]
    fn test_options_apply_in_order() {
        let config = SwaggerConfig::new([
            SwaggerOption::Url("first.json".to_string()),
            SwaggerOption::DeepLinking(false),
            SwaggerOption::Url("second.json".to_string()),
        ]);

        assert_eq!(config.url(), "second.json");
        assert!(!config.deep_linking());
    }

    #[test]
    fn test_fallback_name_is_injected() {
        let config = SwaggerConfig::with_fallback_name("admin", []);
        assert_eq!(config.instance_name(), "admin");
    }

    #[test]
    fn test_empty_instance_name_is_backfilled() {
        let config = SwaggerConfig::new([SwaggerOption::InstanceName(String::new())]);
        assert_eq!(config.instance_name(), DEFAULT_INSTANCE_NAME);
    }

    #[test]
    fn test_explicit_instance_name_is_kept() {
        let config = SwaggerConfig::with_fallback_name(
            "unused",
            [SwaggerOption::InstanceName("billing".to_string())],
        );
        assert_eq!(config.instance_name(), "billing");
    }

    #[test]
    fn test_config_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SwaggerConfig>();
    }
}

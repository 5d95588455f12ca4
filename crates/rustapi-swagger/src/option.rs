//! Deferred config mutations

use crate::{DocUrl, RawJs, SwaggerConfig};
use std::collections::BTreeMap;

/// A single change applied to a [`SwaggerConfig`] while it is being built
///
/// Options only take effect through [`SwaggerConfig::new`] or the builder.
/// Values are taken as given: enum-like strings and depths are not checked
/// here, see [`SwaggerConfig::validate`] for opt-in checks.
///
/// A finished config cannot be changed by applying an option to it:
///
/// ```compile_fail
/// use rustapi_swagger::{SwaggerConfig, SwaggerOption};
///
/// let mut config = SwaggerConfig::default();
/// SwaggerOption::InstanceName(String::new()).apply(&mut config);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SwaggerOption {
    /// Set the primary API definition URL
    Url(String),
    /// Append a named API definition to the multi-spec list
    AddUrl(DocUrl),
    /// Set deep linking
    DeepLinking(bool),
    /// Set the expansion mode (`list`, `full`, `none`)
    DocExpansion(String),
    /// Set the DOM anchor id
    DomId(String),
    /// Set the documentation set name
    InstanceName(String),
    /// Persist authorization over browser close/refresh
    PersistAuthorization(bool),
    /// Show operation ids in the operations list
    DisplayOperationId(bool),
    /// Set the models section expansion depth
    DefaultModelsExpandDepth(i32),
    /// Set the model-example expansion depth
    DefaultModelExpandDepth(i32),
    /// Set the initial model rendering (`example`, `schema`, `model`)
    DefaultModelRendering(String),
    /// Show Try-It-Out request durations
    DisplayRequestDuration(bool),
    /// Show vendor extension fields
    ShowExtensions(bool),
    /// Show common extension fields
    ShowCommonExtensions(bool),
    /// Replace the Try-It-Out method list
    SupportedSubmitMethods(Vec<String>),
    /// Enable Try-It-Out by default
    TryItOutEnabled(bool),
    /// Replace the plugin list
    Plugins(Vec<RawJs>),
    /// Replace the extra `SwaggerUIBundle` properties
    UiConfig(BTreeMap<RawJs, RawJs>),
    /// Set the script run before the UI is created
    BeforeScript(RawJs),
    /// Set the script run after the UI is created
    AfterScript(RawJs),
}

impl SwaggerOption {
    /// Append a named API definition
    pub fn add_url(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self::AddUrl(DocUrl::new(url, name))
    }

    /// Replace the Try-It-Out method list
    pub fn supported_submit_methods<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::SupportedSubmitMethods(methods.into_iter().map(Into::into).collect())
    }

    /// Replace the plugin list, treating each entry as raw JavaScript
    pub fn plugins<I, S>(plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Plugins(plugins.into_iter().map(|p| RawJs::new(p)).collect())
    }

    /// Replace the extra bundle properties, keys and values as raw JavaScript
    pub fn ui_config<I, K, V>(props: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::UiConfig(
            props
                .into_iter()
                .map(|(k, v)| (RawJs::new(k), RawJs::new(v)))
                .collect(),
        )
    }

    /// Apply this option to a config under construction
    pub(crate) fn apply(self, config: &mut SwaggerConfig) {
        match self {
            Self::Url(url) => config.url = url,
            Self::AddUrl(entry) => config.urls.push(entry),
            Self::DeepLinking(enabled) => config.deep_linking = enabled,
            Self::DocExpansion(mode) => config.doc_expansion = mode,
            Self::DomId(id) => config.dom_id = id,
            Self::InstanceName(name) => config.instance_name = name,
            Self::PersistAuthorization(enabled) => config.persist_authorization = enabled,
            Self::DisplayOperationId(enabled) => config.display_operation_id = enabled,
            Self::DefaultModelsExpandDepth(depth) => config.default_models_expand_depth = depth,
            Self::DefaultModelExpandDepth(depth) => config.default_model_expand_depth = depth,
            Self::DefaultModelRendering(mode) => config.default_model_rendering = mode,
            Self::DisplayRequestDuration(enabled) => config.display_request_duration = enabled,
            Self::ShowExtensions(enabled) => config.show_extensions = enabled,
            Self::ShowCommonExtensions(enabled) => config.show_common_extensions = enabled,
            Self::SupportedSubmitMethods(methods) => config.supported_submit_methods = methods,
            Self::TryItOutEnabled(enabled) => config.try_it_out_enabled = enabled,
            Self::Plugins(plugins) => config.plugins = plugins,
            Self::UiConfig(props) => config.ui_config = props,
            Self::BeforeScript(js) => config.before_script = js,
            Self::AfterScript(js) => config.after_script = js,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_url_appends() {
        let config = SwaggerConfig::new([
            SwaggerOption::add_url("a.json", "A"),
            SwaggerOption::add_url("b.json", "B"),
        ]);

        assert_eq!(
            config.urls(),
            [DocUrl::new("a.json", "A"), DocUrl::new("b.json", "B")]
        );
    }

    #[test]
    fn test_submit_methods_replace_defaults() {
        let config = SwaggerConfig::new([SwaggerOption::supported_submit_methods(["get"])]);
        assert_eq!(config.supported_submit_methods(), ["get"]);
    }

    #[test]
    fn test_empty_submit_methods_disable_try_it_out_methods() {
        let config =
            SwaggerConfig::new([SwaggerOption::supported_submit_methods(Vec::<String>::new())]);
        assert!(config.supported_submit_methods().is_empty());
    }

    #[test]
    fn test_plugins_replace_previous_list() {
        let config = SwaggerConfig::new([
            SwaggerOption::plugins(["PluginA", "PluginB"]),
            SwaggerOption::plugins(["PluginC"]),
        ]);
        assert_eq!(config.plugins(), [RawJs::new("PluginC")]);
    }

    #[test]
    fn test_ui_config_single_entry() {
        let config = SwaggerConfig::new([SwaggerOption::ui_config([("x", "1")])]);

        assert_eq!(config.ui_config().len(), 1);
        assert_eq!(config.ui_config().get("x"), Some(&RawJs::new("1")));
    }

    #[test]
    fn test_unchecked_values_pass_through() {
        let config = SwaggerConfig::new([
            SwaggerOption::DocExpansion("sideways".to_string()),
            SwaggerOption::DefaultModelRendering("table".to_string()),
            SwaggerOption::DefaultModelsExpandDepth(-1),
            SwaggerOption::Url(String::new()),
        ]);

        assert_eq!(config.doc_expansion(), "sideways");
        assert_eq!(config.default_model_rendering(), "table");
        assert_eq!(config.default_models_expand_depth(), -1);
        assert_eq!(config.url(), "");
    }

    #[test]
    fn test_built_config_only_changes_by_rebuilding() {
        let original = SwaggerConfig::new([SwaggerOption::Url("first.json".to_string())]);
        let snapshot = original.clone();

        let rebuilt = SwaggerConfig::new([
            SwaggerOption::Url("second.json".to_string()),
            SwaggerOption::InstanceName(String::new()),
        ]);

        assert_eq!(original, snapshot);
        assert_eq!(original.url(), "first.json");
        assert_eq!(rebuilt.url(), "second.json");
        assert_eq!(rebuilt.instance_name(), crate::DEFAULT_INSTANCE_NAME);
    }

    #[test]
    fn test_scripts_are_overwritten() {
        let config = SwaggerConfig::new([
            SwaggerOption::BeforeScript(RawJs::new("one()")),
            SwaggerOption::BeforeScript(RawJs::new("two()")),
            SwaggerOption::AfterScript(RawJs::new("done()")),
        ]);

        assert_eq!(config.before_script().as_str(), "two()");
        assert_eq!(config.after_script().as_str(), "done()");
    }
}

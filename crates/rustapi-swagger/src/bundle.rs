//! `SwaggerUIBundle` options object

use crate::SwaggerConfig;
use serde::Serialize;
use std::fmt;

/// The JavaScript object literal passed to `SwaggerUIBundle(...)`
///
/// Plain settings are emitted as JSON literals; plugins and UI config entries
/// are emitted verbatim as the raw JavaScript they are.
///
/// # Example
///
/// ```rust
/// use rustapi_swagger::{BundleOptions, SwaggerConfig};
///
/// let config = SwaggerConfig::builder().url("/openapi.json").build();
/// let js = BundleOptions::new(&config).to_string();
///
/// assert!(js.contains(r#"url: "/openapi.json","#));
/// assert!(js.contains(r##"dom_id: "#swagger-ui","##));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BundleOptions<'a> {
    config: &'a SwaggerConfig,
}

impl<'a> BundleOptions<'a> {
    /// Wrap a config for rendering
    pub fn new(config: &'a SwaggerConfig) -> Self {
        Self { config }
    }
}

impl fmt::Display for BundleOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.config;

        writeln!(f, "{{")?;
        writeln!(f, "    url: {},", js_literal(c.url())?)?;
        if !c.urls().is_empty() {
            writeln!(f, "    urls: {},", js_literal(c.urls())?)?;
        }
        writeln!(f, "    deepLinking: {},", c.deep_linking())?;
        writeln!(f, "    docExpansion: {},", js_literal(c.doc_expansion())?)?;
        writeln!(f, "    dom_id: {},", js_literal(&format!("#{}", c.dom_id()))?)?;
        writeln!(f, "    persistAuthorization: {},", c.persist_authorization())?;
        writeln!(f, "    displayOperationId: {},", c.display_operation_id())?;
        writeln!(f, "    defaultModelsExpandDepth: {},", c.default_models_expand_depth())?;
        writeln!(f, "    defaultModelExpandDepth: {},", c.default_model_expand_depth())?;
        writeln!(
            f,
            "    defaultModelRendering: {},",
            js_literal(c.default_model_rendering())?
        )?;
        writeln!(f, "    displayRequestDuration: {},", c.display_request_duration())?;
        writeln!(f, "    showExtensions: {},", c.show_extensions())?;
        writeln!(f, "    showCommonExtensions: {},", c.show_common_extensions())?;
        writeln!(
            f,
            "    supportedSubmitMethods: {},",
            js_literal(c.supported_submit_methods())?
        )?;
        writeln!(f, "    tryItOutEnabled: {},", c.try_it_out_enabled())?;
        writeln!(f, "    validatorUrl: null,")?;
        writeln!(f, "    presets: [")?;
        writeln!(f, "        SwaggerUIBundle.presets.apis,")?;
        writeln!(f, "        SwaggerUIStandalonePreset")?;
        writeln!(f, "    ],")?;
        write!(f, "    plugins: [\n        SwaggerUIBundle.plugins.DownloadUrl")?;
        for plugin in c.plugins() {
            write!(f, ",\n        {plugin}")?;
        }
        writeln!(f, "\n    ],")?;
        for (key, value) in c.ui_config() {
            writeln!(f, "    {key}: {value},")?;
        }
        writeln!(f, "    layout: \"StandaloneLayout\"")?;
        write!(f, "}}")
    }
}

/// JSON text safe to place inside a `<script>` element
fn js_literal<T: Serialize + ?Sized>(value: &T) -> Result<String, fmt::Error> {
    let json = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    Ok(json.replace('<', "\\u003c"))
}

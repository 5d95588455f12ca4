//! Swagger UI index page

use crate::{BundleOptions, Result, SwaggerConfig};
use tera::{Context, Tera};

/// Where the Swagger UI assets are expected, relative to the page
pub const DEFAULT_ASSET_BASE: &str = "./";

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <link rel="stylesheet" type="text/css" href="{{ asset_base }}swagger-ui.css">
    <link rel="icon" type="image/png" href="{{ asset_base }}favicon-32x32.png" sizes="32x32">
    <link rel="icon" type="image/png" href="{{ asset_base }}favicon-16x16.png" sizes="16x16">
    <style>
        html {
            box-sizing: border-box;
            overflow-y: scroll;
        }
        *, *:before, *:after {
            box-sizing: inherit;
        }
        body {
            margin: 0;
            background: #fafafa;
        }
    </style>
</head>
<body>
    <div id="{{ dom_id }}"></div>
    <script src="{{ asset_base }}swagger-ui-bundle.js" charset="UTF-8"></script>
    <script src="{{ asset_base }}swagger-ui-standalone-preset.js" charset="UTF-8"></script>
    <script>
        window.onload = function() {
{%- if before_script %}
            {{ before_script | safe }}
{%- endif %}
            const ui = SwaggerUIBundle({{ bundle_options | safe }});
            window.ui = ui;
{%- if after_script %}
            {{ after_script | safe }}
{%- endif %}
        };
    </script>
</body>
</html>"#;

/// HTML page hosting the Swagger UI for one config
///
/// Plain values are HTML-escaped by the template engine. The bundle options,
/// before-script and after-script are inserted as-is.
///
/// # Example
///
/// ```rust
/// use rustapi_swagger::{IndexPage, SwaggerConfig};
///
/// let config = SwaggerConfig::builder().url("/openapi.json").build();
/// let html = IndexPage::new(&config)
///     .asset_base("https://unpkg.com/swagger-ui-dist@5/")
///     .render()
///     .unwrap();
///
/// assert!(html.contains("SwaggerUIBundle({"));
/// ```
#[derive(Debug, Clone)]
pub struct IndexPage<'a> {
    config: &'a SwaggerConfig,
    asset_base: String,
    title: String,
}

impl<'a> IndexPage<'a> {
    /// Create a page for the given config
    pub fn new(config: &'a SwaggerConfig) -> Self {
        Self {
            config,
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            title: "Swagger UI".to_string(),
        }
    }

    /// Base URL the CSS/JS assets are loaded from, e.g. a CDN
    pub fn asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = base.into();
        self
    }

    /// Page title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render the page
    pub fn render(&self) -> Result<String> {
        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("asset_base", &self.asset_base);
        context.insert("dom_id", self.config.dom_id());
        context.insert("before_script", self.config.before_script().as_str());
        context.insert("after_script", self.config.after_script().as_str());
        context.insert(
            "bundle_options",
            &BundleOptions::new(self.config).to_string(),
        );

        let html = Tera::one_off(INDEX_TEMPLATE, &context, true)?;
        Ok(html)
    }
}

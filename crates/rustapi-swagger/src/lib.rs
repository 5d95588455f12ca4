//! Swagger UI configuration for RustAPI
//!
//! This crate builds the settings of the interactive API explorer page and
//! renders that page. Serving the OpenAPI document and the Swagger UI assets
//! is left to the router the page is mounted on.
//!
//! # Features
//!
//! - Immutable [`SwaggerConfig`] built from ordered [`SwaggerOption`]s
//! - Chained [`SwaggerConfigBuilder`]
//! - [`RawJs`] marker for script fields injected without escaping
//! - Optional validation of enum-like options
//! - Settings from serde sources or `SWAGGER_*` environment variables
//! - Index page rendering with Tera
//!
//! # Usage
//!
//! ```rust
//! use rustapi_swagger::{swagger_ui_html, SwaggerConfig};
//!
//! let config = SwaggerConfig::builder()
//!     .url("/openapi.json")
//!     .deep_linking(false)
//!     .persist_authorization(true)
//!     .build();
//!
//! let response = swagger_ui_html(&config);
//! assert_eq!(response.status(), http::StatusCode::OK);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod builder;
mod bundle;
mod config;
mod error;
mod option;
mod page;
mod raw;
mod settings;
mod validate;

pub use builder::SwaggerConfigBuilder;
pub use bundle::BundleOptions;
pub use config::{
    doc_expansion, model_rendering, DocUrl, SwaggerConfig, DEFAULT_DOM_ID,
    DEFAULT_INSTANCE_NAME, DEFAULT_SUBMIT_METHODS, DEFAULT_URL,
};
pub use error::{Result, SwaggerError};
pub use option::SwaggerOption;
pub use page::{IndexPage, DEFAULT_ASSET_BASE};
pub use raw::RawJs;
pub use settings::{SwaggerSettings, ENV_PREFIX};

use bytes::Bytes;
use http::{header, HeaderValue, Response, StatusCode};
use http_body_util::Full;

/// Generate the Swagger UI HTML response for a config
///
/// Responds with `500 Internal Server Error` if the page fails to render.
pub fn swagger_ui_html(config: &SwaggerConfig) -> Response<Full<Bytes>> {
    match IndexPage::new(config).render() {
        Ok(html) => text_response(StatusCode::OK, "text/html; charset=utf-8", html),
        Err(e) => {
            tracing::error!(
                instance = %config.instance_name(),
                error = %e,
                "failed to render swagger ui"
            );
            text_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "text/plain; charset=utf-8",
                "Failed to render Swagger UI".to_string(),
            )
        }
    }
}

fn text_response(
    status: StatusCode,
    content_type: &'static str,
    body: String,
) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swagger_ui_html_response() {
        let config = SwaggerConfig::default();
        let response = swagger_ui_html(&config);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}

//! Loader for `google.api.Service` HTTP binding configuration.
//!
//! The generation step consumes these descriptors to bind gRPC methods to
//! HTTP routes. Parsing is deliberately lenient: the top-level `type` field
//! is not validated and unknown keys anywhere in the document are ignored.
//! Tightening either is a behavior change that needs product sign-off.

use serde::Deserialize;

use crate::error::BindingError;

/// Typed view of a gRPC API service configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiService {
    #[serde(rename = "type", default)]
    pub service_type: Option<String>,

    #[serde(default)]
    pub config_version: Option<u32>,

    #[serde(default)]
    pub http: Option<Http>,
}

/// The `http` section: route bindings for the service's methods.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Http {
    #[serde(default)]
    pub rules: Vec<HttpRule>,
}

/// One HTTP binding rule. At most one of the method fields is set; unset
/// fields deserialize to the empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpRule {
    #[serde(default)]
    pub selector: String,

    #[serde(default)]
    pub get: String,
    #[serde(default)]
    pub put: String,
    #[serde(default)]
    pub post: String,
    #[serde(default)]
    pub delete: String,
    #[serde(default)]
    pub patch: String,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub additional_bindings: Vec<HttpRule>,
}

/// Parse a service configuration from YAML bytes.
///
/// `name` identifies the source in error messages. Structural YAML errors
/// carry the parser's 1-based line and column of the first problem; no
/// descriptor is returned on failure.
pub fn load_api_service_from_yaml(data: &[u8], name: &str) -> Result<ApiService, BindingError> {
    serde_yaml_ng::from_slice(data).map_err(|source| BindingError::Yaml {
        name: name.to_string(),
        source,
    })
}

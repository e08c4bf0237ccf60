use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("failed to parse JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected {expected} at {at}, found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
        at: String,
    },

    #[error("invalid schema reference: {0}")]
    InvalidRef(String),
}

#[derive(Debug, Error)]
pub enum BindingError {
    #[error("failed to parse gRPC API configuration {name}: {source}")]
    Yaml {
        name: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to serialize import request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("import request failed: {0}")]
    Http(#[from] reqwest::Error),
}

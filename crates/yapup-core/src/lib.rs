//! Enrich generated swagger documents and import them into YApi.
//!
//! The pipeline in [`enrich`] takes the JSON document produced from
//! protobuf service definitions, folds schema titles into descriptions,
//! carries descriptions across `$ref` chains, synthesizes header parameters
//! from `x-header` extensions, and rewrites operation tags. [`import`]
//! submits the result to a YApi server. [`binding`] loads the
//! `google.api.Service` YAML descriptors consumed by the generation step.

pub mod binding;
pub mod config;
pub mod enrich;
pub mod error;
pub mod import;

mod value;

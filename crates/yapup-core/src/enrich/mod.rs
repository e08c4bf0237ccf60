//! The document enrichment pipeline.
//!
//! Takes a swagger document generated from protobuf service definitions and
//! rewrites its documentation metadata in place: schema titles become
//! descriptions, reference chains carry descriptions onto object types,
//! `x-header` extensions become header parameters, and every operation is
//! tagged with the API's global title. The enriched document is what gets
//! imported into YApi.

pub mod headers;
pub mod operations;
pub mod schemas;

pub use headers::Header;

use serde_json::Value;

use crate::error::EnrichError;
use crate::value;

/// Run the full enrichment pipeline over a parsed document, returning the
/// global tag name that was applied to every operation.
///
/// The steps run strictly in order: document-level header synthesis, tag
/// rewrite, the two-phase schema enrichment, then the operation rewrite.
/// Any shape mismatch aborts the run; the document may be partially mutated
/// at that point and must be discarded.
pub fn enrich(document: &mut Value) -> Result<String, EnrichError> {
    let root = value::as_object_mut(document, "document")?;

    // Document-level custom headers, written back in synthesized form.
    let mut document_headers = Vec::new();
    if let Some(extension) = root.get("x-header") {
        document_headers = headers::synthesize(extension, "x-header")?;
        root.insert("x-header".to_string(), serde_json::to_value(&document_headers)?);
    }

    // The first tag's description becomes both its name and the single tag
    // applied to every operation.
    let mut tag = String::new();
    if let Some(tags) = root.get_mut("tags") {
        let tags = value::as_array_mut(tags, "tags")?;
        if let Some(first) = tags.first_mut() {
            let entry = value::as_object_mut(first, "tags[0]")?;
            let description = match entry.get("description") {
                Some(description) => value::as_str(description, "tags[0].description")?.to_string(),
                None => return Err(value::missing("string", "tags[0].description")),
            };
            entry.insert("name".to_string(), Value::String(description.clone()));
            tag = description;
        }
    }

    if let Some(definitions) = root.get_mut("definitions") {
        let mut refs = schemas::CrossRefs::new();
        schemas::enrich_definitions(definitions, &mut refs)?;
        schemas::backfill_object_descriptions(definitions, &refs)?;
        log::debug!("harvested {} cross-referenced descriptions", refs.len());
    }

    if let Some(paths) = root.get_mut("paths") {
        operations::rewrite_operations(paths, &tag, &document_headers)?;
    }

    log::info!("enriched document, global tag {tag:?}");
    Ok(tag)
}

/// Parse, enrich, and pretty-serialize a raw document in one step.
pub fn enrich_bytes(data: &[u8]) -> Result<String, EnrichError> {
    let mut document: Value = serde_json::from_slice(data)?;
    enrich(&mut document)?;
    Ok(serde_json::to_string_pretty(&document)?)
}

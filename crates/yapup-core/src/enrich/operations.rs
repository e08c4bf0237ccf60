use serde_json::{Value, json};

use crate::error::EnrichError;
use crate::value;

use super::headers::{self, Header};

/// Rewrite every operation's tag list and parameter list in place.
///
/// Each operation gets `tags = [tag]` and its parameter list extended with
/// the document-level headers followed by any headers synthesized from the
/// operation's own `x-header` extension. Parameters are additive and never
/// deduplicated, so identically named headers yield duplicate entries.
pub fn rewrite_operations(
    paths: &mut Value,
    tag: &str,
    document_headers: &[Header],
) -> Result<(), EnrichError> {
    let paths = value::as_object_mut(paths, "paths")?;

    for (path, item) in paths.iter_mut() {
        let item_at = format!("paths.{path}");
        let item = value::as_object_mut(item, &item_at)?;

        for (method, operation) in item.iter_mut() {
            rewrite_operation(
                operation,
                tag,
                document_headers,
                &format!("{item_at}.{method}"),
            )?;
        }
    }

    Ok(())
}

fn rewrite_operation(
    operation: &mut Value,
    tag: &str,
    document_headers: &[Header],
    at: &str,
) -> Result<(), EnrichError> {
    let operation = value::as_object_mut(operation, at)?;

    operation.insert("tags".to_string(), json!([tag]));

    let mut parameters = match operation.get("parameters") {
        Some(existing) => value::as_array(existing, &format!("{at}.parameters"))?.clone(),
        None => Vec::new(),
    };

    for header in document_headers {
        parameters.push(serde_json::to_value(header)?);
    }

    if let Some(extension) = operation.get("x-header") {
        for header in headers::synthesize(extension, &format!("{at}.x-header"))? {
            parameters.push(serde_json::to_value(&header)?);
        }
    }

    operation.insert("parameters".to_string(), Value::Array(parameters));
    Ok(())
}

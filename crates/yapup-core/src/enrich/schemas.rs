use indexmap::IndexMap;
use serde_json::Value;

use crate::error::EnrichError;
use crate::value;

/// Descriptions harvested from referencing properties, keyed by the
/// referenced schema name.
///
/// One accumulator is shared across every schema in a run: a reference
/// discovered while walking schema A's properties can satisfy schema B.
/// It is populated by [`enrich_definitions`], consumed once by
/// [`backfill_object_descriptions`], and discarded.
pub type CrossRefs = IndexMap<String, String>;

/// Phase 1: fold titles into descriptions across `definitions`.
///
/// For each schema, a `title` overwrites the schema's `description` (top
/// level only, not recursive), then the property tree is enriched in place
/// while referenced-schema descriptions are recorded in `refs`.
pub fn enrich_definitions(definitions: &mut Value, refs: &mut CrossRefs) -> Result<(), EnrichError> {
    let schemas = value::as_object_mut(definitions, "definitions")?;

    for (name, schema) in schemas.iter_mut() {
        let at = format!("definitions.{name}");
        let schema = value::as_object_mut(schema, &at)?;

        if let Some(title) = schema.get("title") {
            let title = value::as_str(title, &format!("{at}.title"))?.to_string();
            schema.insert("description".to_string(), Value::String(title));
        }

        if let Some(properties) = schema.get_mut("properties") {
            enrich_properties(properties, refs, &format!("{at}.properties"))?;
        }
    }

    Ok(())
}

fn enrich_properties(
    properties: &mut Value,
    refs: &mut CrossRefs,
    at: &str,
) -> Result<(), EnrichError> {
    let properties = value::as_object_mut(properties, at)?;

    for (name, property) in properties.iter_mut() {
        let prop_at = format!("{at}.{name}");
        let property = value::as_object_mut(property, &prop_at)?;

        if let Some(title) = property.get("title") {
            let title = value::as_str(title, &format!("{prop_at}.title"))?;
            let merged = match property.get("description") {
                // No separator: the upstream generator emits titles that
                // already carry their own punctuation.
                Some(description) => {
                    let description =
                        value::as_str(description, &format!("{prop_at}.description"))?;
                    format!("{description}{title}")
                }
                None => title.to_string(),
            };
            property.insert("description".to_string(), Value::String(merged));
        }

        if let Some(reference) = property.get("$ref") {
            let reference = value::as_str(reference, &format!("{prop_at}.$ref"))?;
            let target = ref_target(reference)?.to_string();
            if let Some(description) = property.get("description") {
                let description = value::as_str(description, &format!("{prop_at}.description"))?;
                refs.insert(target, description.to_string());
            }
        }

        if let Some(nested) = property.get_mut("properties") {
            enrich_properties(nested, refs, &format!("{prop_at}.properties"))?;
        }
    }

    Ok(())
}

/// Extract `Name` from a reference like `#/definitions/Name`.
fn ref_target(reference: &str) -> Result<&str, EnrichError> {
    reference
        .split('/')
        .nth(2)
        .ok_or_else(|| EnrichError::InvalidRef(reference.to_string()))
}

/// Phase 2: overwrite every object-typed schema's description with the
/// harvested entry for its own name.
///
/// Schemas nothing referenced get the empty string, even when phase 1 set a
/// title-derived description. Non-object schemas are left alone.
pub fn backfill_object_descriptions(
    definitions: &mut Value,
    refs: &CrossRefs,
) -> Result<(), EnrichError> {
    let schemas = value::as_object_mut(definitions, "definitions")?;

    for (name, schema) in schemas.iter_mut() {
        let at = format!("definitions.{name}");
        let schema = value::as_object_mut(schema, &at)?;

        let is_object = match schema.get("type") {
            Some(schema_type) => value::as_str(schema_type, &format!("{at}.type"))? == "object",
            None => false,
        };

        if is_object {
            let description = refs.get(name.as_str()).cloned().unwrap_or_default();
            schema.insert("description".to_string(), Value::String(description));
        }
    }

    Ok(())
}

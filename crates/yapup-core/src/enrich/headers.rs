use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EnrichError;
use crate::value;

/// A synthesized header parameter.
///
/// Produced from an `x-header` extension entry and appended to operation
/// parameter lists. `type` and `in` are fixed; YApi renders these as custom
/// request headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,

    pub description: String,

    #[serde(rename = "type")]
    pub param_type: String,

    #[serde(rename = "in")]
    pub location: String,

    pub required: bool,
}

impl Header {
    fn new(name: String, description: String, required: bool) -> Self {
        Self {
            name,
            description,
            param_type: "string".to_string(),
            location: "header".to_string(),
            required,
        }
    }
}

/// Convert an `x-header` extension map into header descriptors, one per
/// entry, in the map's document order.
///
/// `description` must be present as a string. `required` defaults to false
/// when absent or null. Header names are not validated or deduplicated.
pub fn synthesize(extension: &Value, at: &str) -> Result<Vec<Header>, EnrichError> {
    let entries = value::as_object(extension, at)?;
    let mut headers = Vec::with_capacity(entries.len());

    for (name, entry) in entries {
        let entry_at = format!("{at}.{name}");
        let fields = value::as_object(entry, &entry_at)?;

        let description = match fields.get("description") {
            Some(description) => {
                value::as_str(description, &format!("{entry_at}.description"))?.to_string()
            }
            None => return Err(value::missing("string", &format!("{entry_at}.description"))),
        };

        let required = match fields.get("required") {
            None | Some(Value::Null) => false,
            Some(required) => value::as_bool(required, &format!("{entry_at}.required"))?,
        };

        headers.push(Header::new(name.clone(), description, required));
    }

    Ok(headers)
}

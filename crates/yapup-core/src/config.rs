use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Project configuration loaded from `.yapup.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct YapupConfig {
    /// Path to the generated swagger document.
    pub input: String,

    /// YApi server base URL.
    pub url: Option<String>,

    /// YApi project import token.
    pub token: Option<String>,
}

impl Default for YapupConfig {
    fn default() -> Self {
        Self {
            input: "swagger.json".to_string(),
            url: None,
            token: None,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".yapup.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<YapupConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: YapupConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# yapup configuration
input: swagger.json

# YApi server base URL, e.g. http://yapi.example.com
# url: http://yapi.example.com

# YApi project import token (project settings → token)
# token: your-project-token
"#
}

use serde::{Deserialize, Serialize};

/// Extension that stores encrypted secrets; its data is loaded only when installed
pub const VAULT_EXTENSION: &str = "supabase_vault";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub name: String,
    #[serde(default)]
    pub schema: Option<String>,
    pub default_version: String,
    #[serde(default)]
    pub installed_version: Option<String>,
}

impl Extension {
    pub fn is_installed(&self) -> bool {
        self.installed_version.is_some()
    }
}

/// Checks whether an extension with the given name is installed
pub fn is_installed(extensions: &[Extension], name: &str) -> bool {
    extensions
        .iter()
        .any(|ext| ext.name == name && ext.is_installed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(name: &str, installed: Option<&str>) -> Extension {
        Extension {
            name: name.to_string(),
            schema: None,
            default_version: "0.2.8".to_string(),
            installed_version: installed.map(str::to_string),
        }
    }

    #[test]
    fn test_is_installed() {
        let extensions = vec![ext("pgcrypto", Some("1.3")), ext(VAULT_EXTENSION, None)];
        assert!(is_installed(&extensions, "pgcrypto"));
        assert!(!is_installed(&extensions, VAULT_EXTENSION));
        assert!(!is_installed(&extensions, "postgis"));
    }
}

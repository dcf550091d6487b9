use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::DEFAULT_EXCLUDED_FAMILY;
use crate::error::{FontshelfError, Result};
use crate::filter::SearchPolicy;

/// Configuration for fontshelf, read from `~/.fontshelf/config.toml`.
///
/// Every field has a default, so a partial file (or no file) is fine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontshelfConfig {
    pub log_level: Option<String>,
    pub chrome: ChromeConfig,
    pub catalog: CatalogConfig,
    pub preview: PreviewConfig,
    pub fonts: FontsConfig,
}

/// Static navigation chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub title: String,
    pub placeholder: String,
    pub large_title: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Families never placed in an alphabetical section.
    pub excluded_families: Vec<String>,
    /// Also drop excluded families from search results.
    pub hide_excluded_in_search: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Point size each row asks its own family to be rendered at.
    pub size: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    pub load_system: bool,
    pub extra_dirs: Vec<PathBuf>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            title: "Choose Font".to_string(),
            placeholder: "Search".to_string(),
            large_title: true,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            excluded_families: vec![DEFAULT_EXCLUDED_FAMILY.to_string()],
            hide_excluded_in_search: false,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { size: 16 }
    }
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            load_system: true,
            extra_dirs: Vec::new(),
        }
    }
}

impl CatalogConfig {
    /// Search policy implied by the exclusion settings.
    pub fn search_policy(&self) -> SearchPolicy {
        if self.hide_excluded_in_search {
            SearchPolicy::hide(self.excluded_families.iter().cloned())
        } else {
            SearchPolicy::show_all()
        }
    }
}

impl FontshelfConfig {
    /// Load from the default location; a missing file means defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default().expanded());
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FontshelfError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| FontshelfError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parse TOML content and expand `${VAR}` references.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config.expanded())
    }

    /// Get config directory: ~/.fontshelf
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fontshelf")
    }

    /// Get config file path: ~/.fontshelf/config.toml
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Log file used while the terminal is in the alternate screen.
    pub fn log_path() -> PathBuf {
        Self::config_dir().join("fontshelf.log")
    }

    fn expanded(mut self) -> Self {
        let vars = expansion_vars();

        self.fonts.extra_dirs = self
            .fonts
            .extra_dirs
            .iter()
            .map(|dir| PathBuf::from(expand_string(&dir.display().to_string(), &vars)))
            .collect();

        self
    }
}

/// Values for `${HOME}` and `${XDG_DATA_HOME}`. A variable with no known
/// value is left out, so its reference stays unexpanded.
fn expansion_vars() -> HashMap<String, String> {
    let mut vars = HashMap::new();

    if let Some(home) = dirs::home_dir() {
        vars.insert("HOME".to_string(), home.display().to_string());
    }

    let data_home = env::var_os("XDG_DATA_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::data_dir);
    if let Some(data_home) = data_home {
        vars.insert("XDG_DATA_HOME".to_string(), data_home.display().to_string());
    }

    vars
}

/// Expand ${var} references in a string
fn expand_string(s: &str, vars: &HashMap<String, String>) -> String {
    let mut result = s.to_string();

    for (key, value) in vars {
        let pattern = format!("${{{}}}", key);
        result = result.replace(&pattern, value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = FontshelfConfig::default();
        assert_eq!(config.chrome.title, "Choose Font");
        assert_eq!(config.chrome.placeholder, "Search");
        assert!(config.chrome.large_title);
        assert_eq!(config.preview.size, 16);
        assert_eq!(config.catalog.excluded_families, vec!["Bodoni Ornaments"]);
        assert!(config.fonts.load_system);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = FontshelfConfig::parse(
            r#"
            [chrome]
            title = "Fonts"

            [preview]
            size = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.chrome.title, "Fonts");
        assert_eq!(config.chrome.placeholder, "Search");
        assert_eq!(config.preview.size, 20);
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_expands_variables_in_extra_dirs() {
        let vars: HashMap<String, String> =
            [("HOME".to_string(), "/home/me".to_string())].into_iter().collect();
        assert_eq!(
            expand_string("${HOME}/.local/share/fonts", &vars),
            "/home/me/.local/share/fonts"
        );
        assert_eq!(expand_string("/usr/share/fonts", &vars), "/usr/share/fonts");
    }

    #[test]
    fn test_home_comes_from_home_dir_lookup() {
        let vars = expansion_vars();
        assert_eq!(
            vars.get("HOME"),
            dirs::home_dir().map(|home| home.display().to_string()).as_ref()
        );
    }

    #[test]
    fn test_unknown_variable_is_left_unexpanded() {
        let vars = HashMap::new();
        assert_eq!(
            expand_string("${HOME}/.local/share/fonts", &vars),
            "${HOME}/.local/share/fonts"
        );
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = FontshelfConfig::parse("[chrome\ntitle = 1").unwrap_err();
        assert!(matches!(err, FontshelfError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = FontshelfConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, FontshelfError::ConfigNotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "log_level = \"debug\"\n[catalog]\nhide_excluded_in_search = true"
        )
        .unwrap();
        file.flush().unwrap();

        let config = FontshelfConfig::load_from(file.path()).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(
            config.catalog.search_policy(),
            SearchPolicy::hide(["Bodoni Ornaments"])
        );
    }

    #[test]
    fn test_search_policy_defaults_to_show_all() {
        assert_eq!(
            CatalogConfig::default().search_policy(),
            SearchPolicy::show_all()
        );
    }
}

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) data_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// Rows per page in the raw viewer
    #[serde(default)]
    pub(crate) page_size: Option<usize>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(config_paths: &[PathBuf]) -> Self {
        // First readable, parseable file wins
        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
                && let Some(config) = Self::parse(&content, path)
            {
                return config;
            }
        }

        Self::default()
    }

    fn parse(content: &str, path: &Path) -> Option<Self> {
        match toml::from_str::<Config>(content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config");
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/bikestats/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("bikestats").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/bikestats/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("bikestats").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.bikestats.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".bikestats.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("bikestats")));
    }

    #[test]
    fn parses_all_keys() {
        let toml = r#"
data_dir = "/srv/bikeshare"
no_color = true
color = "never"
locale = "de"
page_size = 10
"#;
        let config = Config::parse(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/bikeshare")));
        assert!(config.no_color);
        assert_eq!(config.color, Some(ConfigColorMode::Never));
        assert_eq!(config.locale.as_deref(), Some("de"));
        assert_eq!(config.page_size, Some(10));
    }

    #[test]
    fn missing_keys_default() {
        let config = Config::parse("", Path::new("empty.toml")).unwrap();
        assert!(config.data_dir.is_none());
        assert!(!config.no_color);
        assert!(config.page_size.is_none());
    }

    #[test]
    fn invalid_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        let good = dir.path().join("good.toml");
        fs::write(&bad, "color = 42").unwrap();
        fs::write(&good, "page_size = 3").unwrap();

        let config = Config::load_from(&[dir.path().join("missing.toml"), bad, good]);
        assert_eq!(config.page_size, Some(3));
    }

    #[test]
    fn no_files_gives_default() {
        let config = Config::load_from(&[]);
        assert!(config.locale.is_none());
    }
}

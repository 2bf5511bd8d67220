//! Configuration management for biascheck using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default dataset filename.
pub const DEFAULT_DATASET_FILENAME: &str = "bias_strategies.csv";

/// Default page filename inside the templates directory.
pub const INDEX_PAGE_FILENAME: &str = "index.html";

/// Default templates subdirectory name.
const TEMPLATES_SUBDIR: &str = "templates";

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base data directory.
    pub data_dir: PathBuf,
    /// Dataset filename, relative to `data_dir`.
    pub dataset_filename: String,
    /// Directory holding the HTML page.
    pub templates_dir: PathBuf,
    /// Host the server binds to.
    pub host: String,
    /// Port the server binds to.
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        let data_dir = PathBuf::from(".");

        Self {
            templates_dir: data_dir.join(TEMPLATES_SUBDIR),
            data_dir,
            dataset_filename: DEFAULT_DATASET_FILENAME.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Create settings with a custom data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            templates_dir: data_dir.join(TEMPLATES_SUBDIR),
            data_dir,
            ..Default::default()
        }
    }

    /// Full path to the reference dataset.
    pub fn dataset_path(&self) -> PathBuf {
        self.data_dir.join(&self.dataset_filename)
    }

    /// Full path to the search page.
    pub fn index_page_path(&self) -> PathBuf {
        self.templates_dir.join(INDEX_PAGE_FILENAME)
    }

    /// Default `host:port` for the server.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data directory path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    /// Dataset filename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    /// Templates directory path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<String>,
    /// Bind host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Bind port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers biascheck config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("biascheck").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config {}: {}", path.display(), e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            // No config file found
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let mut config = Self::parse(&contents, path)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, String> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        match ext {
            "toml" => {
                toml::from_str(contents).map_err(|e| format!("Failed to parse TOML config: {}", e))
            }
            "yaml" | "yml" => serde_yaml::from_str(contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e)),
            _ => serde_json::from_str(contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e)),
        }
    }

    /// Get the base directory for resolving relative paths.
    /// Returns the config file's parent directory if available, otherwise None.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref data_dir) = self.data_dir {
            settings.data_dir = self.resolve_path(data_dir, base_dir);
            settings.templates_dir = settings.data_dir.join(TEMPLATES_SUBDIR);
        }
        if let Some(ref dataset) = self.dataset {
            settings.dataset_filename = dataset.clone();
        }
        if let Some(ref templates_dir) = self.templates_dir {
            settings.templates_dir = self.resolve_path(templates_dir, base_dir);
        }
        if let Some(ref host) = self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Use CWD for relative paths instead of config file directory.
    pub use_cwd: bool,
    /// Data directory (--data-dir flag).
    pub data_dir: Option<PathBuf>,
}

/// Look for a config file inside the data directory.
fn find_config_in_data_dir(data_dir: &Path) -> Option<PathBuf> {
    let extensions = ["toml", "json", "yaml", "yml"];

    extensions
        .iter()
        .map(|ext| data_dir.join(format!("biascheck.{}", ext)))
        .find(|path| path.exists())
}

/// Load config from file sources.
async fn load_file_config(options: &LoadOptions, data_dir_override: Option<&PathBuf>) -> Config {
    // Priority 1: Explicit --config flag
    if let Some(ref config_path) = options.config_path {
        return match Config::load_from_path(config_path).await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", config_path.display(), e);
                Config::default()
            }
        };
    }

    // Priority 2: Config inside the data dir
    if let Some(data_dir) = data_dir_override {
        if let Some(config_path) = find_config_in_data_dir(data_dir) {
            tracing::debug!("Found config in data dir: {}", config_path.display());
            return match Config::load_from_path(&config_path).await {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring config {}: {}", config_path.display(), e);
                    Config::default()
                }
            };
        }
    }

    // Priority 3: Auto-discover via prefer
    Config::load().await
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
///
/// Precedence, lowest first: defaults, config file, `BIASCHECK_DATA_DIR`,
/// then the `--data-dir` flag.
pub async fn load_settings_with_options(options: LoadOptions) -> (Settings, Config) {
    let data_dir_override = options.data_dir.clone().or_else(|| {
        std::env::var("BIASCHECK_DATA_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    });

    let config = load_file_config(&options, data_dir_override.as_ref()).await;

    let mut settings = Settings::default();

    let base_dir = if options.use_cwd {
        current_dir()
    } else {
        config.base_dir().unwrap_or_else(current_dir)
    };

    config.apply_to_settings(&mut settings, &base_dir);

    if let Some(data_dir) = data_dir_override {
        tracing::debug!("Using data dir override: {}", data_dir.display());
        settings.data_dir = data_dir;
        if config.templates_dir.is_none() {
            settings.templates_dir = settings.data_dir.join(TEMPLATES_SUBDIR);
        }
    }

    (settings, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.dataset_path(), PathBuf::from("./bias_strategies.csv"));
        assert_eq!(
            settings.index_page_path(),
            PathBuf::from("./templates/index.html")
        );
        assert_eq!(settings.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_with_data_dir() {
        let settings = Settings::with_data_dir(PathBuf::from("/srv/bias"));
        assert_eq!(
            settings.dataset_path(),
            PathBuf::from("/srv/bias/bias_strategies.csv")
        );
        assert_eq!(settings.templates_dir, PathBuf::from("/srv/bias/templates"));
    }

    #[test]
    fn test_parse_toml() {
        let config = Config::parse(
            "data_dir = \"data\"\nport = 8080\n",
            Path::new("biascheck.toml"),
        )
        .unwrap();
        assert_eq!(config.data_dir.as_deref(), Some("data"));
        assert_eq!(config.port, Some(8080));
        assert!(config.host.is_none());
    }

    #[test]
    fn test_parse_yaml_and_json() {
        let yaml = Config::parse("host: 127.0.0.1\n", Path::new("biascheck.yaml")).unwrap();
        assert_eq!(yaml.host.as_deref(), Some("127.0.0.1"));

        let json = Config::parse(r#"{"dataset": "biases.csv"}"#, Path::new("biascheck.json"))
            .unwrap();
        assert_eq!(json.dataset.as_deref(), Some("biases.csv"));
    }

    #[test]
    fn test_parse_error_mentions_format() {
        let err = Config::parse("port = \"not a port\"", Path::new("biascheck.toml")).unwrap_err();
        assert!(err.contains("TOML"));
    }

    #[test]
    fn test_apply_resolves_relative_paths() {
        let config = Config {
            data_dir: Some("data".to_string()),
            dataset: Some("biases.csv".to_string()),
            host: Some("127.0.0.1".to_string()),
            port: Some(9000),
            ..Default::default()
        };
        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings, Path::new("/etc/biascheck"));

        assert_eq!(settings.data_dir, PathBuf::from("/etc/biascheck/data"));
        assert_eq!(
            settings.dataset_path(),
            PathBuf::from("/etc/biascheck/data/biases.csv")
        );
        assert_eq!(
            settings.templates_dir,
            PathBuf::from("/etc/biascheck/data/templates")
        );
        assert_eq!(settings.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_apply_keeps_absolute_paths() {
        let config = Config {
            templates_dir: Some("/opt/pages".to_string()),
            ..Default::default()
        };
        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings, Path::new("/etc/biascheck"));
        assert_eq!(settings.templates_dir, PathBuf::from("/opt/pages"));
    }

    #[tokio::test]
    async fn test_load_explicit_config_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("biascheck.toml");
        std::fs::write(&path, "data_dir = \"store\"\nport = 6001\n").unwrap();

        let (settings, config) = load_settings_with_options(LoadOptions {
            config_path: Some(path.clone()),
            ..Default::default()
        })
        .await;

        assert_eq!(config.source_path.as_deref(), Some(path.as_path()));
        assert_eq!(settings.data_dir, dir.path().join("store"));
        assert_eq!(settings.port, 6001);
    }

    #[tokio::test]
    async fn test_data_dir_flag_overrides_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("biascheck.toml");
        std::fs::write(&config_path, "data_dir = \"store\"\n").unwrap();
        let override_dir = dir.path().join("override");

        let (settings, _) = load_settings_with_options(LoadOptions {
            config_path: Some(config_path),
            data_dir: Some(override_dir.clone()),
            ..Default::default()
        })
        .await;

        assert_eq!(settings.data_dir, override_dir);
        assert_eq!(settings.templates_dir, override_dir.join("templates"));
    }

    #[tokio::test]
    async fn test_config_found_in_data_dir() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("biascheck.json"), r#"{"port": 7007}"#).unwrap();

        let (settings, _) = load_settings_with_options(LoadOptions {
            data_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        })
        .await;

        assert_eq!(settings.port, 7007);
        assert_eq!(settings.data_dir, dir.path());
    }

    #[tokio::test]
    async fn test_malformed_config_in_data_dir_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("biascheck.toml"), "port = \"not a port\"\n").unwrap();

        let (settings, config) = load_settings_with_options(LoadOptions {
            data_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        })
        .await;

        assert!(config.source_path.is_none());
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.data_dir, dir.path());
    }
}

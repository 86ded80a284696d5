use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand prefix used in page titles ("<name> | Apps").
    pub name: String,
    /// Public base URL for absolute links. Empty means `http://localhost:<port>`.
    pub host: String,
    pub apps_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Static JSON catalog, relative paths resolve against the working directory.
    pub catalog: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        defaults::defaults()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: defaults::BIND.to_string(),
            port: defaults::PORT,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: defaults::SITE_NAME.to_string(),
            host: String::new(),
            apps_description: defaults::APPS_DESCRIPTION.to_string(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(defaults::CATALOG_PATH),
        }
    }
}

impl Config {
    /// Apply `PORT` and `HOST` from the process environment.
    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    fn apply_env_from(&mut self, get: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(port) = get("PORT").filter(|p| !p.is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT {port:?}"))?;
        }
        if let Some(host) = get("HOST").filter(|h| !h.is_empty()) {
            self.site.host = host;
        }
        Ok(())
    }

    /// Fill in values derived from other settings. Call after all overrides.
    pub fn finalize(&mut self) {
        if self.site.host.is_empty() {
            self.site.host = format!("http://localhost:{}", self.server.port);
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "showcase", "showcase").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

fn write(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Read the config file, writing one with defaults on first run.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        write(&cfg, &path)?;
        tracing::info!("wrote default config to {}", path.display());
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.bind, defaults::BIND);
        assert_eq!(cfg.site.name, "Electron");
        assert_eq!(cfg.paths.catalog, PathBuf::from("data/apps.json"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([("PORT", "9000"), ("HOST", "https://example.com")]);
        let mut cfg = Config::default();
        cfg.apply_env_from(|k| env.get(k).map(|v| v.to_string())).unwrap();
        cfg.finalize();

        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.site.host, "https://example.com");
    }

    #[test]
    fn test_bad_port_env() {
        let mut cfg = Config::default();
        assert!(cfg.apply_env_from(|_| Some("nope".to_string())).is_err());
    }

    #[test]
    fn test_host_derived_from_port() {
        let mut cfg = Config::default();
        cfg.server.port = 5050;
        cfg.finalize();
        assert_eq!(cfg.site.host, "http://localhost:5050");
    }

    #[test]
    fn test_load_writes_defaults_then_reads_back() {
        let dir = std::env::temp_dir().join(format!("showcase-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let first = load(Some(&path)).unwrap();
        assert!(path.exists());
        let second = load(Some(&path)).unwrap();
        assert_eq!(first.server.port, second.server.port);
        assert_eq!(first.site.name, second.site.name);

        let _ = fs::remove_dir_all(&dir);
    }
}

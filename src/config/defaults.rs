use super::{Config, PathsConfig, ServerConfig, SiteConfig};

pub const BIND: &str = "127.0.0.1";
pub const PORT: u16 = 5000;
pub const SITE_NAME: &str = "Electron";
pub const APPS_DESCRIPTION: &str = "Apps Built on Electron";
pub const CATALOG_PATH: &str = "data/apps.json";

pub fn defaults() -> Config {
    Config {
        server: ServerConfig::default(),
        site: SiteConfig::default(),
        paths: PathsConfig::default(),
    }
}

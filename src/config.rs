use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "minimal-mcp-server";
pub const LOG_ENV: &str = "MCP_LOG";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub server: Option<ServerConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub name: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            return Self::load_from(Path::new(p));
        }
        let default = Self::default_path()?;
        if default.exists() {
            Self::load_from(&default)
        } else {
            Ok(Self::default())
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config at {}", path.display()))?;
        parse(&text).with_context(|| "parsing config")
    }

    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| anyhow!("cannot resolve config dir"))?;
        Ok(base.join(APP_NAME).join("config.toml"))
    }

    pub fn write_example_if_absent() -> Result<PathBuf> {
        let path = Self::default_path()?;
        write_example_at(&path)?;
        Ok(path)
    }

    pub fn server_name(&self) -> String {
        self.server
            .as_ref()
            .and_then(|s| s.name.clone())
            .unwrap_or_else(|| APP_NAME.into())
    }

    pub fn server_version(&self) -> String {
        self.server
            .as_ref()
            .and_then(|s| s.version.clone())
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").into())
    }

    /// CLI flag wins, then `MCP_LOG`, then the config file.
    pub fn effective_log_level(&self, cli: Option<&str>) -> String {
        self.resolve_log_level(cli, std::env::var(LOG_ENV).ok())
    }

    fn resolve_log_level(&self, cli: Option<&str>, env: Option<String>) -> String {
        cli.map(str::to_string)
            .or(env.filter(|v| !v.trim().is_empty()))
            .or_else(|| self.logging.as_ref().and_then(|l| l.level.clone()))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.into())
    }
}

fn write_example_at(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let example = r#"# minimal-mcp-server config (TOML)

[server]
# Reported to clients in the initialize handshake
name = "minimal-mcp-server"
# version defaults to the binary version
# version = "0.1.0"

[logging]
# tracing filter directive; overridden by MCP_LOG or --log-level
level = "info"
"#;
    fs::write(path, example).with_context(|| format!("writing config at {}", path.display()))?;
    Ok(())
}

fn parse(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server_name(), APP_NAME);
        assert_eq!(cfg.server_version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(cfg.resolve_log_level(None, None), "info");
    }

    #[test]
    fn log_level_precedence() {
        let cfg = parse("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(cfg.resolve_log_level(None, None), "warn");
        assert_eq!(cfg.resolve_log_level(None, Some("debug".into())), "debug");
        assert_eq!(cfg.resolve_log_level(None, Some("  ".into())), "warn");
        assert_eq!(cfg.resolve_log_level(Some("trace"), Some("debug".into())), "trace");
    }

    #[test]
    fn loads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.toml");
        fs::write(&path, "[server]\nname = \"custom\"\nversion = \"2.0.0\"\n").unwrap();
        let cfg = Config::load(path.to_str()).unwrap();
        assert_eq!(cfg.server_name(), "custom");
        assert_eq!(cfg.server_version(), "2.0.0");
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Config::load(path.to_str()).is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse("[server\nname=").is_err());
    }

    #[test]
    fn example_parses_and_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_example_at(&path).unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.server_name(), APP_NAME);
        assert_eq!(cfg.logging.unwrap().level.as_deref(), Some("info"));

        fs::write(&path, "[server]\nname = \"kept\"\n").unwrap();
        write_example_at(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().server_name(), "kept");
    }
}

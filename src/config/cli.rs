use crate::config::toml_config::SiteConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Serve a personal portfolio page with projects pulled from GitHub")]
pub struct CliConfig {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// GitHub account whose repositories are listed
    #[arg(long, env = "PORTFOLIO_GITHUB_USERNAME")]
    pub username: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Emit JSON logs instead of the compact format
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file (if any) and applies command-line overrides on top.
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };

        if let Some(username) = &self.username {
            tracing::info!("🔧 GitHub username overridden to: {}", username);
            config.github.username = username.clone();
        }
        if let Some(port) = self.port {
            tracing::info!("🔧 Port overridden to: {}", port);
            config.server.port = port;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_overrides_file_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[github]\nusername = \"from-file\"\n\n[server]\nport = 3000\n")
            .unwrap();

        let cli = CliConfig::parse_from([
            "portfolio-site",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--username",
            "from-cli",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.github.username, "from-cli");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_no_config_file_uses_defaults() {
        let cli = CliConfig::parse_from(["portfolio-site", "--port", "9090"]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.github.marker_topic, "side-project");
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig::parse_from(["portfolio-site", "--config", "/nonexistent/site.toml"]);
        assert!(cli.resolve().is_err());
    }
}

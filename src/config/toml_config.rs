use crate::domain::model::Profile;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MARKER_TOPIC: &str = "side-project";
pub const DEFAULT_USER_AGENT: &str = "Portfolio-App";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub profile: Profile,
    pub github: GitHubConfig,
    pub data: DataConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub username: String,
    pub api_base: String,
    pub marker_topic: String,
    pub user_agent: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub base_dir: String,
    pub experience_file: String,
    pub skills_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "Software Engineer".to_string(),
            about: "I build reliable systems, APIs, and tools with the Unix philosophy in mind."
                .to_string(),
        }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: "octocat".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            marker_topic: DEFAULT_MARKER_TOPIC.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: None,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_dir: "data".to_string(),
            experience_file: "experience.json".to_string(),
            skills_file: "skills.json".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: "static".to_string(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GITHUB_USERNAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortfolioError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("profile.name", &self.profile.name),
            ("profile.title", &self.profile.title),
            ("profile.about", &self.profile.about),
            ("github.api_base", &self.github.api_base),
            ("github.marker_topic", &self.github.marker_topic),
            ("github.user_agent", &self.github.user_agent),
            ("data.base_dir", &self.data.base_dir),
            ("server.host", &self.server.host),
            ("server.static_dir", &self.server.static_dir),
        ] {
            validation::validate_resolved(field, value)?;
        }

        validation::validate_non_empty_string("profile.name", &self.profile.name)?;
        validation::validate_github_username("github.username", &self.github.username)?;
        validation::validate_url("github.api_base", &self.github.api_base)?;
        validation::validate_non_empty_string("github.marker_topic", &self.github.marker_topic)?;
        validation::validate_non_empty_string("github.user_agent", &self.github.user_agent)?;
        if let Some(timeout) = self.github.timeout_seconds {
            validation::validate_positive_number("github.timeout_seconds", timeout, 1)?;
        }

        validation::validate_path("data.base_dir", &self.data.base_dir)?;
        validation::validate_path("data.experience_file", &self.data.experience_file)?;
        validation::validate_path("data.skills_file", &self.data.skills_file)?;

        validation::validate_non_empty_string("server.host", &self.server.host)?;
        validation::validate_positive_number("server.port", u64::from(self.server.port), 1)?;
        validation::validate_path("server.static_dir", &self.server.static_dir)?;

        Ok(())
    }
}

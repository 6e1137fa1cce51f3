use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream API returned status: {status}")]
    UpstreamStatusError { status: reqwest::StatusCode },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Data file '{path}' could not be loaded: {message}")]
    DataFileError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PortfolioError {
    pub fn recovery_suggestion(&self) -> String {
        match self {
            PortfolioError::ApiError(_) => {
                "Check network connectivity and that the GitHub API is reachable".to_string()
            }
            PortfolioError::UpstreamStatusError { status } if status.as_u16() == 403 => {
                "The GitHub API rate limit may be exhausted; wait and restart".to_string()
            }
            PortfolioError::UpstreamStatusError { status } if status.as_u16() == 404 => {
                "Check that the configured GitHub username exists".to_string()
            }
            PortfolioError::UpstreamStatusError { .. } => {
                "The GitHub API is unavailable; projects will be empty until restart".to_string()
            }
            PortfolioError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            PortfolioError::DataFileError { .. } => {
                "Make sure the data files contain a valid JSON array".to_string()
            }
            PortfolioError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            PortfolioError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or CLI flags", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::DataFileError { path, .. } => {
                format!("Could not load portfolio data from '{}'", path)
            }
            PortfolioError::ConfigError { .. } | PortfolioError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            PortfolioError::IoError(e) => format!("File system error: {}", e),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_message_names_data_file() {
        let err = PortfolioError::DataFileError {
            path: "data/experience.json".to_string(),
            message: "EOF while parsing".to_string(),
        };
        assert!(err.user_friendly_message().contains("data/experience.json"));
    }

    #[test]
    fn test_rate_limit_suggestion() {
        let err = PortfolioError::UpstreamStatusError {
            status: reqwest::StatusCode::FORBIDDEN,
        };
        assert!(err.recovery_suggestion().contains("rate limit"));
    }
}

use crate::utils::error::{PortfolioError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> PortfolioError {
    PortfolioError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The GitHub API base must be an absolute http(s) URL.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        Err(invalid(field_name, path, "Path cannot be empty"))
    } else if path.contains('\0') {
        Err(invalid(field_name, path, "Path contains null bytes"))
    } else {
        Ok(())
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

/// Rejects values where a `${VAR}` placeholder survived env substitution.
pub fn validate_resolved(field_name: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(invalid(
            field_name,
            value,
            "Contains an unresolved ${...} placeholder; is the environment variable set?",
        ));
    }
    Ok(())
}

/// GitHub logins: 1-39 ASCII alphanumerics or single hyphens, not at either end.
pub fn validate_github_username(field_name: &str, username: &str) -> Result<()> {
    validate_resolved(field_name, username)?;
    validate_non_empty_string(field_name, username)?;

    if username.len() > 39 {
        return Err(invalid(field_name, username, "GitHub usernames are at most 39 characters"));
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(invalid(
            field_name,
            username,
            "Only ASCII letters, digits and hyphens are allowed",
        ));
    }
    if username.starts_with('-') || username.ends_with('-') || username.contains("--") {
        return Err(invalid(
            field_name,
            username,
            "Hyphens cannot lead, trail or repeat",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("github.api_base", "https://api.github.com").is_ok());
        assert!(validate_url("github.api_base", "http://127.0.0.1:9000").is_ok());
        assert!(validate_url("github.api_base", "").is_err());
        assert!(validate_url("github.api_base", "api.github.com").is_err());
        assert!(validate_url("github.api_base", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data.base_dir", "./data").is_ok());
        assert!(validate_path("data.base_dir", "").is_err());
        assert!(validate_path("data.base_dir", "da\0ta").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("server.port", 8080, 1).is_ok());
        assert!(validate_positive_number("server.port", 0, 1).is_err());
    }

    #[test]
    fn test_validate_github_username() {
        assert!(validate_github_username("github.username", "octocat").is_ok());
        assert!(validate_github_username("github.username", "Shyam-Sunder149").is_ok());
        assert!(validate_github_username("github.username", "").is_err());
        assert!(validate_github_username("github.username", "-lead").is_err());
        assert!(validate_github_username("github.username", "trail-").is_err());
        assert!(validate_github_username("github.username", "dou--ble").is_err());
        assert!(validate_github_username("github.username", "a/b").is_err());
        assert!(validate_github_username("github.username", &"a".repeat(40)).is_err());
    }

    #[test]
    fn test_unresolved_placeholder_rejected() {
        let result = validate_github_username("github.username", "${PORTFOLIO_GITHUB_USERNAME}");
        match result {
            Err(PortfolioError::InvalidConfigValueError { reason, .. }) => {
                assert!(reason.contains("placeholder"))
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
        assert!(validate_resolved("profile.name", "Ada").is_ok());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("github.username", "octocat").is_ok());
        assert!(validate_non_empty_string("github.username", "   ").is_err());
    }
}

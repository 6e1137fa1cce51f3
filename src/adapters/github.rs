use crate::config::GitHubConfig;
use crate::domain::model::RemoteRepoRecord;
use crate::domain::ports::RepoSource;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Largest page the listing endpoint accepts. Only the first page is read.
pub const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            api_base: config.api_base.clone(),
        })
    }

    pub fn repos_url(&self, username: &str) -> Result<Url> {
        let mut url = Url::parse(&self.api_base).map_err(|e| {
            PortfolioError::InvalidConfigValueError {
                field: "github.api_base".to_string(),
                value: self.api_base.clone(),
                reason: e.to_string(),
            }
        })?;

        url.path_segments_mut()
            .map_err(|_| PortfolioError::ConfigError {
                message: format!("'{}' cannot be used as a base URL", self.api_base),
            })?
            .pop_if_empty()
            .extend(["users", username, "repos"]);

        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &PER_PAGE.to_string());

        Ok(url)
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn list_repos(&self, username: &str) -> Result<Vec<RemoteRepoRecord>> {
        let url = self.repos_url(username)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::UpstreamStatusError { status });
        }

        let repos: Vec<RemoteRepoRecord> = response.json().await?;
        tracing::debug!("Decoded {} repositories for {}", repos.len(), username);
        Ok(repos)
    }
}

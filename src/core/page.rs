use crate::adapters::storage::load_json_array;
use crate::config::SiteConfig;
use crate::core::projects::fetch_projects;
use crate::domain::model::{Experience, PageData};
use crate::domain::ports::{RepoSource, Storage};
use crate::utils::error::Result;

pub struct PageBuilder<'a, S: Storage, R: RepoSource> {
    storage: S,
    source: R,
    config: &'a SiteConfig,
}

impl<'a, S: Storage, R: RepoSource> PageBuilder<'a, S, R> {
    pub fn new(storage: S, source: R, config: &'a SiteConfig) -> Self {
        Self {
            storage,
            source,
            config,
        }
    }

    /// Loads local data, then fetches projects.
    ///
    /// Local data errors are returned before the repository source is ever
    /// touched. Fetch errors are absorbed by [`fetch_projects`].
    pub async fn build(&self) -> Result<PageData> {
        tracing::info!("📁 Loading portfolio data");
        let experience: Vec<Experience> =
            load_json_array(&self.storage, &self.config.data.experience_file).await?;
        let skills: Vec<String> =
            load_json_array(&self.storage, &self.config.data.skills_file).await?;
        tracing::info!(
            "Loaded {} experience entries and {} skills",
            experience.len(),
            skills.len()
        );

        tracing::info!("🌐 Fetching projects for {}", self.config.github.username);
        let projects = fetch_projects(
            &self.source,
            &self.config.github.username,
            &self.config.github.marker_topic,
        )
        .await;

        Ok(PageData {
            profile: self.config.profile.clone(),
            projects,
            experience,
            skills,
        })
    }
}

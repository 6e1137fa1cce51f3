use crate::domain::model::RemoteRepoRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Where the project listing comes from.
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn list_repos(&self, username: &str) -> Result<Vec<RemoteRepoRecord>>;
}

use crate::domain::ports::Storage;
use crate::utils::error::{PortfolioError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}

/// Reads `path` from storage and decodes it as a JSON array.
///
/// Missing files and malformed JSON both surface as
/// [`PortfolioError::DataFileError`] naming the offending path.
pub async fn load_json_array<S, T>(storage: &S, path: &str) -> Result<Vec<T>>
where
    S: Storage,
    T: DeserializeOwned,
{
    let bytes = storage
        .read_file(path)
        .await
        .map_err(|e| PortfolioError::DataFileError {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    serde_json::from_slice(&bytes).map_err(|e| PortfolioError::DataFileError {
        path: path.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Experience;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_skills_array() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("skills.json"), r#"["Rust", "Go", "SQL"]"#).unwrap();

        let storage = LocalStorage::new(dir.path().to_str().unwrap());
        let skills: Vec<String> = load_json_array(&storage, "skills.json").await.unwrap();

        assert_eq!(skills, vec!["Rust", "Go", "SQL"]);
    }

    #[tokio::test]
    async fn test_load_experience_array() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("experience.json"),
            r#"[{"role": "Engineer", "company": "Acme", "duration": "2020 - 2023", "description": "Built APIs"}]"#,
        )
        .unwrap();

        let storage = LocalStorage::new(dir.path().to_str().unwrap());
        let experience: Vec<Experience> =
            load_json_array(&storage, "experience.json").await.unwrap();

        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].company, "Acme");
    }

    #[tokio::test]
    async fn test_missing_file_is_data_file_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap());

        let result: Result<Vec<String>> = load_json_array(&storage, "nope.json").await;

        match result {
            Err(PortfolioError::DataFileError { path, .. }) => assert_eq!(path, "nope.json"),
            other => panic!("expected DataFileError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_object_instead_of_array_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("skills.json"), r#"{"skills": ["Rust"]}"#).unwrap();

        let storage = LocalStorage::new(dir.path().to_str().unwrap());
        let result: Result<Vec<String>> = load_json_array(&storage, "skills.json").await;

        assert!(matches!(result, Err(PortfolioError::DataFileError { .. })));
    }
}

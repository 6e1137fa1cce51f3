// Adapters layer: concrete implementations for external systems (GitHub API, local files).

pub mod github;
pub mod storage;

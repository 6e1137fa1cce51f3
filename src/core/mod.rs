pub mod page;
pub mod projects;
pub mod render;

pub use crate::domain::model::{DisplayProject, Experience, PageData, Profile, RemoteRepoRecord};
pub use crate::domain::ports::{RepoSource, Storage};
pub use crate::utils::error::Result;

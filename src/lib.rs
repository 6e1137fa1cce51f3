pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{github::GitHubClient, storage::LocalStorage};
pub use crate::config::SiteConfig;
pub use crate::core::page::PageBuilder;
pub use crate::utils::error::{PortfolioError, Result};

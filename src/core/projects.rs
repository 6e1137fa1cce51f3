use crate::domain::model::{DisplayProject, RemoteRepoRecord};
use crate::domain::ports::RepoSource;

/// Turns a repository slug into a display title.
///
/// Hyphens become spaces and the first character of every word is
/// uppercased. The rest of each word is left as-is, so `"my-API-client"`
/// becomes `"My API Client"`.
pub fn format_repo_name(name: &str) -> String {
    name.replace('-', " ")
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Exact, case-sensitive topic match.
pub fn has_marker(record: &RemoteRepoRecord, marker: &str) -> bool {
    record.topics.iter().any(|topic| topic == marker)
}

/// Keeps the records tagged with `marker`, in input order, and formats them
/// for display.
pub fn select_projects(records: &[RemoteRepoRecord], marker: &str) -> Vec<DisplayProject> {
    records
        .iter()
        .filter(|record| has_marker(record, marker))
        .map(|record| DisplayProject {
            name: format_repo_name(&record.name),
            description: record.description.clone(),
            link: record.html_url.clone(),
        })
        .collect()
}

/// Fetches `username`'s repositories and selects the marked ones.
///
/// Never fails: any error from the source is logged and yields an empty
/// list so the page can still render.
pub async fn fetch_projects<R>(source: &R, username: &str, marker: &str) -> Vec<DisplayProject>
where
    R: RepoSource + ?Sized,
{
    match source.list_repos(username).await {
        Ok(records) => {
            let projects = select_projects(&records, marker);
            tracing::info!(
                "📦 {} of {} repositories tagged '{}'",
                projects.len(),
                records.len(),
                marker
            );
            projects
        }
        Err(e) => {
            tracing::warn!("⚠️ Failed to fetch GitHub repositories for {}: {}", username, e);
            tracing::warn!("💡 {}", e.recovery_suggestion());
            Vec::new()
        }
    }
}

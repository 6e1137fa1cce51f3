use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the GitHub `GET /users/{user}/repos` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepoRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayProject {
    pub name: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub about: String,
}

/// Everything the page template needs. Built once at startup and shared
/// read-only between request handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageData {
    pub profile: Profile,
    pub projects: Vec<DisplayProject>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
}

// GitHub sends `"description": null` for repos without one.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_record_from_github_json() {
        let json = serde_json::json!({
            "id": 42,
            "name": "my-cool-app",
            "description": "A cool app",
            "html_url": "https://github.com/octocat/my-cool-app",
            "topics": ["side-project", "web"],
            "stargazers_count": 3
        });

        let record: RemoteRepoRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.name, "my-cool-app");
        assert_eq!(record.html_url, "https://github.com/octocat/my-cool-app");
        assert_eq!(record.topics, vec!["side-project", "web"]);
    }

    #[test]
    fn test_repo_record_null_description_and_missing_topics() {
        let json = serde_json::json!({
            "name": "dotfiles",
            "description": null,
            "html_url": "https://github.com/octocat/dotfiles"
        });

        let record: RemoteRepoRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.description, "");
        assert!(record.topics.is_empty());
    }

    #[test]
    fn test_experience_requires_all_fields() {
        let json = serde_json::json!({"role": "Engineer", "company": "Acme"});
        assert!(serde_json::from_value::<Experience>(json).is_err());
    }
}

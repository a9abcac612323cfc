use async_trait::async_trait;
use reqwest::header;
use serde::Deserialize;
use std::time::Duration;

use crate::entities::project::{is_placeholder, ProjectSummary};

#[async_trait]
pub trait ProjectFeed: Send + Sync {
    /// Never fails: any error yields an empty list.
    async fn fetch_projects(&self, account_handle: &str) -> Vec<ProjectSummary>;
}

#[derive(Deserialize)]
struct GithubRepo {
    name: String,
    description: Option<String>,
    html_url: String,
    #[serde(default)]
    stargazers_count: u64,
    language: Option<String>,
}

impl From<GithubRepo> for ProjectSummary {
    fn from(repo: GithubRepo) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            url: repo.html_url,
            stars: repo.stargazers_count,
            language: repo.language,
        }
    }
}

fn summarize(repos: Vec<GithubRepo>) -> Vec<ProjectSummary> {
    repos
        .into_iter()
        .map(ProjectSummary::from)
        .filter(|project| !is_placeholder(&project.name))
        .collect()
}

pub struct GithubProjectFeed {
    client: reqwest::Client,
    api_base: String,
}

impl GithubProjectFeed {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_base: api_base.into(),
        })
    }

    async fn list_repos(&self, account_handle: &str) -> Result<Vec<GithubRepo>, reqwest::Error> {
        self.client
            .get(format!(
                "{}/users/{}/repos",
                self.api_base.trim_end_matches('/'),
                urlencoding::encode(account_handle)
            ))
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .header(header::USER_AGENT, "biolink")
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<GithubRepo>>()
            .await
    }
}

#[async_trait]
impl ProjectFeed for GithubProjectFeed {
    async fn fetch_projects(&self, account_handle: &str) -> Vec<ProjectSummary> {
        match self.list_repos(account_handle).await {
            Ok(repos) => summarize(repos),
            Err(err) => {
                tracing::warn!(error = %err, account_handle, "github repository listing failed");
                Vec::new()
            }
        }
    }
}

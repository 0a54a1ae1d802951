use crate::github::error::MilestoneError;
use crate::github::issues::{self, MilestoneDetails};
use crate::github::milestones;
use log::{debug, info, warn};
use url::Url;

pub const GITHUB_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "mstone-cli";

/// Fetches a milestone's issues from the GitHub REST API and groups them by category.
#[derive(Debug, Clone)]
pub struct GithubManager {
    client: reqwest::Client,
    base_url: Url,
}

impl GithubManager {
    pub fn new() -> Result<Self, MilestoneError> {
        Self::with_base_url(GITHUB_API_URL)
    }

    /// Targets a different API root, e.g. GitHub Enterprise or a local server.
    pub fn with_base_url(base_url: &str) -> Result<Self, MilestoneError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| MilestoneError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(MilestoneError::InvalidBaseUrl(base_url.to_string()));
        }
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(GithubManager { client, base_url })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `milestone` by exact title in `account/repository`, then
    /// fetches and categorizes its issues.
    ///
    /// # Errors
    ///
    /// * [`MilestoneError::Transport`] if either request fails.
    /// * [`MilestoneError::Parse`] if either response is not the expected JSON array.
    /// * [`MilestoneError::MilestoneNotFound`] if no milestone has that title.
    pub async fn get_milestone_details(
        &self,
        account: &str,
        repository: &str,
        milestone: &str,
    ) -> Result<MilestoneDetails, MilestoneError> {
        let body = self
            .get(
                account,
                repository,
                "milestones",
                &[("state", "all"), ("per_page", "100")],
            )
            .await?;
        let milestones = milestones::parse_milestones(&body)?;
        let number = milestones::find_milestone(&milestones, milestone)?.number;
        info!("Resolved milestone '{milestone}' to #{number} in {account}/{repository}");

        let number = number.to_string();
        let body = self
            .get(
                account,
                repository,
                "issues",
                &[("milestone", number.as_str()), ("state", "all")],
            )
            .await?;
        let issues = issues::parse_issues(&body)?;
        debug!("Categorizing {} issues of milestone #{number}", issues.len());

        Ok(issues::group_issues(&issues))
    }

    async fn get(
        &self,
        account: &str,
        repository: &str,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<String, MilestoneError> {
        let url = self.endpoint_url(account, repository, endpoint)?;
        debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(url)
            .query(query)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            warn!("GitHub API returned {status} for {endpoint}");
        }
        Ok(response.text().await?)
    }

    fn endpoint_url(
        &self,
        account: &str,
        repository: &str,
        endpoint: &str,
    ) -> Result<Url, MilestoneError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| MilestoneError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["repos", account, repository, endpoint]);
        Ok(url)
    }
}

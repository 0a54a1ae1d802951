use crate::config::GithubConfiguration;
use crate::github::error::MilestoneError;
use crate::github::issues::MilestoneDetails;
use crate::github::manager::GithubManager;

/// Host-facing entry point. Delegates to [`GithubManager`] and exposes the
/// configured account list.
#[derive(Debug, Clone)]
pub struct GithubScriptService {
    manager: GithubManager,
    configuration: GithubConfiguration,
}

impl GithubScriptService {
    pub fn new(manager: GithubManager, configuration: GithubConfiguration) -> Self {
        GithubScriptService {
            manager,
            configuration,
        }
    }

    /// Builds the manager from the configured API URL, or public GitHub when unset.
    pub fn from_configuration(configuration: GithubConfiguration) -> Result<Self, MilestoneError> {
        let manager = match configuration.api_url.as_deref() {
            Some(url) => GithubManager::with_base_url(url)?,
            None => GithubManager::new()?,
        };
        Ok(Self::new(manager, configuration))
    }

    pub async fn execute(
        &self,
        account: &str,
        repo: &str,
        milestone: &str,
    ) -> Result<MilestoneDetails, MilestoneError> {
        self.manager
            .get_milestone_details(account, repo, milestone)
            .await
    }

    pub fn github_accounts(&self) -> &[String] {
        self.configuration.github_accounts()
    }
}

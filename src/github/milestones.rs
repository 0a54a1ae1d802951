use crate::github::error::MilestoneError;
use serde::Deserialize;

/// A milestone as returned by `GET /repos/{owner}/{repo}/milestones`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub number: u64,
}

/// Parses the body of a milestones listing.
pub fn parse_milestones(body: &str) -> Result<Vec<Milestone>, MilestoneError> {
    Ok(serde_json::from_str(body)?)
}

/// Returns the first milestone whose title equals `title` exactly.
///
/// The comparison is case-sensitive. A missing milestone is a caller mistake
/// and is reported as [`MilestoneError::MilestoneNotFound`].
pub fn find_milestone<'a>(
    milestones: &'a [Milestone],
    title: &str,
) -> Result<&'a Milestone, MilestoneError> {
    milestones
        .iter()
        .find(|milestone| milestone.title == title)
        .ok_or_else(|| MilestoneError::MilestoneNotFound(title.to_string()))
}

use crate::github::error::MilestoneError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GitHubIssue {
    pub number: u64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Bucket an issue is sorted into, derived from its first label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Bug,
    New,
    Improvement,
    Misc,
}

impl Category {
    /// Categories matched by keyword, in matching order.
    pub const KEYWORDED: [Category; 3] = [Category::Bug, Category::New, Category::Improvement];

    pub const ALL: [Category; 4] = [
        Category::Bug,
        Category::New,
        Category::Improvement,
        Category::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bug => "BUG",
            Category::New => "NEW",
            Category::Improvement => "IMPROVEMENT",
            Category::Misc => "MISC",
        }
    }

    /// Lower-case keyword searched for in label names. `Misc` is the fallback and has none.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Category::Bug => Some("bug"),
            Category::New => Some("new"),
            Category::Improvement => Some("improvement"),
            Category::Misc => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a label name to a category by case-insensitive substring match.
///
/// Keywords are tried in the order of [`Category::KEYWORDED`]; the first hit wins.
pub fn categorize_label(name: &str) -> Category {
    let name = name.to_lowercase();
    Category::KEYWORDED
        .into_iter()
        .find(|category| {
            category
                .keyword()
                .is_some_and(|keyword| name.contains(keyword))
        })
        .unwrap_or(Category::Misc)
}

/// Only the first label is inspected. An issue whose category label is not
/// listed first falls into `Misc`.
pub fn categorize_issue(issue: &GitHubIssue) -> Category {
    issue
        .labels
        .first()
        .map_or(Category::Misc, |label| categorize_label(&label.name))
}

/// `(title, number, url)` row of the result mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueEntry(pub String, pub String, pub String);

impl IssueEntry {
    pub fn title(&self) -> &str {
        &self.0
    }

    pub fn id(&self) -> &str {
        &self.1
    }

    pub fn url(&self) -> &str {
        &self.2
    }
}

impl From<&GitHubIssue> for IssueEntry {
    fn from(issue: &GitHubIssue) -> Self {
        IssueEntry(
            issue.title.clone(),
            issue.number.to_string(),
            issue.url.clone(),
        )
    }
}

/// Issues of one milestone grouped by category.
///
/// Every category is present, possibly with an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MilestoneDetails(BTreeMap<Category, Vec<IssueEntry>>);

impl MilestoneDetails {
    pub fn new() -> Self {
        MilestoneDetails(
            Category::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
        )
    }

    pub fn push(&mut self, category: Category, entry: IssueEntry) {
        self.0.entry(category).or_default().push(entry);
    }

    pub fn get(&self, category: Category) -> &[IssueEntry] {
        self.0.get(&category).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[IssueEntry])> {
        self.0
            .iter()
            .map(|(category, entries)| (*category, entries.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl Default for MilestoneDetails {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_issues(body: &str) -> Result<Vec<GitHubIssue>, MilestoneError> {
    Ok(serde_json::from_str(body)?)
}

/// Groups issues by category, keeping the order they were given in.
pub fn group_issues(issues: &[GitHubIssue]) -> MilestoneDetails {
    issues
        .iter()
        .fold(MilestoneDetails::new(), |mut details, issue| {
            details.push(categorize_issue(issue), IssueEntry::from(issue));
            details
        })
}

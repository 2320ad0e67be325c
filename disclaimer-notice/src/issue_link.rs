use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Host used for issue links unless configured otherwise.
pub const GITHUB_HOST: &str = "https://github.com";

/// Link to the pre-filled correction issue form. [`IssueLink::correction`] must always build
/// exactly this URL.
pub const CORRECTION_ISSUE_URL: &str = "https://github.com/flexwie/homepage/issues/new?assignees=flexwie&labels=&template=correction.md&title=%5BCORRECTION%5D";

/// Error found when building an issue-creation URL from an [`IssueLink`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssueLinkError {
    #[error("Issue tracker host {host:?} is not a valid URL: {source}")]
    InvalidHost {
        host: String,
        source: url::ParseError,
    },
    #[error("Issue tracker host {0:?} cannot have a repository path.")]
    CannotBeABase(String),
    #[error("Repository {0} must not be empty.")]
    EmptySegment(&'static str),
    #[error("{0:?} is not a valid repository path segment.")]
    InvalidSegment(String),
}

/// Description of a pre-filled "new issue" link on a GitHub-style issue tracker.
///
/// Missing fields take the value from [`IssueLink::correction`], so a partial config only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueLink {
    /// Base URL of the code host.
    pub host: String,
    /// Owner of the repository.
    pub owner: String,
    /// Name of the repository.
    pub repo: String,
    /// Users the new issue is assigned to.
    pub assignees: Vec<String>,
    /// Labels applied to the new issue. Always emitted, even when empty.
    pub labels: Vec<String>,
    /// Issue template file, omitted from the query when `None`.
    pub template: Option<String>,
    /// Pre-filled issue title.
    pub title: String,
}

impl IssueLink {
    /// The link used by the disclaimer notice to request a correction.
    pub fn correction() -> Self {
        Self {
            host: GITHUB_HOST.to_owned(),
            owner: "flexwie".to_owned(),
            repo: "homepage".to_owned(),
            assignees: vec!["flexwie".to_owned()],
            labels: Vec::new(),
            template: Some("correction.md".to_owned()),
            title: "[CORRECTION]".to_owned(),
        }
    }

    /// Builds the issue-creation URL. Query parameters are always emitted in the order
    /// `assignees`, `labels`, `template`, `title`.
    pub fn to_url(&self) -> Result<Url, IssueLinkError> {
        let owner = check_segment("owner", &self.owner)?;
        let repo = check_segment("name", &self.repo)?;

        let mut url = Url::parse(&self.host).map_err(|source| IssueLinkError::InvalidHost {
            host: self.host.clone(),
            source,
        })?;
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| IssueLinkError::CannotBeABase(self.host.clone()))?
            .pop_if_empty()
            .extend([owner, repo, "issues", "new"]);

        let mut query = url.query_pairs_mut();
        query.append_pair("assignees", &self.assignees.join(","));
        query.append_pair("labels", &self.labels.join(","));
        if let Some(template) = &self.template {
            query.append_pair("template", template);
        }
        query.append_pair("title", &self.title);
        drop(query);

        Ok(url)
    }
}

impl Default for IssueLink {
    fn default() -> Self {
        Self::correction()
    }
}

/// Checks that a repository path segment is non-empty and contains no separators.
fn check_segment<'a>(what: &'static str, segment: &'a str) -> Result<&'a str, IssueLinkError> {
    if segment.is_empty() {
        Err(IssueLinkError::EmptySegment(what))
    } else if segment.contains('/') {
        Err(IssueLinkError::InvalidSegment(segment.to_owned()))
    } else {
        Ok(segment)
    }
}
